// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Deterministic TPC-H data generation.
//!
//! Every generated value is a pure function of the table, the scale factor
//! and the absolute row index. Any partitioning of a table into row ranges
//! therefore yields exactly the rows of a single sweep over the whole table.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod dates;
pub mod distribution;
pub mod error;
pub mod generator;
pub mod projection;
pub mod random;
pub mod row_count;
pub mod scale;
pub mod schema;
pub mod text;

pub use error::TpchError;
pub use generator::{ColumnBuffers, OrderAnchor, RowGenerator};
pub use projection::Projection;
pub use row_count::row_count;
pub use scale::ScaleFactor;
pub use schema::{ColumnDef, Table, columns_of};
pub use text::TextPool;
