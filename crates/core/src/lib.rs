// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod interface;
pub mod value;

pub use reifydb_type::{Error, Result};
pub use value::{
	batch::Batch,
	column::{Column, Columns, data::ColumnData},
};
