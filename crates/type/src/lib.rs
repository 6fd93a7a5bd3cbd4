// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Value types and diagnostics shared across the TPC-H connector crates.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod value;

pub use error::{Error, ErrorKind, IntoDiagnostic, Result, diagnostic::Diagnostic};
pub use value::{Value, date::Date, decimal::Decimal, r#type::Type};
