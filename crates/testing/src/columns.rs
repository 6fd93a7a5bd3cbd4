// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Typed column access for assertions. Panics name the column and the
//! expected type.

use reifydb_core::{ColumnData, Columns};
use reifydb_type::Date;

fn data<'a>(columns: &'a Columns, name: &str) -> &'a ColumnData {
	match columns.column(name) {
		Some(column) => &column.data,
		None => panic!("no column '{}' in {:?}", name, columns.names()),
	}
}

pub fn int8s(columns: &Columns, name: &str) -> Vec<i64> {
	match data(columns, name).as_int8() {
		Some(values) => values.to_vec(),
		None => panic!("column '{}' is not INT8", name),
	}
}

/// Unscaled decimal values, i.e. cents for DECIMAL(15,2).
pub fn decimals(columns: &Columns, name: &str) -> Vec<i64> {
	match data(columns, name).as_decimal() {
		Some(values) => values.to_vec(),
		None => panic!("column '{}' is not DECIMAL", name),
	}
}

pub fn utf8s(columns: &Columns, name: &str) -> Vec<String> {
	match data(columns, name).as_utf8() {
		Some(values) => values.to_vec(),
		None => panic!("column '{}' is not UTF8", name),
	}
}

pub fn dates(columns: &Columns, name: &str) -> Vec<Date> {
	match data(columns, name).as_date() {
		Some(values) => values.to_vec(),
		None => panic!("column '{}' is not DATE", name),
	}
}
