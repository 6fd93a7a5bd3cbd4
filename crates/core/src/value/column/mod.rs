// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use reifydb_type::{Result, Type, Value, return_error};
use serde::{Deserialize, Serialize};

use crate::error::ColumnError;

pub mod data;

use data::ColumnData;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub data: ColumnData,
}

impl Column {
	pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
		Self {
			name: name.into(),
			data,
		}
	}

	pub fn get_type(&self) -> Type {
		self.data.get_type()
	}
}

/// An ordered set of equally long columns.
///
/// The row count is tracked separately so that a batch without any column,
/// as produced for `count(*)`, still reports how many rows it stands for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Columns {
	columns: Vec<Column>,
	row_count: usize,
}

impl Deref for Columns {
	type Target = [Column];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}

impl Columns {
	/// Builds from non-empty columns; the row count is taken from the
	/// first column.
	pub fn new(columns: Vec<Column>) -> Self {
		let row_count = columns.first().map(|c| c.data.len()).unwrap_or(0);
		debug_assert!(columns.iter().all(|c| c.data.len() == row_count));
		Self {
			columns,
			row_count,
		}
	}

	pub fn with_row_count(columns: Vec<Column>, row_count: usize) -> Result<Self> {
		if let Some(column) = columns.iter().find(|c| c.data.len() != row_count) {
			return_error!(ColumnError::LengthMismatch {
				column: column.name.clone(),
				expected: row_count,
				actual: column.data.len(),
			});
		}
		Ok(Self {
			columns,
			row_count,
		})
	}

	pub fn empty() -> Self {
		Self {
			columns: vec![],
			row_count: 0,
		}
	}

	pub fn row_count(&self) -> usize {
		self.row_count
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|c| c.name == name)
	}

	pub fn names(&self) -> Vec<&str> {
		self.columns.iter().map(|c| c.name.as_str()).collect()
	}

	pub fn get_row(&self, idx: usize) -> Option<Vec<Value>> {
		if idx >= self.row_count {
			return None;
		}
		self.columns.iter().map(|c| c.data.get_value(idx)).collect()
	}

	pub fn truncate(&mut self, len: usize) {
		for column in &mut self.columns {
			column.data.truncate(len);
		}
		self.row_count = self.row_count.min(len);
	}

	/// Appends the rows of `other`, which must have the same column names
	/// and types in the same order.
	pub fn append(&mut self, other: Columns) -> Result<()> {
		if self.columns.is_empty() && self.row_count == 0 {
			*self = other;
			return Ok(());
		}

		if self.names() != other.names() {
			return_error!(ColumnError::LayoutMismatch {
				expected: self.names().join(", "),
				actual: other.names().join(", "),
			});
		}

		for (column, incoming) in self.columns.iter_mut().zip(other.columns) {
			column.data.extend(incoming.data)?;
		}
		self.row_count += other.row_count;
		Ok(())
	}

	pub fn into_inner(self) -> Vec<Column> {
		self.columns
	}
}
