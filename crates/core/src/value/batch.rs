// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::value::column::Columns;

/// A columnar chunk handed from a data source to its consumer.
#[derive(Clone, Debug, PartialEq)]
pub struct Batch {
	pub columns: Columns,
}

impl Batch {
	pub fn row_count(&self) -> usize {
		self.columns.row_count()
	}
}
