// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_type::Result;

use crate::schema::Table;

/// Set of canonical column ordinals a scan materializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
	table: Table,
	mask: u32,
}

impl Projection {
	pub fn all(table: Table) -> Self {
		let width = table.columns().len();
		Self {
			table,
			mask: (1u32 << width) - 1,
		}
	}

	pub fn none(table: Table) -> Self {
		Self {
			table,
			mask: 0,
		}
	}

	pub fn from_names<'a>(table: Table, names: impl IntoIterator<Item = &'a str>) -> Result<Self> {
		let mut result = Self::none(table);
		for name in names {
			result = result.with(table.column_ordinal(name)?);
		}
		Ok(result)
	}

	pub fn with(mut self, ordinal: usize) -> Self {
		debug_assert!(ordinal < self.table.columns().len());
		self.mask |= 1 << ordinal;
		self
	}

	pub fn table(&self) -> Table {
		self.table
	}

	pub fn contains(&self, ordinal: usize) -> bool {
		self.mask & (1 << ordinal) != 0
	}

	pub fn is_empty(&self) -> bool {
		self.mask == 0
	}

	pub fn len(&self) -> usize {
		self.mask.count_ones() as usize
	}

	/// Projected ordinals in ascending order.
	pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
		(0..self.table.columns().len()).filter(|o| self.contains(*o))
	}

	/// Static tables carry their comments inline; every other table slices
	/// them out of the text pool.
	pub fn needs_text_pool(&self) -> bool {
		!self.table.is_static() && self.contains(self.table.comment_ordinal())
	}
}
