// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Per-table row generators writing straight into column buffers.
//!
//! A generator is opened on an absolute row range and positions every
//! random stream it needs at the first row of that range. Streams of
//! columns that are not projected are never created, unless another
//! projected column depends on them.

use std::{ops::Range, sync::Arc};

use reifydb_core::ColumnData;
use reifydb_type::{Date, Result, return_error};

use crate::{
	error::TpchError,
	projection::Projection,
	random::{RowRandom, text_seeds_per_row},
	row_count::LineCounts,
	scale::ScaleFactor,
	schema::Table,
	text::TextPool,
};

mod customer;
mod lineitem;
mod nation;
mod orders;
mod part;
mod partsupp;
mod region;
mod supplier;

pub use orders::order_key;
pub use part::retail_price;
pub use partsupp::part_supplier;

pub trait RowGenerator: Send {
	/// Appends up to `max_rows` rows to `out` and returns how many were
	/// appended. Zero means the range is exhausted.
	fn generate(&mut self, out: &mut ColumnBuffers, max_rows: usize) -> usize;
}

/// Opens a generator for `rows` of `table`.
///
/// `anchor` locates the first line item row within its order; when absent
/// it is computed by walking the line counts from the first order.
pub fn open(
	table: Table,
	scale: ScaleFactor,
	projection: &Projection,
	rows: Range<u64>,
	anchor: Option<OrderAnchor>,
	pool: Option<Arc<TextPool>>,
) -> Result<Box<dyn RowGenerator>> {
	debug_assert_eq!(projection.table(), table);
	let comments = Comments {
		wanted: projection.contains(table.comment_ordinal()),
		pool,
		table,
	};
	Ok(match table {
		Table::Nation => Box::new(nation::NationGenerator::new(projection, rows)),
		Table::Region => Box::new(region::RegionGenerator::new(projection, rows)),
		Table::Part => Box::new(part::PartGenerator::new(projection, rows, comments)?),
		Table::Supplier => Box::new(supplier::SupplierGenerator::new(projection, rows, comments)?),
		Table::PartSupp => Box::new(partsupp::PartSuppGenerator::new(scale, projection, rows, comments)?),
		Table::Customer => Box::new(customer::CustomerGenerator::new(projection, rows, comments)?),
		Table::Orders => Box::new(orders::OrdersGenerator::new(scale, projection, rows, comments)?),
		Table::LineItem => {
			let anchor = anchor.unwrap_or_else(|| OrderAnchor::locate(rows.start));
			Box::new(lineitem::LineItemGenerator::new(scale, projection, rows, anchor, comments)?)
		}
	})
}

/// Position of a line item row: the order it belongs to and its zero based
/// line within that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderAnchor {
	pub order: u64,
	pub line: u32,
}

impl OrderAnchor {
	pub const START: OrderAnchor = OrderAnchor {
		order: 0,
		line: 0,
	};

	/// Walks the line counts of all preceding orders. A
	/// [`LineIndex`](crate::row_count::LineIndex) answers repeated lookups
	/// without the full walk.
	pub fn locate(row: u64) -> Self {
		let mut counts = LineCounts::new(0);
		let mut order = 0u64;
		let mut before = 0u64;
		loop {
			let count = counts.next_count() as u64;
			if before + count > row {
				return OrderAnchor {
					order,
					line: (row - before) as u32,
				};
			}
			before += count;
			order += 1;
		}
	}
}

/// Output buffers for the projected columns of one table, indexed by
/// canonical ordinal.
#[derive(Debug)]
pub struct ColumnBuffers {
	table: Table,
	slots: Vec<Option<ColumnData>>,
}

impl ColumnBuffers {
	pub fn new(projection: &Projection, capacity: usize) -> Self {
		let table = projection.table();
		let slots = table
			.columns()
			.iter()
			.enumerate()
			.map(|(ordinal, def)| {
				if projection.contains(ordinal) {
					Some(ColumnData::with_capacity(def.r#type, capacity))
				} else {
					None
				}
			})
			.collect();
		Self {
			table,
			slots,
		}
	}

	pub fn table(&self) -> Table {
		self.table
	}

	pub fn wants(&self, ordinal: usize) -> bool {
		self.slots[ordinal].is_some()
	}

	pub fn get(&self, ordinal: usize) -> Option<&ColumnData> {
		self.slots[ordinal].as_ref()
	}

	/// Moves the buffered values of `ordinal` out.
	pub fn take(&mut self, ordinal: usize) -> Option<ColumnData> {
		self.slots[ordinal].as_mut().map(ColumnData::take)
	}

	pub fn push_int8(&mut self, ordinal: usize, value: i64) {
		if let Some(data) = &mut self.slots[ordinal] {
			data.push_int8(value);
		}
	}

	pub fn push_decimal(&mut self, ordinal: usize, unscaled: i64) {
		if let Some(data) = &mut self.slots[ordinal] {
			data.push_decimal(unscaled);
		}
	}

	pub fn push_utf8(&mut self, ordinal: usize, value: impl Into<String>) {
		if let Some(data) = &mut self.slots[ordinal] {
			data.push_utf8(value);
		}
	}

	pub fn push_date(&mut self, ordinal: usize, value: Date) {
		if let Some(data) = &mut self.slots[ordinal] {
			data.push_date(value);
		}
	}
}

/// Everything a generator needs to open its comment stream.
pub(crate) struct Comments {
	wanted: bool,
	pool: Option<Arc<TextPool>>,
	table: Table,
}

impl Comments {
	pub(crate) fn open(self, seed: i64, average: i32, expected_rows: i64, row: u64) -> Result<Option<CommentColumn>> {
		if !self.wanted {
			return Ok(None);
		}
		let Some(pool) = self.pool else {
			return_error!(TpchError::TextPoolRequired {
				table: self.table.name().to_string()
			});
		};
		Ok(Some(CommentColumn {
			random: RowRandom::at(seed, text_seeds_per_row(expected_rows), row),
			pool,
			average,
		}))
	}
}

pub(crate) struct CommentColumn {
	random: RowRandom,
	pool: Arc<TextPool>,
	average: i32,
}

impl CommentColumn {
	pub(crate) fn next(&mut self) -> &str {
		self.random.next_text(&self.pool, self.average)
	}

	pub(crate) fn row_finished(&mut self) {
		self.random.row_finished();
	}
}

/// `prefix` followed by `number` zero padded to nine digits.
pub(crate) fn padded_name(prefix: &str, number: i64) -> String {
	format!("{}{:09}", prefix, number)
}
