// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{generator::OrderAnchor, random::RowRandom, scale::ScaleFactor, schema::Table};

pub const NATION_ROWS: u64 = 25;
pub const REGION_ROWS: u64 = 5;

pub const SUPPLIER_BASE: u64 = 10_000;
pub const PART_BASE: u64 = 200_000;
pub const CUSTOMER_BASE: u64 = 150_000;
pub const ORDERS_BASE: u64 = 1_500_000;

pub const SUPPLIERS_PER_PART: u64 = 4;

pub const LINE_COUNT_SEED: i64 = 1434868289;
pub const LINE_COUNT_MIN: i32 = 1;
pub const LINE_COUNT_MAX: i32 = 7;

/// Line item totals of the standard scale factors, keyed by order count.
const KNOWN_LINE_ITEMS: [(u64, u64); 7] = [
	(15_000, 60_175),
	(150_000, 600_572),
	(1_500_000, 6_001_215),
	(15_000_000, 59_986_052),
	(150_000_000, 600_037_902),
	(1_500_000_000, 5_999_989_709),
	(15_000_000_000, 59_999_994_267),
];

/// Exact number of rows `table` has at `scale`.
pub fn row_count(table: Table, scale: ScaleFactor) -> u64 {
	match table {
		Table::Nation => NATION_ROWS,
		Table::Region => REGION_ROWS,
		Table::Supplier => scale.scale(SUPPLIER_BASE),
		Table::Part => scale.scale(PART_BASE),
		Table::Customer => scale.scale(CUSTOMER_BASE),
		Table::PartSupp => {
			if scale.scale(SUPPLIER_BASE) == 0 {
				return 0;
			}
			scale.scale(PART_BASE) * SUPPLIERS_PER_PART
		}
		Table::Orders => {
			if scale.scale(CUSTOMER_BASE) == 0 {
				return 0;
			}
			scale.scale(ORDERS_BASE)
		}
		Table::LineItem => line_item_count(line_item_orders(scale)),
	}
}

/// Orders that carry line items at `scale`. Zero when any key domain a line
/// item draws from is empty.
pub fn line_item_orders(scale: ScaleFactor) -> u64 {
	if scale.scale(PART_BASE) == 0 || scale.scale(SUPPLIER_BASE) == 0 {
		return 0;
	}
	row_count(Table::Orders, scale)
}

/// Sum of the line counts of the first `orders` orders.
pub fn line_item_count(orders: u64) -> u64 {
	known_line_item_count(orders).unwrap_or_else(|| LineCounts::new(0).take(orders as usize).map(u64::from).sum())
}

/// The tabulated line item total for the order count of a standard scale.
pub fn known_line_item_count(orders: u64) -> Option<u64> {
	KNOWN_LINE_ITEMS.iter().find(|(o, _)| *o == orders).map(|(_, lines)| *lines)
}

/// Line item offsets of every [`STRIDE`](Self::STRIDE)th order.
///
/// Built with one walk over the line counts. Afterwards locating a row or
/// the first row of an order walks at most one stride.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
	orders: u64,
	checkpoints: Vec<u64>,
	total: u64,
}

impl LineIndex {
	pub const STRIDE: u64 = 1 << 16;

	pub fn build(orders: u64) -> Self {
		let mut counts = LineCounts::new(0);
		let mut checkpoints = Vec::with_capacity(orders.div_ceil(Self::STRIDE) as usize);
		let mut total = 0u64;
		for order in 0..orders {
			if order % Self::STRIDE == 0 {
				checkpoints.push(total);
			}
			total += counts.next_count() as u64;
		}
		Self {
			orders,
			checkpoints,
			total,
		}
	}

	pub fn orders(&self) -> u64 {
		self.orders
	}

	/// Line items of all indexed orders.
	pub fn total(&self) -> u64 {
		self.total
	}

	/// Line items of orders `0..order`.
	pub fn rows_before(&self, order: u64) -> u64 {
		if order >= self.orders {
			return self.total;
		}
		let first = order - order % Self::STRIDE;
		let rows = self.checkpoints[(first / Self::STRIDE) as usize];
		rows + LineCounts::new(first).take((order - first) as usize).map(u64::from).sum::<u64>()
	}

	/// Order and line of line item `row`. Rows at or past the end anchor at
	/// the first line of the order after the last.
	pub fn locate(&self, row: u64) -> OrderAnchor {
		if row >= self.total {
			return OrderAnchor {
				order: self.orders,
				line: 0,
			};
		}
		let checkpoint = self.checkpoints.partition_point(|&rows| rows <= row) - 1;
		let mut order = checkpoint as u64 * Self::STRIDE;
		let mut before = self.checkpoints[checkpoint];
		let mut counts = LineCounts::new(order);
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

/// Line counts of consecutive orders, starting at an order index.
#[derive(Debug, Clone)]
pub struct LineCounts {
	random: RowRandom,
}

impl LineCounts {
	pub fn new(order_index: u64) -> Self {
		Self {
			random: RowRandom::at(LINE_COUNT_SEED, 1, order_index),
		}
	}

	pub fn next_count(&mut self) -> u32 {
		let count = self.random.next_int(LINE_COUNT_MIN, LINE_COUNT_MAX);
		self.random.row_finished();
		count as u32
	}
}

impl Iterator for LineCounts {
	type Item = u32;

	fn next(&mut self) -> Option<u32> {
		Some(self.next_count())
	}
}
