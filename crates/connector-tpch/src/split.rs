// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{any::Any, ops::Range};

use reifydb_core::interface::{Split, TableHandle};
use reifydb_tpch::{OrderAnchor, Table};
use reifydb_type::{Result, return_error};
use tracing::{debug, instrument};

use crate::{
	config::{SplitTarget, TpchConfig},
	error::ConnectorError,
	handle::TpchTableHandle,
};

/// A contiguous row range of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TpchSplit {
	table: TpchTableHandle,
	start: u64,
	end: u64,
	anchor: Option<OrderAnchor>,
}

impl TpchSplit {
	/// Rows `start..end` of `table`. The range must lie within the table.
	pub fn from_range(table: TpchTableHandle, start: u64, end: u64) -> Result<Self> {
		if end < start {
			return_error!(ConnectorError::SplitReversed {
				start,
				end
			});
		}
		let rows = table.row_count();
		if end > rows {
			return_error!(ConnectorError::SplitOutOfRange {
				table: table.table().name().to_string(),
				start,
				end,
				rows
			});
		}
		let anchor = (table.table() == Table::LineItem).then(|| table.line_index().locate(start));
		Ok(Self {
			table,
			start,
			end,
			anchor,
		})
	}

	pub fn table(&self) -> &TpchTableHandle {
		&self.table
	}

	pub fn start(&self) -> u64 {
		self.start
	}

	pub fn end(&self) -> u64 {
		self.end
	}

	pub fn range(&self) -> Range<u64> {
		self.start..self.end
	}

	pub fn len(&self) -> u64 {
		self.end - self.start
	}

	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Order and line of the first row of a line item split.
	pub fn anchor(&self) -> Option<OrderAnchor> {
		self.anchor
	}
}

impl Split for TpchSplit {
	fn connector_id(&self) -> &str {
		self.table.connector_id()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Divides `table` into contiguous, ascending splits covering every row.
#[instrument(name = "tpch::split::plan", level = "trace", skip_all, fields(table = %table.table(), scale = %table.scale()))]
pub fn plan_splits(table: &TpchTableHandle, config: &TpchConfig) -> Vec<TpchSplit> {
	let rows = table.row_count();
	if rows == 0 {
		debug!(table = %table.table(), "table is empty, no splits");
		return vec![];
	}

	let wanted = match config.split_target {
		SplitTarget::Rows(per_split) => rows.div_ceil(per_split),
		SplitTarget::Count(count) => count as u64,
	};
	let useful = (rows / config.min_split_rows).max(1);
	let count = wanted.min(useful).max(1);

	let splits = if table.table() == Table::LineItem {
		order_aligned(table, count)
	} else {
		(0..count)
			.map(|i| TpchSplit {
				table: table.clone(),
				start: rows * i / count,
				end: rows * (i + 1) / count,
				anchor: None,
			})
			.collect::<Vec<_>>()
	};

	debug!(table = %table.table(), rows, splits = splits.len(), "planned splits");
	splits
}

/// Line item splits cut at order boundaries, so every split starts at the
/// first line of an order.
fn order_aligned(table: &TpchTableHandle, count: u64) -> Vec<TpchSplit> {
	let index = table.line_index();
	let orders = index.orders();
	let count = count.min(orders);

	(0..count)
		.map(|i| {
			let first_order = orders * i / count;
			TpchSplit {
				table: table.clone(),
				start: index.rows_before(first_order),
				end: index.rows_before(orders * (i + 1) / count),
				anchor: Some(OrderAnchor {
					order: first_order,
					line: 0,
				}),
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use reifydb_tpch::ScaleFactor;
	use reifydb_type::ErrorKind;

	use super::*;

	fn handle(table: Table, scale: f64) -> TpchTableHandle {
		TpchTableHandle::new("tpch", table, ScaleFactor::new(scale).unwrap())
	}

	fn config(target: SplitTarget, min_split_rows: u64) -> TpchConfig {
		TpchConfig {
			split_target: target,
			min_split_rows,
			..TpchConfig::default()
		}
	}

	fn assert_covers(splits: &[TpchSplit], rows: u64) {
		assert_eq!(splits.first().map(|s| s.start()), Some(0));
		assert_eq!(splits.last().map(|s| s.end()), Some(rows));
		for pair in splits.windows(2) {
			assert_eq!(pair[0].end(), pair[1].start());
		}
		assert!(splits.iter().all(|s| !s.is_empty()));
	}

	#[test]
	fn test_small_table_single_split() {
		let splits = plan_splits(&handle(Table::Nation, 1.0), &config(SplitTarget::Count(8), 10_000));
		assert_eq!(splits.len(), 1);
		assert_eq!(splits[0].range(), 0..25);
	}

	#[test]
	fn test_split_count() {
		let table = handle(Table::Customer, 1.0);
		let splits = plan_splits(&table, &config(SplitTarget::Count(7), 1));
		assert_eq!(splits.len(), 7);
		assert_covers(&splits, 150_000);
	}

	#[test]
	fn test_split_rows() {
		let table = handle(Table::PartSupp, 1.0);
		let splits = plan_splits(&table, &config(SplitTarget::Rows(300_000), 1));
		assert_eq!(splits.len(), 3);
		assert_covers(&splits, 800_000);
	}

	#[test]
	fn test_min_split_rows_caps_count() {
		let table = handle(Table::Supplier, 1.0);
		let splits = plan_splits(&table, &config(SplitTarget::Count(100), 2_500));
		assert_eq!(splits.len(), 4);
		assert_covers(&splits, 10_000);
	}

	#[test]
	fn test_count_above_rows() {
		let splits = plan_splits(&handle(Table::Region, 1.0), &config(SplitTarget::Count(9), 1));
		assert_eq!(splits.len(), 5);
		assert_covers(&splits, 5);
	}

	#[test]
	fn test_empty_table_has_no_splits() {
		let splits = plan_splits(&handle(Table::Supplier, 0.00001), &TpchConfig::default());
		assert!(splits.is_empty());
	}

	#[test]
	fn test_lineitem_splits_align_to_orders() {
		let table = handle(Table::LineItem, 0.01);
		let splits = plan_splits(&table, &config(SplitTarget::Count(6), 1));
		assert_eq!(splits.len(), 6);
		assert_covers(&splits, 60_175);
		for split in &splits {
			let anchor = split.anchor().unwrap();
			assert_eq!(anchor.line, 0);
			assert_eq!(OrderAnchor::locate(split.start()), anchor);
		}
		assert_eq!(splits[1].anchor().unwrap().order, 2_500);
	}

	#[test]
	fn test_from_range_validates() {
		let table = handle(Table::Nation, 1.0);
		let split = TpchSplit::from_range(table.clone(), 3, 10).unwrap();
		assert_eq!(split.len(), 7);
		assert_eq!(split.anchor(), None);
		assert!(TpchSplit::from_range(table.clone(), 25, 25).unwrap().is_empty());

		let err = TpchSplit::from_range(table.clone(), 10, 3).unwrap_err();
		assert_eq!(err.code, "VALIDATION_004");
		assert_eq!(err.kind(), ErrorKind::Validation);

		let err = TpchSplit::from_range(table, 0, 26).unwrap_err();
		assert_eq!(err.code, "VALIDATION_005");
	}

	#[test]
	fn test_from_range_anchors_line_items() {
		let table = handle(Table::LineItem, 0.0123);
		let rows = table.row_count();
		for start in [0, 1, 4_321, rows - 1, rows] {
			let split = TpchSplit::from_range(table.clone(), start, rows).unwrap();
			assert_eq!(split.anchor(), Some(OrderAnchor::locate(start)), "{}", start);
		}
	}

	#[test]
	fn test_odd_scale_lineitem_splits() {
		let table = handle(Table::LineItem, 0.0123);
		let splits = plan_splits(&table, &config(SplitTarget::Count(5), 1));
		assert_eq!(splits.len(), 5);
		assert_covers(&splits, table.row_count());
		for split in &splits {
			assert_eq!(OrderAnchor::locate(split.start()), split.anchor().unwrap());
		}
	}
}
