// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

mod common;

use std::sync::Arc;

use reifydb_core::interface::Connector;
use reifydb_testing::scan::count_rows;
use reifydb_tpch::Table;

#[test]
fn test_reference_cardinalities() {
	let connector = common::connector(4);
	let expected = [
		("nation", 25),
		("region", 5),
		("supplier", 10_000),
		("part", 200_000),
		("partsupp", 800_000),
		("customer", 150_000),
		("orders", 1_500_000),
		("lineitem", 6_001_215),
	];
	for (table, rows) in expected {
		let handle = connector.table_handle(table, 1.0).unwrap();
		assert_eq!(connector.row_count(&handle).unwrap(), rows, "{}", table);
	}
}

#[test]
fn test_supplier_scales_linearly() {
	let connector = common::connector(4);
	for (scale, rows) in [(1.0, 10_000), (5.0, 50_000), (13.0, 130_000)] {
		let handle = connector.table_handle("supplier", scale).unwrap();
		assert_eq!(connector.row_count(&handle).unwrap(), rows);
	}
}

#[test]
fn test_supplier_count_star_scales_linearly() {
	let connector = common::connector(4);
	for (scale, rows) in [(1.0, 10_000), (5.0, 50_000), (13.0, 130_000)] {
		let handle = Arc::new(connector.table_handle("supplier", scale).unwrap());
		assert_eq!(count_rows(&connector, handle).unwrap(), rows, "sf {}", scale);
	}
}

#[test]
fn test_fractional_scales_are_exact() {
	let connector = common::connector(4);
	for (table, scale, rows) in [("supplier", 0.57, 5_700), ("part", 2.3, 460_000), ("partsupp", 2.3, 1_840_000)] {
		let handle = connector.table_handle(table, scale).unwrap();
		assert_eq!(connector.row_count(&handle).unwrap(), rows, "{} at {}", table, scale);
	}
	let handle = Arc::new(connector.table_handle("supplier", 0.57).unwrap());
	assert_eq!(count_rows(&connector, handle).unwrap(), 5_700);
}

#[test]
fn test_lookup_tables_ignore_scale() {
	let connector = common::connector(4);
	for scale in [0.01, 1.0, 100.0] {
		assert_eq!(connector.row_count(&connector.table_handle("nation", scale).unwrap()).unwrap(), 25);
		assert_eq!(connector.row_count(&connector.table_handle("region", scale).unwrap()).unwrap(), 5);
	}
}

#[test]
fn test_count_star_matches_row_count() {
	let connector = common::connector(5);
	for table in Table::ALL {
		let handle = Arc::new(connector.table_handle(table.name(), 0.01).unwrap());
		let expected = connector.row_count(handle.as_ref()).unwrap();
		assert_eq!(count_rows(&connector, handle).unwrap(), expected, "{}", table);
	}
}

#[test]
fn test_tiny_scale_empties_dependent_tables() {
	let connector = common::connector(4);
	for (table, rows) in [("supplier", 0), ("customer", 1), ("part", 2), ("partsupp", 0), ("orders", 15), ("lineitem", 0)]
	{
		let handle = Arc::new(connector.table_handle(table, 0.00001).unwrap());
		assert_eq!(connector.row_count(handle.as_ref()).unwrap(), rows, "{}", table);
		assert_eq!(count_rows(&connector, handle.clone()).unwrap(), rows, "{}", table);
		if rows == 0 {
			assert!(connector.plan_splits(handle.as_ref()).unwrap().is_empty());
		}
	}
}
