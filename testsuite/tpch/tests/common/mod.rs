// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![allow(dead_code)]

use std::sync::Arc;

use reifydb_connector_tpch::{TpchColumnHandle, TpchConfig, TpchConnector, TpchSplit, TpchTableHandle};
use reifydb_core::{
	Columns,
	interface::{ColumnAssignments, ColumnHandle, OutputSchema, Split},
};
use reifydb_testing::scan::Scan;
use reifydb_tpch::Table;

/// Comment text only depends on the pool size; a small pool keeps these
/// tests fast.
pub const POOL_SIZE: usize = 256 * 1024;

pub fn connector(split_count: usize) -> TpchConnector {
	reifydb_testing::tracing::init();
	let config = TpchConfig::builder()
		.batch_size(1000)
		.text_pool_size(POOL_SIZE)
		.min_split_rows(1)
		.split_count(split_count)
		.build()
		.unwrap();
	TpchConnector::new("tpch", config).unwrap()
}

/// Scan of `columns` under their canonical names.
pub fn scan<'a>(connector: &'a TpchConnector, table: &str, scale: f64, columns: &[&str]) -> Scan<'a> {
	let handle = connector.table_handle(table, scale).unwrap();
	let pairs: Vec<(String, String)> = columns.iter().map(|c| (c.to_string(), c.to_string())).collect();
	aliased(connector, handle, &pairs)
}

/// Scan producing `(alias, canonical column)` pairs in the given order.
pub fn aliased<'a>(connector: &'a TpchConnector, handle: TpchTableHandle, pairs: &[(String, String)]) -> Scan<'a> {
	let table = handle.table();
	let mut output = OutputSchema::empty();
	let mut assignments = ColumnAssignments::new();
	for (alias, column) in pairs {
		let (_, def) = table.column(column).unwrap();
		output = output.with(alias.clone(), def.r#type);
		assignments.insert(alias.clone(), Arc::new(TpchColumnHandle::new(column.clone())) as Arc<dyn ColumnHandle>);
	}
	Scan {
		connector,
		table: Arc::new(handle),
		output,
		columns: assignments,
	}
}

pub fn all_columns(table: Table) -> Vec<&'static str> {
	table.columns().iter().map(|c| c.name).collect()
}

/// Rows `start..end` through a split built from a bare range.
pub fn range(scan: &Scan<'_>, handle: &TpchTableHandle, start: u64, end: u64) -> Columns {
	let split = TpchSplit::from_range(handle.clone(), start, end).unwrap();
	scan.split(Arc::new(split) as Arc<dyn Split>).unwrap()
}
