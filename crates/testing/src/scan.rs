// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Drives connector scans to completion.

use std::sync::Arc;

use rayon::prelude::*;
use reifydb_core::{
	Columns,
	interface::{ColumnAssignments, Connector, DataSource, OutputSchema, Split, TableHandle},
};
use reifydb_type::Result;

/// Everything needed to open data sources for one table.
pub struct Scan<'a> {
	pub connector: &'a dyn Connector,
	pub table: Arc<dyn TableHandle>,
	pub output: OutputSchema,
	pub columns: ColumnAssignments,
}

impl Scan<'_> {
	/// Opens a data source on `split` and collects every batch it emits.
	pub fn split(&self, split: Arc<dyn Split>) -> Result<Columns> {
		let mut source = self.connector.create_data_source(&self.output, self.table.clone(), &self.columns)?;
		source.add_split(split)?;
		drain(source.as_mut())
	}

	/// Scans the planned splits one after another.
	pub fn sequential(&self) -> Result<Columns> {
		let mut result = Columns::empty();
		for split in self.connector.plan_splits(self.table.as_ref())? {
			result.append(self.split(split)?)?;
		}
		Ok(result)
	}

	/// Scans the planned splits on the rayon pool, concatenating the
	/// results in split order.
	pub fn parallel(&self) -> Result<Columns> {
		let splits = self.connector.plan_splits(self.table.as_ref())?;
		let parts = splits.into_par_iter().map(|split| self.split(split)).collect::<Result<Vec<_>>>()?;
		let mut result = Columns::empty();
		for part in parts {
			result.append(part)?;
		}
		Ok(result)
	}
}

/// Pulls batches until the source reports the end of data.
pub fn drain(source: &mut dyn DataSource) -> Result<Columns> {
	let mut result = Columns::empty();
	while let Some(batch) = source.next()? {
		result.append(batch.columns)?;
	}
	Ok(result)
}

/// Row count of a full scan that projects no column, as `count(*)` does.
pub fn count_rows(connector: &dyn Connector, table: Arc<dyn TableHandle>) -> Result<u64> {
	let scan = Scan {
		connector,
		table,
		output: OutputSchema::empty(),
		columns: ColumnAssignments::new(),
	};
	let mut total = 0u64;
	for split in connector.plan_splits(scan.table.as_ref())? {
		total += scan.split(split)?.row_count() as u64;
	}
	Ok(total)
}
