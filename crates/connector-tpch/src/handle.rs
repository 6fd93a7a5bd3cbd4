// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{any::Any, sync::Arc};

use once_cell::sync::OnceCell;
use reifydb_core::interface::{ColumnHandle, TableHandle};
use reifydb_tpch::{
	ScaleFactor, Table, row_count,
	row_count::{LineIndex, known_line_item_count, line_item_orders},
};
use reifydb_type::Result;

/// A TPC-H table at a fixed scale factor, owned by one connector.
///
/// The row count and the line item index are computed on first use and
/// shared by every clone, so splits cut from one handle walk the line
/// counts at most once.
#[derive(Debug, Clone)]
pub struct TpchTableHandle {
	connector_id: String,
	table: Table,
	scale: ScaleFactor,
	rows: Arc<OnceCell<u64>>,
	lines: Arc<OnceCell<LineIndex>>,
}

impl TpchTableHandle {
	pub fn new(connector_id: impl Into<String>, table: Table, scale: ScaleFactor) -> Self {
		Self {
			connector_id: connector_id.into(),
			table,
			scale,
			rows: Arc::new(OnceCell::new()),
			lines: Arc::new(OnceCell::new()),
		}
	}

	/// Handle at [`ScaleFactor::DEFAULT`].
	pub fn with_default_scale(connector_id: impl Into<String>, table: Table) -> Self {
		Self::new(connector_id, table, ScaleFactor::DEFAULT)
	}

	/// Validates both the table name and the scale factor.
	pub fn parse(connector_id: impl Into<String>, table: &str, scale: f64) -> Result<Self> {
		let table = Table::from_name(table)?;
		let scale = ScaleFactor::new(scale)?;
		Ok(Self::new(connector_id, table, scale))
	}

	pub fn table(&self) -> Table {
		self.table
	}

	pub fn scale(&self) -> ScaleFactor {
		self.scale
	}

	pub fn row_count(&self) -> u64 {
		*self.rows.get_or_init(|| match self.table {
			Table::LineItem => {
				let orders = line_item_orders(self.scale);
				known_line_item_count(orders).unwrap_or_else(|| self.line_index().total())
			}
			table => row_count(table, self.scale),
		})
	}

	/// Line item offsets of the orders at this scale.
	pub fn line_index(&self) -> &LineIndex {
		self.lines.get_or_init(|| LineIndex::build(line_item_orders(self.scale)))
	}
}

impl PartialEq for TpchTableHandle {
	fn eq(&self, other: &Self) -> bool {
		self.connector_id == other.connector_id && self.table == other.table && self.scale == other.scale
	}
}

impl TableHandle for TpchTableHandle {
	fn connector_id(&self) -> &str {
		&self.connector_id
	}

	fn name(&self) -> &str {
		self.table.name()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// The canonical column behind an output alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TpchColumnHandle {
	column: String,
}

impl TpchColumnHandle {
	pub fn new(column: impl Into<String>) -> Self {
		Self {
			column: column.into(),
		}
	}
}

impl ColumnHandle for TpchColumnHandle {
	fn name(&self) -> &str {
		&self.column
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
