// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Generic contracts between the host engine and a data connector.
//!
//! A connector is looked up by id, asked to partition a table into splits,
//! and then to create one [`DataSource`] per split. Handles and splits are
//! opaque to the host; connectors downcast them through `as_any`.

use std::{any::Any, fmt::Debug, sync::Arc};

use indexmap::IndexMap;
use reifydb_type::{Result, Type};

use crate::value::batch::Batch;

/// Identifies what a scan targets.
pub trait TableHandle: Debug + Send + Sync + 'static {
	fn connector_id(&self) -> &str;

	fn name(&self) -> &str;

	fn as_any(&self) -> &dyn Any;
}

/// Names the connector-side column that backs an output column.
pub trait ColumnHandle: Debug + Send + Sync + 'static {
	fn name(&self) -> &str;

	fn as_any(&self) -> &dyn Any;
}

/// A unit of scan work, consumed by exactly one data source.
pub trait Split: Debug + Send + Sync + 'static {
	fn connector_id(&self) -> &str;

	fn as_any(&self) -> &dyn Any;
}

/// Output alias to column handle, in output order.
pub type ColumnAssignments = IndexMap<String, Arc<dyn ColumnHandle>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputColumn {
	pub name: String,
	pub r#type: Type,
}

/// Ordered `(name, type)` pairs a scan must produce.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputSchema {
	columns: Vec<OutputColumn>,
}

impl OutputSchema {
	pub fn new(columns: Vec<OutputColumn>) -> Self {
		Self {
			columns,
		}
	}

	pub fn empty() -> Self {
		Self::default()
	}

	pub fn with(mut self, name: impl Into<String>, r#type: Type) -> Self {
		self.columns.push(OutputColumn {
			name: name.into(),
			r#type,
		});
		self
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &OutputColumn> {
		self.columns.iter()
	}

	pub fn names(&self) -> Vec<&str> {
		self.columns.iter().map(|c| c.name.as_str()).collect()
	}
}

/// Pull-based producer of batches for one split.
///
/// `add_split` opens the source; `next` returns `Ok(None)` once the split is
/// exhausted and keeps doing so on every later call.
pub trait DataSource: Send {
	fn add_split(&mut self, split: Arc<dyn Split>) -> Result<()>;

	fn next(&mut self) -> Result<Option<Batch>>;

	fn completed_rows(&self) -> u64;
}

pub trait Connector: Send + Sync {
	fn id(&self) -> &str;

	fn plan_splits(&self, table: &dyn TableHandle) -> Result<Vec<Arc<dyn Split>>>;

	fn create_data_source(
		&self,
		output: &OutputSchema,
		table: Arc<dyn TableHandle>,
		columns: &ColumnAssignments,
	) -> Result<Box<dyn DataSource>>;

	/// Number of rows a full scan of `table` produces.
	fn row_count(&self, table: &dyn TableHandle) -> Result<u64>;
}

pub trait ConnectorFactory: Send + Sync {
	fn name(&self) -> &str;

	fn create(&self, id: &str) -> Result<Arc<dyn Connector>>;
}
