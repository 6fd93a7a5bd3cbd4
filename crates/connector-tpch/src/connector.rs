// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use once_cell::sync::OnceCell;
use reifydb_core::interface::{
	ColumnAssignments, ComponentType, Connector, ConnectorFactory, DataSource, HasVersion, OutputSchema, Split,
	SystemVersion, TableHandle,
};
use reifydb_tpch::{Table, TextPool};
use reifydb_type::{Result, return_error};
use tracing::{debug, instrument};

use crate::{
	config::TpchConfig, error::ConnectorError, handle::TpchTableHandle, resolve::resolve, source::TpchDataSource,
	split::plan_splits,
};

pub const FACTORY_NAME: &str = "tpch";

/// Generates TPC-H tables on demand.
///
/// The text pool is built on first use by a scan that projects a comment
/// column, then shared by every later scan of this connector.
pub struct TpchConnector {
	id: String,
	config: TpchConfig,
	pool: OnceCell<Arc<TextPool>>,
}

impl TpchConnector {
	pub fn new(id: impl Into<String>, config: TpchConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self {
			id: id.into(),
			config,
			pool: OnceCell::new(),
		})
	}

	pub fn config(&self) -> &TpchConfig {
		&self.config
	}

	/// Handle for `table` at `scale`, validating both.
	pub fn table_handle(&self, table: &str, scale: f64) -> Result<TpchTableHandle> {
		TpchTableHandle::parse(self.id.clone(), table, scale)
	}

	pub fn default_table_handle(&self, table: Table) -> TpchTableHandle {
		TpchTableHandle::with_default_scale(self.id.clone(), table)
	}

	pub fn text_pool(&self) -> Result<Arc<TextPool>> {
		self.pool.get_or_try_init(|| TextPool::generate(self.config.text_pool_size).map(Arc::new)).cloned()
	}

	fn handle<'a>(&self, table: &'a dyn TableHandle) -> Result<&'a TpchTableHandle> {
		if table.connector_id() != self.id {
			return_error!(ConnectorError::ForeignHandle {
				what: "table handle",
				expected: self.id.clone(),
				actual: table.connector_id().to_string(),
			});
		}
		match table.as_any().downcast_ref::<TpchTableHandle>() {
			Some(handle) => Ok(handle),
			None => return_error!(ConnectorError::UnexpectedHandle {
				what: "table handle"
			}),
		}
	}
}

impl Connector for TpchConnector {
	fn id(&self) -> &str {
		&self.id
	}

	fn plan_splits(&self, table: &dyn TableHandle) -> Result<Vec<Arc<dyn Split>>> {
		let handle = self.handle(table)?;
		Ok(plan_splits(handle, &self.config).into_iter().map(|s| Arc::new(s) as Arc<dyn Split>).collect())
	}

	#[instrument(name = "tpch::connector::create_data_source", level = "trace", skip_all, fields(table = %table.name()))]
	fn create_data_source(
		&self,
		output: &OutputSchema,
		table: Arc<dyn TableHandle>,
		columns: &ColumnAssignments,
	) -> Result<Box<dyn DataSource>> {
		let handle = self.handle(table.as_ref())?.clone();
		let resolution = resolve(handle.table(), columns, output)?;
		let pool = if resolution.projection.needs_text_pool() {
			Some(self.text_pool()?)
		} else {
			None
		};
		debug!(
			table = %handle.table(),
			scale = %handle.scale(),
			columns = resolution.columns.len(),
			"created data source"
		);
		Ok(Box::new(TpchDataSource::new(handle, resolution, self.config.batch_size, pool)))
	}

	fn row_count(&self, table: &dyn TableHandle) -> Result<u64> {
		Ok(self.handle(table)?.row_count())
	}
}

impl HasVersion for TpchConnector {
	fn version(&self) -> SystemVersion {
		SystemVersion {
			name: "connector-tpch".to_string(),
			version: env!("CARGO_PKG_VERSION").to_string(),
			description: "TPC-H data generator connector".to_string(),
			r#type: ComponentType::Connector,
		}
	}
}

/// Creates [`TpchConnector`]s sharing one configuration.
#[derive(Debug, Clone, Default)]
pub struct TpchConnectorFactory {
	config: TpchConfig,
}

impl TpchConnectorFactory {
	pub fn new(config: TpchConfig) -> Result<Self> {
		config.validate()?;
		Ok(Self {
			config,
		})
	}
}

impl ConnectorFactory for TpchConnectorFactory {
	fn name(&self) -> &str {
		FACTORY_NAME
	}

	fn create(&self, id: &str) -> Result<Arc<dyn Connector>> {
		Ok(Arc::new(TpchConnector::new(id, self.config.clone())?))
	}
}
