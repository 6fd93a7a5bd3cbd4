// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::HashMap, ops::Deref, sync::Arc};

use parking_lot::RwLock;
use reifydb_type::{Result, return_error};
use tracing::debug;

use crate::{
	error::RegistryError,
	interface::connector::{Connector, ConnectorFactory},
};

/// Name to factory and id to connector lookup, owned by whoever runs the
/// engine. Nothing here is process global; two registries never see each
/// other's entries.
#[derive(Default)]
pub struct ConnectorRegistry {
	factories: RwLock<HashMap<String, Arc<dyn ConnectorFactory>>>,
	connectors: RwLock<HashMap<String, Arc<dyn Connector>>>,
}

impl ConnectorRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn register_factory(&self, factory: Arc<dyn ConnectorFactory>) -> Result<()> {
		let mut factories = self.factories.write();
		let name = factory.name().to_string();
		if factories.contains_key(&name) {
			return_error!(RegistryError::FactoryAlreadyRegistered {
				name
			});
		}
		debug!(factory = %name, "registered connector factory");
		factories.insert(name, factory);
		Ok(())
	}

	pub fn unregister_factory(&self, name: &str) -> bool {
		self.factories.write().remove(name).is_some()
	}

	pub fn factory(&self, name: &str) -> Result<Arc<dyn ConnectorFactory>> {
		match self.factories.read().get(name) {
			Some(factory) => Ok(factory.clone()),
			None => Err(reifydb_type::error!(RegistryError::FactoryNotFound {
				name: name.to_string()
			})),
		}
	}

	pub fn register_connector(&self, connector: Arc<dyn Connector>) -> Result<()> {
		let mut connectors = self.connectors.write();
		let id = connector.id().to_string();
		if connectors.contains_key(&id) {
			return_error!(RegistryError::ConnectorAlreadyRegistered {
				id
			});
		}
		debug!(connector = %id, "registered connector");
		connectors.insert(id, connector);
		Ok(())
	}

	pub fn unregister_connector(&self, id: &str) -> bool {
		let removed = self.connectors.write().remove(id).is_some();
		if removed {
			debug!(connector = %id, "unregistered connector");
		}
		removed
	}

	pub fn connector(&self, id: &str) -> Result<Arc<dyn Connector>> {
		match self.connectors.read().get(id) {
			Some(connector) => Ok(connector.clone()),
			None => Err(reifydb_type::error!(RegistryError::ConnectorNotFound {
				id: id.to_string()
			})),
		}
	}

	pub fn connector_ids(&self) -> Vec<String> {
		let mut ids: Vec<String> = self.connectors.read().keys().cloned().collect();
		ids.sort();
		ids
	}

	/// Registers `connector` for as long as the returned guard lives.
	pub fn scoped(&self, connector: Arc<dyn Connector>) -> Result<ConnectorRegistration<'_>> {
		self.register_connector(connector.clone())?;
		Ok(ConnectorRegistration {
			registry: self,
			connector,
		})
	}

	/// Creates a connector through the factory registered as `factory` and
	/// registers it under `id` for the lifetime of the guard.
	pub fn create_scoped(&self, factory: &str, id: &str) -> Result<ConnectorRegistration<'_>> {
		let connector = self.factory(factory)?.create(id)?;
		self.scoped(connector)
	}
}

/// Keeps a connector registered; unregisters it on drop.
pub struct ConnectorRegistration<'a> {
	registry: &'a ConnectorRegistry,
	connector: Arc<dyn Connector>,
}

impl ConnectorRegistration<'_> {
	pub fn connector(&self) -> Arc<dyn Connector> {
		self.connector.clone()
	}
}

impl Deref for ConnectorRegistration<'_> {
	type Target = dyn Connector;

	fn deref(&self) -> &Self::Target {
		self.connector.as_ref()
	}
}

impl Drop for ConnectorRegistration<'_> {
	fn drop(&mut self) {
		self.registry.unregister_connector(self.connector.id());
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use reifydb_type::{ErrorKind, Result};

	use super::*;
	use crate::interface::connector::{
		ColumnAssignments, DataSource, OutputSchema, Split, TableHandle,
	};

	struct Dummy {
		id: String,
	}

	impl Connector for Dummy {
		fn id(&self) -> &str {
			&self.id
		}

		fn plan_splits(&self, _table: &dyn TableHandle) -> Result<Vec<Arc<dyn Split>>> {
			Ok(vec![])
		}

		fn create_data_source(
			&self,
			_output: &OutputSchema,
			_table: Arc<dyn TableHandle>,
			_columns: &ColumnAssignments,
		) -> Result<Box<dyn DataSource>> {
			unimplemented!()
		}

		fn row_count(&self, _table: &dyn TableHandle) -> Result<u64> {
			Ok(0)
		}
	}

	struct DummyFactory;

	impl ConnectorFactory for DummyFactory {
		fn name(&self) -> &str {
			"dummy"
		}

		fn create(&self, id: &str) -> Result<Arc<dyn Connector>> {
			Ok(Arc::new(Dummy {
				id: id.to_string(),
			}))
		}
	}

	fn dummy(id: &str) -> Arc<dyn Connector> {
		Arc::new(Dummy {
			id: id.to_string(),
		})
	}

	#[test]
	fn test_register_and_lookup() {
		let registry = ConnectorRegistry::new();
		registry.register_connector(dummy("a")).unwrap();
		assert_eq!(registry.connector("a").unwrap().id(), "a");
		assert!(registry.unregister_connector("a"));
		assert!(!registry.unregister_connector("a"));
	}

	#[test]
	fn test_duplicate_connector_rejected() {
		let registry = ConnectorRegistry::new();
		registry.register_connector(dummy("a")).unwrap();
		let err = registry.register_connector(dummy("a")).unwrap_err();
		assert_eq!(err.code, "CONNECTOR_004");
		assert_eq!(err.kind(), ErrorKind::Connector);
	}

	#[test]
	fn test_missing_connector() {
		let registry = ConnectorRegistry::new();
		let err = registry.connector("nope").err().unwrap();
		assert_eq!(err.code, "CONNECTOR_003");
	}

	#[test]
	fn test_scoped_registration_unregisters_on_drop() {
		let registry = ConnectorRegistry::new();
		{
			let guard = registry.scoped(dummy("scoped")).unwrap();
			assert_eq!(guard.id(), "scoped");
			assert_eq!(registry.connector_ids(), ["scoped"]);
		}
		assert!(registry.connector_ids().is_empty());
	}

	#[test]
	fn test_factory_lifecycle() {
		let registry = ConnectorRegistry::new();
		registry.register_factory(Arc::new(DummyFactory)).unwrap();
		assert_eq!(registry.register_factory(Arc::new(DummyFactory)).unwrap_err().code, "CONNECTOR_002");

		{
			let guard = registry.create_scoped("dummy", "d1").unwrap();
			assert_eq!(guard.connector().id(), "d1");
			assert!(registry.connector("d1").is_ok());
		}
		assert!(registry.connector("d1").is_err());

		assert!(registry.unregister_factory("dummy"));
		assert_eq!(registry.create_scoped("dummy", "d2").err().unwrap().code, "CONNECTOR_001");
	}

	#[test]
	fn test_registries_are_isolated() {
		let left = ConnectorRegistry::new();
		let right = ConnectorRegistry::new();
		let _guard = left.scoped(dummy("x")).unwrap();
		assert!(right.connector("x").is_err());
		assert!(right.scoped(dummy("x")).is_ok());
	}
}
