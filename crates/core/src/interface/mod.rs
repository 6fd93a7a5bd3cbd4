// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod connector;
pub mod registry;
pub mod version;

pub use connector::{
	ColumnAssignments, ColumnHandle, Connector, ConnectorFactory, DataSource, OutputColumn, OutputSchema, Split,
	TableHandle,
};
pub use registry::{ConnectorRegistration, ConnectorRegistry};
pub use version::{ComponentType, HasVersion, SystemVersion};
