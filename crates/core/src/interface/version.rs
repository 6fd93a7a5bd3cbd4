// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
	Module,
	Connector,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemVersion {
	pub name: String,
	pub version: String,
	pub description: String,
	pub r#type: ComponentType,
}

pub trait HasVersion {
	fn version(&self) -> SystemVersion;
}

pub struct CoreVersion;

impl HasVersion for CoreVersion {
	fn version(&self) -> SystemVersion {
		SystemVersion {
			name: "core".to_string(),
			version: env!("CARGO_PKG_VERSION").to_string(),
			description: "Columnar batches and connector interfaces".to_string(),
			r#type: ComponentType::Module,
		}
	}
}
