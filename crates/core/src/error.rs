// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_type::{Diagnostic, IntoDiagnostic, Type};

#[derive(Debug, thiserror::Error)]
pub enum ColumnError {
	#[error("cannot combine {actual} data into a {expected} column")]
	TypeMismatch {
		expected: Type,
		actual: Type,
	},

	#[error("column '{column}' has {actual} rows, expected {expected}")]
	LengthMismatch {
		column: String,
		expected: usize,
		actual: usize,
	},

	#[error("column layouts differ")]
	LayoutMismatch {
		expected: String,
		actual: String,
	},
}

impl IntoDiagnostic for ColumnError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			ColumnError::TypeMismatch {
				..
			} => Diagnostic {
				code: "COLUMN_001".to_string(),
				message,
				column: None,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
			ColumnError::LengthMismatch {
				..
			} => Diagnostic {
				code: "COLUMN_002".to_string(),
				message,
				column: None,
				label: Some("all columns of a batch must have the same length".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},
			ColumnError::LayoutMismatch {
				expected,
				actual,
			} => Diagnostic {
				code: "COLUMN_003".to_string(),
				message,
				column: None,
				label: None,
				help: None,
				notes: vec![format!("expected columns: {}", expected), format!("actual columns: {}", actual)],
				cause: None,
			},
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
	#[error("connector factory '{name}' is not registered")]
	FactoryNotFound {
		name: String,
	},

	#[error("connector factory '{name}' is already registered")]
	FactoryAlreadyRegistered {
		name: String,
	},

	#[error("connector '{id}' is not registered")]
	ConnectorNotFound {
		id: String,
	},

	#[error("connector '{id}' is already registered")]
	ConnectorAlreadyRegistered {
		id: String,
	},
}

impl IntoDiagnostic for RegistryError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		let (code, help) = match &self {
			RegistryError::FactoryNotFound {
				..
			} => ("CONNECTOR_001", "register the factory before creating connectors from it"),
			RegistryError::FactoryAlreadyRegistered {
				..
			} => ("CONNECTOR_002", "unregister the existing factory first"),
			RegistryError::ConnectorNotFound {
				..
			} => ("CONNECTOR_003", "register the connector before planning scans against it"),
			RegistryError::ConnectorAlreadyRegistered {
				..
			} => ("CONNECTOR_004", "connector ids must be unique within a registry"),
		};

		Diagnostic {
			code: code.to_string(),
			message,
			column: None,
			label: None,
			help: Some(help.to_string()),
			notes: vec![],
			cause: None,
		}
	}
}
