// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_type::{Diagnostic, IntoDiagnostic, Type, error::diagnostic::DiagnosticColumn};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConnectorError {
	#[error("split range {start}..{end} is reversed")]
	SplitReversed {
		start: u64,
		end: u64,
	},

	#[error("split range {start}..{end} exceeds the {rows} rows of '{table}'")]
	SplitOutOfRange {
		table: String,
		start: u64,
		end: u64,
		rows: u64,
	},

	#[error("a data source accepts exactly one split")]
	SplitAlreadyAdded,

	#[error("split targets '{split}' but the data source scans '{scanned}'")]
	SplitTableMismatch {
		split: String,
		scanned: String,
	},

	#[error("data source has no split")]
	SourceNotOpened,

	#[error("{what} belongs to connector '{actual}', not '{expected}'")]
	ForeignHandle {
		what: &'static str,
		expected: String,
		actual: String,
	},

	#[error("{what} is not a TPC-H {what}")]
	UnexpectedHandle {
		what: &'static str,
	},

	#[error("output column '{name}' has no column assignment")]
	OutputNotAssigned {
		name: String,
	},

	#[error("output column '{name}' is declared {declared} but '{column}' is {actual}")]
	TypeMismatch {
		name: String,
		column: String,
		declared: Type,
		actual: Type,
	},
}

impl IntoDiagnostic for ConnectorError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			ConnectorError::SplitReversed {
				..
			} => Diagnostic {
				code: "VALIDATION_004".to_string(),
				message,
				column: None,
				label: Some("split end must not precede its start".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},
			ConnectorError::SplitOutOfRange {
				..
			} => Diagnostic {
				code: "VALIDATION_005".to_string(),
				message,
				column: None,
				label: None,
				help: Some("plan splits through the connector instead of building ranges by hand".to_string()),
				notes: vec![],
				cause: None,
			},
			ConnectorError::SplitAlreadyAdded => Diagnostic {
				code: "VALIDATION_006".to_string(),
				message,
				column: None,
				label: None,
				help: Some("create one data source per split".to_string()),
				notes: vec![],
				cause: None,
			},
			ConnectorError::SplitTableMismatch {
				..
			} => Diagnostic {
				code: "VALIDATION_007".to_string(),
				message,
				column: None,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
			ConnectorError::SourceNotOpened => Diagnostic {
				code: "VALIDATION_008".to_string(),
				message,
				column: None,
				label: None,
				help: Some("call add_split before pulling batches".to_string()),
				notes: vec![],
				cause: None,
			},
			ConnectorError::ForeignHandle {
				..
			} => Diagnostic {
				code: "VALIDATION_009".to_string(),
				message,
				column: None,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
			ConnectorError::UnexpectedHandle {
				..
			} => Diagnostic {
				code: "VALIDATION_010".to_string(),
				message,
				column: None,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
			ConnectorError::OutputNotAssigned {
				name,
			} => Diagnostic {
				code: "RESOLUTION_002".to_string(),
				message,
				column: Some(DiagnosticColumn {
					name,
					r#type: None,
				}),
				label: Some("every output column needs a column handle".to_string()),
				help: None,
				notes: vec![],
				cause: None,
			},
			ConnectorError::TypeMismatch {
				name,
				declared,
				actual,
				..
			} => Diagnostic {
				code: "RESOLUTION_003".to_string(),
				message,
				column: Some(DiagnosticColumn {
					name,
					r#type: Some(declared),
				}),
				label: None,
				help: Some(format!("declare the output column as {}", actual)),
				notes: vec![],
				cause: None,
			},
		}
	}
}
