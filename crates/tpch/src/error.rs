// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_type::{Diagnostic, IntoDiagnostic, error::diagnostic::DiagnosticColumn};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TpchError {
	#[error("scale factor must be positive, got {value}")]
	ScaleFactorNotPositive {
		value: f64,
	},

	#[error("scale factor {value} exceeds the supported maximum of {max}")]
	ScaleFactorTooLarge {
		value: f64,
		max: f64,
	},

	#[error("unknown TPC-H table '{name}'")]
	UnknownTable {
		name: String,
	},

	#[error("table '{table}' has no column '{name}'")]
	UnknownColumn {
		table: String,
		name: String,
	},

	#[error("text pool size {size} is below the minimum of {min} bytes")]
	TextPoolTooSmall {
		size: usize,
		min: usize,
	},

	#[error("text pool size {size} is above the maximum of {max} bytes")]
	TextPoolTooLarge {
		size: usize,
		max: usize,
	},

	#[error("generating '{table}' comments requires a text pool")]
	TextPoolRequired {
		table: String,
	},
}

impl IntoDiagnostic for TpchError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TpchError::ScaleFactorNotPositive {
				..
			} => Diagnostic {
				code: "VALIDATION_001".to_string(),
				message,
				column: None,
				label: Some("scale factor must be greater than zero".to_string()),
				help: Some("use 1 for the reference data set, or a fraction such as 0.01 for a smaller one"
					.to_string()),
				notes: vec![],
				cause: None,
			},
			TpchError::ScaleFactorTooLarge {
				..
			} => Diagnostic {
				code: "VALIDATION_002".to_string(),
				message,
				column: None,
				label: None,
				help: None,
				notes: vec!["key domains above this scale no longer fit the 31-bit generator".to_string()],
				cause: None,
			},
			TpchError::UnknownTable {
				..
			} => Diagnostic {
				code: "VALIDATION_003".to_string(),
				message,
				column: None,
				label: None,
				help: Some(
					"valid tables are nation, region, part, supplier, partsupp, customer, orders and lineitem"
						.to_string(),
				),
				notes: vec![],
				cause: None,
			},
			TpchError::UnknownColumn {
				table,
				name,
			} => Diagnostic {
				code: "RESOLUTION_001".to_string(),
				message,
				column: Some(DiagnosticColumn {
					name,
					r#type: None,
				}),
				label: Some("this column does not exist in the table".to_string()),
				help: Some(format!("check for typos; columns of '{}' use the standard prefixed names", table)),
				notes: vec![],
				cause: None,
			},
			TpchError::TextPoolTooSmall {
				..
			}
			| TpchError::TextPoolTooLarge {
				..
			} => Diagnostic {
				code: "CONFIG_003".to_string(),
				message,
				column: None,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
			TpchError::TextPoolRequired {
				..
			} => Diagnostic {
				code: "INTERNAL_001".to_string(),
				message,
				column: None,
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},
		}
	}
}
