// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::error::diagnostic::Diagnostic;

pub fn invalid_json(err: serde_json::Error) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_001".to_string(),
		message: format!("configuration could not be parsed: {}", err),
		column: None,
		label: Some(format!("error at line {}, column {}", err.line(), err.column())),
		help: Some("check the configuration document against the documented fields".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn invalid_value(field: &str, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_002".to_string(),
		message: format!("invalid value for '{}'", field),
		column: None,
		label: Some(reason.into()),
		help: None,
		notes: vec![],
		cause: None,
	}
}
