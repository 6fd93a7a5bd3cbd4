// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use crate::error::diagnostic::Diagnostic;

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		let mut out = String::new();
		Self::render(&mut out, diagnostic, 0);
		out
	}

	fn render(out: &mut String, diagnostic: &Diagnostic, depth: usize) {
		let indent = "  ".repeat(depth);

		let _ = writeln!(out, "{}[{}] {}", indent, diagnostic.code, diagnostic.message);

		if let Some(column) = &diagnostic.column {
			match &column.r#type {
				Some(ty) => {
					let _ = writeln!(out, "{}  column: {} ({})", indent, column.name, ty);
				}
				None => {
					let _ = writeln!(out, "{}  column: {}", indent, column.name);
				}
			}
		}

		if let Some(label) = &diagnostic.label {
			let _ = writeln!(out, "{}  = {}", indent, label);
		}

		if let Some(help) = &diagnostic.help {
			let _ = writeln!(out, "{}  help: {}", indent, help);
		}

		for note in &diagnostic.notes {
			let _ = writeln!(out, "{}  note: {}", indent, note);
		}

		if let Some(cause) = &diagnostic.cause {
			let _ = writeln!(out, "{}  caused by:", indent);
			Self::render(out, cause, depth + 1);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Type, error::diagnostic::DiagnosticColumn};

	#[test]
	fn test_render_with_column_and_notes() {
		let diagnostic = Diagnostic {
			code: "RESOLUTION_001".to_string(),
			message: "column not found".to_string(),
			column: Some(DiagnosticColumn {
				name: "n_nam".to_string(),
				r#type: Some(Type::Utf8),
			}),
			label: None,
			help: Some("check for typos".to_string()),
			notes: vec!["table nation".to_string()],
			cause: None,
		};

		let out = DefaultRenderer::render_string(&diagnostic);
		assert!(out.starts_with("[RESOLUTION_001] column not found\n"));
		assert!(out.contains("column: n_nam (UTF8)"));
		assert!(out.contains("help: check for typos"));
		assert!(out.contains("note: table nation"));
	}

	#[test]
	fn test_render_cause_is_indented() {
		let cause = Diagnostic {
			code: "VALIDATION_001".to_string(),
			message: "inner".to_string(),
			column: None,
			label: None,
			help: None,
			notes: vec![],
			cause: None,
		};
		let diagnostic = Diagnostic {
			code: "CONNECTOR_001".to_string(),
			message: "outer".to_string(),
			column: None,
			label: None,
			help: None,
			notes: vec![],
			cause: None,
		}
		.with_cause(cause);

		let out = DefaultRenderer::render_string(&diagnostic);
		assert!(out.contains("caused by:\n  [VALIDATION_001] inner"));
	}
}
