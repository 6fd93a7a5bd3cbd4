// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Maps a requested output schema onto canonical table columns.

use reifydb_core::interface::{ColumnAssignments, ColumnHandle, OutputSchema};
use reifydb_tpch::{Projection, Table};
use reifydb_type::{Result, Type, return_error};

use crate::{error::ConnectorError, handle::TpchColumnHandle};

/// One output column and the generated column backing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
	pub ordinal: usize,
	pub position: usize,
	pub name: String,
	pub r#type: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
	pub projection: Projection,
	pub columns: Vec<ResolvedColumn>,
}

impl Resolution {
	/// Whether the generated column at `ordinal` feeds any output column
	/// after `position`.
	pub fn used_after(&self, position: usize, ordinal: usize) -> bool {
		self.columns[position + 1..].iter().any(|c| c.ordinal == ordinal)
	}
}

/// Resolves every output column, in output order. Assignments that no output
/// column names are ignored.
pub fn resolve(table: Table, columns: &ColumnAssignments, output: &OutputSchema) -> Result<Resolution> {
	let mut projection = Projection::none(table);
	let mut resolved = Vec::with_capacity(output.len());

	for (position, out) in output.iter().enumerate() {
		let Some(handle) = columns.get(&out.name) else {
			return_error!(ConnectorError::OutputNotAssigned {
				name: out.name.clone()
			});
		};
		let Some(handle) = handle.as_any().downcast_ref::<TpchColumnHandle>() else {
			return_error!(ConnectorError::UnexpectedHandle {
				what: "column handle"
			});
		};

		let canonical = handle.name();
		let ordinal = table.column_ordinal(canonical)?;
		let actual = table.columns()[ordinal].r#type;
		if actual != out.r#type {
			return_error!(ConnectorError::TypeMismatch {
				name: out.name.clone(),
				column: canonical.to_string(),
				declared: out.r#type,
				actual,
			});
		}

		projection = projection.with(ordinal);
		resolved.push(ResolvedColumn {
			ordinal,
			position,
			name: out.name.clone(),
			r#type: actual,
		});
	}

	Ok(Resolution {
		projection,
		columns: resolved,
	})
}
