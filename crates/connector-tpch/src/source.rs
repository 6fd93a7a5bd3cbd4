// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{mem, sync::Arc};

use reifydb_core::{
	Batch, Column, ColumnData, Columns,
	interface::{DataSource, Split, TableHandle},
};
use reifydb_tpch::{ColumnBuffers, RowGenerator, TextPool, generator};
use reifydb_type::{Result, return_error};
use tracing::{debug, instrument};

use crate::{error::ConnectorError, handle::TpchTableHandle, resolve::Resolution, split::TpchSplit};

enum State {
	/// Waiting for its one split.
	Idle,
	/// Split accepted, generator positioned at the first row.
	Initialized(Cursor),
	Emitting(Cursor),
	Exhausted,
}

struct Cursor {
	generator: Box<dyn RowGenerator>,
	buffers: ColumnBuffers,
}

/// Emits the projected columns of one split in batches of at most
/// `batch_size` rows.
pub struct TpchDataSource {
	table: TpchTableHandle,
	resolution: Resolution,
	batch_size: usize,
	pool: Option<Arc<TextPool>>,
	state: State,
	completed: u64,
}

impl TpchDataSource {
	pub(crate) fn new(
		table: TpchTableHandle,
		resolution: Resolution,
		batch_size: usize,
		pool: Option<Arc<TextPool>>,
	) -> Self {
		Self {
			table,
			resolution,
			batch_size,
			pool,
			state: State::Idle,
			completed: 0,
		}
	}

	fn emit(&mut self, cursor: &mut Cursor) -> Result<Option<Batch>> {
		let produced = cursor.generator.generate(&mut cursor.buffers, self.batch_size);
		if produced == 0 {
			return Ok(None);
		}

		let mut columns = Vec::with_capacity(self.resolution.columns.len());
		for resolved in &self.resolution.columns {
			let data = if self.resolution.used_after(resolved.position, resolved.ordinal) {
				cursor.buffers.get(resolved.ordinal).cloned()
			} else {
				cursor.buffers.take(resolved.ordinal)
			};
			let data = data.unwrap_or_else(|| ColumnData::with_capacity(resolved.r#type, 0));
			columns.push(Column::new(resolved.name.clone(), data));
		}

		self.completed += produced as u64;
		Ok(Some(Batch {
			columns: Columns::with_row_count(columns, produced)?,
		}))
	}
}

impl DataSource for TpchDataSource {
	#[instrument(name = "tpch::source::add_split", level = "trace", skip_all, fields(table = %self.table.table()))]
	fn add_split(&mut self, split: Arc<dyn Split>) -> Result<()> {
		if !matches!(self.state, State::Idle) {
			return_error!(ConnectorError::SplitAlreadyAdded);
		}
		if split.connector_id() != self.table.connector_id() {
			return_error!(ConnectorError::ForeignHandle {
				what: "split",
				expected: self.table.connector_id().to_string(),
				actual: split.connector_id().to_string(),
			});
		}
		let Some(split) = split.as_any().downcast_ref::<TpchSplit>() else {
			return_error!(ConnectorError::UnexpectedHandle {
				what: "split"
			});
		};
		if split.table() != &self.table {
			return_error!(ConnectorError::SplitTableMismatch {
				split: format!("{}@{}", split.table().table(), split.table().scale()),
				scanned: format!("{}@{}", self.table.table(), self.table.scale()),
			});
		}

		let generator = generator::open(
			self.table.table(),
			self.table.scale(),
			&self.resolution.projection,
			split.range(),
			split.anchor(),
			self.pool.clone(),
		)?;
		let buffers = ColumnBuffers::new(&self.resolution.projection, self.batch_size);
		self.state = State::Initialized(Cursor {
			generator,
			buffers,
		});
		Ok(())
	}

	#[instrument(name = "tpch::source::next", level = "trace", skip_all, fields(table = %self.table.table()))]
	fn next(&mut self) -> Result<Option<Batch>> {
		match mem::replace(&mut self.state, State::Exhausted) {
			State::Idle => {
				self.state = State::Idle;
				return_error!(ConnectorError::SourceNotOpened)
			}
			State::Initialized(mut cursor) | State::Emitting(mut cursor) => match self.emit(&mut cursor)? {
				Some(batch) => {
					self.state = State::Emitting(cursor);
					Ok(Some(batch))
				}
				None => {
					debug!(table = %self.table.table(), rows = self.completed, "split exhausted");
					Ok(None)
				}
			},
			State::Exhausted => Ok(None),
		}
	}

	fn completed_rows(&self) -> u64 {
		self.completed
	}
}
