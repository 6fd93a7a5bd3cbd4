// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_tpch::{TextPool, TpchError};
use reifydb_type::{Result, error::diagnostic::config::invalid_value, return_error};
use serde::{Deserialize, Serialize};

/// How many splits a table is divided into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitTarget {
	/// Aim for splits of this many rows.
	Rows(u64),
	/// Aim for this many splits.
	Count(usize),
}

impl Default for SplitTarget {
	fn default() -> Self {
		SplitTarget::Rows(TpchConfig::DEFAULT_SPLIT_ROWS)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TpchConfig {
	/// Maximum rows per emitted batch.
	pub batch_size: usize,
	/// Bytes of generated text comments are sliced from.
	pub text_pool_size: usize,
	/// Tables with fewer rows than this per split are not divided further.
	pub min_split_rows: u64,
	pub split_target: SplitTarget,
}

impl Default for TpchConfig {
	fn default() -> Self {
		Self {
			batch_size: Self::DEFAULT_BATCH_SIZE,
			text_pool_size: TextPool::DEFAULT_SIZE,
			min_split_rows: Self::DEFAULT_MIN_SPLIT_ROWS,
			split_target: SplitTarget::default(),
		}
	}
}

impl TpchConfig {
	pub const DEFAULT_BATCH_SIZE: usize = 1024;
	pub const DEFAULT_MIN_SPLIT_ROWS: u64 = 10_000;
	pub const DEFAULT_SPLIT_ROWS: u64 = 1 << 20;

	pub fn builder() -> TpchConfigBuilder {
		TpchConfigBuilder::new()
	}

	/// Parses and validates a JSON document. Missing fields keep their
	/// defaults.
	pub fn from_json(json: &str) -> Result<Self> {
		let config: TpchConfig = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		if self.batch_size == 0 {
			return_error!(invalid_value("batch_size", "must be at least 1"));
		}
		if self.text_pool_size < TextPool::MIN_SIZE {
			return_error!(TpchError::TextPoolTooSmall {
				size: self.text_pool_size,
				min: TextPool::MIN_SIZE
			});
		}
		if self.text_pool_size > TextPool::MAX_SIZE {
			return_error!(TpchError::TextPoolTooLarge {
				size: self.text_pool_size,
				max: TextPool::MAX_SIZE
			});
		}
		if self.min_split_rows == 0 {
			return_error!(invalid_value("min_split_rows", "must be at least 1"));
		}
		match self.split_target {
			SplitTarget::Rows(0) => return_error!(invalid_value("split_target", "rows per split must be at least 1")),
			SplitTarget::Count(0) => return_error!(invalid_value("split_target", "split count must be at least 1")),
			_ => Ok(()),
		}
	}
}

pub struct TpchConfigBuilder {
	config: TpchConfig,
}

impl Default for TpchConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TpchConfigBuilder {
	pub fn new() -> Self {
		Self {
			config: TpchConfig::default(),
		}
	}

	pub fn batch_size(mut self, rows: usize) -> Self {
		self.config.batch_size = rows;
		self
	}

	/// A smaller pool changes comment text only.
	pub fn text_pool_size(mut self, bytes: usize) -> Self {
		self.config.text_pool_size = bytes;
		self
	}

	pub fn min_split_rows(mut self, rows: u64) -> Self {
		self.config.min_split_rows = rows;
		self
	}

	pub fn split_rows(mut self, rows: u64) -> Self {
		self.config.split_target = SplitTarget::Rows(rows);
		self
	}

	pub fn split_count(mut self, count: usize) -> Self {
		self.config.split_target = SplitTarget::Count(count);
		self
	}

	pub fn build(self) -> Result<TpchConfig> {
		self.config.validate()?;
		Ok(self.config)
	}
}
