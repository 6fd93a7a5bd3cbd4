// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! A connector that serves the eight TPC-H tables by generating them on
//! demand, split by split.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod config;
pub mod connector;
pub mod error;
pub mod handle;
pub mod resolve;
pub mod source;
pub mod split;

pub use config::{SplitTarget, TpchConfig, TpchConfigBuilder};
pub use connector::{FACTORY_NAME, TpchConnector, TpchConnectorFactory};
pub use error::ConnectorError;
pub use handle::{TpchColumnHandle, TpchTableHandle};
pub use resolve::{Resolution, ResolvedColumn, resolve};
pub use source::TpchDataSource;
pub use split::{TpchSplit, plan_splits};
