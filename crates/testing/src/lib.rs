// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Helpers shared by the connector test suites.

pub mod columns;
pub mod scan;
pub mod tracing;
