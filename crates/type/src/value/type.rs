// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Logical column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// 64-bit signed integer
	Int8,
	/// Fixed-point decimal, `scale` digits after the point
	Decimal {
		precision: u8,
		scale: u8,
	},
	/// Variable-length UTF-8 string
	Utf8,
	/// Calendar date without time
	Date,
}

impl Type {
	pub fn is_number(&self) -> bool {
		matches!(self, Type::Int8 | Type::Decimal { .. })
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Int8 => f.write_str("INT8"),
			Type::Decimal {
				precision,
				scale,
			} => write!(f, "DECIMAL({},{})", precision, scale),
			Type::Utf8 => f.write_str("UTF8"),
			Type::Date => f.write_str("DATE"),
		}
	}
}
