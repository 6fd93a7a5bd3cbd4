// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod date;
pub mod decimal;
pub mod r#type;

use crate::{Date, Decimal, Type};

/// A single scalar produced by a column.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	Int8(i64),
	Decimal(Decimal),
	Utf8(String),
	Date(Date),
}

impl Value {
	pub fn utf8(value: impl Into<String>) -> Self {
		Value::Utf8(value.into())
	}

	/// Type of the value. Decimals report a precision of 15, the widest
	/// fixed-point column produced by the connector.
	pub fn get_type(&self) -> Type {
		match self {
			Value::Int8(_) => Type::Int8,
			Value::Decimal(d) => Type::Decimal {
				precision: 15,
				scale: d.scale(),
			},
			Value::Utf8(_) => Type::Utf8,
			Value::Date(_) => Type::Date,
		}
	}

	pub fn as_int8(&self) -> Option<i64> {
		match self {
			Value::Int8(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Utf8(v) => Some(v.as_str()),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Int8(v) => Display::fmt(v, f),
			Value::Decimal(v) => Display::fmt(v, f),
			Value::Utf8(v) => f.write_str(v),
			Value::Date(v) => Display::fmt(v, f),
		}
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int8(value)
	}
}

impl From<Decimal> for Value {
	fn from(value: Decimal) -> Self {
		Value::Decimal(value)
	}
}

impl From<Date> for Value {
	fn from(value: Date) -> Self {
		Value::Date(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Utf8(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Utf8(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(Value::Int8(36901).to_string(), "36901");
		assert_eq!(Value::Decimal(Decimal::new(17366547, 2)).to_string(), "173665.47");
		assert_eq!(Value::utf8("5-LOW").to_string(), "5-LOW");
		assert_eq!(Value::Date(Date::new(1996, 1, 2).unwrap()).to_string(), "1996-01-02");
	}

	#[test]
	fn test_get_type() {
		assert_eq!(Value::Int8(1).get_type(), Type::Int8);
		assert_eq!(
			Value::Decimal(Decimal::new(1, 2)).get_type(),
			Type::Decimal {
				precision: 15,
				scale: 2
			}
		);
		assert_eq!(Value::from("x").get_type(), Type::Utf8);
	}

	#[test]
	fn test_accessors() {
		assert_eq!(Value::Int8(7).as_int8(), Some(7));
		assert_eq!(Value::utf8("x").as_int8(), None);
		assert_eq!(Value::utf8("x").as_str(), Some("x"));
	}
}
