// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_type::{Date, Decimal, Result, Type, Value, return_error};
use serde::{Deserialize, Serialize};

use crate::error::ColumnError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
	Int8(Vec<i64>),
	/// Unscaled values, all sharing `scale`
	Decimal {
		data: Vec<i64>,
		precision: u8,
		scale: u8,
	},
	Utf8(Vec<String>),
	Date(Vec<Date>),
}

impl ColumnData {
	pub fn with_capacity(r#type: Type, capacity: usize) -> Self {
		match r#type {
			Type::Int8 => ColumnData::Int8(Vec::with_capacity(capacity)),
			Type::Decimal {
				precision,
				scale,
			} => ColumnData::Decimal {
				data: Vec::with_capacity(capacity),
				precision,
				scale,
			},
			Type::Utf8 => ColumnData::Utf8(Vec::with_capacity(capacity)),
			Type::Date => ColumnData::Date(Vec::with_capacity(capacity)),
		}
	}

	pub fn int8(data: impl IntoIterator<Item = i64>) -> Self {
		ColumnData::Int8(data.into_iter().collect())
	}

	pub fn decimal(data: impl IntoIterator<Item = i64>, precision: u8, scale: u8) -> Self {
		ColumnData::Decimal {
			data: data.into_iter().collect(),
			precision,
			scale,
		}
	}

	pub fn utf8<'a>(data: impl IntoIterator<Item = &'a str>) -> Self {
		ColumnData::Utf8(data.into_iter().map(|s| s.to_string()).collect())
	}

	pub fn date(data: impl IntoIterator<Item = Date>) -> Self {
		ColumnData::Date(data.into_iter().collect())
	}

	pub fn get_type(&self) -> Type {
		match self {
			ColumnData::Int8(_) => Type::Int8,
			ColumnData::Decimal {
				precision,
				scale,
				..
			} => Type::Decimal {
				precision: *precision,
				scale: *scale,
			},
			ColumnData::Utf8(_) => Type::Utf8,
			ColumnData::Date(_) => Type::Date,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			ColumnData::Int8(data) => data.len(),
			ColumnData::Decimal {
				data,
				..
			} => data.len(),
			ColumnData::Utf8(data) => data.len(),
			ColumnData::Date(data) => data.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn get_value(&self, idx: usize) -> Option<Value> {
		match self {
			ColumnData::Int8(data) => data.get(idx).map(|v| Value::Int8(*v)),
			ColumnData::Decimal {
				data,
				scale,
				..
			} => data.get(idx).map(|v| Value::Decimal(Decimal::new(*v, *scale))),
			ColumnData::Utf8(data) => data.get(idx).map(|v| Value::Utf8(v.clone())),
			ColumnData::Date(data) => data.get(idx).map(|v| Value::Date(*v)),
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
		(0..self.len()).filter_map(move |idx| self.get_value(idx))
	}

	pub fn push_int8(&mut self, value: i64) {
		match self {
			ColumnData::Int8(data) => data.push(value),
			other => panic!("cannot push INT8 into {} column", other.get_type()),
		}
	}

	/// Pushes an unscaled value at the column's own scale.
	pub fn push_decimal(&mut self, unscaled: i64) {
		match self {
			ColumnData::Decimal {
				data,
				..
			} => data.push(unscaled),
			other => panic!("cannot push DECIMAL into {} column", other.get_type()),
		}
	}

	pub fn push_utf8(&mut self, value: impl Into<String>) {
		match self {
			ColumnData::Utf8(data) => data.push(value.into()),
			other => panic!("cannot push UTF8 into {} column", other.get_type()),
		}
	}

	pub fn push_date(&mut self, value: Date) {
		match self {
			ColumnData::Date(data) => data.push(value),
			other => panic!("cannot push DATE into {} column", other.get_type()),
		}
	}

	pub fn truncate(&mut self, len: usize) {
		match self {
			ColumnData::Int8(data) => data.truncate(len),
			ColumnData::Decimal {
				data,
				..
			} => data.truncate(len),
			ColumnData::Utf8(data) => data.truncate(len),
			ColumnData::Date(data) => data.truncate(len),
		}
	}

	/// Appends `other` to `self`. Both sides must have the same type.
	pub fn extend(&mut self, other: ColumnData) -> Result<()> {
		match (&mut *self, other) {
			(ColumnData::Int8(l), ColumnData::Int8(r)) => l.extend(r),
			(
				ColumnData::Decimal {
					data: l,
					precision: lp,
					scale: ls,
				},
				ColumnData::Decimal {
					data: r,
					precision: rp,
					scale: rs,
				},
			) if *lp == rp && *ls == rs => l.extend(r),
			(ColumnData::Utf8(l), ColumnData::Utf8(r)) => l.extend(r),
			(ColumnData::Date(l), ColumnData::Date(r)) => l.extend(r),
			(l, r) => return_error!(ColumnError::TypeMismatch {
				expected: l.get_type(),
				actual: r.get_type(),
			}),
		}
		Ok(())
	}

	/// Takes the buffered values out, leaving an empty column of the same
	/// type behind.
	pub fn take(&mut self) -> ColumnData {
		let empty = ColumnData::with_capacity(self.get_type(), 0);
		std::mem::replace(self, empty)
	}

	pub fn as_int8(&self) -> Option<&[i64]> {
		match self {
			ColumnData::Int8(data) => Some(data),
			_ => None,
		}
	}

	pub fn as_decimal(&self) -> Option<&[i64]> {
		match self {
			ColumnData::Decimal {
				data,
				..
			} => Some(data),
			_ => None,
		}
	}

	pub fn as_utf8(&self) -> Option<&[String]> {
		match self {
			ColumnData::Utf8(data) => Some(data),
			_ => None,
		}
	}

	pub fn as_date(&self) -> Option<&[Date]> {
		match self {
			ColumnData::Date(data) => Some(data),
			_ => None,
		}
	}
}
