// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Largest scale whose power of ten still fits in an `i64`.
pub const MAX_SCALE: u8 = 18;

/// Fixed-point decimal stored as an unscaled 64-bit integer.
///
/// `Decimal::new(90100, 2)` is `901.00`. Equality is structural, two values
/// with different scales never compare equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
	unscaled: i64,
	scale: u8,
}

impl Decimal {
	pub const fn new(unscaled: i64, scale: u8) -> Self {
		Self {
			unscaled,
			scale,
		}
	}

	pub const fn unscaled(&self) -> i64 {
		self.unscaled
	}

	pub const fn scale(&self) -> u8 {
		self.scale
	}

	pub fn to_big_decimal(&self) -> BigDecimal {
		BigDecimal::new(BigInt::from(self.unscaled), self.scale as i64)
	}

	/// Rescales `value` to `scale` digits, rounding half-even, and returns
	/// `None` when the result does not fit.
	pub fn from_big_decimal(value: &BigDecimal, scale: u8) -> Option<Self> {
		if scale > MAX_SCALE {
			return None;
		}
		let (digits, _) = value.with_scale_round(scale as i64, bigdecimal::RoundingMode::HalfEven).into_bigint_and_exponent();
		Some(Self {
			unscaled: digits.to_i64()?,
			scale,
		})
	}

	pub fn to_f64(&self) -> f64 {
		self.unscaled as f64 / 10f64.powi(self.scale as i32)
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let sign = if self.unscaled < 0 {
			"-"
		} else {
			""
		};
		let magnitude = self.unscaled.unsigned_abs();
		if self.scale == 0 {
			return write!(f, "{}{}", sign, magnitude);
		}

		let divisor = 10u64.pow(self.scale as u32);
		write!(
			f,
			"{}{}.{:0width$}",
			sign,
			magnitude / divisor,
			magnitude % divisor,
			width = self.scale as usize
		)
	}
}

impl FromStr for Decimal {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let parsed = BigDecimal::from_str(s).map_err(|e| format!("invalid decimal '{}': {}", s, e))?;
		let (_, exponent) = parsed.as_bigint_and_exponent();
		let scale = exponent.clamp(0, MAX_SCALE as i64) as u8;
		Self::from_big_decimal(&parsed, scale).ok_or_else(|| format!("decimal out of range: {}", s))
	}
}

impl Serialize for Decimal {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

impl<'de> Deserialize<'de> for Decimal {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let s = String::deserialize(deserializer)?;
		Decimal::from_str(&s).map_err(de::Error::custom)
	}
}
