// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::ToPrimitive;
use reifydb_type::{Result, return_error};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TpchError;

/// Validated TPC-H scale factor.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
	/// Above this the part key domain no longer fits a 31-bit draw.
	pub const MAX: f64 = 10_000.0;

	pub const ONE: ScaleFactor = ScaleFactor(1.0);

	/// Scale of table handles that do not name one.
	pub const DEFAULT: ScaleFactor = ScaleFactor::ONE;

	pub fn new(value: f64) -> Result<Self> {
		if value.is_nan() || value <= 0.0 {
			return_error!(TpchError::ScaleFactorNotPositive {
				value
			});
		}
		if value > Self::MAX {
			return_error!(TpchError::ScaleFactorTooLarge {
				value,
				max: Self::MAX
			});
		}
		Ok(Self(value))
	}

	pub fn value(&self) -> f64 {
		self.0
	}

	/// `base × scale`, truncated toward zero.
	///
	/// The product is taken in decimal on the shortest representation of
	/// the scale, so `0.57 × 10_000` is exactly `5_700` rather than the
	/// `5_699.999…` binary floating point gives.
	pub fn scale(&self, base: u64) -> u64 {
		self.product(base).and_then(|v| v.to_u64()).unwrap_or(0)
	}

	/// Same as [`scale`](Self::scale) for key domains drawn with 31-bit
	/// random integers.
	pub fn scale_i32(&self, base: u64) -> i32 {
		self.product(base).and_then(|v| v.to_i32()).unwrap_or(i32::MAX)
	}

	fn product(&self, base: u64) -> Option<BigDecimal> {
		let scale = BigDecimal::from_str(&self.0.to_string()).ok()?;
		Some((scale * BigDecimal::from(base)).with_scale_round(0, RoundingMode::Down))
	}
}

impl Display for ScaleFactor {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl Serialize for ScaleFactor {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_f64(self.0)
	}
}

impl<'de> Deserialize<'de> for ScaleFactor {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = f64::deserialize(deserializer)?;
		ScaleFactor::new(value).map_err(|e| serde::de::Error::custom(e.message.clone()))
	}
}

#[cfg(test)]
mod tests {
	use reifydb_type::ErrorKind;

	use super::*;

	#[test]
	fn test_rejects_non_positive() {
		for value in [0.0, -1.0, -0.0, f64::NAN, f64::NEG_INFINITY] {
			let err = ScaleFactor::new(value).unwrap_err();
			assert_eq!(err.kind(), ErrorKind::Validation, "{}", value);
			assert_eq!(err.code, "VALIDATION_001");
		}
	}

	#[test]
	fn test_rejects_too_large() {
		assert_eq!(ScaleFactor::new(10_000.5).unwrap_err().code, "VALIDATION_002");
		assert_eq!(ScaleFactor::new(f64::INFINITY).unwrap_err().code, "VALIDATION_002");
		assert!(ScaleFactor::new(ScaleFactor::MAX).is_ok());
	}

	#[test]
	fn test_scale_truncates() {
		let sf = ScaleFactor::new(0.01).unwrap();
		assert_eq!(sf.scale(10_000), 100);
		assert_eq!(sf.scale(1_500_000), 15_000);
		assert_eq!(ScaleFactor::new(0.00001).unwrap().scale(10_000), 0);
		assert_eq!(ScaleFactor::new(5.0).unwrap().scale(10_000), 50_000);
		assert_eq!(ScaleFactor::new(13.0).unwrap().scale_i32(10_000), 130_000);
		assert_eq!(ScaleFactor::new(0.015).unwrap().scale(10_000), 150);
		assert_eq!(ScaleFactor::new(0.00015).unwrap().scale(10_000), 1);
	}

	#[test]
	fn test_scale_is_exact_in_decimal() {
		assert_eq!(ScaleFactor::new(0.57).unwrap().scale(10_000), 5_700);
		assert_eq!(ScaleFactor::new(2.3).unwrap().scale(200_000), 460_000);
		assert_eq!(ScaleFactor::new(2.3).unwrap().scale_i32(200_000), 460_000);
		assert_eq!(ScaleFactor::new(0.29).unwrap().scale(150_000), 43_500);
		assert_eq!(ScaleFactor::new(0.07).unwrap().scale(1_500_000), 105_000);
	}

	#[test]
	fn test_scale_i32_at_max() {
		assert_eq!(ScaleFactor::new(ScaleFactor::MAX).unwrap().scale_i32(200_000), 2_000_000_000);
	}

	#[test]
	fn test_default_is_one() {
		assert_eq!(ScaleFactor::DEFAULT, ScaleFactor::ONE);
		assert_eq!(ScaleFactor::DEFAULT.scale(10_000), 10_000);
	}

	#[test]
	fn test_deserialize_validates() {
		let sf: ScaleFactor = serde_json::from_str("0.1").unwrap();
		assert_eq!(sf.value(), 0.1);
		assert!(serde_json::from_str::<ScaleFactor>("0").is_err());
	}
}
