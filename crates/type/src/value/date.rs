// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

/// A calendar date (year, month, day) without time information.
///
/// Internally stored as days since Unix epoch (1970-01-01).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Date {
	// Negative values represent dates before 1970
	days_since_epoch: i32,
}

// Calendar utilities
impl Date {
	#[inline]
	fn is_leap_year(year: i32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	#[inline]
	fn days_in_month(year: i32, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Self::is_leap_year(year) {
					29
				} else {
					28
				}
			}
			_ => 0,
		}
	}

	/// Howard Hinnant's days_from_civil
	fn ymd_to_days_since_epoch(year: i32, month: u32, day: u32) -> Option<i32> {
		if !(1..=12).contains(&month) || day < 1 || day > Self::days_in_month(year, month) {
			return None;
		}

		// Mar=0 .. Feb=11
		let (y, m) = if month <= 2 {
			(year - 1, month as i32 + 9)
		} else {
			(year, month as i32 - 3)
		};

		let era = if y >= 0 {
			y
		} else {
			y - 399
		} / 400;
		let yoe = y - era * 400; // [0, 399]
		let doy = (153 * m + 2) / 5 + day as i32 - 1; // [0, 365]
		let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]

		Some(era * 146097 + doe - 719468)
	}

	/// Howard Hinnant's civil_from_days
	fn days_since_epoch_to_ymd(days: i32) -> (i32, u32, u32) {
		let days_since_ce = days + 719468;

		let era = if days_since_ce >= 0 {
			days_since_ce
		} else {
			days_since_ce - 146096
		} / 146097;
		let doe = days_since_ce - era * 146097;
		let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
		let y = yoe + era * 400;
		let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
		let mp = (5 * doy + 2) / 153;
		let d = doy - (153 * mp + 2) / 5 + 1;
		let m = if mp < 10 {
			mp + 3
		} else {
			mp - 9
		};
		let year = if m <= 2 {
			y + 1
		} else {
			y
		};

		(year, m as u32, d as u32)
	}
}

impl Date {
	pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
		Self::ymd_to_days_since_epoch(year, month, day).map(|days_since_epoch| Self {
			days_since_epoch,
		})
	}

	pub const fn from_days_since_epoch(days_since_epoch: i32) -> Self {
		Self {
			days_since_epoch,
		}
	}

	pub const fn to_days_since_epoch(&self) -> i32 {
		self.days_since_epoch
	}

	pub const fn add_days(&self, days: i32) -> Self {
		Self {
			days_since_epoch: self.days_since_epoch + days,
		}
	}

	pub fn year(&self) -> i32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).0
	}

	pub fn month(&self) -> u32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).1
	}

	pub fn day(&self) -> u32 {
		Self::days_since_epoch_to_ymd(self.days_since_epoch).2
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (year, month, day) = Self::days_since_epoch_to_ymd(self.days_since_epoch);
		if year < 0 {
			write!(f, "-{:04}-{:02}-{:02}", -year, month, day)
		} else {
			write!(f, "{:04}-{:02}-{:02}", year, month, day)
		}
	}
}

// ISO 8601 on the wire
impl Serialize for Date {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

struct DateVisitor;

impl<'de> Visitor<'de> for DateVisitor {
	type Value = Date;

	fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
		formatter.write_str("a date in ISO 8601 format (YYYY-MM-DD)")
	}

	fn visit_str<E>(self, value: &str) -> Result<Date, E>
	where
		E: de::Error,
	{
		let mut parts = value.splitn(3, '-');
		let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
			return Err(E::custom(format!("invalid date format: {}", value)));
		};

		let year = year.parse::<i32>().map_err(|_| E::custom(format!("invalid year: {}", year)))?;
		let month = month.parse::<u32>().map_err(|_| E::custom(format!("invalid month: {}", month)))?;
		let day = day.parse::<u32>().map_err(|_| E::custom(format!("invalid day: {}", day)))?;

		Date::new(year, month, day)
			.ok_or_else(|| E::custom(format!("invalid date: {}-{:02}-{:02}", year, month, day)))
	}
}

impl<'de> Deserialize<'de> for Date {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(DateVisitor)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_date_display_standard_dates() {
		let date = Date::new(1992, 1, 1).unwrap();
		assert_eq!(format!("{}", date), "1992-01-01");

		let date = Date::new(1998, 12, 31).unwrap();
		assert_eq!(format!("{}", date), "1998-12-31");

		let date = Date::new(1995, 6, 17).unwrap();
		assert_eq!(format!("{}", date), "1995-06-17");
	}

	#[test]
	fn test_days_since_epoch() {
		assert_eq!(Date::new(1970, 1, 1).unwrap().to_days_since_epoch(), 0);
		assert_eq!(Date::new(1992, 1, 1).unwrap().to_days_since_epoch(), 8035);
		assert_eq!(Date::from_days_since_epoch(8035), Date::new(1992, 1, 1).unwrap());
	}

	#[test]
	fn test_add_days_crosses_leap_day() {
		let date = Date::new(1992, 2, 28).unwrap().add_days(1);
		assert_eq!(date.to_string(), "1992-02-29");
		assert_eq!(date.add_days(1).to_string(), "1992-03-01");

		let start = Date::new(1992, 1, 1).unwrap();
		assert_eq!(start.add_days(1263).to_string(), "1995-06-17");
		assert_eq!(start.add_days(2405).to_string(), "1998-08-02");
	}

	#[test]
	fn test_components() {
		let date = Date::new(1996, 3, 13).unwrap();
		assert_eq!(date.year(), 1996);
		assert_eq!(date.month(), 3);
		assert_eq!(date.day(), 13);
	}

	#[test]
	fn test_invalid_dates() {
		assert!(Date::new(1993, 2, 29).is_none());
		assert!(Date::new(1993, 13, 1).is_none());
		assert!(Date::new(1993, 4, 31).is_none());
		assert!(Date::new(1993, 1, 0).is_none());
	}

	#[test]
	fn test_serde_roundtrip_via_json() {
		let date = Date::new(1996, 1, 2).unwrap();
		let json = serde_json::to_string(&date).unwrap();
		assert_eq!(json, "\"1996-01-02\"");
		let back: Date = serde_json::from_str(&json).unwrap();
		assert_eq!(back, date);
	}

	#[test]
	fn test_deserialize_rejects_garbage() {
		assert!(serde_json::from_str::<Date>("\"1996-02\"").is_err());
		assert!(serde_json::from_str::<Date>("\"1996-02-30\"").is_err());
	}
}
