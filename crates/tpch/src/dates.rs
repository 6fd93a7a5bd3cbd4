// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use reifydb_type::Date;

/// 1992-01-01, the first possible order date.
pub const START_DATE: Date = Date::from_days_since_epoch(8035);

/// Offset of 1995-06-17 from [`START_DATE`]. Line items received after it
/// are still open.
pub const CURRENT_DATE_OFFSET: i32 = 1263;

/// Orders are placed up to 151 days before 1998-12-31 so that every line
/// item ships and is received within the seven year window.
pub const ORDER_DATE_MAX_OFFSET: i32 = 2405;

pub const fn date_at(offset: i32) -> Date {
	START_DATE.add_days(offset)
}
