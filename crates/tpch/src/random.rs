// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Row-addressable Park–Miller random streams.
//!
//! Each generated attribute owns a stream with a fixed seed and a fixed
//! budget of seeds per row. A stream positioned at row `n` is obtained by
//! jumping `n × seeds_per_row` steps ahead, so the state for any row is a
//! pure function of `(seed, seeds_per_row, n)`.

use crate::{distribution::Distribution, text::TextPool};

const MULTIPLIER: i64 = 16807;
const MODULUS: i64 = 2147483647;

pub const ALPHANUMERIC_SEEDS_PER_ROW: i64 = 9;
pub const PHONE_SEEDS_PER_ROW: i64 = 3;

/// Seeds a text column consumes for each of its `expected_rows` values.
pub const fn text_seeds_per_row(expected_rows: i64) -> i64 {
	expected_rows * 2
}

const ALPHA_NUMERIC: &[u8; 64] = b"0123456789abcdefghijklmnopqrstuvwxyz ABCDEFGHIJKLMNOPQRSTUVWXYZ,";

const LOW_LENGTH_MULTIPLIER: f64 = 0.4;
const HIGH_LENGTH_MULTIPLIER: f64 = 1.6;

#[derive(Debug, Clone)]
pub struct RowRandom {
	seed: i64,
	seeds_per_row: i64,
	usage: i64,
}

impl RowRandom {
	pub fn new(seed: i64, seeds_per_row: i64) -> Self {
		Self {
			seed,
			seeds_per_row,
			usage: 0,
		}
	}

	/// Stream state at the start of `row`.
	pub fn at(seed: i64, seeds_per_row: i64, row: u64) -> Self {
		let mut random = Self::new(seed, seeds_per_row);
		random.advance_rows(row);
		random
	}

	fn next_rand(&mut self) -> i64 {
		self.seed = (self.seed * MULTIPLIER) % MODULUS;
		self.usage += 1;
		self.seed
	}

	/// Uniform integer in `[low, high]`.
	///
	/// The range is computed with 32-bit wrapping so that `[0, i32::MAX]`
	/// behaves exactly like the reference generator, which yields
	/// non-positive values for it.
	pub fn next_int(&mut self, low: i32, high: i32) -> i32 {
		self.next_rand();
		let range = high.wrapping_sub(low).wrapping_add(1);
		let value = (self.seed as f64 / MODULUS as f64) * range as f64;
		low.wrapping_add(value as i32)
	}

	/// Skips whatever is left of the current row's seed budget.
	pub fn row_finished(&mut self) {
		self.advance_seed(self.seeds_per_row - self.usage);
		self.usage = 0;
	}

	pub fn advance_rows(&mut self, rows: u64) {
		if self.usage != 0 {
			self.row_finished();
		}
		self.advance_seed(self.seeds_per_row * rows as i64);
	}

	fn advance_seed(&mut self, mut count: i64) {
		let mut multiplier = MULTIPLIER;
		while count > 0 {
			if count % 2 != 0 {
				self.seed = (multiplier * self.seed) % MODULUS;
			}
			count /= 2;
			multiplier = (multiplier * multiplier) % MODULUS;
		}
	}

	/// Random string over a 64 character alphabet with a length around
	/// `average`. Draws one integer for the length and one for every five
	/// characters.
	pub fn next_alphanumeric(&mut self, average: i32) -> String {
		let (min, max) = length_bounds(average);
		let length = self.next_int(min, max).max(0) as usize;

		let mut out = String::with_capacity(length);
		let mut char_index: i64 = 0;
		for i in 0..length {
			if i % 5 == 0 {
				char_index = self.next_int(0, i32::MAX) as i64;
			}
			out.push(ALPHA_NUMERIC[(char_index & 0x3f) as usize] as char);
			char_index >>= 6;
		}
		out
	}

	/// `CC-AAA-BBB-CCCC`, where the country code is derived from the nation.
	pub fn next_phone(&mut self, nation_key: i64) -> String {
		let country = 10 + nation_key % 90;
		let local1 = self.next_int(100, 999);
		let local2 = self.next_int(100, 999);
		let local3 = self.next_int(1000, 9999);
		format!("{:02}-{:03}-{:03}-{:04}", country, local1, local2, local3)
	}

	/// A slice of the text pool with a length around `average`.
	pub fn next_text<'a>(&mut self, pool: &'a TextPool, average: i32) -> &'a str {
		let (min, max) = length_bounds(average);
		let offset = self.next_int(0, pool.len() as i32 - max);
		let length = self.next_int(min, max);
		pool.text(offset as usize, length as usize)
	}

	/// `count` distinct values of `distribution`, picked by a partial
	/// Fisher–Yates shuffle and joined by spaces.
	pub fn next_string_sequence(&mut self, distribution: &Distribution, count: usize) -> String {
		let mut indices: Vec<usize> = (0..distribution.len()).collect();
		let last = indices.len() as i32 - 1;
		for current in 0..count {
			let swap = self.next_int(current as i32, last) as usize;
			indices.swap(current, swap);
		}

		let mut out = String::new();
		for (i, idx) in indices[..count].iter().enumerate() {
			if i > 0 {
				out.push(' ');
			}
			out.push_str(distribution.value(*idx));
		}
		out
	}
}

fn length_bounds(average: i32) -> (i32, i32) {
	((average as f64 * LOW_LENGTH_MULTIPLIER) as i32, (average as f64 * HIGH_LENGTH_MULTIPLIER) as i32)
}

/// A stream that only exists when its column is projected.
pub fn stream_if(wanted: bool, seed: i64, seeds_per_row: i64, row: u64) -> Option<RowRandom> {
	if wanted {
		Some(RowRandom::at(seed, seeds_per_row, row))
	} else {
		None
	}
}

/// Finishes the current row on every stream that exists.
pub fn finish_rows<'a>(streams: impl IntoIterator<Item = &'a mut Option<RowRandom>>) {
	for random in streams.into_iter().flatten() {
		random.row_finished();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_first_draws_of_the_minimal_standard_generator() {
		let mut random = RowRandom::new(1, 1);
		random.next_rand();
		assert_eq!(random.seed, 16807);
		random.next_rand();
		assert_eq!(random.seed, 282475249);
	}

	#[test]
	fn test_at_equals_sequential_rows() {
		let mut sequential = RowRandom::new(1066728069, 1);
		let mut values = vec![];
		for _ in 0..100 {
			values.push(sequential.next_int(0, 2405));
			sequential.row_finished();
		}

		for (row, expected) in values.iter().enumerate() {
			let mut positioned = RowRandom::at(1066728069, 1, row as u64);
			assert_eq!(positioned.next_int(0, 2405), *expected, "row {}", row);
		}
	}

	#[test]
	fn test_row_finished_skips_unused_seeds() {
		let mut partial = RowRandom::new(209208115, 7);
		partial.next_int(1, 50);
		partial.row_finished();

		let mut full = RowRandom::new(209208115, 7);
		for _ in 0..7 {
			full.next_int(1, 50);
		}
		full.row_finished();

		assert_eq!(partial.seed, full.seed);
		assert_eq!(partial.seed, RowRandom::at(209208115, 7, 1).seed);
		assert_eq!(partial.next_int(1, 50), full.next_int(1, 50));
	}

	#[test]
	fn test_advance_rows_finishes_partial_row() {
		let mut random = RowRandom::new(1, 3);
		random.next_int(0, 10);
		random.advance_rows(2);
		assert_eq!(random.seed, RowRandom::at(1, 3, 3).seed);
	}

	#[test]
	fn test_full_positive_range_wraps() {
		let mut random = RowRandom::new(706178559, 9);
		for _ in 0..50 {
			assert!(random.next_int(0, i32::MAX) <= 0);
		}
	}

	#[test]
	fn test_next_int_stays_in_bounds() {
		let mut random = RowRandom::new(962338209, 1);
		for _ in 0..1000 {
			let v = random.next_int(-99999, 999999);
			assert!((-99999..=999999).contains(&v));
		}
	}

	#[test]
	fn test_supplier_address_and_phone() {
		let mut address = RowRandom::at(706178559, ALPHANUMERIC_SEEDS_PER_ROW, 0);
		assert_eq!(address.next_alphanumeric(25), " N kD4on9OM Ipw3,gf0JBoQDd7tgrzrddZ");

		let mut phone = RowRandom::at(884434366, PHONE_SEEDS_PER_ROW, 0);
		assert_eq!(phone.next_phone(17), "27-918-335-1736");

		let mut address = RowRandom::at(706178559, ALPHANUMERIC_SEEDS_PER_ROW, 1);
		assert_eq!(address.next_alphanumeric(25), "89eJ5ksX3ImxJQBvxObC,");
	}

	#[test]
	fn test_string_sequence_is_distinct() {
		let colors = Distribution::uniform(["a", "b", "c", "d", "e", "f", "g"]);
		let mut random = RowRandom::new(709314158, colors.len() as i64);
		let value = random.next_string_sequence(&colors, 5);
		let mut words: Vec<&str> = value.split(' ').collect();
		assert_eq!(words.len(), 5);
		words.sort();
		words.dedup();
		assert_eq!(words.len(), 5);
	}
}
