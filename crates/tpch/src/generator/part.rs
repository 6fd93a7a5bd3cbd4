// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Range;

use reifydb_type::Result;

use crate::{
	distribution::{self, Distribution},
	generator::{ColumnBuffers, CommentColumn, Comments, RowGenerator},
	projection::Projection,
	random::{RowRandom, finish_rows, stream_if},
	schema::part,
};

const NAME_WORDS: usize = 5;
const COMMENT_AVERAGE_LENGTH: i32 = 14;

/// Retail price of a part in cents.
pub fn retail_price(part_key: i64) -> i64 {
	90_000 + (part_key / 10) % 20_001 + 100 * (part_key % 1_000)
}

pub(crate) struct PartGenerator {
	rows: Range<u64>,
	colors: Distribution,
	types: Distribution,
	containers: Distribution,
	name: Option<RowRandom>,
	manufacturer: Option<RowRandom>,
	brand: Option<RowRandom>,
	r#type: Option<RowRandom>,
	size: Option<RowRandom>,
	container: Option<RowRandom>,
	comment: Option<CommentColumn>,
}

impl PartGenerator {
	pub(crate) fn new(projection: &Projection, rows: Range<u64>, comments: Comments) -> Result<Self> {
		let row = rows.start;
		let colors = distribution::colors();
		let wants_brand = projection.contains(part::BRAND);
		Ok(Self {
			name: stream_if(projection.contains(part::NAME), 709314158, colors.len() as i64, row),
			manufacturer: stream_if(projection.contains(part::MFGR) || wants_brand, 1, 1, row),
			brand: stream_if(wants_brand, 46831694, 1, row),
			r#type: stream_if(projection.contains(part::TYPE), 1841581359, 1, row),
			size: stream_if(projection.contains(part::SIZE), 1193163244, 1, row),
			container: stream_if(projection.contains(part::CONTAINER), 727633698, 1, row),
			comment: comments.open(804159733, COMMENT_AVERAGE_LENGTH, 1, row)?,
			rows,
			colors,
			types: distribution::part_types(),
			containers: distribution::part_containers(),
		})
	}
}

impl RowGenerator for PartGenerator {
	fn generate(&mut self, out: &mut ColumnBuffers, max_rows: usize) -> usize {
		let end = self.rows.end.min(self.rows.start + max_rows as u64);
		for row in self.rows.start..end {
			let key = row as i64 + 1;
			out.push_int8(part::PARTKEY, key);

			if let Some(random) = &mut self.name {
				out.push_utf8(part::NAME, random.next_string_sequence(&self.colors, NAME_WORDS));
			}

			let manufacturer = self.manufacturer.as_mut().map(|r| r.next_int(1, 5));
			if let Some(manufacturer) = manufacturer {
				if out.wants(part::MFGR) {
					out.push_utf8(part::MFGR, format!("Manufacturer#{}", manufacturer));
				}
				if let Some(random) = &mut self.brand {
					let brand = manufacturer * 10 + random.next_int(1, 5);
					out.push_utf8(part::BRAND, format!("Brand#{}", brand));
				}
			}

			if let Some(random) = &mut self.r#type {
				out.push_utf8(part::TYPE, self.types.pick(random));
			}
			if let Some(random) = &mut self.size {
				out.push_int8(part::SIZE, random.next_int(1, 50) as i64);
			}
			if let Some(random) = &mut self.container {
				out.push_utf8(part::CONTAINER, self.containers.pick(random));
			}
			out.push_decimal(part::RETAILPRICE, retail_price(key));

			if let Some(comment) = &mut self.comment {
				out.push_utf8(part::COMMENT, comment.next());
				comment.row_finished();
			}
			finish_rows([
				&mut self.name,
				&mut self.manufacturer,
				&mut self.brand,
				&mut self.r#type,
				&mut self.size,
				&mut self.container,
			]);
		}
		let produced = (end - self.rows.start) as usize;
		self.rows.start = end;
		produced
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema::Table;

	fn generate(projection: Projection, rows: Range<u64>) -> ColumnBuffers {
		let mut out = ColumnBuffers::new(&projection, 16);
		let comments = Comments {
			wanted: false,
			pool: None,
			table: Table::Part,
		};
		let mut generator = PartGenerator::new(&projection, rows, comments).unwrap();
		while generator.generate(&mut out, 3) > 0 {}
		out
	}

	fn without_comment() -> Projection {
		let mut projection = Projection::none(Table::Part);
		for ordinal in 0..part::COMMENT {
			projection = projection.with(ordinal);
		}
		projection
	}

	#[test]
	fn test_first_parts() {
		let out = generate(without_comment(), 0..10);
		let names = out.get(part::NAME).unwrap().as_utf8().unwrap();
		assert_eq!(names[0], "goldenrod lavender spring chocolate lace");
		assert_eq!(names[1], "blush thistle blue yellow saddle");
		assert_eq!(names[9], "linen pink saddle puff powder");

		let mfgr = out.get(part::MFGR).unwrap().as_utf8().unwrap();
		assert_eq!(mfgr[..4], ["Manufacturer#1", "Manufacturer#1", "Manufacturer#4", "Manufacturer#3"]);

		let brand = out.get(part::BRAND).unwrap().as_utf8().unwrap();
		assert_eq!(brand[..4], ["Brand#13", "Brand#13", "Brand#42", "Brand#34"]);

		let types = out.get(part::TYPE).unwrap().as_utf8().unwrap();
		assert_eq!(types[0], "PROMO BURNISHED COPPER");
		assert_eq!(types[1], "LARGE BRUSHED BRASS");
		assert_eq!(types[9], "LARGE BURNISHED STEEL");

		let sizes = out.get(part::SIZE).unwrap().as_int8().unwrap();
		assert_eq!(sizes, [7, 1, 21, 14, 15, 4, 45, 41, 12, 44]);

		let containers = out.get(part::CONTAINER).unwrap().as_utf8().unwrap();
		assert_eq!(containers[..5], ["JUMBO PKG", "LG CASE", "WRAP CASE", "MED DRUM", "SM PKG"]);

		let prices = out.get(part::RETAILPRICE).unwrap().as_decimal().unwrap();
		assert_eq!(prices[0], 90_100);
		assert_eq!(prices[9], 91_001);
	}

	#[test]
	fn test_brand_without_manufacturer() {
		let brand_only = generate(Projection::none(Table::Part).with(part::BRAND), 0..10);
		let full = generate(without_comment(), 0..10);
		assert_eq!(brand_only.get(part::BRAND), full.get(part::BRAND));
		assert!(brand_only.get(part::MFGR).is_none());
	}

	#[test]
	fn test_ranges_concatenate() {
		let whole = generate(without_comment(), 0..40);
		let mut left = generate(without_comment(), 0..17);
		let right = generate(without_comment(), 17..40);
		let names = left.take(part::NAME).unwrap();
		let mut joined = names;
		joined.extend(right.get(part::NAME).unwrap().clone()).unwrap();
		assert_eq!(Some(&joined), whole.get(part::NAME));
	}

	#[test]
	fn test_retail_price() {
		assert_eq!(retail_price(1), 90_100);
		assert_eq!(retail_price(10), 91_001);
		assert_eq!(retail_price(155190), 124_519);
	}
}
