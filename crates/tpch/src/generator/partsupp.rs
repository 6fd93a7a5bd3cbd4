// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Range;

use reifydb_type::Result;

use crate::{
	generator::{ColumnBuffers, CommentColumn, Comments, RowGenerator},
	projection::Projection,
	random::{RowRandom, finish_rows, stream_if},
	row_count::{SUPPLIER_BASE, SUPPLIERS_PER_PART},
	scale::ScaleFactor,
	schema::partsupp,
};

const COMMENT_AVERAGE_LENGTH: i32 = 124;

/// Key of the `number`th supplier (0..4) of a part, spread evenly over the
/// `suppliers` supplier keys.
pub fn part_supplier(part_key: i64, number: i64, suppliers: i64) -> i64 {
	(part_key + number * (suppliers / SUPPLIERS_PER_PART as i64 + (part_key - 1) / suppliers)) % suppliers + 1
}

/// Rows are (part, supplier number) pairs; all streams advance once per
/// part, drawing once for each of its four suppliers.
pub(crate) struct PartSuppGenerator {
	rows: Range<u64>,
	suppliers: i64,
	quantity: Option<RowRandom>,
	cost: Option<RowRandom>,
	comment: Option<CommentColumn>,
}

impl PartSuppGenerator {
	pub(crate) fn new(
		scale: ScaleFactor,
		projection: &Projection,
		rows: Range<u64>,
		comments: Comments,
	) -> Result<Self> {
		let part = rows.start / SUPPLIERS_PER_PART;
		let spr = SUPPLIERS_PER_PART as i64;
		let mut result = Self {
			suppliers: scale.scale(SUPPLIER_BASE) as i64,
			quantity: stream_if(projection.contains(partsupp::AVAILQTY), 1671059989, spr, part),
			cost: stream_if(projection.contains(partsupp::SUPPLYCOST), 1051288424, spr, part),
			comment: comments.open(1961692154, COMMENT_AVERAGE_LENGTH, spr, part)?,
			rows,
		};

		for _ in 0..result.rows.start % SUPPLIERS_PER_PART {
			result.draw();
		}
		Ok(result)
	}

	fn draw(&mut self) -> (Option<i64>, Option<i64>, Option<&str>) {
		let quantity = self.quantity.as_mut().map(|r| r.next_int(1, 9_999) as i64);
		let cost = self.cost.as_mut().map(|r| r.next_int(100, 100_000) as i64);
		let comment = self.comment.as_mut().map(|c| c.next());
		(quantity, cost, comment)
	}
}

impl RowGenerator for PartSuppGenerator {
	fn generate(&mut self, out: &mut ColumnBuffers, max_rows: usize) -> usize {
		let end = self.rows.end.min(self.rows.start + max_rows as u64);
		for row in self.rows.start..end {
			let part_key = (row / SUPPLIERS_PER_PART) as i64 + 1;
			let number = (row % SUPPLIERS_PER_PART) as i64;
			out.push_int8(partsupp::PARTKEY, part_key);
			out.push_int8(partsupp::SUPPKEY, part_supplier(part_key, number, self.suppliers));

			let (quantity, cost, comment) = self.draw();
			if let Some(quantity) = quantity {
				out.push_int8(partsupp::AVAILQTY, quantity);
			}
			if let Some(cost) = cost {
				out.push_decimal(partsupp::SUPPLYCOST, cost);
			}
			if let Some(comment) = comment {
				out.push_utf8(partsupp::COMMENT, comment);
			}

			if number == SUPPLIERS_PER_PART as i64 - 1 {
				finish_rows([&mut self.quantity, &mut self.cost]);
				if let Some(comment) = &mut self.comment {
					comment.row_finished();
				}
			}
		}
		let produced = (end - self.rows.start) as usize;
		self.rows.start = end;
		produced
	}
}
