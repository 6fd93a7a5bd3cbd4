// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Range;

use reifydb_type::Result;

use crate::{
	generator::{ColumnBuffers, CommentColumn, Comments, RowGenerator, padded_name},
	projection::Projection,
	random::{ALPHANUMERIC_SEEDS_PER_ROW, PHONE_SEEDS_PER_ROW, RowRandom, finish_rows, stream_if},
	row_count::SUPPLIER_BASE,
	schema::supplier,
};

const ADDRESS_AVERAGE_LENGTH: i32 = 25;
const COMMENT_AVERAGE_LENGTH: i32 = 63;

const REVIEW_PREFIX: &str = "Customer ";
const REVIEW_COMPLAINT: &str = "Complaints";
const REVIEW_RECOMMENDATION: &str = "Recommends";
const REVIEW_LENGTH: usize = REVIEW_PREFIX.len() + REVIEW_COMPLAINT.len();
/// Reviewed suppliers per [`SUPPLIER_BASE`] suppliers.
const REVIEWS_PER_BASE: i32 = 10;
const COMPLAINT_PERCENT: i32 = 50;

/// Streams deciding whether and where a supplier comment carries a
/// customer review.
struct Reviews {
	selector: RowRandom,
	noise: RowRandom,
	offset: RowRandom,
	kind: RowRandom,
}

impl Reviews {
	fn at(row: u64) -> Self {
		Self {
			selector: RowRandom::at(202794285, 1, row),
			noise: RowRandom::at(263032577, 1, row),
			offset: RowRandom::at(715851524, 1, row),
			kind: RowRandom::at(753643799, 1, row),
		}
	}

	fn apply(&mut self, comment: &str) -> String {
		if self.selector.next_int(1, SUPPLIER_BASE as i32) > REVIEWS_PER_BASE {
			return comment.to_string();
		}

		let noise = self.noise.next_int(0, (comment.len() - REVIEW_LENGTH) as i32) as usize;
		let offset = self.offset.next_int(0, (comment.len() - (REVIEW_LENGTH + noise)) as i32) as usize;
		let kind = if self.kind.next_int(0, 100) < COMPLAINT_PERCENT {
			REVIEW_COMPLAINT
		} else {
			REVIEW_RECOMMENDATION
		};
		splice_review(comment, offset, noise, kind)
	}

	fn row_finished(&mut self) {
		self.selector.row_finished();
		self.noise.row_finished();
		self.offset.row_finished();
		self.kind.row_finished();
	}
}

/// Overwrites `comment` with `Customer ` at `offset` and `kind` another
/// `noise` bytes later, keeping the length unchanged.
fn splice_review(comment: &str, offset: usize, noise: usize, kind: &str) -> String {
	let kind_start = offset + REVIEW_PREFIX.len() + noise;
	let mut out = String::with_capacity(comment.len());
	out.push_str(&comment[..offset]);
	out.push_str(REVIEW_PREFIX);
	out.push_str(&comment[offset + REVIEW_PREFIX.len()..kind_start]);
	out.push_str(kind);
	out.push_str(&comment[kind_start + kind.len()..]);
	out
}

pub(crate) struct SupplierGenerator {
	rows: Range<u64>,
	address: Option<RowRandom>,
	nation: Option<RowRandom>,
	phone: Option<RowRandom>,
	balance: Option<RowRandom>,
	comment: Option<(CommentColumn, Reviews)>,
}

impl SupplierGenerator {
	pub(crate) fn new(projection: &Projection, rows: Range<u64>, comments: Comments) -> Result<Self> {
		let row = rows.start;
		let wants_phone = projection.contains(supplier::PHONE);
		let comment = comments
			.open(1341315363, COMMENT_AVERAGE_LENGTH, 1, row)?
			.map(|comment| (comment, Reviews::at(row)));
		Ok(Self {
			address: stream_if(
				projection.contains(supplier::ADDRESS),
				706178559,
				ALPHANUMERIC_SEEDS_PER_ROW,
				row,
			),
			nation: stream_if(projection.contains(supplier::NATIONKEY) || wants_phone, 110356601, 1, row),
			phone: stream_if(wants_phone, 884434366, PHONE_SEEDS_PER_ROW, row),
			balance: stream_if(projection.contains(supplier::ACCTBAL), 962338209, 1, row),
			comment,
			rows,
		})
	}
}

impl RowGenerator for SupplierGenerator {
	fn generate(&mut self, out: &mut ColumnBuffers, max_rows: usize) -> usize {
		let end = self.rows.end.min(self.rows.start + max_rows as u64);
		for row in self.rows.start..end {
			let key = row as i64 + 1;
			out.push_int8(supplier::SUPPKEY, key);
			if out.wants(supplier::NAME) {
				out.push_utf8(supplier::NAME, padded_name("Supplier#", key));
			}
			if let Some(random) = &mut self.address {
				out.push_utf8(supplier::ADDRESS, random.next_alphanumeric(ADDRESS_AVERAGE_LENGTH));
			}

			let nation = self.nation.as_mut().map(|r| r.next_int(0, 24) as i64);
			if let Some(nation) = nation {
				out.push_int8(supplier::NATIONKEY, nation);
				if let Some(random) = &mut self.phone {
					out.push_utf8(supplier::PHONE, random.next_phone(nation));
				}
			}

			if let Some(random) = &mut self.balance {
				out.push_decimal(supplier::ACCTBAL, random.next_int(-99_999, 999_999) as i64);
			}

			if let Some((comment, reviews)) = &mut self.comment {
				let text = reviews.apply(comment.next());
				out.push_utf8(supplier::COMMENT, text);
				comment.row_finished();
				reviews.row_finished();
			}
			finish_rows([&mut self.address, &mut self.nation, &mut self.phone, &mut self.balance]);
		}
		let produced = (end - self.rows.start) as usize;
		self.rows.start = end;
		produced
	}
}
