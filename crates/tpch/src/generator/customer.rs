// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Range;

use reifydb_type::Result;

use crate::{
	distribution::{self, Distribution},
	generator::{ColumnBuffers, CommentColumn, Comments, RowGenerator, padded_name},
	projection::Projection,
	random::{ALPHANUMERIC_SEEDS_PER_ROW, PHONE_SEEDS_PER_ROW, RowRandom, finish_rows, stream_if},
	schema::customer,
};

const ADDRESS_AVERAGE_LENGTH: i32 = 25;
const COMMENT_AVERAGE_LENGTH: i32 = 73;

pub(crate) struct CustomerGenerator {
	rows: Range<u64>,
	segments: Distribution,
	address: Option<RowRandom>,
	nation: Option<RowRandom>,
	phone: Option<RowRandom>,
	balance: Option<RowRandom>,
	segment: Option<RowRandom>,
	comment: Option<CommentColumn>,
}

impl CustomerGenerator {
	pub(crate) fn new(projection: &Projection, rows: Range<u64>, comments: Comments) -> Result<Self> {
		let row = rows.start;
		let wants_phone = projection.contains(customer::PHONE);
		Ok(Self {
			address: stream_if(
				projection.contains(customer::ADDRESS),
				881155353,
				ALPHANUMERIC_SEEDS_PER_ROW,
				row,
			),
			nation: stream_if(projection.contains(customer::NATIONKEY) || wants_phone, 1489529863, 1, row),
			phone: stream_if(wants_phone, 1521138112, PHONE_SEEDS_PER_ROW, row),
			balance: stream_if(projection.contains(customer::ACCTBAL), 298370230, 1, row),
			segment: stream_if(projection.contains(customer::MKTSEGMENT), 1140279430, 1, row),
			comment: comments.open(1335826707, COMMENT_AVERAGE_LENGTH, 1, row)?,
			segments: distribution::market_segments(),
			rows,
		})
	}
}

impl RowGenerator for CustomerGenerator {
	fn generate(&mut self, out: &mut ColumnBuffers, max_rows: usize) -> usize {
		let end = self.rows.end.min(self.rows.start + max_rows as u64);
		for row in self.rows.start..end {
			let key = row as i64 + 1;
			out.push_int8(customer::CUSTKEY, key);
			if out.wants(customer::NAME) {
				out.push_utf8(customer::NAME, padded_name("Customer#", key));
			}
			if let Some(random) = &mut self.address {
				out.push_utf8(customer::ADDRESS, random.next_alphanumeric(ADDRESS_AVERAGE_LENGTH));
			}

			let nation = self.nation.as_mut().map(|r| r.next_int(0, 24) as i64);
			if let Some(nation) = nation {
				out.push_int8(customer::NATIONKEY, nation);
				if let Some(random) = &mut self.phone {
					out.push_utf8(customer::PHONE, random.next_phone(nation));
				}
			}

			if let Some(random) = &mut self.balance {
				out.push_decimal(customer::ACCTBAL, random.next_int(-99_999, 999_999) as i64);
			}
			if let Some(random) = &mut self.segment {
				out.push_utf8(customer::MKTSEGMENT, self.segments.pick(random));
			}
			if let Some(comment) = &mut self.comment {
				out.push_utf8(customer::COMMENT, comment.next());
				comment.row_finished();
			}
			finish_rows([
				&mut self.address,
				&mut self.nation,
				&mut self.phone,
				&mut self.balance,
				&mut self.segment,
			]);
		}
		let produced = (end - self.rows.start) as usize;
		self.rows.start = end;
		produced
	}
}
