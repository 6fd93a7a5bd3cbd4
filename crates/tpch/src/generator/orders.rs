// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Range;

use reifydb_type::Result;

use crate::{
	dates::{CURRENT_DATE_OFFSET, ORDER_DATE_MAX_OFFSET, date_at},
	distribution::{self, Distribution},
	generator::{
		ColumnBuffers, CommentColumn, Comments, RowGenerator,
		lineitem::{
			DISCOUNT_SEED, LINE_SEEDS_PER_ROW, PART_KEY_SEED, QUANTITY_SEED, SHIP_DATE_SEED, TAX_SEED,
		},
		padded_name,
		part::retail_price,
	},
	projection::Projection,
	random::{RowRandom, finish_rows, stream_if},
	row_count::{CUSTOMER_BASE, LineCounts, PART_BASE},
	scale::ScaleFactor,
	schema::orders,
};

pub(crate) const ORDER_DATE_SEED: i64 = 1066728069;

/// Customers whose key is a multiple of this never place orders.
const CUSTOMER_MORTALITY: i64 = 3;
const CLERK_BASE: u64 = 1_000;
const COMMENT_AVERAGE_LENGTH: i32 = 49;

/// Order keys are sparse: of every 32 keys only the first 8 are used.
pub fn order_key(row: u64) -> i64 {
	let index = row + 1;
	(((index >> 3) << 5) + (index & 7)) as i64
}

/// Line streams needed to derive the order total and status.
struct LineDraws {
	counts: LineCounts,
	quantity: Option<RowRandom>,
	discount: Option<RowRandom>,
	tax: Option<RowRandom>,
	part_key: Option<RowRandom>,
	ship_date: Option<RowRandom>,
}

pub(crate) struct OrdersGenerator {
	rows: Range<u64>,
	max_customer: i32,
	max_part: i32,
	max_clerk: i32,
	priorities: Distribution,
	date: Option<RowRandom>,
	customer: Option<RowRandom>,
	lines: Option<LineDraws>,
	priority: Option<RowRandom>,
	clerk: Option<RowRandom>,
	comment: Option<CommentColumn>,
}

impl OrdersGenerator {
	pub(crate) fn new(
		scale: ScaleFactor,
		projection: &Projection,
		rows: Range<u64>,
		comments: Comments,
	) -> Result<Self> {
		let row = rows.start;
		let wants_total = projection.contains(orders::TOTALPRICE);
		let wants_status = projection.contains(orders::ORDERSTATUS);
		let spr = LINE_SEEDS_PER_ROW;
		let lines = (wants_total || wants_status).then(|| LineDraws {
			counts: LineCounts::new(row),
			quantity: stream_if(wants_total, QUANTITY_SEED, spr, row),
			discount: stream_if(wants_total, DISCOUNT_SEED, spr, row),
			tax: stream_if(wants_total, TAX_SEED, spr, row),
			part_key: stream_if(wants_total, PART_KEY_SEED, spr, row),
			ship_date: stream_if(wants_status, SHIP_DATE_SEED, spr, row),
		});
		Ok(Self {
			max_customer: scale.scale_i32(CUSTOMER_BASE),
			max_part: scale.scale_i32(PART_BASE),
			max_clerk: scale.scale_i32(CLERK_BASE).max(CLERK_BASE as i32),
			priorities: distribution::order_priorities(),
			date: stream_if(projection.contains(orders::ORDERDATE) || wants_status, ORDER_DATE_SEED, 1, row),
			customer: stream_if(projection.contains(orders::CUSTKEY), 851767375, 1, row),
			lines,
			priority: stream_if(projection.contains(orders::ORDERPRIORITY), 591449447, 1, row),
			clerk: stream_if(projection.contains(orders::CLERK), 1171034773, 1, row),
			comment: comments.open(276090261, COMMENT_AVERAGE_LENGTH, 1, row)?,
			rows,
		})
	}

	fn customer_key(&mut self) -> Option<i64> {
		let random = self.customer.as_mut()?;
		let max = self.max_customer as i64;
		let mut key = random.next_int(1, self.max_customer) as i64;
		let mut delta = 1;
		while key % CUSTOMER_MORTALITY == 0 {
			key = (key + delta).min(max);
			delta = -delta;
		}
		Some(key)
	}

	/// `(total price in cents, status)` derived from the order's lines.
	fn summarize_lines(&mut self, order_date: Option<i32>) -> (Option<i64>, Option<&'static str>) {
		let Some(lines) = &mut self.lines else {
			return (None, None);
		};
		let line_count = lines.counts.next_count();

		let mut total = 0i64;
		let mut shipped = 0u32;
		for _ in 0..line_count {
			if let (Some(quantity), Some(discount), Some(tax), Some(part_key)) =
				(&mut lines.quantity, &mut lines.discount, &mut lines.tax, &mut lines.part_key)
			{
				let quantity = quantity.next_int(1, 50) as i64;
				let discount = discount.next_int(0, 10) as i64;
				let tax = tax.next_int(0, 8) as i64;
				let part_key = part_key.next_int(1, self.max_part) as i64;
				let extended = retail_price(part_key) * quantity;
				total += (extended * (100 - discount) / 100) * (100 + tax) / 100;
			}
			if let Some(ship_date) = &mut lines.ship_date {
				let shipped_on = ship_date.next_int(1, 121) + order_date.unwrap_or_default();
				if shipped_on <= CURRENT_DATE_OFFSET {
					shipped += 1;
				}
			}
		}
		finish_rows([
			&mut lines.quantity,
			&mut lines.discount,
			&mut lines.tax,
			&mut lines.part_key,
			&mut lines.ship_date,
		]);

		let total = lines.quantity.is_some().then_some(total);
		let status = lines.ship_date.is_some().then_some(if shipped == line_count {
			"F"
		} else if shipped > 0 {
			"P"
		} else {
			"O"
		});
		(total, status)
	}
}

impl RowGenerator for OrdersGenerator {
	fn generate(&mut self, out: &mut ColumnBuffers, max_rows: usize) -> usize {
		let end = self.rows.end.min(self.rows.start + max_rows as u64);
		for row in self.rows.start..end {
			out.push_int8(orders::ORDERKEY, order_key(row));

			let order_date = self.date.as_mut().map(|r| r.next_int(0, ORDER_DATE_MAX_OFFSET));
			if let Some(key) = self.customer_key() {
				out.push_int8(orders::CUSTKEY, key);
			}

			let (total, status) = self.summarize_lines(order_date);
			if let Some(status) = status {
				out.push_utf8(orders::ORDERSTATUS, status);
			}
			if let Some(total) = total {
				out.push_decimal(orders::TOTALPRICE, total);
			}
			if let Some(order_date) = order_date {
				out.push_date(orders::ORDERDATE, date_at(order_date));
			}
			if let Some(random) = &mut self.priority {
				out.push_utf8(orders::ORDERPRIORITY, self.priorities.pick(random));
			}
			if let Some(random) = &mut self.clerk {
				let clerk = random.next_int(1, self.max_clerk) as i64;
				out.push_utf8(orders::CLERK, padded_name("Clerk#", clerk));
			}
			out.push_int8(orders::SHIPPRIORITY, 0);
			if let Some(comment) = &mut self.comment {
				out.push_utf8(orders::COMMENT, comment.next());
				comment.row_finished();
			}
			finish_rows([&mut self.date, &mut self.customer, &mut self.priority, &mut self.clerk]);
		}
		let produced = (end - self.rows.start) as usize;
		self.rows.start = end;
		produced
	}
}
