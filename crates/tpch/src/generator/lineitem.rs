// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Range;

use reifydb_type::Result;

use crate::{
	dates::{CURRENT_DATE_OFFSET, ORDER_DATE_MAX_OFFSET, date_at},
	distribution::{self, Distribution},
	generator::{
		ColumnBuffers, CommentColumn, Comments, OrderAnchor, RowGenerator,
		orders::{ORDER_DATE_SEED, order_key},
		part::retail_price,
		partsupp::part_supplier,
	},
	projection::Projection,
	random::{RowRandom, finish_rows, stream_if},
	row_count::{LINE_COUNT_MAX, LineCounts, PART_BASE, SUPPLIER_BASE},
	scale::ScaleFactor,
	schema::{Table, lineitem},
};

/// Line streams reserve seeds for the largest possible order.
pub(crate) const LINE_SEEDS_PER_ROW: i64 = LINE_COUNT_MAX as i64;

pub(crate) const QUANTITY_SEED: i64 = 209208115;
pub(crate) const DISCOUNT_SEED: i64 = 554590007;
pub(crate) const TAX_SEED: i64 = 721958466;
pub(crate) const PART_KEY_SEED: i64 = 1808217256;
pub(crate) const SHIP_DATE_SEED: i64 = 1769349045;

const SUPPLIER_NUMBER_SEED: i64 = 2095021727;
const COMMIT_DATE_SEED: i64 = 904914315;
const RECEIPT_DATE_SEED: i64 = 373135028;
const RETURN_FLAG_SEED: i64 = 717419739;
const SHIP_INSTRUCT_SEED: i64 = 1371272478;
const SHIP_MODE_SEED: i64 = 675466456;
const COMMENT_SEED: i64 = 1095462486;
const COMMENT_AVERAGE_LENGTH: i32 = 27;

/// Generates line items order by order. Streams advance once per order,
/// so a range starting inside an order replays that order's leading lines
/// without emitting them.
pub(crate) struct LineItemGenerator {
	remaining: u64,
	max_part: i32,
	suppliers: i64,

	order: u64,
	line: u32,
	line_count: u32,
	order_date: i32,

	counts: LineCounts,
	date: Option<RowRandom>,
	quantity: Option<RowRandom>,
	discount: Option<RowRandom>,
	tax: Option<RowRandom>,
	part_key: Option<RowRandom>,
	supplier_number: Option<RowRandom>,
	ship_date: Option<RowRandom>,
	commit_date: Option<RowRandom>,
	receipt_date: Option<RowRandom>,
	return_flag: Option<RowRandom>,
	ship_instruct: Option<RowRandom>,
	ship_mode: Option<RowRandom>,
	comment: Option<CommentColumn>,

	return_flags: Distribution,
	instructions: Distribution,
	modes: Distribution,
}

impl LineItemGenerator {
	pub(crate) fn new(
		scale: ScaleFactor,
		projection: &Projection,
		rows: Range<u64>,
		anchor: OrderAnchor,
		comments: Comments,
	) -> Result<Self> {
		use lineitem::*;

		let order = anchor.order;
		let spr = LINE_SEEDS_PER_ROW;
		let wants = |ordinal| projection.contains(ordinal);

		let wants_return_flag = wants(RETURNFLAG);
		let wants_receipt = wants(RECEIPTDATE) || wants_return_flag;
		let wants_ship = wants(SHIPDATE) || wants(LINESTATUS) || wants_receipt;
		let wants_commit = wants(COMMITDATE);
		let wants_part = wants(PARTKEY) || wants(SUPPKEY) || wants(EXTENDEDPRICE);

		let mut result = Self {
			remaining: rows.end.saturating_sub(rows.start),
			max_part: scale.scale_i32(PART_BASE),
			suppliers: scale.scale(SUPPLIER_BASE) as i64,
			order,
			line: 0,
			line_count: 0,
			order_date: 0,
			counts: LineCounts::new(order),
			date: stream_if(wants_ship || wants_commit, ORDER_DATE_SEED, 1, order),
			quantity: stream_if(wants(QUANTITY) || wants(EXTENDEDPRICE), QUANTITY_SEED, spr, order),
			discount: stream_if(wants(DISCOUNT), DISCOUNT_SEED, spr, order),
			tax: stream_if(wants(TAX), TAX_SEED, spr, order),
			part_key: stream_if(wants_part, PART_KEY_SEED, spr, order),
			supplier_number: stream_if(wants(SUPPKEY), SUPPLIER_NUMBER_SEED, spr, order),
			ship_date: stream_if(wants_ship, SHIP_DATE_SEED, spr, order),
			commit_date: stream_if(wants_commit, COMMIT_DATE_SEED, spr, order),
			receipt_date: stream_if(wants_receipt, RECEIPT_DATE_SEED, spr, order),
			return_flag: stream_if(wants_return_flag, RETURN_FLAG_SEED, spr, order),
			ship_instruct: stream_if(wants(SHIPINSTRUCT), SHIP_INSTRUCT_SEED, spr, order),
			ship_mode: stream_if(wants(SHIPMODE), SHIP_MODE_SEED, spr, order),
			comment: comments.open(COMMENT_SEED, COMMENT_AVERAGE_LENGTH, spr, order)?,
			return_flags: distribution::return_flags(),
			instructions: distribution::ship_instructions(),
			modes: distribution::ship_modes(),
		};
		result.begin_order();

		let mut sink = ColumnBuffers::new(&Projection::none(Table::LineItem), 0);
		for _ in 0..anchor.line {
			result.line(&mut sink);
		}
		Ok(result)
	}

	fn begin_order(&mut self) {
		self.line = 0;
		self.line_count = self.counts.next_count();
		if let Some(random) = &mut self.date {
			self.order_date = random.next_int(0, ORDER_DATE_MAX_OFFSET);
			random.row_finished();
		}
	}

	fn finish_order(&mut self) {
		finish_rows([
			&mut self.quantity,
			&mut self.discount,
			&mut self.tax,
			&mut self.part_key,
			&mut self.supplier_number,
			&mut self.ship_date,
			&mut self.commit_date,
			&mut self.receipt_date,
			&mut self.return_flag,
			&mut self.ship_instruct,
			&mut self.ship_mode,
		]);
		if let Some(comment) = &mut self.comment {
			comment.row_finished();
		}
		self.order += 1;
		self.begin_order();
	}

	fn line(&mut self, out: &mut ColumnBuffers) {
		use lineitem::*;

		out.push_int8(ORDERKEY, order_key(self.order));

		let quantity = self.quantity.as_mut().map(|r| r.next_int(1, 50) as i64);
		let discount = self.discount.as_mut().map(|r| r.next_int(0, 10) as i64);
		let tax = self.tax.as_mut().map(|r| r.next_int(0, 8) as i64);
		let part_key = self.part_key.as_mut().map(|r| r.next_int(1, self.max_part) as i64);
		let supplier_number = self.supplier_number.as_mut().map(|r| r.next_int(0, 3) as i64);

		if let Some(part_key) = part_key {
			out.push_int8(PARTKEY, part_key);
			if let Some(number) = supplier_number {
				out.push_int8(SUPPKEY, part_supplier(part_key, number, self.suppliers));
			}
		}
		out.push_int8(LINENUMBER, self.line as i64 + 1);
		if let Some(quantity) = quantity {
			out.push_decimal(QUANTITY, quantity * 100);
			if let Some(part_key) = part_key {
				out.push_decimal(EXTENDEDPRICE, retail_price(part_key) * quantity);
			}
		}
		if let Some(discount) = discount {
			out.push_decimal(DISCOUNT, discount);
		}
		if let Some(tax) = tax {
			out.push_decimal(TAX, tax);
		}

		let ship_date = self.ship_date.as_mut().map(|r| r.next_int(1, 121) + self.order_date);
		let commit_date = self.commit_date.as_mut().map(|r| r.next_int(30, 90) + self.order_date);
		let receipt_date = match (&mut self.receipt_date, ship_date) {
			(Some(random), Some(ship_date)) => Some(random.next_int(1, 30) + ship_date),
			_ => None,
		};

		if let Some(random) = &mut self.return_flag {
			let flag = match receipt_date {
				Some(received) if received <= CURRENT_DATE_OFFSET => self.return_flags.pick(random),
				_ => "N",
			};
			out.push_utf8(RETURNFLAG, flag);
		}
		if let Some(ship_date) = ship_date {
			let status = if ship_date <= CURRENT_DATE_OFFSET {
				"F"
			} else {
				"O"
			};
			out.push_utf8(LINESTATUS, status);
			out.push_date(SHIPDATE, date_at(ship_date));
		}
		if let Some(commit_date) = commit_date {
			out.push_date(COMMITDATE, date_at(commit_date));
		}
		if let Some(receipt_date) = receipt_date {
			out.push_date(RECEIPTDATE, date_at(receipt_date));
		}

		if let Some(random) = &mut self.ship_instruct {
			out.push_utf8(SHIPINSTRUCT, self.instructions.pick(random));
		}
		if let Some(random) = &mut self.ship_mode {
			out.push_utf8(SHIPMODE, self.modes.pick(random));
		}
		if let Some(comment) = &mut self.comment {
			out.push_utf8(COMMENT, comment.next());
		}

		self.line += 1;
		if self.line == self.line_count {
			self.finish_order();
		}
	}
}

impl RowGenerator for LineItemGenerator {
	fn generate(&mut self, out: &mut ColumnBuffers, max_rows: usize) -> usize {
		let produced = self.remaining.min(max_rows as u64);
		for _ in 0..produced {
			self.line(out);
		}
		self.remaining -= produced;
		produced as usize
	}
}
