// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Range;

use crate::{
	generator::{ColumnBuffers, RowGenerator},
	projection::Projection,
	schema::region,
};

pub(crate) const REGIONS: [(&str, &str); 5] = [
	(
		"AFRICA",
		"lar deposits. blithely final packages cajole. regular waters are final requests. regular accounts are according to ",
	),
	("AMERICA", "hs use ironic, even requests. s"),
	("ASIA", "ges. thinly even pinto beans ca"),
	("EUROPE", "ly final courts cajole furiously final excuse"),
	(
		"MIDDLE EAST",
		"uickly special accounts cajole carefully blithely close requests. carefully final asymptotes haggle furiousl",
	),
];

pub(crate) struct RegionGenerator {
	rows: Range<u64>,
}

impl RegionGenerator {
	pub(crate) fn new(_projection: &Projection, rows: Range<u64>) -> Self {
		Self {
			rows: rows.start.min(REGIONS.len() as u64)..rows.end.min(REGIONS.len() as u64),
		}
	}
}

impl RowGenerator for RegionGenerator {
	fn generate(&mut self, out: &mut ColumnBuffers, max_rows: usize) -> usize {
		let end = self.rows.end.min(self.rows.start + max_rows as u64);
		for key in self.rows.start..end {
			let (name, comment) = REGIONS[key as usize];
			out.push_int8(region::REGIONKEY, key as i64);
			out.push_utf8(region::NAME, name);
			out.push_utf8(region::COMMENT, comment);
		}
		let produced = (end - self.rows.start) as usize;
		self.rows.start = end;
		produced
	}
}
