// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Range;

use crate::{
	generator::{ColumnBuffers, RowGenerator},
	projection::Projection,
	schema::nation,
};

/// `(name, region key, comment)`, indexed by nation key.
pub(crate) const NATIONS: [(&str, i64, &str); 25] = [
	("ALGERIA", 0, " haggle. carefully final deposits detect slyly agai"),
	("ARGENTINA", 1, "al foxes promise slyly according to the regular accounts. bold requests alon"),
	(
		"BRAZIL",
		1,
		"y alongside of the pending deposits. carefully special packages are about the ironic forges. slyly special ",
	),
	(
		"CANADA",
		1,
		"eas hang ironic, silent packages. slyly regular packages are furiously over the tithes. fluffily bold",
	),
	(
		"EGYPT",
		4,
		"y above the carefully unusual theodolites. final dugouts are quickly across the furiously regular d",
	),
	("ETHIOPIA", 0, "ven packages wake quickly. regu"),
	("FRANCE", 3, "refully final requests. regular, ironi"),
	("GERMANY", 3, "l platelets. regular accounts x-ray: unusual, regular acco"),
	("INDIA", 2, "ss excuses cajole slyly across the packages. deposits print aroun"),
	(
		"INDONESIA",
		2,
		" slyly express asymptotes. regular deposits haggle slyly. carefully ironic hockey players sleep blithely. carefull",
	),
	("IRAN", 4, "efully alongside of the slyly final dependencies. "),
	("IRAQ", 4, "nic deposits boost atop the quickly final requests? quickly regula"),
	("JAPAN", 2, "ously. final, express gifts cajole a"),
	("JORDAN", 4, "ic deposits are blithely about the carefully regular pa"),
	("KENYA", 0, " pending excuses haggle furiously deposits. pending, express pinto beans wake fluffily past t"),
	("MOROCCO", 0, "rns. blithely bold courts among the closely regular packages use furiously bold platelets?"),
	("MOZAMBIQUE", 0, "s. ironic, unusual asymptotes wake blithely r"),
	(
		"PERU",
		1,
		"platelets. blithely pending dependencies use fluffily across the even pinto beans. carefully silent accoun",
	),
	(
		"CHINA",
		2,
		"c dependencies. furiously express notornis sleep slyly regular accounts. ideas sleep. depos",
	),
	(
		"ROMANIA",
		3,
		"ular asymptotes are about the furious multipliers. express dependencies nag above the ironically ironic account",
	),
	("SAUDI ARABIA", 4, "ts. silent requests haggle. closely express packages sleep across the blithely"),
	("VIETNAM", 2, "hely enticingly express accounts. even, final "),
	("RUSSIA", 3, " requests against the platelets use never according to the quickly regular pint"),
	("UNITED KINGDOM", 3, "eans boost carefully special requests. accounts are. carefull"),
	(
		"UNITED STATES",
		1,
		"y final packages. slow foxes cajole quickly. quickly silent platelets breach ironic accounts. unusual pinto be",
	),
];

pub(crate) struct NationGenerator {
	rows: Range<u64>,
}

impl NationGenerator {
	pub(crate) fn new(_projection: &Projection, rows: Range<u64>) -> Self {
		Self {
			rows: rows.start.min(NATIONS.len() as u64)..rows.end.min(NATIONS.len() as u64),
		}
	}
}

impl RowGenerator for NationGenerator {
	fn generate(&mut self, out: &mut ColumnBuffers, max_rows: usize) -> usize {
		let end = self.rows.end.min(self.rows.start + max_rows as u64);
		for key in self.rows.start..end {
			let (name, region_key, comment) = NATIONS[key as usize];
			out.push_int8(nation::NATIONKEY, key as i64);
			out.push_utf8(nation::NAME, name);
			out.push_int8(nation::REGIONKEY, region_key);
			out.push_utf8(nation::COMMENT, comment);
		}
		let produced = (end - self.rows.start) as usize;
		self.rows.start = end;
		produced
	}
}
