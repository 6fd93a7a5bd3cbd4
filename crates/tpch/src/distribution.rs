// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::random::RowRandom;

/// Weighted categorical distribution.
#[derive(Debug, Clone)]
pub struct Distribution {
	values: Vec<String>,
	cumulative: Vec<i32>,
}

impl Distribution {
	pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = (S, i32)>) -> Self {
		let mut values = vec![];
		let mut cumulative = vec![];
		let mut total = 0;
		for (value, weight) in entries {
			total += weight;
			values.push(value.into());
			cumulative.push(total);
		}
		Self {
			values,
			cumulative,
		}
	}

	pub fn uniform<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
		Self::new(values.into_iter().map(|v| (v, 1)))
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn value(&self, idx: usize) -> &str {
		&self.values[idx]
	}

	fn max_weight(&self) -> i32 {
		self.cumulative.last().copied().unwrap_or(0)
	}

	/// One weighted pick; consumes exactly one draw.
	pub fn pick(&self, random: &mut RowRandom) -> &str {
		let weight = random.next_int(0, self.max_weight() - 1);
		let idx = self.cumulative.partition_point(|c| *c <= weight);
		&self.values[idx]
	}
}

const COLORS: [&str; 92] = [
	"almond",
	"antique",
	"aquamarine",
	"azure",
	"beige",
	"bisque",
	"black",
	"blanched",
	"blue",
	"blush",
	"brown",
	"burlywood",
	"burnished",
	"chartreuse",
	"chiffon",
	"chocolate",
	"coral",
	"cornflower",
	"cornsilk",
	"cream",
	"cyan",
	"dark",
	"deep",
	"dim",
	"dodger",
	"drab",
	"firebrick",
	"floral",
	"forest",
	"frosted",
	"gainsboro",
	"ghost",
	"goldenrod",
	"green",
	"grey",
	"honeydew",
	"hot",
	"indian",
	"ivory",
	"khaki",
	"lace",
	"lavender",
	"lawn",
	"lemon",
	"light",
	"lime",
	"linen",
	"magenta",
	"maroon",
	"medium",
	"metallic",
	"midnight",
	"mint",
	"misty",
	"moccasin",
	"navajo",
	"navy",
	"olive",
	"orange",
	"orchid",
	"pale",
	"papaya",
	"peach",
	"peru",
	"pink",
	"plum",
	"powder",
	"puff",
	"purple",
	"red",
	"rose",
	"rosy",
	"royal",
	"saddle",
	"salmon",
	"sandy",
	"seashell",
	"sienna",
	"sky",
	"slate",
	"smoke",
	"snow",
	"spring",
	"steel",
	"tan",
	"thistle",
	"tomato",
	"turquoise",
	"violet",
	"wheat",
	"white",
	"yellow",
];

const TYPE_SIZES: [&str; 6] = ["STANDARD", "SMALL", "MEDIUM", "LARGE", "ECONOMY", "PROMO"];
const TYPE_FINISHES: [&str; 5] = ["ANODIZED", "BURNISHED", "PLATED", "POLISHED", "BRUSHED"];
const TYPE_MATERIALS: [&str; 5] = ["TIN", "NICKEL", "BRASS", "STEEL", "COPPER"];

const CONTAINER_SIZES: [&str; 5] = ["SM", "LG", "MED", "JUMBO", "WRAP"];
const CONTAINER_KINDS: [&str; 8] = ["CASE", "BOX", "BAG", "JAR", "PACK", "PKG", "CAN", "DRUM"];

const MARKET_SEGMENTS: [&str; 5] = ["AUTOMOBILE", "BUILDING", "FURNITURE", "HOUSEHOLD", "MACHINERY"];

const ORDER_PRIORITIES: [&str; 5] = ["1-URGENT", "2-HIGH", "3-MEDIUM", "4-NOT SPECIFIED", "5-LOW"];

const SHIP_INSTRUCTIONS: [&str; 4] = ["DELIVER IN PERSON", "COLLECT COD", "TAKE BACK RETURN", "NONE"];

const SHIP_MODES: [&str; 7] = ["REG AIR", "AIR", "RAIL", "TRUCK", "MAIL", "FOB", "SHIP"];

const RETURN_FLAGS: [&str; 2] = ["R", "A"];

pub fn colors() -> Distribution {
	Distribution::uniform(COLORS)
}

/// All 150 `size finish material` combinations, e.g. `PROMO BURNISHED COPPER`.
pub fn part_types() -> Distribution {
	let mut values = Vec::with_capacity(TYPE_SIZES.len() * TYPE_FINISHES.len() * TYPE_MATERIALS.len());
	for size in TYPE_SIZES {
		for finish in TYPE_FINISHES {
			for material in TYPE_MATERIALS {
				values.push(format!("{} {} {}", size, finish, material));
			}
		}
	}
	Distribution::uniform(values)
}

pub fn part_containers() -> Distribution {
	let mut values = Vec::with_capacity(CONTAINER_SIZES.len() * CONTAINER_KINDS.len());
	for size in CONTAINER_SIZES {
		for kind in CONTAINER_KINDS {
			values.push(format!("{} {}", size, kind));
		}
	}
	Distribution::uniform(values)
}

pub fn market_segments() -> Distribution {
	Distribution::uniform(MARKET_SEGMENTS)
}

pub fn order_priorities() -> Distribution {
	Distribution::uniform(ORDER_PRIORITIES)
}

pub fn ship_instructions() -> Distribution {
	Distribution::uniform(SHIP_INSTRUCTIONS)
}

pub fn ship_modes() -> Distribution {
	Distribution::uniform(SHIP_MODES)
}

pub fn return_flags() -> Distribution {
	Distribution::uniform(RETURN_FLAGS)
}
