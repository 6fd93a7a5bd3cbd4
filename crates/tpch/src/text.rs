// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Pseudo-English text pool backing all comment columns.
//!
//! The pool is generated once from a fixed seed by expanding a small
//! sentence grammar. Comments are slices of it at random offsets.

use std::time::Instant;

use reifydb_type::{Result, return_error};
use tracing::debug;

use crate::{distribution::Distribution, error::TpchError, random::RowRandom};

const POOL_SEED: i64 = 933588178;

#[derive(Debug)]
pub struct TextPool {
	text: String,
}

impl TextPool {
	pub const DEFAULT_SIZE: usize = 300 * 1024 * 1024;

	/// Large enough for the longest comment any table asks for.
	pub const MIN_SIZE: usize = 4096;

	/// Comment offsets are drawn as 31-bit integers.
	pub const MAX_SIZE: usize = i32::MAX as usize;

	pub fn generate(size: usize) -> Result<Self> {
		if size < Self::MIN_SIZE {
			return_error!(TpchError::TextPoolTooSmall {
				size,
				min: Self::MIN_SIZE
			});
		}
		if size > Self::MAX_SIZE {
			return_error!(TpchError::TextPoolTooLarge {
				size,
				max: Self::MAX_SIZE
			});
		}

		let start = Instant::now();
		let grammar = Grammar::new();
		let mut random = RowRandom::new(POOL_SEED, i32::MAX as i64);
		let mut text = String::with_capacity(size + 256);
		while text.len() < size {
			grammar.sentence(&mut random, &mut text);
		}
		text.truncate(size);

		debug!(size, elapsed_ms = start.elapsed().as_millis() as u64, "generated text pool");
		Ok(Self {
			text,
		})
	}

	pub fn len(&self) -> usize {
		self.text.len()
	}

	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}

	pub fn text(&self, offset: usize, length: usize) -> &str {
		&self.text[offset..offset + length]
	}
}

struct Grammar {
	sentences: Distribution,
	noun_phrases: Distribution,
	verb_phrases: Distribution,
	nouns: Distribution,
	verbs: Distribution,
	adjectives: Distribution,
	adverbs: Distribution,
	prepositions: Distribution,
	auxiliaries: Distribution,
	terminators: Distribution,
}

impl Grammar {
	fn new() -> Self {
		Self {
			sentences: Distribution::new([
				("N V T", 3),
				("N V P T", 3),
				("N V N T", 3),
				("N P V N T", 1),
				("N P V P T", 1),
			]),
			noun_phrases: Distribution::new([("N", 10), ("J N", 20), ("J, J N", 10), ("D J N", 50)]),
			verb_phrases: Distribution::new([("V", 30), ("X V", 1), ("V D", 40), ("X V D", 1)]),
			nouns: Distribution::new(NOUNS),
			verbs: Distribution::new(VERBS),
			adjectives: Distribution::new(ADJECTIVES),
			adverbs: Distribution::new(ADVERBS),
			prepositions: Distribution::new(PREPOSITIONS),
			auxiliaries: Distribution::uniform(AUXILIARIES),
			terminators: Distribution::new([(".", 50), (";", 1), (":", 1), ("?", 1), ("!", 1), ("--", 1)]),
		}
	}

	fn sentence(&self, random: &mut RowRandom, out: &mut String) {
		let shape = self.sentences.pick(random);
		for token in shape.split(' ') {
			match token {
				"N" => self.noun_phrase(random, out),
				"V" => self.verb_phrase(random, out),
				"P" => {
					out.push_str(self.prepositions.pick(random));
					out.push_str(" the ");
					self.noun_phrase(random, out);
				}
				_ => {
					out.pop();
					out.push_str(self.terminators.pick(random));
				}
			}
			if !out.ends_with(' ') {
				out.push(' ');
			}
		}
	}

	fn noun_phrase(&self, random: &mut RowRandom, out: &mut String) {
		let shape = self.noun_phrases.pick(random);
		for c in shape.chars() {
			let words = match c {
				'J' => &self.adjectives,
				'D' => &self.adverbs,
				'N' => &self.nouns,
				',' => {
					out.pop();
					out.push_str(", ");
					continue;
				}
				_ => continue,
			};
			out.push_str(words.pick(random));
			out.push(' ');
		}
	}

	fn verb_phrase(&self, random: &mut RowRandom, out: &mut String) {
		let shape = self.verb_phrases.pick(random);
		for token in shape.split(' ') {
			let words = match token {
				"D" => &self.adverbs,
				"X" => &self.auxiliaries,
				_ => &self.verbs,
			};
			out.push_str(words.pick(random));
			out.push(' ');
		}
	}
}

const NOUNS: [(&str, i32); 45] = [
	("packages", 40),
	("requests", 40),
	("accounts", 40),
	("deposits", 40),
	("foxes", 20),
	("ideas", 20),
	("theodolites", 20),
	("pinto beans", 20),
	("instructions", 20),
	("dependencies", 10),
	("excuses", 10),
	("platelets", 10),
	("asymptotes", 10),
	("courts", 5),
	("dolphins", 5),
	("multipliers", 1),
	("sauternes", 1),
	("warthogs", 1),
	("frets", 1),
	("dinos", 1),
	("attainments", 1),
	("somas", 1),
	("Tiresias", 1),
	("patterns", 1),
	("forges", 1),
	("braids", 1),
	("frays", 1),
	("warhorses", 1),
	("dugouts", 1),
	("notornis", 1),
	("epitaphs", 1),
	("pearls", 1),
	("tithes", 1),
	("waters", 1),
	("orbits", 1),
	("gifts", 1),
	("sheaves", 1),
	("depths", 1),
	("sentiments", 1),
	("decoys", 1),
	("realms", 1),
	("pains", 1),
	("grouches", 1),
	("escapades", 1),
	("hockey players", 1),
];

const VERBS: [(&str, i32); 40] = [
	("sleep", 20),
	("wake", 20),
	("are", 20),
	("cajole", 20),
	("haggle", 20),
	("nag", 10),
	("use", 10),
	("boost", 10),
	("affix", 5),
	("detect", 5),
	("integrate", 5),
	("maintain", 1),
	("nod", 1),
	("was", 1),
	("lose", 1),
	("sublate", 1),
	("solve", 1),
	("thrash", 1),
	("promise", 1),
	("engage", 1),
	("hinder", 1),
	("print", 1),
	("x-ray", 1),
	("breach", 1),
	("eat", 1),
	("grow", 1),
	("impress", 1),
	("mold", 1),
	("poach", 1),
	("serve", 1),
	("run", 1),
	("dazzle", 1),
	("snooze", 1),
	("doze", 1),
	("unwind", 1),
	("kindle", 1),
	("play", 1),
	("hang", 1),
	("believe", 1),
	("doubt", 1),
];

const ADJECTIVES: [(&str, i32); 29] = [
	("special", 20),
	("pending", 20),
	("unusual", 20),
	("express", 20),
	("furious", 1),
	("sly", 1),
	("careful", 1),
	("blithe", 1),
	("quick", 1),
	("fluffy", 1),
	("slow", 1),
	("quiet", 1),
	("ruthless", 1),
	("thin", 1),
	("close", 1),
	("dogged", 1),
	("daring", 1),
	("brave", 1),
	("stealthy", 1),
	("permanent", 1),
	("enticing", 1),
	("idle", 1),
	("busy", 1),
	("regular", 50),
	("final", 40),
	("ironic", 40),
	("even", 30),
	("bold", 20),
	("silent", 10),
];

const ADVERBS: [(&str, i32); 28] = [
	("sometimes", 1),
	("always", 1),
	("never", 1),
	("furiously", 50),
	("slyly", 50),
	("carefully", 50),
	("blithely", 40),
	("quickly", 30),
	("fluffily", 20),
	("slowly", 1),
	("quietly", 1),
	("ruthlessly", 1),
	("thinly", 1),
	("closely", 1),
	("doggedly", 1),
	("daringly", 1),
	("bravely", 1),
	("stealthily", 1),
	("permanently", 1),
	("enticingly", 1),
	("idly", 1),
	("busily", 1),
	("regularly", 1),
	("finally", 1),
	("ironically", 1),
	("evenly", 1),
	("boldly", 1),
	("silently", 1),
];

const PREPOSITIONS: [(&str, i32); 47] = [
	("about", 50),
	("above", 50),
	("according to", 50),
	("across", 50),
	("after", 50),
	("against", 40),
	("along", 40),
	("alongside of", 30),
	("among", 30),
	("around", 20),
	("at", 10),
	("atop", 1),
	("before", 1),
	("behind", 1),
	("beneath", 1),
	("beside", 1),
	("besides", 1),
	("between", 1),
	("beyond", 1),
	("by", 1),
	("despite", 1),
	("during", 1),
	("except", 1),
	("for", 1),
	("from", 1),
	("in place of", 1),
	("inside", 1),
	("instead of", 1),
	("into", 1),
	("near", 1),
	("of", 1),
	("on", 1),
	("outside", 1),
	("over", 1),
	("past", 1),
	("since", 1),
	("through", 1),
	("throughout", 1),
	("to", 1),
	("toward", 1),
	("under", 1),
	("until", 1),
	("up", 1),
	("upon", 1),
	("whithout", 1),
	("with", 1),
	("within", 1),
];

const AUXILIARIES: [&str; 18] = [
	"do",
	"may",
	"might",
	"shall",
	"will",
	"would",
	"can",
	"could",
	"should",
	"ought to",
	"must",
	"will have to",
	"shall have to",
	"could have to",
	"should have to",
	"must have to",
	"need to",
	"try to",
];

#[cfg(test)]
mod tests {
	use reifydb_type::ErrorKind;

	use super::*;

	#[test]
	fn test_rejects_tiny_pool() {
		let err = TextPool::generate(100).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Config);
		assert_eq!(err.code, "CONFIG_003");
	}

	#[test]
	fn test_rejects_pool_past_offset_range() {
		let err = TextPool::generate(TextPool::MAX_SIZE + 1).unwrap_err();
		assert_eq!(err.kind(), ErrorKind::Config);
		assert_eq!(err.code, "CONFIG_003");
	}

	#[test]
	fn test_pool_opening() {
		let pool = TextPool::generate(TextPool::MIN_SIZE).unwrap();
		assert_eq!(
			pool.text(0, 200),
			"furiously special foxes haggle furiously blithely ironic deposits. slyly final theodolites boost \
			 slyly even asymptotes. carefully final foxes wake furiously around the furiously bold deposits. foxes a"
		);
	}

	#[test]
	fn test_exact_size() {
		let pool = TextPool::generate(TextPool::MIN_SIZE).unwrap();
		assert_eq!(pool.len(), TextPool::MIN_SIZE);
	}

	#[test]
	fn test_deterministic() {
		let left = TextPool::generate(64 * 1024).unwrap();
		let right = TextPool::generate(64 * 1024).unwrap();
		assert_eq!(left.text(0, left.len()), right.text(0, right.len()));
	}

	#[test]
	fn test_smaller_pool_is_prefix() {
		let small = TextPool::generate(8 * 1024).unwrap();
		let large = TextPool::generate(32 * 1024).unwrap();
		assert_eq!(small.text(0, small.len()), large.text(0, small.len()));
	}

	#[test]
	fn test_reads_like_sentences() {
		let pool = TextPool::generate(16 * 1024).unwrap();
		let text = pool.text(0, pool.len());
		assert!(text.is_ascii());
		assert!(!text.contains("  "));
		assert!(text.contains(". "));
		assert!(text.split(' ').any(|w| w == "the"));
	}
}
