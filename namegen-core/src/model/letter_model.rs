use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use super::sampler::Sampler;
use super::sampler_config::SamplerConfig;

/// Letter-level statistics of a name corpus.
///
/// A `LetterModel` is produced once by the trainer and is read-only
/// afterwards. It is the only thing the sampler and the store ever see.
///
/// # Invariants
/// - Every key was observed in at least one retained training name
/// - Every count is >= 1
/// - Every length key is >= 2 (shorter names are never retained)
/// - Digrams are 2 characters long, trigrams 3
///
/// Ordered collections keep equality, serialized bytes and seeded sampling
/// independent of insertion order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LetterModel {
	/// Letter -> next letter -> number of times the pair was seen.
	/// Example: { 'a' => { 'n' => 3 }, 'n' => { 'n' => 1, 'a' => 2 } }
	transition_counts: BTreeMap<char, BTreeMap<char, usize>>,

	/// How many names start with each letter.
	first_letter_counts: BTreeMap<char, usize>,

	/// How many names have each length (in characters).
	length_counts: BTreeMap<usize, usize>,

	/// First two characters of every name.
	start_digrams: BTreeSet<String>,

	/// Every run of three consecutive characters.
	valid_trigrams: BTreeSet<String>,

	/// Last two characters of every name.
	end_digrams: BTreeSet<String>,
}

impl LetterModel {
	/// Records one already normalized name (lower-cased, trimmed, >= 2 chars).
	pub(crate) fn add_name(&mut self, name: &[char]) {
		let len = name.len();
		debug_assert!(len >= 2, "names shorter than 2 characters are filtered upstream");

		*self.first_letter_counts.entry(name[0]).or_insert(0) += 1;
		*self.length_counts.entry(len).or_insert(0) += 1;

		self.start_digrams.insert(name[..2].iter().collect());
		self.end_digrams.insert(name[len - 2..].iter().collect());

		for i in 0..len - 1 {
			*self.transition_counts
				.entry(name[i])
				.or_default()
				.entry(name[i + 1])
				.or_insert(0) += 1;
			if i + 2 < len {
				self.valid_trigrams.insert(name[i..i + 3].iter().collect());
			}
		}
	}

	/// Merges another model into this one.
	///
	/// Counts are summed and sets are unioned, so merging the partial models
	/// of a split corpus gives exactly the model of the whole corpus.
	pub fn merge(&mut self, other: &Self) {
		for (letter, row) in &other.transition_counts {
			let target = self.transition_counts.entry(*letter).or_default();
			for (next, count) in row {
				*target.entry(*next).or_insert(0) += count;
			}
		}
		for (letter, count) in &other.first_letter_counts {
			*self.first_letter_counts.entry(*letter).or_insert(0) += count;
		}
		for (length, count) in &other.length_counts {
			*self.length_counts.entry(*length).or_insert(0) += count;
		}
		self.start_digrams.extend(other.start_digrams.iter().cloned());
		self.valid_trigrams.extend(other.valid_trigrams.iter().cloned());
		self.end_digrams.extend(other.end_digrams.iter().cloned());
	}

	/// Number of training names the model was built from.
	pub fn name_count(&self) -> usize {
		self.length_counts.values().sum()
	}

	/// `true` when no name has been recorded.
	pub fn is_empty(&self) -> bool {
		self.length_counts.is_empty()
	}

	pub fn transition_counts(&self) -> &BTreeMap<char, BTreeMap<char, usize>> {
		&self.transition_counts
	}

	/// Outgoing transitions of `letter`, if it was ever followed by anything.
	pub fn transitions_from(&self, letter: char) -> Option<&BTreeMap<char, usize>> {
		self.transition_counts.get(&letter)
	}

	pub fn first_letter_counts(&self) -> &BTreeMap<char, usize> {
		&self.first_letter_counts
	}

	pub fn length_counts(&self) -> &BTreeMap<usize, usize> {
		&self.length_counts
	}

	pub fn start_digrams(&self) -> &BTreeSet<String> {
		&self.start_digrams
	}

	pub fn valid_trigrams(&self) -> &BTreeSet<String> {
		&self.valid_trigrams
	}

	pub fn end_digrams(&self) -> &BTreeSet<String> {
		&self.end_digrams
	}

	/// Generates one capitalized name with the thread RNG.
	///
	/// `noise` is the probability of drawing each letter uniformly instead of
	/// from the transition counts. It is not range-checked.
	///
	/// # Errors
	/// Fails only on an empty model, or if every restart yields a vowel-less name.
	pub fn generate(&self, noise: f32) -> Result<String> {
		let config = SamplerConfig::default().with_noise(noise);
		Sampler::new(self, config)?.generate(&mut rand::rng())
	}
}
