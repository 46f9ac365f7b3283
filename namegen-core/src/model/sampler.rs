use std::collections::BTreeMap;

use rand::Rng;
use tracing::{debug, trace};

use crate::error::{NameGenError, Result};
use super::letter_model::LetterModel;
use super::sampler_config::SamplerConfig;
use super::weighted::WeightedTable;

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Used in place of a missing transition row.
const VOWEL_WEIGHTS: [(char, usize); 5] = [('a', 1), ('e', 1), ('i', 1), ('o', 1), ('u', 1)];

fn is_vowel(c: &char) -> bool {
	VOWELS.contains(c)
}

/// Outcome of the next-letter procedure.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Pick {
	/// Passed every structural check that applied.
	Accepted(char),
	/// Attempt budget exhausted, emergency vowel returned unchecked.
	Fallback(char),
}

/// A generated name and how it was obtained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
	/// Capitalized name.
	pub name: String,
	/// Letters that came from the emergency vowel fallback. When zero,
	/// every digram/trigram constraint holds for `name`.
	pub fallbacks: usize,
	/// Vowel-less names discarded before this one.
	pub restarts: usize,
}

/// Constrained random walk over a `LetterModel`.
///
/// The weighted tables are built once from the borrowed model, so a
/// `Sampler` is cheap to call repeatedly.
///
/// # Invariants
/// - The model is never modified
/// - Every table holds at least one positive weight
#[derive(Debug)]
pub struct Sampler<'a> {
	model: &'a LetterModel,
	config: SamplerConfig,
	lengths: WeightedTable<usize>,
	first_letters: WeightedTable<char>,
	transitions: BTreeMap<char, WeightedTable<char>>,
	vowels: WeightedTable<char>,
}

impl<'a> Sampler<'a> {
	/// Prepares the distributions of `model`.
	///
	/// # Errors
	/// Returns `EmptyDistribution` if the model has no length or first-letter
	/// counts (an untrained or corrupted model).
	pub fn new(model: &'a LetterModel, config: SamplerConfig) -> Result<Self> {
		let lengths = WeightedTable::new("length", model.length_counts().iter().map(|(l, c)| (*l, *c)))?;
		let first_letters = WeightedTable::new(
			"first letter",
			model.first_letter_counts().iter().map(|(l, c)| (*l, *c)),
		)?;

		// A row with no positive count behaves as a missing row.
		let transitions = model
			.transition_counts()
			.iter()
			.filter_map(|(letter, row)| {
				WeightedTable::new("transition", row.iter().map(|(n, c)| (*n, *c)))
					.ok()
					.map(|table| (*letter, table))
			})
			.collect();

		let vowels = WeightedTable::new("vowel", VOWEL_WEIGHTS)?;

		Ok(Self { model, config, lengths, first_letters, transitions, vowels })
	}

	pub fn config(&self) -> &SamplerConfig {
		&self.config
	}

	pub fn model(&self) -> &LetterModel {
		self.model
	}

	/// Generates one capitalized name.
	pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
		Ok(self.generate_traced(rng)?.name)
	}

	/// Generates one name and reports how many fallbacks and restarts it took.
	///
	/// # Behavior
	/// - Draws a target length and a first letter from the model
	/// - Appends `length - 1` letters through the next-letter procedure
	/// - Discards the whole name and starts over if it has no vowel
	///
	/// # Errors
	/// Returns `RestartLimit` once `max_restarts` vowel-less names were discarded.
	pub fn generate_traced<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Generated> {
		let mut restarts = 0;
		loop {
			let length = self.lengths.sample(rng);
			let mut name = Vec::with_capacity(length);
			name.push(self.first_letters.sample(rng));

			let mut fallbacks = 0;
			for _ in 1..length {
				let next = match self.next_char(&name, length, rng) {
					Pick::Accepted(c) => c,
					Pick::Fallback(c) => {
						fallbacks += 1;
						c
					}
				};
				name.push(next);
			}

			if name.iter().any(is_vowel) {
				return Ok(Generated { name: capitalize(&name), fallbacks, restarts });
			}

			if let Some(limit) = self.config.max_restarts {
				if restarts >= limit {
					return Err(NameGenError::RestartLimit { restarts });
				}
			}
			restarts += 1;
			debug!(restarts, "discarded name without vowel");
		}
	}

	/// Picks the letter that follows `name` in a name of `length` letters.
	///
	/// Whether the letter is random or modeled is decided once per call, then
	/// candidates are drawn until one satisfies the applicable digram and
	/// trigram checks. After `max_attempts` a random vowel is returned as is.
	fn next_char<R: Rng + ?Sized>(&self, name: &[char], length: usize, rng: &mut R) -> Pick {
		let use_random = rng.random::<f32>() < self.config.noise;
		let last = name[name.len() - 1];

		for _ in 1..self.config.max_attempts {
			let candidate = self.candidate(last, use_random, rng);
			if self.fits(name, length, candidate) {
				return Pick::Accepted(candidate);
			}
		}

		let vowel = VOWELS[rng.random_range(0..VOWELS.len())];
		let partial: String = name.iter().collect();
		trace!(%partial, %vowel, "emergency vowel fallback");
		Pick::Fallback(vowel)
	}

	/// Draws one candidate letter to follow `last`.
	fn candidate<R: Rng + ?Sized>(&self, last: char, use_random: bool, rng: &mut R) -> char {
		if use_random {
			return char::from(b'a' + rng.random_range(0..26u8));
		}
		self.transitions.get(&last).unwrap_or(&self.vowels).sample(rng)
	}

	/// Structural checks on appending `candidate` to `name`.
	///
	/// - second letter: the opening digram must be attested
	/// - third letter onwards: the trailing trigram must be attested
	/// - last letter (or earlier for 2-letter names): the closing digram must be attested
	fn fits(&self, name: &[char], length: usize, candidate: char) -> bool {
		let len = name.len();
		let last = name[len - 1];

		if len == 1 && !self.model.start_digrams().contains(&digram(last, candidate)) {
			return false;
		}
		if len >= 2 {
			let trigram: String = [name[len - 2], last, candidate].iter().collect();
			if !self.model.valid_trigrams().contains(&trigram) {
				return false;
			}
		}
		if len + 1 >= length && !self.model.end_digrams().contains(&digram(last, candidate)) {
			return false;
		}
		true
	}
}

fn digram(first: char, second: char) -> String {
	[first, second].iter().collect()
}

/// Upper-cases the first letter, leaves the rest untouched.
fn capitalize(name: &[char]) -> String {
	let mut out = String::with_capacity(name.len() + 1);
	if let Some((first, rest)) = name.split_first() {
		out.extend(first.to_uppercase());
		out.extend(rest);
	}
	out
}
