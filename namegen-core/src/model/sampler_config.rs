use serde::{Deserialize, Serialize};

/// Candidate draws per letter before the emergency vowel is used.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Vowel-less names tolerated before a generation call gives up.
pub const DEFAULT_MAX_RESTARTS: usize = 10_000;

/// Parameters of a generation call.
///
/// # Fields
/// - `noise`: probability that a letter is drawn uniformly from `a..=z`
///   instead of from the transition counts. Not range-checked: values <= 0
///   always follow the model, values >= 1 are always random.
/// - `max_attempts`: attempt budget of the next-letter loop, the last attempt
///   being the emergency vowel.
/// - `max_restarts`: how many vowel-less names may be discarded before
///   giving up. `None` retries forever.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct SamplerConfig {
	pub noise: f32,
	pub max_attempts: usize,
	pub max_restarts: Option<usize>,
}

impl Default for SamplerConfig {
	fn default() -> Self {
		Self {
			noise: 0.0,
			max_attempts: DEFAULT_MAX_ATTEMPTS,
			max_restarts: Some(DEFAULT_MAX_RESTARTS),
		}
	}
}

impl SamplerConfig {
	pub fn with_noise(mut self, noise: f32) -> Self {
		self.noise = noise;
		self
	}

	pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
		self.max_attempts = max_attempts;
		self
	}

	pub fn with_max_restarts(mut self, max_restarts: Option<usize>) -> Self {
		self.max_restarts = max_restarts;
		self
	}
}
