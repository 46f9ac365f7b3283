use rand::Rng;

use crate::error::{NameGenError, Result};

/// Discrete distribution over a fixed set of outcomes.
///
/// Conceptually the outgoing edges of a letter (or the set of lengths,
/// first letters, fallback vowels) weighted by how often they were seen.
///
/// ## Invariants
/// - `items` and `cumulative` have the same length and are never empty
/// - `cumulative` is strictly increasing, its last value is `total`
#[derive(Clone, Debug)]
pub(crate) struct WeightedTable<T> {
	items: Vec<T>,
	cumulative: Vec<usize>,
	total: usize,
}

impl<T: Copy> WeightedTable<T> {
	/// Builds the prefix sums of the given `(outcome, weight)` pairs.
	///
	/// Zero weights are skipped since they can never be drawn.
	///
	/// # Errors
	/// Returns `EmptyDistribution(label)` if no pair carries a positive weight.
	pub(crate) fn new<I>(label: &'static str, weights: I) -> Result<Self>
	where
		I: IntoIterator<Item = (T, usize)>,
	{
		let mut items = Vec::new();
		let mut cumulative = Vec::new();
		let mut total = 0usize;

		for (item, weight) in weights {
			if weight == 0 {
				continue;
			}
			total += weight;
			items.push(item);
			cumulative.push(total);
		}

		if items.is_empty() {
			return Err(NameGenError::EmptyDistribution(label));
		}
		Ok(Self { items, cumulative, total })
	}

	/// Draws an outcome with probability proportional to its weight.
	///
	/// Picks `r` uniformly in `0..total`, then binary-searches the first
	/// bucket whose cumulative weight exceeds it.
	pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
		let r = rng.random_range(0..self.total);
		let index = self.cumulative.partition_point(|&bound| bound <= r);
		self.items[index]
	}
}
