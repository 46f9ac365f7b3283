use std::sync::mpsc;
use std::thread;

use tracing::{debug, info};

use crate::error::{NameGenError, Result};
use super::letter_model::LetterModel;

/// Chunks handed to each CPU during parallel training.
const CHUNKS_PER_CPU: usize = 8;

/// Turns a raw corpus line into a training name.
///
/// Surrounding whitespace is stripped and the result lower-cased. Returns
/// `None` for lines shorter than 2 characters.
///
/// Non-alphabetic characters (`-`, `'`, digits) are kept as letters of their
/// own, so only alphabetic corpora yield purely alphabetic digrams and trigrams.
pub fn normalize_line(line: &str) -> Option<Vec<char>> {
	let name: Vec<char> = line.trim().to_lowercase().chars().collect();
	if name.len() < 2 {
		return None;
	}
	Some(name)
}

/// Feeds every usable line into `model` and returns how many were retained.
fn absorb<I, S>(model: &mut LetterModel, lines: I) -> usize
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut retained = 0;
	for line in lines {
		if let Some(name) = normalize_line(line.as_ref()) {
			model.add_name(&name);
			retained += 1;
		}
	}
	retained
}

/// Builds a `LetterModel` from raw names, one pass, no smoothing.
///
/// # Errors
/// Returns `EmptyCorpus` if no line survives normalization.
pub fn train<I, S>(names: I) -> Result<LetterModel>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut model = LetterModel::default();
	let retained = absorb(&mut model, names);
	if retained == 0 {
		return Err(NameGenError::EmptyCorpus);
	}
	debug!(retained, "trained letter model");
	Ok(model)
}

/// Same result as [`train`], built on worker threads.
///
/// # Behavior
/// - Splits the lines into `cpus * 8` chunks
/// - Builds a partial model per chunk on its own thread
/// - Merges the partial models as they arrive over an MPSC channel
///
/// Merging sums counts and unions sets, so arrival order does not matter.
pub fn train_parallel(lines: Vec<String>) -> Result<LetterModel> {
	let chunks = num_cpus::get() * CHUNKS_PER_CPU;
	let chunk_size = lines.len().div_ceil(chunks).max(1);

	let (tx, rx) = mpsc::channel();
	for chunk in lines.chunks(chunk_size) {
		let tx = tx.clone();
		let chunk = chunk.to_vec();

		thread::spawn(move || {
			let mut partial = LetterModel::default();
			absorb(&mut partial, &chunk);
			tx.send(partial).expect("Failed to send from thread");
		});
	}
	drop(tx);

	let mut model = LetterModel::default();
	for partial in rx.iter() {
		model.merge(&partial);
	}

	if model.is_empty() {
		return Err(NameGenError::EmptyCorpus);
	}
	info!(names = model.name_count(), lines = lines.len(), "trained letter model in parallel");
	Ok(model)
}
