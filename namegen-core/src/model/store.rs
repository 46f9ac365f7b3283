use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::io::{read_lines, sibling_with_extension};
use super::letter_model::LetterModel;
use super::trainer::train_parallel;

/// Extension of the cached model written next to a corpus.
pub const CACHE_EXTENSION: &str = "bin";

/// Writes `model` to `path` with postcard.
pub fn save<P: AsRef<Path>>(model: &LetterModel, path: P) -> Result<()> {
	let bytes = postcard::to_stdvec(model)?;
	fs::write(&path, bytes)?;
	info!(path = %path.as_ref().display(), names = model.name_count(), "saved letter model");
	Ok(())
}

/// Reads a model previously written by [`save`].
pub fn load<P: AsRef<Path>>(path: P) -> Result<LetterModel> {
	let bytes = fs::read(&path)?;
	let model: LetterModel = postcard::from_bytes(&bytes)?;
	info!(path = %path.as_ref().display(), names = model.name_count(), "loaded letter model");
	Ok(model)
}

/// Returns the model of a corpus file, training it only once.
///
/// - If `<stem>.bin` exists next to the corpus, it is loaded as is
///   (the corpus file itself is not read).
/// - Otherwise the corpus is read, trained in parallel, and the result is
///   cached to `<stem>.bin` for the next run.
pub fn load_or_train<P: AsRef<Path>>(corpus: P) -> Result<LetterModel> {
	let cache = sibling_with_extension(&corpus, CACHE_EXTENSION)?;
	if cache.exists() {
		return load(&cache);
	}

	let model = train_parallel(read_lines(&corpus)?)?;
	save(&model, &cache)?;
	Ok(model)
}
