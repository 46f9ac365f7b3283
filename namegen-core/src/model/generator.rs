use std::collections::BTreeMap;
use std::path::Path;

use rand::Rng;
use tracing::info;

use crate::error::{NameGenError, Result};
use crate::io;
use super::letter_model::LetterModel;
use super::sampler::Sampler;
use super::sampler_config::SamplerConfig;
use super::store;

/// Extension of the corpus files picked up by [`Generator::new`].
pub const CORPUS_EXTENSION: &str = "txt";

/// Registry of letter models, one per corpus.
///
/// # Responsibilities
/// - Load (or train and cache) every corpus of a directory
/// - Keep the models keyed by corpus name (file stem)
/// - Generate names from a chosen model
#[derive(Debug, Default)]
pub struct Generator {
	models: BTreeMap<String, LetterModel>,
}

impl Generator {
	/// Creates a generator from every `.txt` corpus in a directory.
	///
	/// # Behavior
	/// - `"."` and `"./"` are resolved to the working directory.
	/// - Each corpus is loaded through [`store::load_or_train`], so its
	///   `.bin` cache is reused or written.
	/// - The model name is the file name without extension.
	///
	/// # Errors
	/// - `InvalidPath` if the path is not a directory.
	/// - Any training or store error of a corpus.
	pub fn new<P: AsRef<Path>>(folder: P) -> Result<Self> {
		let folder = io::resolve_folder(folder.as_ref());
		if !folder.is_dir() {
			return Err(NameGenError::InvalidPath(format!("expected a directory, got {}", folder.display())));
		}

		let mut generator = Self::default();
		for corpus in io::files_with_extension(&folder, CORPUS_EXTENSION)? {
			let key = io::corpus_key(&corpus)?;
			generator.insert(key, store::load_or_train(&corpus)?)?;
		}
		info!(models = generator.models.len(), folder = %folder.display(), "generator ready");
		Ok(generator)
	}

	/// Registers an already built model under `name`.
	///
	/// # Errors
	/// Returns `ModelAlreadyLoaded` if the name is taken.
	pub fn insert(&mut self, name: impl Into<String>, model: LetterModel) -> Result<()> {
		let name = name.into();
		if self.models.contains_key(&name) {
			return Err(NameGenError::ModelAlreadyLoaded(name));
		}
		self.models.insert(name, model);
		Ok(())
	}

	/// Names of the loaded models, sorted.
	pub fn get_model_names(&self) -> Vec<String> {
		self.models.keys().cloned().collect()
	}

	pub fn model(&self, name: &str) -> Option<&LetterModel> {
		self.models.get(name)
	}

	/// Generates one name from the model called `name`.
	///
	/// # Errors
	/// `UnknownModel` if no such model is loaded, otherwise any sampler error.
	pub fn generate<R: Rng + ?Sized>(&self, name: &str, config: SamplerConfig, rng: &mut R) -> Result<String> {
		let model = self.model(name).ok_or_else(|| NameGenError::UnknownModel(name.to_owned()))?;
		Sampler::new(model, config)?.generate(rng)
	}
}
