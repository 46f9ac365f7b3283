use thiserror::Error;

/// Errors raised while training, storing, or sampling letter models.
#[derive(Error, Debug)]
pub enum NameGenError {
	/// No training line survived trimming and the length filter.
	#[error("corpus contains no name of at least 2 characters")]
	EmptyCorpus,

	/// A weighted draw was requested over a table with no positive weight.
	#[error("cannot sample from empty {0} distribution")]
	EmptyDistribution(&'static str),

	/// Every draw in the restart budget produced a name without a vowel.
	#[error("no name with a vowel after {restarts} restarts")]
	RestartLimit { restarts: usize },

	#[error("invalid path: {0}")]
	InvalidPath(String),

	#[error("model '{0}' is already loaded")]
	ModelAlreadyLoaded(String),

	#[error("model '{0}' not found")]
	UnknownModel(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("model (de)serialization failed: {0}")]
	Serialization(#[from] postcard::Error),
}

pub type Result<T> = std::result::Result<T, NameGenError>;
