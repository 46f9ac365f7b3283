//! Letter-statistics name generation library.
//!
//! This crate learns how names are spelled from a plain corpus and
//! synthesizes new ones with the same texture:
//! - Per-letter transition counts, first-letter and length distributions
//! - Start/end digram and trigram membership sets used as structural filters
//! - Constrained random walk with a tunable noise level
//! - A postcard cache so a corpus is only analyzed once
//!
//! Only the high-level API is exposed publicly. File helpers are kept
//! internal.

/// Letter model, training, sampling and storage.
pub mod model;

/// Error type shared by every fallible operation of the crate.
pub mod error;

/// I/O utilities (corpus reading, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use error::{NameGenError, Result};
pub use model::letter_model::LetterModel;
pub use model::sampler::{Generated, Sampler};
pub use model::sampler_config::SamplerConfig;
