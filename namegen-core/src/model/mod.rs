//! Letter-statistics name model.
//!
//! - `LetterModel`: the statistics bundle shared by every other part
//! - `trainer`: corpus lines -> `LetterModel`
//! - `sampler`: `LetterModel` + noise -> generated name
//! - `store`: postcard cache of trained models
//! - `generator`: several named models loaded from a folder

/// Immutable statistics bundle (transitions, distributions, digram/trigram sets).
pub mod letter_model;

/// Builds a `LetterModel` from raw names, sequentially or on worker threads.
pub mod trainer;

/// Constrained random walk with rejection, fallback and restart.
pub mod sampler;

/// Generation parameters (noise, attempt and restart budgets).
pub mod sampler_config;

/// Saves and loads `LetterModel`s, caching trained corpora.
pub mod store;

/// High-level registry generating from several corpora.
pub mod generator;

/// Cumulative-weight sampling primitive.
/// This module is not exposed publicly.
mod weighted;
