//! Filename normalization and spoken-text resolution.
//!
//! Pure string transformations only; no I/O lives here.

mod normalizer;

pub use normalizer::{GenerationTask, NormalizeError, normalize, resolve, spoken_text};
