//! The vocabulary catalogue voiced by the generator.
//!
//! Provides the closed category set, the hand-curated tables mirroring the
//! data shipped in the learning app, and whole-batch validation.

#[allow(clippy::module_inception)]
mod catalogue;
mod category;
mod tables;

pub use catalogue::{Catalogue, CatalogueEntry, CatalogueError};
pub use category::Category;
