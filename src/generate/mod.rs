//! Generation driver.
//!
//! Orchestrates catalogue iteration, range selection, the skip-existing
//! cache check and the synthesis calls.

mod driver;

pub use driver::{Generator, RunStats, Selection};
