//! Configuration module for the audio generator.
//!
//! Provides CLI argument parsing and configuration validation.

#[allow(clippy::module_inception)]
mod config;

pub use config::AppConfig;
