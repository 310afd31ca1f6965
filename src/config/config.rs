//! Application configuration and CLI argument parsing.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::catalogue::Category;

/// Pronunciation audio generator configuration.
#[derive(Parser, Debug, Clone)]
#[command(name = "kotoba-audio")]
#[command(author, version, about = "Generate pronunciation audio for the vocabulary catalogue", long_about = None)]
pub struct AppConfig {
    /// Restrict generation to a single category (default: all categories)
    #[arg(value_enum)]
    pub category: Option<Category>,

    /// First entry index to process within each selected category
    #[arg(long, default_value = "0")]
    pub start: usize,

    /// One past the last entry index to process (default: end of category)
    #[arg(long)]
    pub end: Option<usize>,

    /// Directory the MP3 files are written to (created if absent)
    #[arg(long, default_value = "audio")]
    pub audio_dir: PathBuf,

    /// Spoken-language code sent to the TTS service
    #[arg(long, default_value = "ja")]
    pub lang: String,

    /// Resolve and list every selected task without synthesizing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl AppConfig {
    /// Parse configuration from command line arguments.
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if let Some(end) = self.end
            && end <= self.start
        {
            anyhow::bail!("--end ({}) must be greater than --start ({})", end, self.start);
        }

        if self.lang.trim().is_empty() {
            anyhow::bail!("--lang must not be empty");
        }

        Ok(())
    }

    /// Log the current configuration.
    pub fn log_config(&self) {
        info!("Configuration:");
        info!("  Audio directory: {}", self.audio_dir.display());
        match self.category {
            Some(category) => info!("  Category: {}", category),
            None => info!("  Category: all"),
        }
        match self.end {
            Some(end) => info!("  Entry range: [{}, {})", self.start, end),
            None if self.start > 0 => info!("  Entry range: [{}, end)", self.start),
            None => info!("  Entry range: full"),
        }
        info!("  Language: {}", self.lang);
        if self.dry_run {
            info!("  Dry run: no files will be written");
        }
    }
}
