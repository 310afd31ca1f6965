//! Kotoba Audio - pronunciation asset generator.
//!
//! Generates one MP3 per vocabulary item (kana, numbers, kanji readings,
//! words, sentences, grammar examples) by driving an external TTS service.
//! Existing files are skipped, so runs are incremental and re-runnable.

mod catalogue;
mod config;
mod generate;
mod naming;
mod tts;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::LocalTime;

use catalogue::Catalogue;
use config::AppConfig;
use generate::{Generator, Selection};
use tts::GoogleTranslateTts;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let config = AppConfig::from_args();

    // Respect RUST_LOG env var, fallback to verbose flag, default to info
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| if config.verbose { EnvFilter::try_new("debug") } else { EnvFilter::try_new("info") })
        .unwrap();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(LocalTime::new(time::macros::format_description!("[hour]:[minute]:[second]")))
        .init();

    info!("🔊 Kotoba Audio v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = config.validate() {
        error!("❌ Configuration error: {}", e);
        std::process::exit(1);
    }

    config.log_config();

    let catalogue = Catalogue::load();
    info!("Catalogue loaded: {} entries", catalogue.len());

    let selection = Selection {
        category: config.category,
        start: config.start,
        end: config.end,
    };

    let synthesizer = match GoogleTranslateTts::new() {
        Ok(synth) => synth,
        Err(e) => {
            error!("❌ Failed to create TTS client: {}", e);
            std::process::exit(1);
        }
    };

    let generator = Generator::new(synthesizer, config.audio_dir.clone(), config.lang.clone(), config.dry_run);

    match generator.run(&catalogue, &selection).await {
        Ok(stats) => {
            if config.dry_run {
                info!("Dry run finished: {} to generate, {} already present", stats.generated, stats.skipped);
            } else {
                info!(
                    "✅ Generation finished: {} generated, {} skipped, {} failed",
                    stats.generated, stats.skipped, stats.failed
                );
                info!("Audio files are in {}", config.audio_dir.display());
                if stats.failed > 0 {
                    info!("Failed entries left no file behind; a re-run will retry them.");
                }
            }
            Ok(())
        }
        Err(e) => {
            error!("❌ Generation aborted: {:#}", e);
            std::process::exit(1);
        }
    }
}
