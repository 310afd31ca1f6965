//! End-to-end generation for a selected scope of the catalogue.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use crate::catalogue::{Catalogue, CatalogueEntry, Category};
use crate::naming;
use crate::tts::SpeechSynthesizer;

/// Obsolete W-row kana. Not part of the primary tables, but the shipped
/// asset sets include them, so full runs regenerate them as a fixed
/// post-pass after each kana category.
const HISTORICAL_HIRAGANA: &[(&str, &str)] = &[("wi", "ゐ"), ("we", "ゑ")];
const HISTORICAL_KATAKANA: &[(&str, &str)] = &[("WI", "ヰ"), ("WE", "ヱ")];

/// Which part of the catalogue a run covers: an optional single category
/// and a half-open index range applied within each selected category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub category: Option<Category>,
    pub start: usize,
    pub end: Option<usize>,
}

impl Selection {
    pub fn includes(&self, category: Category) -> bool {
        self.category.is_none_or(|c| c == category)
    }

    /// Slice a category's ordered entries by `[start, end)`, clamped to the
    /// entry count. An out-of-bounds range selects nothing.
    pub fn slice<'a>(&self, entries: &'a [CatalogueEntry]) -> &'a [CatalogueEntry] {
        let start = self.start.min(entries.len());
        let end = self.end.unwrap_or(entries.len()).min(entries.len()).max(start);
        &entries[start..end]
    }

    /// True when no index restriction is active. The historical-kana
    /// post-pass only runs for unrestricted selections, since the extra
    /// glyphs sit outside the tables' index space.
    pub fn unrestricted_range(&self) -> bool {
        self.start == 0 && self.end.is_none()
    }
}

/// Counts reported at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub generated: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Drives generation: one entry at a time, in catalogue order, skipping
/// entries whose output file already exists.
pub struct Generator<S> {
    synthesizer: S,
    audio_dir: PathBuf,
    lang: String,
    dry_run: bool,
}

impl<S: SpeechSynthesizer> Generator<S> {
    pub fn new(synthesizer: S, audio_dir: PathBuf, lang: String, dry_run: bool) -> Self {
        Self { synthesizer, audio_dir, lang, dry_run }
    }

    /// Run generation over the selected scope.
    ///
    /// Validates the whole catalogue up front: a single malformed entry
    /// aborts the run before any synthesis request is issued or any file
    /// is written. Per-entry synthesis failures are logged and skipped.
    ///
    /// # Errors
    /// Returns an error on catalogue validation failure or if the output
    /// directory cannot be created.
    pub async fn run(&self, catalogue: &Catalogue, selection: &Selection) -> Result<RunStats> {
        catalogue.validate().context("catalogue validation failed")?;

        fs::create_dir_all(&self.audio_dir)
            .with_context(|| format!("failed to create output directory {}", self.audio_dir.display()))?;

        let mut stats = RunStats::default();

        for &category in &Category::ALL {
            if !selection.includes(category) {
                continue;
            }

            let entries = selection.slice(catalogue.entries(category));
            debug!("Processing {} {} entries", entries.len(), category);

            for entry in entries {
                self.process(entry, &mut stats).await;
            }

            if selection.unrestricted_range() {
                for &(key, text) in historical_kana(category) {
                    let entry = CatalogueEntry {
                        category,
                        key: key.to_string(),
                        text: text.to_string(),
                    };
                    self.process(&entry, &mut stats).await;
                }
            }
        }

        Ok(stats)
    }

    async fn process(&self, entry: &CatalogueEntry, stats: &mut RunStats) {
        // Validation has already vetted the catalogue; this only trips for
        // post-pass entries, which are ours and well-formed.
        let task = match naming::resolve(entry) {
            Ok(task) => task,
            Err(e) => {
                error!("❌ Skipping {} '{}': {}", entry.category, entry.key, e);
                stats.failed += 1;
                return;
            }
        };

        let path = self.audio_dir.join(format!("{}.mp3", task.filename));

        if path.exists() {
            debug!("Skipping {} (already exists)", path.display());
            stats.skipped += 1;
            return;
        }

        if self.dry_run {
            info!("Would generate \"{}\" -> {}", task.text_to_speak, path.display());
            stats.generated += 1;
            return;
        }

        info!("Generating audio for \"{}\" -> {}", task.text_to_speak, path.display());

        match self.synthesizer.synthesize(&task.text_to_speak, &self.lang).await {
            Ok(bytes) => {
                if let Err(e) = fs::write(&path, &bytes) {
                    error!("❌ Failed to write {}: {}", path.display(), e);
                    stats.failed += 1;
                } else {
                    stats.generated += 1;
                }
            }
            Err(e) => {
                error!("❌ Synthesis failed for \"{}\" -> {}: {}", task.text_to_speak, path.display(), e);
                stats.failed += 1;
            }
        }
    }
}

fn historical_kana(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::Hiragana => HISTORICAL_HIRAGANA,
        Category::Katakana => HISTORICAL_KATAKANA,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use tempfile::TempDir;

    use super::*;
    use crate::tts::SynthesisError;

    /// Records every synthesis invocation; optionally fails for one text.
    struct FakeSynth {
        calls: RefCell<Vec<String>>,
        fail_for: Option<String>,
    }

    impl FakeSynth {
        fn new() -> Self {
            Self { calls: RefCell::new(Vec::new()), fail_for: None }
        }

        fn failing_for(text: &str) -> Self {
            Self { calls: RefCell::new(Vec::new()), fail_for: Some(text.to_string()) }
        }
    }

    impl SpeechSynthesizer for &FakeSynth {
        async fn synthesize(&self, text: &str, _lang: &str) -> Result<Vec<u8>, SynthesisError> {
            self.calls.borrow_mut().push(text.to_string());
            if self.fail_for.as_deref() == Some(text) {
                return Err(SynthesisError::EmptyAudio);
            }
            Ok(vec![0xff, 0xf3])
        }
    }

    fn entry(category: Category, key: &str, text: &str) -> CatalogueEntry {
        CatalogueEntry { category, key: key.to_string(), text: text.to_string() }
    }

    fn word_catalogue(keys: &[&str]) -> Catalogue {
        Catalogue::from_entries(keys.iter().map(|k| entry(Category::Word, k, "語")).collect())
    }

    // The kana post-pass fires on any unrestricted run that includes the
    // kana categories, so word-table tests filter to Word.
    fn select_words() -> Selection {
        Selection { category: Some(Category::Word), start: 0, end: None }
    }

    fn generator<'a>(synth: &'a FakeSynth, dir: &TempDir, dry_run: bool) -> Generator<&'a FakeSynth> {
        Generator::new(synth, dir.path().to_path_buf(), "ja".to_string(), dry_run)
    }

    #[tokio::test]
    async fn generates_one_file_per_entry() {
        let dir = TempDir::new().unwrap();
        let synth = FakeSynth::new();
        let catalogue = word_catalogue(&["neko", "inu"]);

        let stats = generator(&synth, &dir, false).run(&catalogue, &select_words()).await.unwrap();

        assert_eq!(stats, RunStats { generated: 2, skipped: 0, failed: 0 });
        assert!(dir.path().join("word_neko.mp3").exists());
        assert!(dir.path().join("word_inu.mp3").exists());
        assert_eq!(synth.calls.borrow().len(), 2);
    }

    #[tokio::test]
    async fn second_run_makes_no_synthesis_calls() {
        let dir = TempDir::new().unwrap();
        let catalogue = word_catalogue(&["neko", "inu"]);

        let first = FakeSynth::new();
        generator(&first, &dir, false).run(&catalogue, &select_words()).await.unwrap();

        let second = FakeSynth::new();
        let stats = generator(&second, &dir, false).run(&catalogue, &select_words()).await.unwrap();

        assert_eq!(stats, RunStats { generated: 0, skipped: 2, failed: 0 });
        assert!(second.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn preexisting_file_is_skipped_and_left_untouched() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("word_neko.mp3");
        fs::write(&target, b"").unwrap();

        let synth = FakeSynth::new();
        let catalogue = word_catalogue(&["neko"]);
        let stats = generator(&synth, &dir, false).run(&catalogue, &select_words()).await.unwrap();

        assert_eq!(stats.skipped, 1);
        assert!(synth.calls.borrow().is_empty());
        assert_eq!(fs::metadata(&target).unwrap().len(), 0);
    }

    #[tokio::test]
    async fn range_selects_exactly_the_half_open_slice() {
        let dir = TempDir::new().unwrap();
        let synth = FakeSynth::new();
        let catalogue = word_catalogue(&["zero", "one", "two", "three"]);
        let selection = Selection { category: None, start: 1, end: Some(3) };

        let stats = generator(&synth, &dir, false).run(&catalogue, &selection).await.unwrap();

        assert_eq!(stats.generated, 2);
        assert!(!dir.path().join("word_zero.mp3").exists());
        assert!(dir.path().join("word_one.mp3").exists());
        assert!(dir.path().join("word_two.mp3").exists());
        assert!(!dir.path().join("word_three.mp3").exists());
    }

    #[tokio::test]
    async fn out_of_bounds_range_selects_nothing() {
        let dir = TempDir::new().unwrap();
        let synth = FakeSynth::new();
        let catalogue = word_catalogue(&["neko"]);
        let selection = Selection { category: None, start: 10, end: Some(20) };

        let stats = generator(&synth, &dir, false).run(&catalogue, &selection).await.unwrap();

        assert_eq!(stats, RunStats::default());
        assert!(synth.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn unrestricted_kana_runs_include_the_historical_pair() {
        let dir = TempDir::new().unwrap();
        let synth = FakeSynth::new();
        let catalogue = Catalogue::from_entries(vec![entry(Category::Hiragana, "a", "あ")]);
        let selection = Selection { category: Some(Category::Hiragana), start: 0, end: None };

        let stats = generator(&synth, &dir, false).run(&catalogue, &selection).await.unwrap();

        assert_eq!(stats.generated, 3);
        assert!(dir.path().join("h_wi.mp3").exists());
        assert!(dir.path().join("h_we.mp3").exists());
    }

    #[tokio::test]
    async fn restricted_ranges_omit_the_historical_pair() {
        let dir = TempDir::new().unwrap();
        let synth = FakeSynth::new();
        let catalogue = Catalogue::from_entries(vec![
            entry(Category::Hiragana, "a", "あ"),
            entry(Category::Hiragana, "i", "い"),
        ]);
        let selection = Selection { category: Some(Category::Hiragana), start: 0, end: Some(2) };

        generator(&synth, &dir, false).run(&catalogue, &selection).await.unwrap();

        assert!(!dir.path().join("h_wi.mp3").exists());
        assert!(!dir.path().join("h_we.mp3").exists());
    }

    #[tokio::test]
    async fn one_failed_entry_does_not_abort_the_run() {
        let dir = TempDir::new().unwrap();
        let synth = FakeSynth::failing_for("... 語");
        let catalogue = Catalogue::from_entries(vec![
            entry(Category::Word, "kotoba", "語"),
            entry(Category::Word, "neko", "猫"),
        ]);

        let stats = generator(&synth, &dir, false).run(&catalogue, &select_words()).await.unwrap();

        assert_eq!(stats, RunStats { generated: 1, skipped: 0, failed: 1 });
        assert!(!dir.path().join("word_kotoba.mp3").exists());
        assert!(dir.path().join("word_neko.mp3").exists());
    }

    #[tokio::test]
    async fn bad_data_aborts_before_any_synthesis() {
        let dir = TempDir::new().unwrap();
        let synth = FakeSynth::new();
        let catalogue = Catalogue::from_entries(vec![
            entry(Category::Word, "neko", "猫"),
            entry(Category::Word, "kara", ""),
        ]);

        let result = generator(&synth, &dir, false).run(&catalogue, &select_words()).await;

        assert!(result.is_err());
        assert!(synth.calls.borrow().is_empty());
        assert!(!dir.path().join("word_neko.mp3").exists());
    }

    #[tokio::test]
    async fn dry_run_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let synth = FakeSynth::new();
        let catalogue = word_catalogue(&["neko"]);

        let stats = generator(&synth, &dir, true).run(&catalogue, &select_words()).await.unwrap();

        assert_eq!(stats.generated, 1);
        assert!(synth.calls.borrow().is_empty());
        assert!(!dir.path().join("word_neko.mp3").exists());
    }
}
