//! Deterministic mapping from catalogue entries to output filenames and
//! synthesis-ready text.

use thiserror::Error;

use crate::catalogue::{CatalogueEntry, Category};

/// Short filler prepended to every spoken text so the rendered audio does
/// not begin abruptly mid-utterance.
const SILENT_PAUSE: &str = "... ";

/// Placeholder in sentence texts marking a fill-in-the-blank slot.
const PLACEHOLDER: &str = "...";

/// Japanese pause mark substituted for the placeholder before synthesis.
const PAUSE_MARK: &str = "、";

/// A normalized filename contained characters outside the allowed grammar.
/// This is a data-authoring error in the tables, not a runtime condition.
#[derive(Debug, Error)]
#[error("key '{key}' normalizes to '{filename}', expected only ASCII letters, digits and '_'")]
pub struct NormalizeError {
    pub key: String,
    pub filename: String,
}

/// A fully resolved unit of work: the base filename (no extension) and the
/// exact text handed to the synthesis adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTask {
    pub filename: String,
    pub text_to_speak: String,
}

/// Derive the filesystem-safe base filename for a catalogue key.
///
/// Verbatim-key categories (kana, numbers, kanji) keep the key as-is, case
/// preserved, behind the category prefix. Phrase-keyed categories apply, in
/// order: lower-case, spaces to underscores, literal `...` to `desu`, strip
/// `?`. The order is load-bearing: a later rule must not reintroduce what an
/// earlier one removed.
pub fn normalize(category: Category, key: &str) -> Result<String, NormalizeError> {
    let base = if category.phrase_keyed() {
        key.to_lowercase().replace(' ', "_").replace(PLACEHOLDER, "desu").replace('?', "")
    } else {
        key.to_string()
    };

    let filename = format!("{}{}", category.prefix(), base);

    if filename.is_empty() || !filename.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(NormalizeError { key: key.to_string(), filename });
    }

    Ok(filename)
}

/// Resolve the text actually sent to the synthesizer.
///
/// Sentence placeholders become a spoken pause (`、`) — distinct from the
/// filename's `...`-to-`desu` rule, which only ever touches the key. The
/// silent-pause filler is then prepended for every category.
pub fn spoken_text(category: Category, text: &str) -> String {
    let resolved = if category == Category::Sentence {
        text.replace(PLACEHOLDER, PAUSE_MARK)
    } else {
        text.to_string()
    };
    format!("{}{}", SILENT_PAUSE, resolved)
}

/// Join an entry through both transformations into a [`GenerationTask`].
pub fn resolve(entry: &CatalogueEntry) -> Result<GenerationTask, NormalizeError> {
    Ok(GenerationTask {
        filename: normalize(entry.category, &entry.key)?,
        text_to_speak: spoken_text(entry.category, &entry.text),
    })
}
