//! The closed set of vocabulary categories.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A vocabulary category. The set is closed: audio filenames derived from it
/// are referenced by identifier from the learning app, so variants must not
/// be added or reordered without regenerating the shipped asset set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Hiragana syllabary characters
    Hiragana,
    /// Katakana syllabary characters
    Katakana,
    /// Numerals 1-100
    #[value(name = "numbers")]
    Number,
    /// Single-kanji readings
    Kanji,
    /// Everyday vocabulary words
    #[value(name = "words")]
    Word,
    /// Common phrases and sentences
    #[value(name = "sentences")]
    Sentence,
    /// Grammar conjugation examples
    Grammar,
}

impl Category {
    /// All categories in declaration order. Drives unfiltered runs, so the
    /// order here is the processing and logging order.
    pub const ALL: [Category; 7] = [
        Category::Hiragana,
        Category::Katakana,
        Category::Number,
        Category::Kanji,
        Category::Word,
        Category::Sentence,
        Category::Grammar,
    ];

    /// Filename prefix contributed by this category.
    ///
    /// Prefixes are disjoint, which is what guarantees cross-category
    /// filename uniqueness (the same romanization can and does appear in
    /// several categories). Grammar keys are free-form identifiers that are
    /// unique on their own and historically carried no prefix.
    pub fn prefix(&self) -> &'static str {
        match self {
            Category::Hiragana => "h_",
            Category::Katakana => "k_",
            Category::Number => "num_",
            Category::Kanji => "kanji_",
            Category::Word => "word_",
            Category::Sentence => "sentence_",
            Category::Grammar => "",
        }
    }

    /// Whether keys in this category are free-form romanized phrases (as
    /// opposed to short identifiers that are already filename-safe).
    /// Phrase keys go through the full normalization rules.
    pub fn phrase_keyed(&self) -> bool {
        matches!(self, Category::Word | Category::Sentence | Category::Grammar)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Hiragana => "hiragana",
            Category::Katakana => "katakana",
            Category::Number => "numbers",
            Category::Kanji => "kanji",
            Category::Word => "words",
            Category::Sentence => "sentences",
            Category::Grammar => "grammar",
        };
        write!(f, "{}", name)
    }
}
