//! Typed catalogue loaded once at startup.

use std::collections::HashMap;

use thiserror::Error;

use crate::naming;

use super::category::Category;
use super::tables;

/// Fatal data errors in the static tables. Any of these aborts the run
/// before a single synthesis request is issued: a bad table means the
/// shipped asset set would be wrong, not just one file.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("{category} entry '{key}' has empty text")]
    EmptyText { category: Category, key: String },

    #[error("{category} entry '{key}' normalizes to invalid filename '{filename}'")]
    InvalidFilename {
        category: Category,
        key: String,
        filename: String,
    },

    #[error(
        "filename collision: '{filename}' produced by both {first} '{first_key}' and {second} '{second_key}'"
    )]
    FilenameCollision {
        filename: String,
        first: Category,
        first_key: String,
        second: Category,
        second_key: String,
    },
}

/// One vocabulary item: a category, a key (romanized identifier, unique
/// within its category) and the literal Japanese text to be spoken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueEntry {
    pub category: Category,
    pub key: String,
    pub text: String,
}

/// The full vocabulary catalogue, grouped by category in declaration order.
/// Immutable after load; entry order within a category is the authoring
/// order, which index-range selection relies on.
pub struct Catalogue {
    categories: Vec<Vec<CatalogueEntry>>,
}

impl Catalogue {
    /// Build the catalogue from the static tables.
    pub fn load() -> Self {
        let categories = Category::ALL
            .iter()
            .map(|&category| {
                tables::table(category)
                    .iter()
                    .map(|&(key, text)| CatalogueEntry {
                        category,
                        key: key.to_string(),
                        text: text.to_string(),
                    })
                    .collect()
            })
            .collect();
        Self { categories }
    }

    /// Entries of one category, in authoring order.
    pub fn entries(&self, category: Category) -> &[CatalogueEntry] {
        &self.categories[category as usize]
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(Vec::len).sum()
    }

    /// Whole-batch validation: non-empty text, every filename well-formed,
    /// no filename produced twice (within or across categories).
    pub fn validate(&self) -> Result<(), CatalogueError> {
        let mut seen: HashMap<String, (Category, String)> = HashMap::new();

        for &category in &Category::ALL {
            for entry in self.entries(category) {
                if entry.text.trim().is_empty() {
                    return Err(CatalogueError::EmptyText {
                        category,
                        key: entry.key.clone(),
                    });
                }

                let filename = naming::normalize(category, &entry.key).map_err(|e| {
                    CatalogueError::InvalidFilename {
                        category,
                        key: entry.key.clone(),
                        filename: e.filename,
                    }
                })?;

                if let Some((first, first_key)) =
                    seen.insert(filename.clone(), (category, entry.key.clone()))
                {
                    return Err(CatalogueError::FilenameCollision {
                        filename,
                        first,
                        first_key,
                        second: category,
                        second_key: entry.key.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Build a catalogue from explicit entries. Test seam for exercising
    /// validation and driver behavior against malformed data.
    #[cfg(test)]
    pub(crate) fn from_entries(entries: Vec<CatalogueEntry>) -> Self {
        let mut categories: Vec<Vec<CatalogueEntry>> = Category::ALL.iter().map(|_| Vec::new()).collect();
        for entry in entries {
            categories[entry.category as usize].push(entry);
        }
        Self { categories }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_catalogue_is_valid() {
        let catalogue = Catalogue::load();
        assert!(catalogue.validate().is_ok());
    }

    #[test]
    fn table_sizes_match_the_app_data() {
        let catalogue = Catalogue::load();
        assert_eq!(catalogue.entries(Category::Hiragana).len(), 71);
        assert_eq!(catalogue.entries(Category::Katakana).len(), 71);
        assert_eq!(catalogue.entries(Category::Number).len(), 37);
        assert_eq!(catalogue.entries(Category::Kanji).len(), 41);
        assert_eq!(catalogue.entries(Category::Word).len(), 78);
        assert_eq!(catalogue.entries(Category::Sentence).len(), 33);
        assert_eq!(catalogue.entries(Category::Grammar).len(), 10);
    }

    #[test]
    fn keys_are_unique_within_each_category() {
        let catalogue = Catalogue::load();
        for &category in &Category::ALL {
            let mut keys: Vec<&str> = catalogue.entries(category).iter().map(|e| e.key.as_str()).collect();
            let total = keys.len();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), total, "duplicate key in {}", category);
        }
    }

    #[test]
    fn entry_order_is_stable() {
        // Index-range selection depends on authoring order; pin the corners.
        let catalogue = Catalogue::load();
        let hiragana = catalogue.entries(Category::Hiragana);
        assert_eq!(hiragana[0].key, "a");
        assert_eq!(hiragana[70].key, "po");
        let numbers = catalogue.entries(Category::Number);
        assert_eq!(numbers[0].key, "ichi");
        assert_eq!(numbers[36].key, "hyaku");
    }

    #[test]
    fn empty_text_is_rejected() {
        let catalogue = Catalogue::from_entries(vec![CatalogueEntry {
            category: Category::Word,
            key: "neko".to_string(),
            text: "  ".to_string(),
        }]);
        assert!(matches!(catalogue.validate(), Err(CatalogueError::EmptyText { .. })));
    }

    #[test]
    fn colliding_filenames_are_rejected() {
        // Both keys normalize to word_neko_desu.
        let entry = |key: &str| CatalogueEntry {
            category: Category::Word,
            key: key.to_string(),
            text: "猫".to_string(),
        };
        let catalogue = Catalogue::from_entries(vec![entry("neko desu"), entry("Neko desu?")]);
        assert!(matches!(catalogue.validate(), Err(CatalogueError::FilenameCollision { .. })));
    }

    #[test]
    fn invalid_characters_are_rejected() {
        let catalogue = Catalogue::from_entries(vec![CatalogueEntry {
            category: Category::Grammar,
            key: "neko-chan".to_string(),
            text: "猫ちゃん".to_string(),
        }]);
        assert!(matches!(catalogue.validate(), Err(CatalogueError::InvalidFilename { .. })));
    }
}
