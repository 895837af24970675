//! Stop-word lists.
//!
//! Lists come from the `stop-words` crate and can be extended or pruned per
//! vocabulary. Membership is case-insensitive.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A mutable set of stop words.
#[derive(Debug, Clone)]
pub struct StopWords {
    /// Lowercased stop words.
    words: FxHashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::for_language("en")
    }
}

impl StopWords {
    /// Loads the stop-word list for a language code.
    ///
    /// Unknown codes fall back to English.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            other => {
                log::warn!("No stop-word list for '{}', using English", other);
                LANGUAGE::English
            }
        };

        Self {
            words: get(lang).iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    /// An empty list.
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Builds a list from explicit words.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Adds a word. Returns false if it was already present.
    pub fn add(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }

    /// Removes a word. Returns false if it was not present.
    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(&word.to_lowercase())
    }

    /// Checks membership, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Checks if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Stop words in lexical order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}
