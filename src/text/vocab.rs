//! Shared lexical vocabulary.

use crate::config::TextConfig;
use crate::text::attrs::LexFlags;
use crate::text::{Normalizer, StopWords};
use once_cell::sync::Lazy;
use std::sync::Arc;

static ENGLISH: Lazy<Arc<Vocab>> = Lazy::new(|| Arc::new(Vocab::default()));

/// Lexical knowledge shared by every document produced from it: the
/// stop-word list and the token normalizer.
///
/// Documents keep an `Arc<Vocab>` back-reference, so a vocabulary is
/// immutable once shared. Customize stop words before wrapping it in `Arc`.
#[derive(Debug, Clone)]
pub struct Vocab {
    stop_words: StopWords,
    normalizer: Normalizer,
    language: String,
}

impl Default for Vocab {
    fn default() -> Self {
        Self::new(TextConfig::default())
    }
}

impl Vocab {
    /// Creates a vocabulary for the configured language.
    pub fn new(config: TextConfig) -> Self {
        Self {
            stop_words: StopWords::for_language(&config.language),
            language: config.language.clone(),
            normalizer: Normalizer::new(config),
        }
    }

    /// Creates a vocabulary with an explicit stop-word list.
    pub fn with_stop_words(config: TextConfig, stop_words: StopWords) -> Self {
        Self {
            stop_words,
            language: config.language.clone(),
            normalizer: Normalizer::new(config),
        }
    }

    /// Shared default English vocabulary.
    pub fn english() -> Arc<Vocab> {
        Arc::clone(&ENGLISH)
    }

    /// Language code of this vocabulary.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The stop-word list.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Mutable access to the stop-word list.
    pub fn stop_words_mut(&mut self) -> &mut StopWords {
        &mut self.stop_words
    }

    /// Checks whether `word` is a stop word.
    pub fn is_stop(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Normalized form of `word`.
    pub fn norm(&self, word: &str) -> String {
        self.normalizer.norm(word)
    }

    /// All lexical flags for `word`, including stop-word membership.
    pub fn flags(&self, word: &str) -> LexFlags {
        LexFlags {
            is_stop: self.is_stop(word),
            ..LexFlags::of(word)
        }
    }
}
