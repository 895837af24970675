//! Token norm computation.

use crate::config::TextConfig;
use unicode_normalization::UnicodeNormalization;

/// Computes the normalized form of a token used for stop-word checks and
/// case-insensitive comparisons.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: TextConfig,
}

impl Normalizer {
    /// Creates a new normalizer with the given configuration.
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Creates a normalizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TextConfig::default())
    }

    /// Returns the norm of a token. Whitespace tokens are returned unchanged.
    pub fn norm(&self, token: &str) -> String {
        if token.chars().all(char::is_whitespace) {
            return token.to_string();
        }

        let mut result: String = if self.config.unicode_normalize {
            token.nfc().collect()
        } else {
            token.to_string()
        };

        if self.config.lowercase_norm {
            result = result.to_lowercase();
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        let normalizer = Normalizer::default_config();
        assert_eq!(normalizer.norm("HELLO"), "hello");
    }

    #[test]
    fn test_composition() {
        let normalizer = Normalizer::default_config();
        // "e" followed by a combining acute accent composes to a single char
        assert_eq!(normalizer.norm("Cafe\u{301}"), "caf\u{e9}");
    }

    #[test]
    fn test_whitespace_untouched() {
        let normalizer = Normalizer::default_config();
        assert_eq!(normalizer.norm("\n"), "\n");
    }

    #[test]
    fn test_case_preserved_when_disabled() {
        let config = TextConfig {
            lowercase_norm: false,
            ..Default::default()
        };
        let normalizer = Normalizer::new(config);
        assert_eq!(normalizer.norm("Queen"), "Queen");
    }
}
