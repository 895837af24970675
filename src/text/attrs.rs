//! Lexical attribute predicates.
//!
//! These are the context-free flags a word carries regardless of where it
//! appears: whether it is alphabetic, lowercase, punctuation, whitespace or
//! number-like. Stop-word membership depends on the vocabulary and is set by
//! [`Vocab`](crate::text::Vocab).

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_LIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:[.,]\d+)*|\d*[.,]\d+|\d+/\d+)$").unwrap()
});

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion",
];

/// Precomputed lexical flags for a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexFlags {
    /// Every character is alphabetic.
    pub is_alpha: bool,
    /// Has cased characters, all of them lowercase.
    pub is_lower: bool,
    /// Every character is punctuation.
    pub is_punct: bool,
    /// Every character is whitespace.
    pub is_space: bool,
    /// Digits, a fraction, or an English number word.
    pub like_num: bool,
    /// Member of the vocabulary's stop-word list.
    pub is_stop: bool,
}

impl LexFlags {
    /// Computes the context-free flags for `text`. `is_stop` is left unset.
    pub fn of(text: &str) -> Self {
        Self {
            is_alpha: is_alpha(text),
            is_lower: is_lower(text),
            is_punct: is_punct(text),
            is_space: is_space(text),
            like_num: like_num(text),
            is_stop: false,
        }
    }
}

/// Returns true if `text` is non-empty and purely alphabetic.
pub fn is_alpha(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

/// Returns true if `text` has at least one cased character and no uppercase ones.
pub fn is_lower(text: &str) -> bool {
    text.chars().any(char::is_lowercase) && !text.chars().any(char::is_uppercase)
}

/// Returns true if `text` is non-empty and every character is punctuation.
pub fn is_punct(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_punctuation() || is_unicode_punct(c))
}

/// Returns true if `text` is non-empty and whitespace-only.
pub fn is_space(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_whitespace)
}

/// Returns true if `text` looks like a number.
pub fn like_num(text: &str) -> bool {
    if NUMBER_LIKE.is_match(text) {
        return true;
    }
    let lower = text.to_lowercase();
    NUMBER_WORDS.contains(&lower.as_str())
}

fn is_unicode_punct(c: char) -> bool {
    matches!(
        c,
        '\u{2010}'..='\u{2027}' | '\u{2030}'..='\u{205E}' | '\u{3001}'..='\u{3003}' | '\u{00A1}' | '\u{00BF}' | '\u{00AB}' | '\u{00BB}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_alpha() {
        assert!(is_alpha("queen"));
        assert!(is_alpha("Привет"));
        assert!(!is_alpha("queen's"));
        assert!(!is_alpha("b2b"));
        assert!(!is_alpha(""));
    }

    #[test]
    fn test_is_lower() {
        assert!(is_lower("queen"));
        assert!(is_lower("don't"));
        assert!(!is_lower("Queen"));
        assert!(!is_lower("123"));
    }

    #[test]
    fn test_is_punct() {
        assert!(is_punct("."));
        assert!(is_punct("?!"));
        assert!(is_punct("\u{201C}"));
        assert!(!is_punct("a."));
    }

    #[test]
    fn test_is_space() {
        assert!(is_space("\n"));
        assert!(is_space("  \t"));
        assert!(!is_space(""));
        assert!(!is_space(" a"));
    }

    #[test]
    fn test_like_num() {
        assert!(like_num("10"));
        assert!(like_num("3.14"));
        assert!(like_num("1,000"));
        assert!(like_num("3/4"));
        assert!(like_num("Ten"));
        assert!(!like_num("tent"));
        assert!(!like_num("1a"));
    }

    #[test]
    fn test_flags() {
        let flags = LexFlags::of("king");
        assert!(flags.is_alpha);
        assert!(flags.is_lower);
        assert!(!flags.is_punct);
        assert!(!flags.is_stop);
    }
}
