//! Tokenization of raw text into documents.

use crate::doc::{Document, Token};
use crate::text::Vocab;
use rayon::prelude::*;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Splits text into tokens on Unicode word boundaries.
///
/// Words and punctuation marks become tokens. A single space after a token
/// is folded into that token's `whitespace` flag; any other whitespace
/// (newlines, runs of spaces) is kept as a token of its own, with whitespace
/// following a line break joined onto it, so
/// `"This is a\nthird sentence."` yields
/// `["This", "is", "a", "\n", "third", "sentence", "."]`.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    vocab: Arc<Vocab>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(Vocab::english())
    }
}

impl Tokenizer {
    /// Creates a tokenizer producing documents bound to `vocab`.
    pub fn new(vocab: Arc<Vocab>) -> Self {
        Self { vocab }
    }

    /// The vocabulary attached to produced documents.
    pub fn vocab(&self) -> &Arc<Vocab> {
        &self.vocab
    }

    /// Tokenizes text into an unparsed document.
    pub fn tokenize(&self, text: &str) -> Document {
        let mut tokens: Vec<Token> = Vec::new();

        for (start, segment) in text.split_word_bound_indices() {
            if !segment.chars().all(char::is_whitespace) {
                tokens.push(Token::new(segment, tokens.len(), start));
                continue;
            }

            // Whitespace after a newline token extends that token
            if let Some(prev) = tokens.last_mut().filter(|t| t.starts_with_newline()) {
                let merged = format!("{}{}", prev.text, segment);
                *prev = Token::new(merged, prev.index, prev.start);
                continue;
            }

            let (rest, rest_start) = match tokens.last_mut() {
                Some(prev) if segment.starts_with(' ') && !prev.whitespace && !prev.flags.is_space => {
                    prev.whitespace = true;
                    (&segment[1..], start + 1)
                }
                _ => (segment, start),
            };

            if !rest.is_empty() {
                tokens.push(Token::new(rest, tokens.len(), rest_start));
            }
        }

        Document::new(Arc::clone(&self.vocab), tokens)
    }

    /// Tokenizes text and returns only the token strings.
    pub fn tokenize_to_strings(&self, text: &str) -> Vec<String> {
        self.tokenize(text)
            .tokens()
            .iter()
            .map(|t| t.text.clone())
            .collect()
    }

    /// Tokenizes many texts in parallel, preserving input order.
    pub fn tokenize_batch(&self, texts: &[&str]) -> Vec<Document> {
        texts.par_iter().map(|text| self.tokenize(text)).collect()
    }
}
