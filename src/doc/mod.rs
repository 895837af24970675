//! Documents: token sequences with sentence-boundary flags.

mod span;
mod token;

pub use span::{Sentences, Span};
pub use token::Token;

use crate::error::{LexicaError, Result};
use crate::text::Vocab;
use std::sync::Arc;

/// An ordered sequence of tokens plus the vocabulary that produced them.
///
/// A document starts unparsed: sentence-start flags may be preset with
/// [`set_sent_start`](Document::set_sent_start). Boundary marking parses it,
/// after which the flags are frozen and sentences can be read.
#[derive(Debug, Clone)]
pub struct Document {
    vocab: Arc<Vocab>,
    tokens: Vec<Token>,
    parsed: bool,
}

impl Document {
    /// Creates a document from externally produced tokens.
    ///
    /// Indices are renumbered to positions, and norms and stop-word flags
    /// are recomputed from `vocab`.
    pub fn new(vocab: Arc<Vocab>, mut tokens: Vec<Token>) -> Self {
        for (i, token) in tokens.iter_mut().enumerate() {
            token.index = i;
            token.norm = vocab.norm(&token.text);
            token.flags.is_stop = vocab.is_stop(&token.norm);
        }
        Self {
            vocab,
            tokens,
            parsed: false,
        }
    }

    /// Creates a document from a word list. Every word except the last is
    /// followed by a space, except before whitespace tokens.
    pub fn from_words(vocab: Arc<Vocab>, words: &[&str]) -> Self {
        let mut tokens = Vec::with_capacity(words.len());
        let mut offset = 0;
        for (i, word) in words.iter().enumerate() {
            let is_ws = |w: &str| w.chars().all(char::is_whitespace);
            let space = words.get(i + 1).is_some_and(|next| !is_ws(word) && !is_ws(next));
            tokens.push(Token::new(*word, i, offset).with_whitespace(space));
            offset += word.len() + usize::from(space);
        }
        Self::new(vocab, tokens)
    }

    /// The vocabulary this document was produced with.
    pub fn vocab(&self) -> &Arc<Vocab> {
        &self.vocab
    }

    /// All tokens.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Token at `index`.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Checks if the document has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether boundary marking has run.
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// Presets the sentence-start flag of a token.
    ///
    /// Fails with [`LexicaError::FrozenState`] once the document is parsed;
    /// re-derive a fresh document from its tokens instead.
    pub fn set_sent_start(&mut self, index: usize, value: bool) -> Result<()> {
        if self.parsed {
            return Err(LexicaError::FrozenState(format!(
                "cannot set is_sent_start on token {} after parsing",
                index
            )));
        }
        let max = self.tokens.len();
        let token = self
            .tokens
            .get_mut(index)
            .ok_or(LexicaError::IndexOutOfBounds { index, max })?;
        token.set_sent_start(value);
        Ok(())
    }

    /// Sentences of a parsed document.
    pub fn sents(&self) -> Result<Sentences<'_>> {
        if !self.parsed {
            return Err(LexicaError::BoundariesUnset);
        }
        Ok(Sentences::new(&self.tokens))
    }

    /// Reconstructs the document text from tokens and trailing spaces.
    pub fn text(&self) -> String {
        self.tokens.iter().map(Token::text_with_ws).collect()
    }

    /// Copies the tokens into a fresh, unparsed document with cleared flags.
    pub fn unparsed_copy(&self) -> Document {
        let tokens = self
            .tokens
            .iter()
            .cloned()
            .map(|mut t| {
                t.set_sent_start(false);
                t
            })
            .collect();
        Document {
            vocab: Arc::clone(&self.vocab),
            tokens,
            parsed: false,
        }
    }

    pub(crate) fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    pub(crate) fn freeze(&mut self) {
        self.parsed = true;
    }
}
