//! Vocabulary entries as seen by callers.

use crate::text::LexFlags;
use crate::vectors::ops::norm;
use std::sync::Arc;

/// A word together with its vector, if it has one.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The word (case-sensitive key).
    pub text: String,
    /// The stored vector; `None` for out-of-vocabulary words.
    pub vector: Option<Arc<[f32]>>,
    /// Lexical flags of the word (stop-word membership unset).
    pub flags: LexFlags,
}

impl Lexeme {
    pub(crate) fn new(text: &str, vector: Option<Arc<[f32]>>) -> Self {
        Self {
            text: text.to_string(),
            vector,
            flags: LexFlags::of(text),
        }
    }

    /// Whether a vector is stored for this word.
    pub fn has_vector(&self) -> bool {
        self.vector.is_some()
    }

    /// Whether the word is out of vocabulary.
    pub fn is_oov(&self) -> bool {
        self.vector.is_none()
    }

    /// Euclidean norm of the vector; exactly 0.0 when there is none.
    pub fn vector_norm(&self) -> f64 {
        self.vector.as_deref().map_or(0.0, norm)
    }
}
