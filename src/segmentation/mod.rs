//! Rule-based sentence segmentation.
//!
//! Boundary marking sets `is_sent_start` flags on a document's tokens and
//! freezes the document. Sentences are never cached: [`sentences`] walks the
//! flags each time it is called.

mod rules;
mod segmenter;

pub use rules::{BoundaryRule, RuleSet, RuleSetBuilder, TokenPredicate, DEFAULT_TERMINATORS};
pub use segmenter::{SegmentationStrategy, Segmenter};

use crate::doc::{Sentences, Token};

/// Walks sentence-start flags over any token slice.
pub fn sentences(tokens: &[Token]) -> Sentences<'_> {
    Sentences::new(tokens)
}
