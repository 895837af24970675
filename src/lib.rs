//! # Lexica - Sentence Segmentation and Word Vectors
//!
//! Lexica provides two independent building blocks for working with
//! tokenized text:
//!
//! - a **rule-based sentence segmenter** that marks sentence-start tokens
//!   and yields sentence spans, and
//! - a **word vector space** answering similarity, document-vector and
//!   analogy queries.
//!
//! ## Quick Start
//!
//! ```rust
//! use lexica::{Segmenter, Tokenizer, VectorSpace};
//!
//! // Split text into sentences
//! let tokenizer = Tokenizer::default();
//! let mut doc = tokenizer.tokenize("This is a sentence. This is another.");
//! Segmenter::punctuation().mark_boundaries(&mut doc)?;
//! let sentences: Vec<String> = doc.sents()?.map(|s| s.text()).collect();
//! assert_eq!(sentences, vec!["This is a sentence.", "This is another."]);
//!
//! // Query word vectors
//! let space = VectorSpace::new(3);
//! space.add("king", vec![0.9, -0.8, 0.0])?;
//! space.add("queen", vec![0.9, 0.8, 0.0])?;
//! space.add("man", vec![0.1, -0.8, 0.0])?;
//! space.add("woman", vec![0.1, 0.8, 0.0])?;
//! let ranked = space.analogy(&["king", "woman"], &["man"])?;
//! assert_eq!(ranked[0].0, "queen");
//! # Ok::<(), lexica::LexicaError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Tokenization, token norms, lexical attributes and stop words
//! - [`doc`] - Documents, tokens and sentence spans
//! - [`segmentation`] - Boundary rules and segmentation strategies
//! - [`similarity`] - Similarity measures
//! - [`vectors`] - The vector space and analogy ranking
//! - [`storage`] - Pretrained vector table persistence
//!
//! ## Custom Boundary Rules
//!
//! ```rust
//! use lexica::{BoundaryRule, Document, RuleSetBuilder, Segmenter, Vocab};
//!
//! let rules = RuleSetBuilder::with_defaults()
//!     .rule(BoundaryRule::semicolon())
//!     .build()?;
//! let mut doc = Document::from_words(Vocab::english(), &["A", ";", "B", "."]);
//! Segmenter::with_rules(rules).mark_boundaries(&mut doc)?;
//! assert_eq!(doc.sents()?.count(), 2);
//! # Ok::<(), lexica::LexicaError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod doc;
pub mod error;
pub mod segmentation;
pub mod similarity;
pub mod storage;
pub mod text;
pub mod vectors;

// Re-export commonly used types
pub use config::{Config, RuleSpec, SegmentationConfig, StrategyKind, TextConfig, VectorConfig};
pub use doc::{Document, Sentences, Span, Token};
pub use error::{LexicaError, Result};
pub use segmentation::{BoundaryRule, RuleSet, RuleSetBuilder, SegmentationStrategy, Segmenter, TokenPredicate};
pub use similarity::{cosine_similarity, CosineSimilarity, SimilarityMeasure};
pub use storage::VectorTable;
pub use text::{LexFlags, Normalizer, StopWords, Tokenizer, Vocab};
pub use vectors::{AnalogyFilter, Lexeme, VectorSource, VectorSpace};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
