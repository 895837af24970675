//! Boundary marking over documents.

use crate::config::{SegmentationConfig, StrategyKind};
use crate::doc::{Document, Token};
use crate::error::{LexicaError, Result};
use crate::segmentation::{sentences, RuleSet};
use log::debug;

/// How sentence starts are decided. Exactly one strategy is active per
/// document.
#[derive(Debug, Clone)]
pub enum SegmentationStrategy {
    /// Apply punctuation-style boundary rules in registration order.
    Punctuation(RuleSet),
    /// Ignore punctuation; the first token after one or more
    /// newline-initial tokens starts a sentence.
    Newline,
}

impl Default for SegmentationStrategy {
    fn default() -> Self {
        SegmentationStrategy::Punctuation(RuleSet::default())
    }
}

/// Marks sentence boundaries on documents and freezes them.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    strategy: SegmentationStrategy,
}

impl Segmenter {
    /// Creates a segmenter with the given strategy.
    pub fn new(strategy: SegmentationStrategy) -> Self {
        Self { strategy }
    }

    /// Punctuation strategy with the default rule only.
    pub fn punctuation() -> Self {
        Self::default()
    }

    /// Punctuation strategy with a custom rule set.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self::new(SegmentationStrategy::Punctuation(rules))
    }

    /// Newline strategy.
    pub fn newline() -> Self {
        Self::new(SegmentationStrategy::Newline)
    }

    /// Builds a segmenter from configuration.
    pub fn from_config(config: &SegmentationConfig) -> Result<Self> {
        let strategy = match config.strategy {
            StrategyKind::Punctuation => {
                SegmentationStrategy::Punctuation(RuleSet::from_config(config)?)
            }
            StrategyKind::Newline => SegmentationStrategy::Newline,
        };
        Ok(Self::new(strategy))
    }

    /// The active strategy.
    pub fn strategy(&self) -> &SegmentationStrategy {
        &self.strategy
    }

    /// Flags sentence starts on `doc`, freezes it and returns the number of
    /// sentences.
    ///
    /// Preset flags are kept. The first token of a non-empty document is
    /// always a sentence start. Fails with [`LexicaError::FrozenState`] if
    /// the document was already parsed.
    pub fn mark_boundaries(&self, doc: &mut Document) -> Result<usize> {
        if doc.is_parsed() {
            return Err(LexicaError::FrozenState(
                "document already parsed; mark boundaries on a fresh token sequence".to_string(),
            ));
        }

        let tokens = doc.tokens_mut();
        if let Some(first) = tokens.first_mut() {
            first.set_sent_start(true);
        }

        let flagged = match &self.strategy {
            SegmentationStrategy::Punctuation(rules) => rules.apply(tokens),
            SegmentationStrategy::Newline => mark_after_newlines(tokens),
        };

        let count = sentences(tokens).count();
        debug!(
            "Marked {} sentences over {} tokens ({} boundaries set by the strategy)",
            count,
            tokens.len(),
            flagged
        );

        doc.freeze();
        Ok(count)
    }

    /// Marks boundaries on `doc` and returns it.
    pub fn process(&self, mut doc: Document) -> Result<Document> {
        self.mark_boundaries(&mut doc)?;
        Ok(doc)
    }
}

/// A run of newline-initial tokens opens a single pending boundary, which
/// the next other token takes. Newlines before the first other token belong
/// to the opening sentence.
fn mark_after_newlines(tokens: &mut [Token]) -> usize {
    let mut seen_content = false;
    let mut pending = false;
    let mut flagged = 0;

    for token in tokens.iter_mut() {
        if token.starts_with_newline() {
            pending = seen_content;
        } else {
            if pending && !token.is_sent_start() {
                token.set_sent_start(true);
                flagged += 1;
            }
            pending = false;
            seen_content = true;
        }
    }

    flagged
}
