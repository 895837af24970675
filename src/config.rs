//! Configuration for the Lexica engine.

use crate::error::{LexicaError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for the Lexica engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text processing configuration.
    pub text: TextConfig,

    /// Sentence segmentation configuration.
    pub segmentation: SegmentationConfig,

    /// Vector space configuration.
    pub vectors: VectorConfig,
}

impl Config {
    /// Loads configuration from a JSON file.
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LexicaError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes configuration to a JSON file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Checks cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.segmentation.terminators.iter().any(|t| t.is_empty()) {
            return Err(LexicaError::Config("empty sentence terminator".to_string()));
        }
        for trigger_rule in &self.segmentation.extra_triggers {
            if trigger_rule.trigger.is_empty() {
                return Err(LexicaError::Config(format!(
                    "rule '{}' has no trigger texts",
                    trigger_rule.name
                )));
            }
            if trigger_rule.offset == 0 {
                return Err(LexicaError::Config(format!(
                    "rule '{}' must flag a later token (offset >= 1)",
                    trigger_rule.name
                )));
            }
        }
        Ok(())
    }
}

/// Text processing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Language code for the stop-word list.
    /// Default: "en".
    pub language: String,

    /// Apply Unicode normalization (NFC) when computing token norms.
    /// Default: true.
    pub unicode_normalize: bool,

    /// Lowercase token norms.
    /// Default: true.
    pub lowercase_norm: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            unicode_normalize: true,
            lowercase_norm: true,
        }
    }
}

/// Which segmentation strategy a document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Punctuation-driven boundary rules.
    #[default]
    Punctuation,
    /// Newline-driven boundaries; punctuation is ignored.
    Newline,
}

/// A serializable boundary rule: tokens whose text is in `trigger` flag the
/// token `offset` positions later as a sentence start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Rule name, used in logs.
    pub name: String,

    /// Token texts that trigger the rule.
    pub trigger: Vec<String>,

    /// Distance from the trigger to the flagged token.
    /// Default: 1.
    #[serde(default = "default_offset")]
    pub offset: usize,
}

fn default_offset() -> usize {
    1
}

/// Sentence segmentation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Active strategy.
    /// Default: punctuation.
    pub strategy: StrategyKind,

    /// End-of-sentence punctuation for the default rule.
    /// Default: [".", "!", "?"].
    pub terminators: Vec<String>,

    /// Additional rules appended after the default rule.
    /// Default: none.
    pub extra_triggers: Vec<RuleSpec>,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Punctuation,
            terminators: vec![".".to_string(), "!".to_string(), "?".to_string()],
            extra_triggers: Vec::new(),
        }
    }
}

/// Vector space configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorConfig {
    /// Analogy/neighbour candidates must have a non-zero vector.
    /// Default: true.
    pub require_vector: bool,

    /// Candidates must be lowercase.
    /// Default: true.
    pub lowercase_only: bool,

    /// Candidates must be purely alphabetic.
    /// Default: true.
    pub alphabetic_only: bool,

    /// Drop the query words themselves from analogy results.
    /// Default: false.
    pub exclude_inputs: bool,

    /// Candidate count above which ranking is scored in parallel.
    /// Default: 4096.
    pub parallel_threshold: usize,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            require_vector: true,
            lowercase_only: true,
            alphabetic_only: true,
            exclude_inputs: false,
            parallel_threshold: 4096,
        }
    }
}
