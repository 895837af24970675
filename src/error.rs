//! Error types for the Lexica segmentation and vector engine.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Lexica operations.
#[derive(Error, Debug)]
pub enum LexicaError {
    /// Word has no stored vector.
    #[error("Word not found in vocabulary: {0}")]
    OutOfVocabulary(String),

    /// Zero-norm vector passed where a direction is required.
    #[error("Degenerate vector: {0}")]
    DegenerateVector(String),

    /// None of the input tokens has a vector.
    #[error("No token in the input has a vector")]
    EmptyVectorableInput,

    /// Sentence-boundary flags were touched after the document was parsed.
    #[error("Frozen state: {0}")]
    FrozenState(String),

    /// Sentences were requested before boundary marking ran.
    #[error("Sentence boundaries are unset; run boundary marking first")]
    BoundariesUnset,

    /// Vector dimensionality does not match the space.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension of the vector space.
        expected: usize,
        /// Dimension of the offending vector.
        actual: usize,
    },

    /// Index out of bounds.
    #[error("Index out of bounds: {index} >= {max}")]
    IndexOutOfBounds {
        /// The index that was out of bounds.
        index: usize,
        /// The maximum allowed index.
        max: usize,
    },

    /// Empty input.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid vector table format.
    #[error("Invalid vector table format: {0}")]
    InvalidFormat(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),
}

/// Result type alias for Lexica operations.
pub type Result<T> = std::result::Result<T, LexicaError>;

impl From<bincode::Error> for LexicaError {
    fn from(err: bincode::Error) -> Self {
        LexicaError::Serialization(err.to_string())
    }
}
