//! Similarity measures for comparing dense vectors.

mod cosine;

pub use cosine::{cosine_similarity, CosineSimilarity};

use crate::error::Result;

/// Trait for similarity measures between vectors.
pub trait SimilarityMeasure {
    /// Computes the similarity between two vectors.
    fn similarity(&self, a: &[f32], b: &[f32]) -> Result<f64>;

    /// Computes the distance between two vectors.
    ///
    /// Default implementation: 1.0 - similarity.
    fn distance(&self, a: &[f32], b: &[f32]) -> Result<f64> {
        Ok(1.0 - self.similarity(a, b)?)
    }
}
