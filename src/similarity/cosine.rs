//! Cosine similarity for dense vectors.

use crate::error::{LexicaError, Result};
use crate::similarity::SimilarityMeasure;
use crate::vectors::ops::dot;

/// Cosine similarity measure.
///
/// dot(a, b) / sqrt(|a|^2 * |b|^2)
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineSimilarity;

impl SimilarityMeasure for CosineSimilarity {
    fn similarity(&self, a: &[f32], b: &[f32]) -> Result<f64> {
        cosine_similarity(a, b)
    }
}

/// Cosine similarity in `[-1, 1]`.
///
/// Fails with [`LexicaError::DegenerateVector`] when either vector has zero
/// norm, and with [`LexicaError::DimensionMismatch`] when lengths differ.
/// The denominator is taken as one square root of the product of squared
/// norms, so `cosine_similarity(v, v)` is exactly 1.0 and the result is
/// symmetric bit for bit.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(LexicaError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let aa = dot(a, a);
    if aa == 0.0 {
        return Err(LexicaError::DegenerateVector("left operand has zero norm".to_string()));
    }
    let bb = dot(b, b);
    if bb == 0.0 {
        return Err(LexicaError::DegenerateVector("right operand has zero norm".to_string()));
    }

    let sim = dot(a, b) / (aa * bb).sqrt();
    Ok(sim.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        let a = [0.3, -1.2, 4.5, 0.01];
        let sim = CosineSimilarity.similarity(&a, &a).unwrap();
        assert_eq!(sim, 1.0);
    }

    #[test]
    fn test_orthogonal() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 2.0]).unwrap();
        assert!(sim.abs() < 1e-12);
    }

    #[test]
    fn test_opposite() {
        let sim = cosine_similarity(&[1.0, 2.0], &[-2.0, -4.0]).unwrap();
        assert!((sim + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_magnitude_invariant() {
        let a = [1.0, 2.0, 3.0];
        let b = [10.0, 20.0, 30.0];
        assert!((cosine_similarity(&a, &b).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric() {
        let a = [0.1, 0.7, -0.3];
        let b = [0.9, -0.2, 0.4];
        assert_eq!(
            cosine_similarity(&a, &b).unwrap(),
            cosine_similarity(&b, &a).unwrap()
        );
    }

    #[test]
    fn test_zero_norm() {
        let err = cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]).unwrap_err();
        assert!(matches!(err, LexicaError::DegenerateVector(_)));
        let err = cosine_similarity(&[1.0, 0.0], &[0.0, 0.0]).unwrap_err();
        assert!(matches!(err, LexicaError::DegenerateVector(_)));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = cosine_similarity(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, LexicaError::DimensionMismatch { expected: 1, actual: 2 }));
    }

    #[test]
    fn test_distance() {
        let a = [1.0, 0.0];
        let b = [1.0, 1.0];
        let sim = CosineSimilarity.similarity(&a, &b).unwrap();
        let dist = CosineSimilarity.distance(&a, &b).unwrap();
        assert!((sim + dist - 1.0).abs() < 1e-12);
    }
}
