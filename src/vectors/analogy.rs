//! Candidate filtering and deterministic ranking.

use crate::config::VectorConfig;
use crate::error::{LexicaError, Result};
use crate::similarity::cosine_similarity;
use crate::text::attrs::{is_alpha, is_lower};
use crate::vectors::ops::squared_norm;
use log::warn;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Independently toggleable filters on ranking candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalogyFilter {
    /// Skip entries whose vector has zero norm.
    pub require_vector: bool,
    /// Skip words with uppercase characters or no cased characters.
    pub lowercase_only: bool,
    /// Skip words with non-alphabetic characters.
    pub alphabetic_only: bool,
    /// Skip the query words themselves.
    pub exclude_inputs: bool,
}

impl Default for AnalogyFilter {
    fn default() -> Self {
        Self::from(&VectorConfig::default())
    }
}

impl From<&VectorConfig> for AnalogyFilter {
    fn from(config: &VectorConfig) -> Self {
        Self {
            require_vector: config.require_vector,
            lowercase_only: config.lowercase_only,
            alphabetic_only: config.alphabetic_only,
            exclude_inputs: config.exclude_inputs,
        }
    }
}

impl AnalogyFilter {
    /// A filter that admits every entry.
    pub fn none() -> Self {
        Self {
            require_vector: false,
            lowercase_only: false,
            alphabetic_only: false,
            exclude_inputs: false,
        }
    }

    /// Checks whether a vocabulary entry may be ranked.
    pub fn accepts(&self, word: &str, vector: &[f32], inputs: &[&str]) -> bool {
        if self.lowercase_only && !is_lower(word) {
            return false;
        }
        if self.alphabetic_only && !is_alpha(word) {
            return false;
        }
        if self.exclude_inputs && inputs.contains(&word) {
            return false;
        }
        if self.require_vector && squared_norm(vector) == 0.0 {
            return false;
        }
        true
    }
}

/// Orders by score descending, then word ascending.
pub fn rank_order(a: &(String, f64), b: &(String, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Scores `candidates` against `target` and sorts them with [`rank_order`].
///
/// Candidates are scored in parallel when there are more than
/// `parallel_threshold` of them. Zero-norm candidates are skipped with a
/// warning; a zero-norm target fails with [`LexicaError::DegenerateVector`].
pub(crate) fn rank<'a, V>(
    target: &[f32],
    candidates: &[(&'a str, V)],
    parallel_threshold: usize,
) -> Result<Vec<(String, f64)>>
where
    V: AsRef<[f32]> + Sync,
{
    if squared_norm(target) == 0.0 {
        return Err(LexicaError::DegenerateVector("query vector has zero norm".to_string()));
    }

    let usable: Vec<(&'a str, &[f32])> = candidates
        .iter()
        .filter_map(|(word, vector)| {
            let vector = vector.as_ref();
            if squared_norm(vector) == 0.0 {
                warn!("Skipping vocabulary entry '{}' with zero norm", word);
                return None;
            }
            Some((*word, vector))
        })
        .collect();

    let score = |&(word, vector): &(&'a str, &[f32])| -> Result<(String, f64)> {
        cosine_similarity(target, vector).map(|sim| (word.to_string(), sim))
    };

    let mut scored: Vec<(String, f64)> = if usable.len() > parallel_threshold {
        usable.par_iter().map(score).collect::<Result<_>>()?
    } else {
        usable.iter().map(score).collect::<Result<_>>()?
    };

    scored.sort_by(rank_order);
    Ok(scored)
}
