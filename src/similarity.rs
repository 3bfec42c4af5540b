//! Similarity measures shared by the ranking passes.

use crate::error::{RankevalError, Result};

/// Compute cosine similarity between two vectors
///
/// # Arguments
///
/// * `a` - First vector
/// * `b` - Second vector (must have same length as `a`)
///
/// # Returns
///
/// Cosine similarity in [-1.0, 1.0]. Mismatched lengths and zero-magnitude
/// inputs are errors rather than silently truncated or NaN results.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(RankevalError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();

    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(RankevalError::ZeroNormVector);
    }

    Ok(dot / (norm_a * norm_b))
}

/// Count query-token occurrences in a body of text.
///
/// Every whitespace-delimited token of every phrase contributes 1 when it
/// appears as a substring of `text`. Matching is case-sensitive and counts
/// per phrase, so a token supplied by several phrasings is counted once for
/// each of them.
pub fn word_overlap_score(phrases: &[String], text: &str) -> usize {
    let mut frequency = 0;
    for phrase in phrases {
        for word in phrase.split_whitespace() {
            if text.contains(word) {
                frequency += 1;
            }
        }
    }
    frequency
}
