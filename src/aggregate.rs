//! Reduction of rank lists into summary scores.

use crate::error::{RankevalError, Result};

/// Summary scores for one (method, query-type) evaluation pass.
///
/// All fields are percentages in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreSummary {
    /// Share of evaluated queries whose rank fell strictly inside the top 1%
    /// of the item count.
    pub top_one: f64,
    /// Share of evaluated queries whose rank fell strictly inside the top 5%
    /// of the item count.
    pub top_five: f64,
    /// Mean rank, each rank first expressed as a percentile of the item count.
    pub average_rank: f64,
}

/// Reduce the ranks of one evaluation pass into summary scores.
///
/// `item_count` is the size of the ranking universe and the divisor for
/// every output figure (not the number of ranks). Thresholds are fractional
/// (`N * 0.01`, `N * 0.05`) and ranks must fall strictly below them to
/// count, so small corpora legitimately score zero in both buckets.
///
/// An empty rank list yields an all-zero summary; `item_count == 0` is an
/// error.
pub fn summarize(ranks: &[usize], item_count: usize) -> Result<ScoreSummary> {
    if item_count == 0 {
        return Err(RankevalError::EmptyCorpus);
    }

    let n = item_count as f64;
    let top_one_threshold = n * 0.01;
    let top_five_threshold = n * 0.05;

    let mut top_one_count: u64 = 0;
    let mut top_five_count: u64 = 0;
    let mut total_percentile = 0.0;

    for &rank in ranks {
        let rank = rank as f64;
        total_percentile += rank * 100.0 / n;
        if rank < top_five_threshold {
            top_five_count += 1;
            if rank < top_one_threshold {
                top_one_count += 1;
            }
        }
    }

    Ok(ScoreSummary {
        top_one: top_one_count as f64 * 100.0 / n,
        top_five: top_five_count as f64 * 100.0 / n,
        average_rank: total_percentile / n,
    })
}
