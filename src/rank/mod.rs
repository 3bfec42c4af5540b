//! Rank computation for the two evaluation passes.

pub mod vector;
pub mod word_frequency;

pub use vector::vector_ranks;
pub use word_frequency::word_frequency_ranks;

use serde::Deserialize;

/// Which of a publication's query-keys drive a ranking pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Iterate each publication's tag set.
    Tags,
    /// Iterate each publication's title.
    Titles,
}

impl QueryMode {
    /// Label used in score reports ("Tags" / "Titles").
    pub fn label(self) -> &'static str {
        match self {
            QueryMode::Tags => "Tags",
            QueryMode::Titles => "Titles",
        }
    }
}

/// What to do when a query-key has no entry in the query table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingKeyPolicy {
    /// Skip just the missing key and continue with the publication's
    /// remaining keys.
    #[default]
    SkipKey,
    /// Abandon the publication's remaining keys at the first miss.
    SkipItem,
}

/// 1-based rank of `target` among `all`: one plus the number of scores
/// strictly greater than it. Equal scores share a rank value.
pub fn rank_of<T: PartialOrd>(target: &T, all: &[T]) -> usize {
    1 + all.iter().filter(|score| *score > target).count()
}
