//! Tab-delimited corpus records and their loaders.

pub mod publications;
pub mod queries;

pub use publications::{load_publications, load_text_publications};
pub use queries::{load_query_phrasings, load_query_vectors};

/// A publication with a pre-computed embedding (vector evaluation path).
///
/// Immutable after load; the full collection is shared read-only across all
/// ranking computations.
#[derive(Debug, Clone)]
pub struct Publication {
    pub title: String,
    pub tags: Vec<String>,
    pub embedding: Vec<f64>,
}

/// A publication carrying raw text (word-frequency evaluation path).
#[derive(Debug, Clone)]
pub struct TextPublication {
    pub title: String,
    pub tags: Vec<String>,
    pub text: String,
}
