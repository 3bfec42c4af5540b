use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rankeval
#[derive(Error, Debug)]
pub enum RankevalError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input resource that could not be opened or created
    #[error("Cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unusable corpus content (malformed framing, dimension violations)
    #[error("Corpus error in {} at line {line}: {message}", .path.display())]
    Corpus {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Vectors of different lengths handed to the similarity engine
    #[error("Vector dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Cosine similarity against a zero-magnitude vector
    #[error("Cosine similarity is undefined for a zero-norm vector")]
    ZeroNormVector,

    /// Aggregation over an empty ranking universe
    #[error("Cannot aggregate ranks over an empty corpus")]
    EmptyCorpus,
}

/// Convenient Result type using RankevalError
pub type Result<T> = std::result::Result<T, RankevalError>;
