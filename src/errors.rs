//! Error types for sort-bench operations.

use thiserror::Error;

/// Result type alias for sort-bench operations
pub type Result<T> = std::result::Result<T, SortBenchError>;

/// Error type for sort-bench operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortBenchError {
    /// No algorithm is registered under the requested name
    #[error(
        "Unknown algorithm '{0}' (expected one of: bubble, insertion, selection, quick, merge)"
    )]
    UnknownAlgorithm(String),

    /// No dataset shape matches the requested name
    #[error(
        "Unknown dataset shape '{0}' \
         (expected one of: Random, Sorted, Reverse Sorted, Nearly Sorted)"
    )]
    UnknownShape(String),

    /// Dataset size outside the accepted range
    #[error("Invalid dataset size {size} (must be between 1 and {max})")]
    InvalidDatasetSize {
        /// The rejected size
        size: usize,
        /// Largest accepted size
        max: usize,
    },

    /// A record line could not be parsed
    #[error("Invalid record '{line}': {reason}")]
    InvalidRecord {
        /// The offending input
        line: String,
        /// Explanation of the problem
        reason: String,
    },

    /// Another benchmark currently holds the run guard
    #[error("A benchmark is already running")]
    BenchmarkRunning,
}
