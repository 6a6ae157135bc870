//! Error types for the crate.
//!
//! All preprocessing errors are deterministic numeric failures: they surface
//! immediately to the caller and nothing is retried or silently recovered.

use thiserror::Error;

/// Errors produced by the preprocessing routines
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PreprocessError {
    /// Swap probability outside the valid [0, 1] range
    #[error("swap probability {prob} is outside [0, 1]")]
    InvalidSwapProbability { prob: f64 },

    /// Batch size incompatible with sampling rows without replacement
    #[error("batch size {batch_size} is invalid for a matrix with {n_rows} rows (must be in 1..={n_rows})")]
    InvalidSampleSize { batch_size: usize, n_rows: usize },

    /// Adjacency matrix is not square
    #[error("adjacency matrix must be square, got {rows}x{cols}")]
    NonSquareMatrix { rows: usize, cols: usize },

    /// A node has fewer edge candidates than the requested top-k
    #[error("node {node} has only {available} edge candidates but k={requested} were requested")]
    DegreeUnderflow {
        node: usize,
        available: usize,
        requested: usize,
    },

    /// A triple's direction sign disagrees with which endpoint is the
    /// current node, indicating a corrupted top-k list
    #[error("orientation invariant violated at node {node}: triple ({weight}, {from}, {to})")]
    OrientationViolation {
        node: usize,
        weight: f64,
        from: usize,
        to: usize,
    },
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, PreprocessError>;
