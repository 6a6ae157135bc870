//! # DAE Preprocessing
//!
//! This crate prepares tabular and graph-structured data for denoising
//! autoencoder pretraining. It provides two independent routines:
//!
//! - Swap-noise batch generation: random batches of rows paired with
//!   corrupted copies where a subset of feature values is swapped in from
//!   other rows of the same column
//! - Graph feature extraction: row standardization of weighted adjacency
//!   matrices and fixed-length per-node feature vectors built from each
//!   node's strongest incoming/outgoing edges and its neighbors' edges
//!
//! ## Quick Start
//!
//! ```rust
//! use dae_preprocessing::prelude::*;
//! use ndarray::array;
//!
//! fn main() -> dae_preprocessing::Result<()> {
//!     // Corrupted/clean training pairs for a denoising autoencoder
//!     let x = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]];
//!     let mut sampler = SwapNoiseSampler::with_seed(0.15, 42)?;
//!     let (corrupted, clean) = sampler.batches(&x, 2)?.next().unwrap();
//!     assert_eq!(corrupted.dim(), clean.dim());
//!
//!     // Per-node graph features from a weighted adjacency matrix
//!     let adj = array![[0.0, 1.0], [1.0, 0.0]];
//!     let features = extract_features(&adj, 1)?;
//!     assert_eq!(features.dim(), (2, 2));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod graph;
pub mod noise;

pub use error::{PreprocessError, Result};
pub use graph::features::{extract_features, extract_features_batch};
pub use graph::normalize::{row_standardize, standardize};
pub use graph::triples::{select_triples, Triple};
pub use noise::{SwapNoiseBatches, SwapNoiseSampler};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PreprocessError, Result};
    pub use crate::graph::features::{extract_features, extract_features_batch};
    pub use crate::graph::normalize::{row_standardize, standardize};
    pub use crate::graph::triples::{select_triples, Triple};
    pub use crate::noise::{SwapNoiseBatches, SwapNoiseSampler};
}

/// Default parameter values
pub mod defaults {
    /// Probability that a single feature value is swapped out
    pub const PROB_SWAP: f64 = 0.15;

    /// Batch size for the swap-noise sampler
    pub const BATCH_SIZE: usize = 32;
}
