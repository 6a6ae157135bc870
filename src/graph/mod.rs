//! Graph feature extraction from weighted adjacency matrices.
//!
//! This module turns a weighted adjacency matrix into fixed-length per-node
//! feature vectors in three steps:
//! - [`normalize`]: row standardization into a row-stochastic-like form
//! - [`triples`]: top-k selection of each node's strongest edges, with edge
//!   direction encoded in the weight sign
//! - [`features`]: assembly of a length k*(k+1) feature vector per node from
//!   its own top-k edges and its neighbors' top-k edges

pub mod features;
pub mod normalize;
pub mod triples;

pub use features::{extract_features, extract_features_batch};
pub use normalize::{row_standardize, standardize, EPS};
pub use triples::{select_triples, Triple};
