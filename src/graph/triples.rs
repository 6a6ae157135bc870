//! Edge triples and top-k selection.
//!
//! Every edge touching a node is recorded as a [`Triple`] whose weight sign
//! encodes direction relative to that node: outgoing edges carry a negated
//! weight, incoming edges a positive one. Folding direction into the sign
//! lets one sorted list carry both directions without a separate direction
//! field. The trade-off is that a true zero-weight edge is indistinguishable
//! from "no edge"; see [`edge_sign`] for the zero-weight convention.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{PreprocessError, Result};

/// A directed edge record with direction-encoding weight sign
///
/// `(from, to)` is always the actual edge direction in the graph. The sign
/// of `weight` records the edge's orientation relative to the node whose
/// top-k list the triple sits in: negative means outgoing (`from` is that
/// node), positive means incoming (`to` is that node).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triple {
    /// Edge weight, negated for outgoing edges
    pub weight: f64,
    /// Source node of the edge
    pub from: usize,
    /// Target node of the edge
    pub to: usize,
}

/// Orientation sign of an edge weight, exactly +1.0 or -1.0
///
/// Zero weights follow the IEEE sign bit: an outgoing zero edge is stored
/// as -0.0 by the negation in [`select_triples`] and keeps sign -1, while
/// an incoming zero edge (+0.0) keeps sign +1. This is the fixed convention
/// for the zero-weight ambiguity; a weight of exactly zero has no meaningful
/// direction of its own.
pub fn edge_sign(weight: f64) -> f64 {
    weight.signum()
}

/// Select each node's top-k strongest edge triples
///
/// For node `i` the 2n candidates are its n outgoing triples
/// `(-adj[i][j], i, j)` followed by its n incoming triples
/// `(adj[j][i], j, i)`, self-loops included in both directions. Candidates
/// are stable-sorted by descending absolute weight, so ties keep generation
/// order (all outgoing before all incoming, ascending index within each),
/// then truncated to the first `k`.
///
/// If `k > 2n` the returned lists are simply shorter than `k`; callers that
/// require exactly `k` entries per node must treat a short list as an error
/// (the feature assembler does).
///
/// # Errors
///
/// Returns [`PreprocessError::NonSquareMatrix`] if `adj` is not square.
pub fn select_triples(adj: &Array2<f64>, k: usize) -> Result<Vec<Vec<Triple>>> {
    let (rows, cols) = adj.dim();
    if rows != cols {
        return Err(PreprocessError::NonSquareMatrix { rows, cols });
    }
    let n = rows;

    let mut per_node = Vec::with_capacity(n);
    for i in 0..n {
        let mut candidates = Vec::with_capacity(2 * n);
        for j in 0..n {
            candidates.push(Triple {
                weight: -adj[[i, j]],
                from: i,
                to: j,
            });
        }
        for j in 0..n {
            candidates.push(Triple {
                weight: adj[[j, i]],
                from: j,
                to: i,
            });
        }

        candidates.sort_by(|a, b| b.weight.abs().total_cmp(&a.weight.abs()));
        candidates.truncate(k);
        per_node.push(candidates);
    }

    Ok(per_node)
}
