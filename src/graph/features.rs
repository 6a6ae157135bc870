//! Per-node feature vector assembly.
//!
//! A node's feature vector of length k*(k+1) holds the weights of its own
//! top-k triples followed by, for each of those triples, the neighbor's
//! top-k weights multiplied by the triple's orientation sign. One level of
//! recursion: neighbors' lists come from the same precomputed table, never
//! deeper.
//!
//! The sign-encoding scheme assumes nonnegative raw edge weights: a negative
//! raw weight is negated into a positive "outgoing" triple, which then reads
//! as incoming and trips the orientation check. Feed these functions
//! row-standardized (or otherwise nonnegative) adjacency matrices.

use ndarray::Array2;
use tracing::debug;

use crate::error::{PreprocessError, Result};
use crate::graph::triples::{edge_sign, select_triples, Triple};

/// Extract fixed-length feature vectors for every node of `adj`
///
/// Returns an array of shape `(n, k*(k+1))` whose row `i` is node i's
/// feature vector. All top-k triple lists are computed once up front and
/// indexed by node id; the assembly step only reads that table, so two
/// calls on the same inputs produce identical output.
///
/// # Errors
///
/// - [`PreprocessError::NonSquareMatrix`] if `adj` is not square
/// - [`PreprocessError::DegreeUnderflow`] if any node has fewer than `k`
///   edge candidates (k > 2n); emitting a shorter vector would silently
///   break the fixed-length contract
/// - [`PreprocessError::OrientationViolation`] if a triple's weight sign
///   disagrees with which endpoint is the current node. Besides a corrupted
///   triple list, this is deterministically triggered by negative raw edge
///   weights, whose negation flips the encoded direction; pass
///   [`row_standardize`](crate::graph::normalize::row_standardize)d or
///   otherwise nonnegative input
pub fn extract_features(adj: &Array2<f64>, k: usize) -> Result<Array2<f64>> {
    let per_node = select_triples(adj, k)?;
    let n = per_node.len();

    // Reject short lists before assembling anything, so a malformed vector
    // is never emitted for any node.
    for (node, list) in per_node.iter().enumerate() {
        if list.len() != k {
            return Err(PreprocessError::DegreeUnderflow {
                node,
                available: list.len(),
                requested: k,
            });
        }
    }

    let width = k * (k + 1);
    let mut features = Array2::zeros((n, width));
    for (i, list) in per_node.iter().enumerate() {
        let mut vector = Vec::with_capacity(width);
        vector.extend(list.iter().map(|t| t.weight));

        for triple in list {
            let neighbor = neighbor_of(i, triple)?;
            let sign = edge_sign(triple.weight);
            vector.extend(per_node[neighbor].iter().map(|t| sign * t.weight));
        }

        debug_assert_eq!(vector.len(), width);
        for (col, value) in vector.into_iter().enumerate() {
            features[[i, col]] = value;
        }
    }

    debug!(n, k, width, "assembled node feature vectors");
    Ok(features)
}

/// Extract feature arrays for an ordered collection of adjacency matrices
///
/// Each matrix is processed independently with the same `k`; the output
/// preserves the input order one-to-one.
pub fn extract_features_batch(matrices: &[Array2<f64>], k: usize) -> Result<Vec<Array2<f64>>> {
    matrices.iter().map(|adj| extract_features(adj, k)).collect()
}

/// Resolve the far endpoint of `triple` relative to node `i`
///
/// Positive sign means incoming, so `i` must be the target; negative sign
/// means outgoing, so `i` must be the source. A mismatch is upstream
/// corruption and fails loudly.
fn neighbor_of(i: usize, triple: &Triple) -> Result<usize> {
    let incoming = edge_sign(triple.weight) > 0.0;
    let (this, neighbor) = if incoming {
        (triple.to, triple.from)
    } else {
        (triple.from, triple.to)
    };
    if this != i {
        return Err(PreprocessError::OrientationViolation {
            node: i,
            weight: triple.weight,
            from: triple.from,
            to: triple.to,
        });
    }
    Ok(neighbor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn two_node_graph_matches_hand_computation() {
        let adj = array![[0.0, 1.0], [1.0, 0.0]];
        let features = extract_features(&adj, 1).unwrap();

        // Node 0's top triple is outgoing (-1, 0, 1); neighbor 1's top
        // weight is -1, multiplied by sign -1 gives +1.
        assert_eq!(features, array![[-1.0, 1.0], [-1.0, 1.0]]);
    }

    #[test]
    fn three_node_graph_matches_hand_computation() {
        let adj = array![
            [0.0, 2.0, 0.0],
            [0.0, 0.0, 3.0],
            [1.0, 0.0, 0.0]
        ];
        let features = extract_features(&adj, 2).unwrap();

        assert_eq!(features.dim(), (3, 6));
        // Node 0: own triples (-2, 0->1) and (+1, 2->0); neighbor blocks
        // are node 1's weights [-3, 2] times -1 and node 2's [3, -1] times +1.
        assert_eq!(
            features.row(0).to_vec(),
            vec![-2.0, 1.0, 3.0, -2.0, 3.0, -1.0]
        );
    }

    #[test]
    fn output_shape_is_n_by_k_times_k_plus_one() {
        let adj = array![
            [0.0, 1.0, 2.0, 3.0],
            [4.0, 0.0, 5.0, 6.0],
            [7.0, 8.0, 0.0, 9.0],
            [1.5, 2.5, 3.5, 0.0]
        ];
        for k in 1..=5 {
            let features = extract_features(&adj, k).unwrap();
            assert_eq!(features.dim(), (4, k * (k + 1)));
        }
    }

    #[test]
    fn extraction_is_idempotent() {
        let adj = array![[0.0, 1.0, 2.0], [0.5, 0.0, 4.0], [1.0, 3.0, 0.0]];
        let first = extract_features(&adj, 3).unwrap();
        let second = extract_features(&adj, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn orientation_invariant_holds_on_selected_triples() {
        let adj = array![[0.0, 1.0, 2.0], [0.5, 0.0, 4.0], [1.0, 3.0, 0.0]];
        let per_node = select_triples(&adj, 4).unwrap();

        for (i, list) in per_node.iter().enumerate() {
            for triple in list {
                if edge_sign(triple.weight) > 0.0 {
                    assert_eq!(triple.to, i);
                } else {
                    assert_eq!(triple.from, i);
                }
            }
        }
    }

    #[test]
    fn degree_underflow_is_reported() {
        let adj = array![[0.0, 1.0], [1.0, 0.0]];
        let err = extract_features(&adj, 5).unwrap_err();
        assert_eq!(
            err,
            PreprocessError::DegreeUnderflow {
                node: 0,
                available: 4,
                requested: 5
            }
        );
    }

    #[test]
    fn negative_raw_weights_violate_orientation() {
        // A negative raw weight flips the encoded direction: outgoing
        // 0->2 with weight -2 negates to +2, which reads as incoming.
        let adj = array![[0.0, 1.0, -2.0], [0.5, 0.0, 4.0], [-1.0, 3.0, 0.0]];
        let err = extract_features(&adj, 3).unwrap_err();
        assert_eq!(
            err,
            PreprocessError::OrientationViolation {
                node: 0,
                weight: 2.0,
                from: 0,
                to: 2
            }
        );
    }

    #[test]
    fn corrupted_triple_fails_loudly() {
        // Incoming sign (+1) but the target endpoint is not the node.
        let bad = Triple {
            weight: 2.0,
            from: 1,
            to: 2,
        };
        let err = neighbor_of(0, &bad).unwrap_err();
        assert!(matches!(
            err,
            PreprocessError::OrientationViolation { node: 0, .. }
        ));
    }

    #[test]
    fn all_zero_matrix_yields_zero_features() {
        let adj = Array2::<f64>::zeros((3, 3));
        let features = extract_features(&adj, 2).unwrap();
        assert!(features.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn batch_extraction_preserves_order() {
        let matrices = vec![
            array![[0.0, 1.0], [1.0, 0.0]],
            array![[0.0, 2.0], [2.0, 0.0]],
        ];
        let features = extract_features_batch(&matrices, 1).unwrap();

        assert_eq!(features.len(), 2);
        assert_eq!(features[0], array![[-1.0, 1.0], [-1.0, 1.0]]);
        assert_eq!(features[1], array![[-2.0, 2.0], [-2.0, 2.0]]);
    }
}
