//! Row standardization of adjacency matrices.

use ndarray::{Array2, Axis};
use tracing::debug;

/// Epsilon added to row sums before division, in case the row sum is 0
pub const EPS: f64 = 1e-10;

/// Divide each row of `adj` by its own sum plus [`EPS`]
///
/// Rows with a nonzero sum come out summing to ~1; all-zero rows stay
/// all-zero instead of turning into NaN. The input is not modified.
pub fn row_standardize(adj: &Array2<f64>) -> Array2<f64> {
    let row_sums = adj.sum_axis(Axis(1));
    let mut standardized = adj.clone();
    for (mut row, &sum) in standardized.outer_iter_mut().zip(row_sums.iter()) {
        row.mapv_inplace(|w| w / (sum + EPS));
    }
    standardized
}

/// Row-standardize an ordered collection of adjacency matrices
///
/// Each matrix is standardized independently; the output preserves the
/// input order and count one-to-one.
pub fn standardize(matrices: &[Array2<f64>]) -> Vec<Array2<f64>> {
    debug!(count = matrices.len(), "row-standardizing adjacency matrices");
    matrices.iter().map(row_standardize).collect()
}
