//! Swap-noise batch generation for denoising autoencoder training.
//!
//! Swap noise corrupts a sample by replacing a random subset of its feature
//! values with values copied from the same feature column of other randomly
//! chosen rows. The sampler yields (corrupted, clean) batch pairs so the
//! autoencoder can be trained to reconstruct the clean batch.

use ndarray::{Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{PreprocessError, Result};

/// Swap-noise batch sampler
///
/// Owns its random state explicitly so tests and experiments can seed it
/// deterministically instead of relying on a process-wide source.
#[derive(Debug, Clone)]
pub struct SwapNoiseSampler {
    /// Probability that a single feature value is swapped out
    prob_swap: f64,
    /// Random state consumed by every batch draw
    rng: StdRng,
}

impl Default for SwapNoiseSampler {
    /// Sampler with [`defaults::PROB_SWAP`](crate::defaults::PROB_SWAP),
    /// seeded from system entropy
    fn default() -> Self {
        Self {
            prob_swap: crate::defaults::PROB_SWAP,
            rng: StdRng::from_entropy(),
        }
    }
}

impl SwapNoiseSampler {
    /// Create a sampler seeded from system entropy
    ///
    /// # Errors
    ///
    /// Returns [`PreprocessError::InvalidSwapProbability`] if `prob_swap`
    /// is not in `[0, 1]`.
    pub fn new(prob_swap: f64) -> Result<Self> {
        Self::from_rng(prob_swap, StdRng::from_entropy())
    }

    /// Create a sampler with a fixed seed for reproducible batch streams
    pub fn with_seed(prob_swap: f64, seed: u64) -> Result<Self> {
        Self::from_rng(prob_swap, StdRng::seed_from_u64(seed))
    }

    fn from_rng(prob_swap: f64, rng: StdRng) -> Result<Self> {
        if !(0.0..=1.0).contains(&prob_swap) {
            return Err(PreprocessError::InvalidSwapProbability { prob: prob_swap });
        }
        Ok(Self { prob_swap, rng })
    }

    /// Swap probability this sampler was built with
    pub fn prob_swap(&self) -> f64 {
        self.prob_swap
    }

    /// Create an unbounded iterator of (corrupted, clean) batch pairs over `x`
    ///
    /// Each pull samples `batch_size` distinct rows of `x` without
    /// replacement as the clean batch, then builds the corrupted batch by
    /// independently replacing each feature value with probability
    /// `prob_swap`. Replacement values are read from the original matrix at
    /// a uniformly chosen row (with replacement, independent per cell) in
    /// the same column. `x` is never mutated.
    ///
    /// # Errors
    ///
    /// Returns [`PreprocessError::InvalidSampleSize`] if `batch_size` is
    /// zero or exceeds the number of rows, which would make sampling
    /// without replacement impossible.
    pub fn batches<'a>(
        &'a mut self,
        x: &'a Array2<f64>,
        batch_size: usize,
    ) -> Result<SwapNoiseBatches<'a>> {
        let n_rows = x.nrows();
        if batch_size == 0 || batch_size > n_rows {
            return Err(PreprocessError::InvalidSampleSize { batch_size, n_rows });
        }
        debug!(n_rows, n_feats = x.ncols(), batch_size, "starting swap-noise batch stream");
        Ok(SwapNoiseBatches {
            x,
            batch_size,
            prob_swap: self.prob_swap,
            rng: &mut self.rng,
        })
    }
}

/// Unbounded lazy stream of (corrupted, clean) batch pairs
///
/// Created by [`SwapNoiseSampler::batches`]. Never terminates; consumers
/// stop by ceasing to pull.
#[derive(Debug)]
pub struct SwapNoiseBatches<'a> {
    x: &'a Array2<f64>,
    batch_size: usize,
    prob_swap: f64,
    rng: &'a mut StdRng,
}

impl Iterator for SwapNoiseBatches<'_> {
    type Item = (Array2<f64>, Array2<f64>);

    fn next(&mut self) -> Option<Self::Item> {
        let (n_rows, n_feats) = self.x.dim();

        let indices = sample(&mut *self.rng, n_rows, self.batch_size).into_vec();
        let clean = self.x.select(Axis(0), &indices);

        let mut corrupted = clean.clone();
        for row in 0..self.batch_size {
            for col in 0..n_feats {
                if self.rng.gen_bool(self.prob_swap) {
                    let source_row = self.rng.gen_range(0..n_rows);
                    corrupted[[row, col]] = self.x[[source_row, col]];
                }
            }
        }

        Some((corrupted, clean))
    }
}
