//! Swap-Noise Sampling Example
//!
//! This example demonstrates generating corrupted/clean batch pairs for
//! denoising autoencoder training:
//! 1. Build a small feature matrix
//! 2. Create a seeded sampler
//! 3. Pull a few batches and count how many values were swapped

use anyhow::Result;
use dae_preprocessing::defaults;
use dae_preprocessing::prelude::*;
use ndarray::Array2;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== Swap-Noise Sampling Example ===\n");

    // Feature matrix: 64 rows, 4 features
    let x = Array2::from_shape_fn((64, 4), |(r, c)| (r * 4 + c) as f64);
    println!("Feature matrix: {} rows x {} features", x.nrows(), x.ncols());

    let mut sampler = SwapNoiseSampler::with_seed(defaults::PROB_SWAP, 42)?;
    println!("Swap probability: {}\n", sampler.prob_swap());

    let batch_size = defaults::BATCH_SIZE;
    for (batch_idx, (corrupted, clean)) in sampler.batches(&x, batch_size)?.take(3).enumerate() {
        let swapped = corrupted
            .iter()
            .zip(clean.iter())
            .filter(|(a, b)| a != b)
            .count();
        println!(
            "Batch {}: {} of {} values swapped",
            batch_idx,
            swapped,
            clean.len()
        );
        println!("  clean row 0:     {:?}", clean.row(0).to_vec());
        println!("  corrupted row 0: {:?}", corrupted.row(0).to_vec());
    }

    Ok(())
}
