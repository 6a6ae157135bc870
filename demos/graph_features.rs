//! Graph Feature Extraction Example
//!
//! This example demonstrates the full graph preprocessing pipeline:
//! 1. Build a small weighted adjacency matrix
//! 2. Row-standardize it
//! 3. Inspect each node's top-k triples
//! 4. Extract fixed-length per-node feature vectors

use anyhow::Result;
use dae_preprocessing::prelude::*;
use ndarray::array;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== Graph Feature Extraction Example ===\n");

    let adj = array![
        [0.0, 2.0, 0.0, 1.0],
        [0.0, 0.0, 3.0, 0.0],
        [1.0, 0.0, 0.0, 4.0],
        [0.5, 0.0, 0.0, 0.0]
    ];
    println!("Adjacency matrix ({} nodes):\n{:.2}\n", adj.nrows(), adj);

    let standardized = row_standardize(&adj);
    println!("Row-standardized:\n{:.3}\n", standardized);

    let k = 2;
    let triples = select_triples(&standardized, k)?;
    for (node, list) in triples.iter().enumerate() {
        println!("Node {node} top-{k} triples:");
        for t in list {
            let direction = if t.weight < 0.0 { "outgoing" } else { "incoming" };
            println!("  {:+.3} {} -> {} ({direction})", t.weight, t.from, t.to);
        }
    }

    let features = extract_features(&standardized, k)?;
    println!(
        "\nFeature matrix: {} nodes x {} features",
        features.nrows(),
        features.ncols()
    );
    for (node, row) in features.outer_iter().enumerate() {
        let formatted: Vec<String> = row.iter().map(|v| format!("{v:+.3}")).collect();
        println!("  node {node}: [{}]", formatted.join(", "));
    }

    Ok(())
}
