//! Monte Carlo significance with logging and engine selection
//!
//! Run with `RUST_LOG=debug` to see the per-run trace, and with
//! `--features parallel` to spread simulations over a Rayon pool.

use homogeneity_core::{auto_engine, ExecutionEngine};
use homogeneity_tests::{HomogeneityMethod, HomogeneityTest, MonteCarlo};
use rand::prelude::*;
use rand_distr::Normal;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(12);
    let noise = Normal::new(0.0, 1.0)?;
    let data: Vec<f64> = (0..200)
        .map(|i| {
            let level = if i < 120 { 0.4 } else { 0.0 };
            level + noise.sample(&mut rng)
        })
        .collect();

    let engine = auto_engine();
    println!(
        "=== Monte Carlo significance ({} thread(s)) ===\n",
        engine.num_threads()
    );

    for sims in [500, 5_000, 20_000] {
        let start = Instant::now();
        let result = HomogeneityTest::new(HomogeneityMethod::Snht)
            .with_simulations(sims)
            .with_seed(1)
            .with_engine(engine.clone())
            .run(&data)?;
        println!(
            "  {:>6} simulations: p = {:.4}, h = {:?}, cp = {} ({:.1?})",
            sims,
            result.p().unwrap_or(f64::NAN),
            result.h(),
            result.cp(),
            start.elapsed()
        );
    }

    // Direct use of the estimator for a given statistic value
    let estimate = MonteCarlo::new(10_000)
        .with_seed(3)
        .with_engine(engine)
        .p_value(&HomogeneityMethod::BuishandQ, 1.5, data.len())?;
    println!("\n  Buishand Q = 1.5 with n = {}: {estimate}", data.len());

    Ok(())
}
