//! Significance estimation
//!
//! The Monte Carlo estimator draws independent standard-normal series of the
//! same length as the cleaned input, applies the same statistic to each and
//! reports the fraction of simulated statistics strictly exceeding the
//! observed one. Simulation `i` is seeded with `seed + i`, so the estimate is
//! identical under any execution engine.

use crate::traits::ChangePointStatistic;
use homogeneity_core::{Error, ExecutionEngine, Result, SequentialEngine};
use rand::prelude::*;
use rand_distr::StandardNormal;
use std::fmt;
use tracing::{debug, instrument};

/// Default number of Monte Carlo simulations
pub const DEFAULT_SIMULATIONS: usize = 20_000;

/// Empirical p-value with the counts it was computed from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignificanceEstimate {
    /// Fraction of simulations exceeding the observed statistic
    pub p_value: f64,
    /// Number of simulated statistics strictly greater than the observed one
    pub n_exceeding: usize,
    /// Number of simulations performed
    pub n_simulations: usize,
}

impl fmt::Display for SignificanceEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "p = {:.4} ({}/{} simulations exceeded)",
            self.p_value, self.n_exceeding, self.n_simulations
        )
    }
}

/// Monte Carlo significance estimator
#[derive(Debug, Clone)]
pub struct MonteCarlo<E = SequentialEngine> {
    engine: E,
    n_simulations: usize,
    seed: Option<u64>,
}

impl MonteCarlo<SequentialEngine> {
    /// Create a sequential estimator running `n_simulations` draws
    pub fn new(n_simulations: usize) -> Self {
        Self {
            engine: SequentialEngine,
            n_simulations,
            seed: None,
        }
    }
}

impl Default for MonteCarlo<SequentialEngine> {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATIONS)
    }
}

impl<E: ExecutionEngine> MonteCarlo<E> {
    /// Replace the execution engine
    pub fn with_engine<E2: ExecutionEngine>(self, engine: E2) -> MonteCarlo<E2> {
        MonteCarlo {
            engine,
            n_simulations: self.n_simulations,
            seed: self.seed,
        }
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of simulations
    pub fn with_simulations(mut self, n_simulations: usize) -> Self {
        self.n_simulations = n_simulations;
        self
    }

    /// Number of simulations
    pub fn n_simulations(&self) -> usize {
        self.n_simulations
    }

    /// Configured seed, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Estimate the p-value of `observed` for a series of length `n`
    #[instrument(skip(self, statistic), fields(method = statistic.name(), n_simulations = self.n_simulations))]
    pub fn p_value<S>(&self, statistic: &S, observed: f64, n: usize) -> Result<SignificanceEstimate>
    where
        S: ChangePointStatistic + ?Sized,
    {
        if self.n_simulations == 0 {
            return Err(Error::InvalidParameter(
                "Number of simulations must be positive".to_string(),
            ));
        }
        if n < statistic.minimum_sample_size() {
            return Err(Error::InsufficientData {
                expected: statistic.minimum_sample_size(),
                actual: n,
            });
        }

        let seed = self.seed.unwrap_or_else(|| thread_rng().gen());
        debug!(
            "Running {} simulations of length {} on {} thread(s)",
            self.n_simulations,
            n,
            self.engine.num_threads()
        );

        let exceeded = self.engine.execute_batch(self.n_simulations, |i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let sample: Vec<f64> = (0..n).map(|_| rng.sample(StandardNormal)).collect();
            statistic
                .compute(&sample)
                .map(|outcome| outcome.value > observed)
        });

        let mut n_exceeding = 0;
        for outcome in exceeded {
            if outcome? {
                n_exceeding += 1;
            }
        }

        let p_value = n_exceeding as f64 / self.n_simulations as f64;
        debug!("{} of {} simulations exceeded {:.6}", n_exceeding, self.n_simulations, observed);

        Ok(SignificanceEstimate {
            p_value,
            n_exceeding,
            n_simulations: self.n_simulations,
        })
    }
}

/// Asymptotic p-value of Pettitt's statistic, `2·exp(−6U² / (n³ + n²))`
///
/// Clamped to 1 since the approximation exceeds it for small `U`.
pub fn pettitt_asymptotic_p_value(statistic: f64, n: usize) -> f64 {
    let n = n as f64;
    let p = 2.0 * (-6.0 * statistic * statistic / (n.powi(3) + n.powi(2))).exp();
    p.min(1.0)
}
