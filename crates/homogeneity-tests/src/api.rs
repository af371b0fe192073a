//! Convenience API: one function per method
//!
//! Each entry point takes the series, a significance level and an optional
//! simulation count, and runs on [`auto_engine`] (Rayon when the `parallel`
//! feature is enabled).
//!
//! ```rust
//! use homogeneity_tests::{snht_test, FAST_SIMULATIONS};
//!
//! let data = vec![1.0, 1.2, 0.9, 1.1, 3.0, 3.2, 2.9, 3.1];
//! let result = snht_test(&data, 0.05, Some(FAST_SIMULATIONS)).unwrap();
//!
//! assert_eq!(*result.cp(), 4);
//! ```

use crate::homogeneity::{HomogeneityParameters, HomogeneityTest};
use crate::statistics::HomogeneityMethod;
use crate::types::HomogeneityResult;
use homogeneity_core::{auto_engine, ObservationSeries, Observations, Result};

pub use crate::homogeneity::DEFAULT_ALPHA;
pub use crate::significance::DEFAULT_SIMULATIONS;

/// Smaller simulation count for quick exploratory runs
pub const FAST_SIMULATIONS: usize = 2_000;

fn run_method<'a>(
    method: HomogeneityMethod,
    x: impl Into<Observations<'a>>,
    alpha: f64,
    sim: Option<usize>,
) -> Result<HomogeneityResult<usize>> {
    let parameters = HomogeneityParameters {
        alpha,
        simulations: sim,
        ..Default::default()
    };
    HomogeneityTest::new(method)
        .with_parameters(parameters)
        .with_engine(auto_engine())
        .run(x)
}

/// Pettitt's test
///
/// Without simulations the p-value comes from the asymptotic
/// approximation, so `h` and `p` are always defined.
pub fn pettitt_test<'a>(
    x: impl Into<Observations<'a>>,
    alpha: f64,
    sim: Option<usize>,
) -> Result<HomogeneityResult<usize>> {
    run_method(HomogeneityMethod::Pettitt, x, alpha, sim)
}

/// Standard Normal Homogeneity Test
pub fn snht_test<'a>(
    x: impl Into<Observations<'a>>,
    alpha: f64,
    sim: Option<usize>,
) -> Result<HomogeneityResult<usize>> {
    run_method(HomogeneityMethod::Snht, x, alpha, sim)
}

/// Buishand Q test
pub fn buishand_q_test<'a>(
    x: impl Into<Observations<'a>>,
    alpha: f64,
    sim: Option<usize>,
) -> Result<HomogeneityResult<usize>> {
    run_method(HomogeneityMethod::BuishandQ, x, alpha, sim)
}

/// Buishand range test
pub fn buishand_range_test<'a>(
    x: impl Into<Observations<'a>>,
    alpha: f64,
    sim: Option<usize>,
) -> Result<HomogeneityResult<usize>> {
    run_method(HomogeneityMethod::BuishandRange, x, alpha, sim)
}

/// Buishand likelihood-ratio test
pub fn buishand_likelihood_ratio_test<'a>(
    x: impl Into<Observations<'a>>,
    alpha: f64,
    sim: Option<usize>,
) -> Result<HomogeneityResult<usize>> {
    run_method(HomogeneityMethod::BuishandLikelihoodRatio, x, alpha, sim)
}

/// Buishand U test
pub fn buishand_u_test<'a>(
    x: impl Into<Observations<'a>>,
    alpha: f64,
    sim: Option<usize>,
) -> Result<HomogeneityResult<usize>> {
    run_method(HomogeneityMethod::BuishandU, x, alpha, sim)
}

/// Run all six methods on one input, cleaning it once
///
/// Results follow [`HomogeneityMethod::ALL`] order.
pub fn run_all<'a>(
    x: impl Into<Observations<'a>>,
    parameters: &HomogeneityParameters,
) -> Result<Vec<HomogeneityResult<usize>>> {
    parameters.validate()?;
    let series = ObservationSeries::positional(x, parameters.missing)?;
    run_all_series(&series, parameters)
}

/// Run all six methods on an already cleaned series
pub fn run_all_series<L: Clone>(
    series: &ObservationSeries<L>,
    parameters: &HomogeneityParameters,
) -> Result<Vec<HomogeneityResult<L>>> {
    HomogeneityMethod::ALL
        .iter()
        .map(|&method| {
            HomogeneityTest::new(method)
                .with_parameters(parameters.clone())
                .with_engine(auto_engine())
                .run_series(series)
        })
        .collect()
}
