//! Homogeneity and single change-point tests for ordered series
//!
//! This crate implements six classical homogeneity tests, each locating the
//! most likely single change point of a series and estimating its
//! significance:
//!
//! ## Rank-based
//! - **Pettitt**: mid-rank deviations, with an asymptotic p-value when no
//!   simulation is requested
//!
//! ## Mean-shift
//! - **SNHT** (Standard Normal Homogeneity Test)
//! - **Buishand Q**, **Range**, **Likelihood Ratio** and **U**: adjusted
//!   partial sums of deviations from the mean
//!
//! Significance is estimated by Monte Carlo simulation under the null
//! hypothesis of i.i.d. standard-normal observations. Simulations are
//! independent and run on any [`ExecutionEngine`](homogeneity_core::ExecutionEngine).
//!
//! ## Usage
//!
//! ```rust
//! use homogeneity_tests::{HomogeneityMethod, HomogeneityTest};
//!
//! let data: Vec<f64> = (0..40).map(|i| if i < 25 { 12.0 + (i % 3) as f64 } else { 8.0 + (i % 2) as f64 }).collect();
//!
//! let result = HomogeneityTest::new(HomogeneityMethod::Snht)
//!     .with_simulations(500)
//!     .with_seed(42)
//!     .run(&data)
//!     .unwrap();
//!
//! assert_eq!(*result.cp(), 25);
//! assert_eq!(result.h(), Some(true));
//! ```

pub mod api;
pub mod homogeneity;
pub mod kernel;
pub mod significance;
pub mod statistics;
pub mod traits;
pub mod types;

pub use api::{
    buishand_likelihood_ratio_test, buishand_q_test, buishand_range_test, buishand_u_test,
    pettitt_test, run_all, run_all_series, snht_test, FAST_SIMULATIONS,
};
pub use homogeneity::{HomogeneityParameters, HomogeneityTest, DEFAULT_ALPHA};
pub use significance::{pettitt_asymptotic_p_value, MonteCarlo, SignificanceEstimate, DEFAULT_SIMULATIONS};
pub use statistics::{
    buishand_likelihood_ratio, buishand_q, buishand_range, buishand_u, pettitt, snht,
    HomogeneityMethod,
};
pub use traits::ChangePointStatistic;
pub use types::{HomogeneityResult, SegmentMeans, StatisticOutcome};

// Core types used in signatures
pub use homogeneity_core::{Error, MissingPolicy, Observations, Result};
