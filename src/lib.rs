//! Homogeneity testing for ordered observation series
//!
//! Umbrella crate re-exporting the workspace members:
//!
//! - [`homogeneity_core`]: errors, observation cleaning and execution engines
//! - [`homogeneity_tests`]: the Pettitt, SNHT and Buishand tests
//! - `homogeneity_polars` (feature `polars`): DataFrame integration
//!
//! ```rust
//! use homogeneity::{pettitt_test, snht_test};
//!
//! let data = vec![22.0, 23.5, 21.8, 22.9, 23.1, 19.2, 18.7, 19.5, 18.9, 19.1];
//! let pettitt = pettitt_test(&data, 0.05, None).unwrap();
//! let snht = snht_test(&data, 0.05, None).unwrap();
//!
//! assert_eq!(pettitt.cp(), snht.cp());
//! ```

pub use homogeneity_core;
pub use homogeneity_tests;

#[cfg(feature = "polars")]
pub use homogeneity_polars;

pub use homogeneity_core::{
    auto_engine, sequential, Error, ExecutionEngine, MissingPolicy, ObservationSeries,
    Observations, Result, SequentialEngine,
};
#[cfg(feature = "parallel")]
pub use homogeneity_core::{parallel, ParallelEngine};

pub use homogeneity_tests::{
    buishand_likelihood_ratio_test, buishand_q_test, buishand_range_test, buishand_u_test,
    pettitt_test, run_all, snht_test, ChangePointStatistic, HomogeneityMethod,
    HomogeneityParameters, HomogeneityResult, HomogeneityTest, MonteCarlo, SegmentMeans,
    DEFAULT_ALPHA, DEFAULT_SIMULATIONS, FAST_SIMULATIONS,
};

#[cfg(feature = "polars")]
pub use homogeneity_polars::HomogeneityExt;
