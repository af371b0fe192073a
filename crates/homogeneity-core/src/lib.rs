//! Core types for homogeneity testing of ordered observation series
//!
//! This crate provides the building blocks shared by the homogeneity tests:
//!
//! - **Error handling**: a single [`Error`] type and [`Result`] alias
//! - **Observation series**: accepted input shapes, co-indexed labels and
//!   missing-value filtering ([`ObservationSeries`])
//! - **Numeric helpers**: means, sample/population standard deviation,
//!   mid-ranks and first-occurrence argmax ([`utils`])
//! - **Execution engines**: sequential or Rayon-parallel evaluation of
//!   independent batches ([`execution`])
//!
//! # Example
//!
//! ```rust
//! use homogeneity_core::{MissingPolicy, ObservationSeries};
//!
//! let raw = vec![1.0, f64::NAN, 3.0, 4.0];
//! let series = ObservationSeries::positional(&raw, MissingPolicy::Skip).unwrap();
//!
//! assert_eq!(series.values(), &[1.0, 3.0, 4.0]);
//! assert_eq!(series.labels(), &[1, 3, 4]);
//! ```

pub mod error;
pub mod execution;
pub mod series;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};

pub use execution::{auto_engine, sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};

pub use series::{filter_missing, MissingPolicy, ObservationSeries, Observations};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
