//! Polars integration for homogeneity testing
//!
//! This crate runs the homogeneity tests on Polars DataFrames through a
//! single extension trait.
//!
//! # Example
//!
//! ```rust
//! use polars::prelude::*;
//! use homogeneity_polars::{HomogeneityExt, HomogeneityMethod, HomogeneityParameters};
//!
//! let df = df!["rainfall" => [5.1, 4.9, 5.2, 5.0, 2.1, 1.9, 2.2, 2.0]].unwrap();
//! let params = HomogeneityParameters { simulations: None, ..Default::default() };
//!
//! let result = df.homogeneity_test(HomogeneityMethod::Pettitt, &params).unwrap();
//! assert_eq!(*result.cp(), 4);
//!
//! let summary = df.homogeneity_summary(&params).unwrap();
//! assert_eq!(summary.height(), 6);
//! ```

mod error;
mod traits;

pub use error::{Error, Result};
pub use traits::HomogeneityExt;

// Re-export commonly used types from dependencies
pub use homogeneity_core::MissingPolicy;
pub use homogeneity_tests::{HomogeneityMethod, HomogeneityParameters, HomogeneityResult};
