//! Error types for homogeneity testing
//!
//! Provides a unified error type for all homogeneity crates.

use thiserror::Error;

/// Core error type for homogeneity test operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Table input with a column count other than one
    #[error("Unsupported shape: expected a single column, got {columns} columns")]
    UnsupportedShape { columns: usize },

    /// Label array not co-indexed with the observations
    #[error("Label mismatch: {values} observations but {labels} labels")]
    LabelMismatch { values: usize, labels: usize },

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Every usable observation has the same value
    #[error("Degenerate variance: all {n} observations are identical")]
    DegenerateVariance { n: usize },

    /// Missing observations found while missing values are rejected
    #[error("Missing values: {count} undefined observations")]
    MissingValues { count: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a significance level outside (0, 1)
    pub fn invalid_alpha(alpha: f64) -> Self {
        Self::InvalidParameter(format!("Significance level {alpha} must be in (0, 1)"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }
}
