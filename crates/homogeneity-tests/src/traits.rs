//! Core traits for homogeneity statistics

use crate::types::StatisticOutcome;
use homogeneity_core::Result;

/// A change-point statistic: maps a clean series to a statistic value and
/// the location of the most likely change
///
/// Implementations are pure, so one instance can be shared by every
/// Monte Carlo simulation.
pub trait ChangePointStatistic: Send + Sync {
    /// Get the name of the statistic
    fn name(&self) -> &'static str;

    /// Get the minimum sample size required
    fn minimum_sample_size(&self) -> usize {
        2
    }

    /// Compute the statistic on a clean (NaN-free) series
    fn compute(&self, sample: &[f64]) -> Result<StatisticOutcome>;
}
