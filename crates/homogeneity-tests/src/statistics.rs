//! The six homogeneity statistics
//!
//! | Method | Statistic | Location |
//! |---|---|---|
//! | Pettitt | `max U_k` over mid-rank deviations | `argmax U_k` |
//! | SNHT | `max T_k`, sample std | `argmax T_k` |
//! | Buishand Q | `max |S_k| / σ / √n` | `argmax_{k<n} |S_k|` |
//! | Buishand Range | `(max S_k − min S_k) / σ / √n` | `argmax_{k<n} |S_k|` |
//! | Buishand LR | `max S_k / σ / √(k(n−k))` | `argmax_{k<n} |S_k|` |
//! | Buishand U | `Σ_{k<n} (S_k/σ)² / (n(n+1))` | `argmax_{k<n} |S_k|` |
//!
//! `σ` is the population standard deviation for the Buishand family; SNHT
//! standardizes with the sample standard deviation. `S_n` is zero up to
//! rounding, so the Buishand location never lands on the last observation.

use crate::kernel::{cumulative_deviations, max_abs_location, rank_deviations, snht_deviations};
use crate::significance::pettitt_asymptotic_p_value;
use crate::traits::ChangePointStatistic;
use crate::types::StatisticOutcome;
use homogeneity_core::utils::{argmax, min_max, population_std_dev, std_dev};
use homogeneity_core::{Error, Result};
use std::fmt;

/// The closed set of homogeneity tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomogeneityMethod {
    /// Pettitt's rank-based test
    Pettitt,
    /// Standard Normal Homogeneity Test
    Snht,
    /// Buishand Q (maximum adjusted partial sum)
    BuishandQ,
    /// Buishand range of adjusted partial sums
    BuishandRange,
    /// Buishand likelihood ratio
    BuishandLikelihoodRatio,
    /// Buishand U
    BuishandU,
}

impl HomogeneityMethod {
    /// All methods, in canonical order
    pub const ALL: [HomogeneityMethod; 6] = [
        HomogeneityMethod::Pettitt,
        HomogeneityMethod::Snht,
        HomogeneityMethod::BuishandQ,
        HomogeneityMethod::BuishandRange,
        HomogeneityMethod::BuishandLikelihoodRatio,
        HomogeneityMethod::BuishandU,
    ];

    /// Conventional symbol of the statistic
    pub fn statistic_symbol(&self) -> &'static str {
        match self {
            HomogeneityMethod::Pettitt => "U",
            HomogeneityMethod::Snht => "T",
            HomogeneityMethod::BuishandQ => "Q",
            HomogeneityMethod::BuishandRange => "R",
            HomogeneityMethod::BuishandLikelihoodRatio => "V",
            HomogeneityMethod::BuishandU => "U",
        }
    }

    /// Closed-form p-value, for methods that have one
    ///
    /// Only Pettitt's test has an asymptotic approximation.
    pub fn asymptotic_p_value(&self, statistic: f64, n: usize) -> Option<f64> {
        match self {
            HomogeneityMethod::Pettitt => Some(pettitt_asymptotic_p_value(statistic, n)),
            _ => None,
        }
    }
}

impl fmt::Display for HomogeneityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ChangePointStatistic for HomogeneityMethod {
    fn name(&self) -> &'static str {
        match self {
            HomogeneityMethod::Pettitt => "Pettitt",
            HomogeneityMethod::Snht => "SNHT",
            HomogeneityMethod::BuishandQ => "Buishand Q",
            HomogeneityMethod::BuishandRange => "Buishand Range",
            HomogeneityMethod::BuishandLikelihoodRatio => "Buishand Likelihood Ratio",
            HomogeneityMethod::BuishandU => "Buishand U",
        }
    }

    fn compute(&self, sample: &[f64]) -> Result<StatisticOutcome> {
        let outcome = match self {
            HomogeneityMethod::Pettitt => pettitt(sample),
            HomogeneityMethod::Snht => snht(sample),
            HomogeneityMethod::BuishandQ => buishand_q(sample),
            HomogeneityMethod::BuishandRange => buishand_range(sample),
            HomogeneityMethod::BuishandLikelihoodRatio => buishand_likelihood_ratio(sample),
            HomogeneityMethod::BuishandU => buishand_u(sample),
        }?;

        if !outcome.value.is_finite() {
            return Err(Error::non_finite("statistic"));
        }
        Ok(outcome)
    }
}

/// Reject series that are too short or have no variation
///
/// Distinct values whose spread underflows to a zero standard deviation
/// count as having no variation.
fn check_sample(sample: &[f64]) -> Result<()> {
    if sample.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: sample.len(),
        });
    }
    let constant = matches!(min_max(sample), Some((lo, hi)) if lo == hi);
    if constant || population_std_dev(sample) == 0.0 || std_dev(sample) == 0.0 {
        return Err(Error::DegenerateVariance { n: sample.len() });
    }
    Ok(())
}

fn location_of_extremum(sequence: &[f64], offset: usize) -> Result<usize> {
    argmax(sequence)
        .map(|i| i + offset)
        .ok_or_else(|| Error::Computation("empty deviation sequence".to_string()))
}

/// Pettitt's statistic `max U_k` and its location
pub fn pettitt(sample: &[f64]) -> Result<StatisticOutcome> {
    check_sample(sample)?;
    let u = rank_deviations(sample);
    let location = location_of_extremum(&u, 1)?;
    Ok(StatisticOutcome::new(u[location - 1], location))
}

/// SNHT statistic `max T_k` and its location
pub fn snht(sample: &[f64]) -> Result<StatisticOutcome> {
    check_sample(sample)?;
    let t = snht_deviations(sample, std_dev(sample));
    let location = location_of_extremum(&t, 1)?;
    Ok(StatisticOutcome::new(t[location - 1], location))
}

/// Partial sums standardized by the population std, with the shared
/// Buishand location
fn buishand_partial_sums(sample: &[f64]) -> Result<(Vec<f64>, usize)> {
    check_sample(sample)?;
    let s = cumulative_deviations(sample);
    let n = s.len();
    let location = max_abs_location(&s[..n - 1])
        .ok_or_else(|| Error::Computation("empty deviation sequence".to_string()))?;
    if s[location - 1] == 0.0 {
        return Err(Error::DegenerateVariance { n });
    }
    let sigma = population_std_dev(sample);
    let standardized = s.iter().map(|&v| v / sigma).collect();
    Ok((standardized, location))
}

/// Buishand Q statistic and its location
pub fn buishand_q(sample: &[f64]) -> Result<StatisticOutcome> {
    let (s, location) = buishand_partial_sums(sample)?;
    let n = sample.len() as f64;
    let max_abs = s.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
    Ok(StatisticOutcome::new(max_abs / n.sqrt(), location))
}

/// Buishand range statistic and its location
pub fn buishand_range(sample: &[f64]) -> Result<StatisticOutcome> {
    let (s, location) = buishand_partial_sums(sample)?;
    let n = sample.len() as f64;
    let (lo, hi) = min_max(&s).unwrap_or((0.0, 0.0));
    Ok(StatisticOutcome::new((hi - lo) / n.sqrt(), location))
}

/// Buishand likelihood-ratio statistic and its location
pub fn buishand_likelihood_ratio(sample: &[f64]) -> Result<StatisticOutcome> {
    let (s, location) = buishand_partial_sums(sample)?;
    let n = sample.len();
    let v = s[..n - 1]
        .iter()
        .enumerate()
        .map(|(i, &sk)| {
            let k = (i + 1) as f64;
            sk / (k * (n as f64 - k)).sqrt()
        })
        .fold(f64::NEG_INFINITY, f64::max);
    Ok(StatisticOutcome::new(v, location))
}

/// Buishand U statistic and its location
pub fn buishand_u(sample: &[f64]) -> Result<StatisticOutcome> {
    let (s, location) = buishand_partial_sums(sample)?;
    let n = sample.len();
    let sum_sq: f64 = s[..n - 1].iter().map(|v| v * v).sum();
    Ok(StatisticOutcome::new(sum_sq / (n * (n + 1)) as f64, location))
}
