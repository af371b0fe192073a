//! Observation series: input shapes, labels and missing-value filtering
//!
//! Raw input arrives either as a flat sequence or as a table of rows. It is
//! flattened into one value per observation, paired with a label per
//! observation, and cleaned of undefined (NaN) values. Labels travel with
//! their values through filtering, so a change-point position in the
//! cleaned series always maps back to a label of the raw input.

use crate::{Error, Result};
use tracing::debug;

/// Missing-data handling strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingPolicy {
    /// Drop every undefined observation together with its label
    #[default]
    Skip,
    /// Fail if any undefined observation is present
    Reject,
}

/// Borrowed view of raw input in one of the accepted shapes
#[derive(Clone, Copy, Debug)]
pub enum Observations<'a> {
    /// Flat ordered sequence, one value per observation
    Sequence(&'a [f64]),
    /// Row-major table; exactly one column is supported
    Table(&'a [Vec<f64>]),
}

impl<'a> Observations<'a> {
    /// Number of raw observations (rows), before any filtering
    pub fn len(&self) -> usize {
        match self {
            Observations::Sequence(values) => values.len(),
            Observations::Table(rows) => rows.len(),
        }
    }

    /// Check whether the input has no observations
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten the input into one value per observation
    ///
    /// Tables must be rectangular with exactly one column.
    pub fn flatten(&self) -> Result<Vec<f64>> {
        match self {
            Observations::Sequence(values) => Ok(values.to_vec()),
            Observations::Table(rows) => {
                let Some(first) = rows.first() else {
                    return Ok(Vec::new());
                };
                let columns = first.len();
                if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
                    return Err(Error::InvalidInput(format!(
                        "ragged table: row {i} has {} columns, row 0 has {columns}",
                        row.len()
                    )));
                }
                if columns != 1 {
                    return Err(Error::UnsupportedShape { columns });
                }
                Ok(rows.iter().map(|row| row[0]).collect())
            }
        }
    }
}

impl<'a> From<&'a [f64]> for Observations<'a> {
    fn from(values: &'a [f64]) -> Self {
        Observations::Sequence(values)
    }
}

impl<'a> From<&'a Vec<f64>> for Observations<'a> {
    fn from(values: &'a Vec<f64>) -> Self {
        Observations::Sequence(values.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Observations<'a> {
    fn from(values: &'a [f64; N]) -> Self {
        Observations::Sequence(values.as_slice())
    }
}

impl<'a> From<&'a [Vec<f64>]> for Observations<'a> {
    fn from(rows: &'a [Vec<f64>]) -> Self {
        Observations::Table(rows)
    }
}

impl<'a> From<&'a Vec<Vec<f64>>> for Observations<'a> {
    fn from(rows: &'a Vec<Vec<f64>>) -> Self {
        Observations::Table(rows.as_slice())
    }
}

/// Cleaned observation series with co-indexed labels
///
/// `values[i]` and `labels[i]` always describe the same observation.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSeries<L = usize> {
    values: Vec<f64>,
    labels: Vec<L>,
    n_missing: usize,
}

impl ObservationSeries<usize> {
    /// Clean raw input, labelling each observation by its 1-based position
    /// in the raw input
    pub fn positional<'a>(input: impl Into<Observations<'a>>, missing: MissingPolicy) -> Result<Self> {
        let values = input.into().flatten()?;
        let labels = (1..=values.len()).collect();
        Self::from_parts(values, labels, missing)
    }
}

impl<L: Clone> ObservationSeries<L> {
    /// Clean raw input, labelling each observation with the supplied index
    ///
    /// `labels` must have one entry per raw observation.
    pub fn labeled<'a>(
        input: impl Into<Observations<'a>>,
        labels: &[L],
        missing: MissingPolicy,
    ) -> Result<Self> {
        let values = input.into().flatten()?;
        Self::from_parts(values, labels.to_vec(), missing)
    }
}

impl<L> ObservationSeries<L> {
    /// Build from flattened values and their labels, filtering missing values
    pub fn from_parts(values: Vec<f64>, labels: Vec<L>, missing: MissingPolicy) -> Result<Self> {
        if values.len() != labels.len() {
            return Err(Error::LabelMismatch {
                values: values.len(),
                labels: labels.len(),
            });
        }

        let (values, labels, n_missing) = filter_missing(values, labels, missing)?;

        if values.iter().any(|x| x.is_infinite()) {
            return Err(Error::non_finite("observations"));
        }

        Ok(Self {
            values,
            labels,
            n_missing,
        })
    }

    /// Cleaned values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Labels of the cleaned values
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Number of cleaned observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether no observations survived cleaning
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of undefined observations that were dropped
    pub fn n_missing(&self) -> usize {
        self.n_missing
    }

    /// Label of the observation at 1-based `position` in the cleaned series
    pub fn label_at(&self, position: usize) -> Option<&L> {
        position.checked_sub(1).and_then(|i| self.labels.get(i))
    }
}

/// Remove undefined observations, keeping labels aligned
///
/// Returns the kept values, their labels and the number of dropped
/// observations.
pub fn filter_missing<L>(
    values: Vec<f64>,
    labels: Vec<L>,
    missing: MissingPolicy,
) -> Result<(Vec<f64>, Vec<L>, usize)> {
    let n_missing = values.iter().filter(|x| x.is_nan()).count();
    if n_missing == 0 {
        return Ok((values, labels, 0));
    }

    match missing {
        MissingPolicy::Reject => Err(Error::MissingValues { count: n_missing }),
        MissingPolicy::Skip => {
            debug!("Skipping {} missing observations out of {}", n_missing, values.len());
            let (kept_values, kept_labels): (Vec<f64>, Vec<L>) = values
                .into_iter()
                .zip(labels)
                .filter(|(x, _)| !x.is_nan())
                .unzip();
            Ok((kept_values, kept_labels, n_missing))
        }
    }
}
