//! Types used for homogeneity testing

use crate::statistics::HomogeneityMethod;
use std::fmt;

/// Statistic value and change-point location computed from a clean series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticOutcome {
    /// Value of the test statistic
    pub value: f64,
    /// 1-based position of the last observation before the change
    pub location: usize,
}

impl StatisticOutcome {
    /// Create a new outcome
    pub fn new(value: f64, location: usize) -> Self {
        Self { value, location }
    }
}

/// Means of the segments before and after a change point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentMeans {
    /// Mean of observations `1..=location`
    pub mu1: f64,
    /// Mean of observations `location+1..=n`
    pub mu2: f64,
}

impl SegmentMeans {
    /// Difference `mu2 - mu1`
    pub fn shift(&self) -> f64 {
        self.mu2 - self.mu1
    }
}

impl fmt::Display for SegmentMeans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mu1: {:.4}, mu2: {:.4}", self.mu1, self.mu2)
    }
}

/// Result of a homogeneity test
///
/// `h` and `p` are `None` when significance was not estimated.
#[derive(Debug, Clone, PartialEq)]
pub struct HomogeneityResult<L = usize> {
    method: HomogeneityMethod,
    h: Option<bool>,
    cp: L,
    p: Option<f64>,
    statistic: f64,
    avg: SegmentMeans,
    location: usize,
    sample_size: usize,
}

impl<L> HomogeneityResult<L> {
    /// Create a new result
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        method: HomogeneityMethod,
        h: Option<bool>,
        cp: L,
        p: Option<f64>,
        statistic: f64,
        avg: SegmentMeans,
        location: usize,
        sample_size: usize,
    ) -> Self {
        Self {
            method,
            h,
            cp,
            p,
            statistic,
            avg,
            location,
            sample_size,
        }
    }

    /// Method that produced this result
    pub fn method(&self) -> HomogeneityMethod {
        self.method
    }

    /// `Some(true)` if the series is judged non-homogeneous
    pub fn h(&self) -> Option<bool> {
        self.h
    }

    /// Label of the change point, taken from the input index
    pub fn cp(&self) -> &L {
        &self.cp
    }

    /// p-value of the test, if estimated
    pub fn p(&self) -> Option<f64> {
        self.p
    }

    /// Value of the method's test statistic
    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    /// Conventional symbol of the statistic (`U`, `T`, `Q`, `R`, `V`)
    pub fn statistic_name(&self) -> &'static str {
        self.method.statistic_symbol()
    }

    /// Means before and after the change point
    pub fn avg(&self) -> SegmentMeans {
        self.avg
    }

    /// 1-based change-point position within the cleaned series
    pub fn location(&self) -> usize {
        self.location
    }

    /// Number of observations left after removing missing values
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Replace the change-point label
    pub fn map_label<M, F: FnOnce(L) -> M>(self, f: F) -> HomogeneityResult<M> {
        HomogeneityResult {
            method: self.method,
            h: self.h,
            cp: f(self.cp),
            p: self.p,
            statistic: self.statistic,
            avg: self.avg,
            location: self.location,
            sample_size: self.sample_size,
        }
    }
}

impl<L: fmt::Display> fmt::Display for HomogeneityResult<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Test Result:", self.method)?;
        writeln!(f, "  Sample size: {}", self.sample_size)?;
        writeln!(f, "  {}: {:.6}", self.statistic_name(), self.statistic)?;
        writeln!(f, "  Change point: {}", self.cp)?;
        match (self.h, self.p) {
            (Some(h), Some(p)) => {
                writeln!(f, "  p-value: {p:.4}")?;
                writeln!(f, "  Non-homogeneous: {h}")?;
            }
            _ => writeln!(f, "  p-value: not estimated")?,
        }
        writeln!(f, "  Means: {}", self.avg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> HomogeneityResult<usize> {
        HomogeneityResult::new(
            HomogeneityMethod::Snht,
            None,
            7,
            None,
            3.25,
            SegmentMeans { mu1: 1.0, mu2: 4.0 },
            5,
            10,
        )
    }

    #[test]
    fn test_accessors() {
        let result = sample_result();
        assert_eq!(result.method(), HomogeneityMethod::Snht);
        assert_eq!(result.statistic_name(), "T");
        assert_eq!(*result.cp(), 7);
        assert_eq!(result.h(), None);
        assert_eq!(result.p(), None);
        assert_eq!(result.location(), 5);
        assert_eq!(result.sample_size(), 10);
        assert_eq!(result.avg().shift(), 3.0);
    }

    #[test]
    fn test_map_label() {
        let years = ["2001", "2002", "2003", "2004", "2005", "2006", "2007"];
        let result = sample_result().map_label(|pos| years[pos - 1]);
        assert_eq!(*result.cp(), "2007");
        assert_eq!(result.statistic(), 3.25);
    }

    #[test]
    fn test_display() {
        let display = format!("{}", sample_result());
        assert!(display.contains("SNHT Test Result"));
        assert!(display.contains("T: 3.250000"));
        assert!(display.contains("Change point: 7"));
        assert!(display.contains("not estimated"));
        assert!(display.contains("mu1: 1.0000, mu2: 4.0000"));
    }
}
