//! Test orchestration
//!
//! [`HomogeneityTest`] runs one method over one input: clean the series,
//! compute the statistic and its location, estimate significance (Monte
//! Carlo, or Pettitt's asymptotic formula when simulation is disabled),
//! split the series into segment means and translate the location into the
//! caller's label.

use crate::kernel::segment_means;
use crate::significance::{MonteCarlo, DEFAULT_SIMULATIONS};
use crate::statistics::HomogeneityMethod;
use crate::traits::ChangePointStatistic;
use crate::types::HomogeneityResult;
use homogeneity_core::{
    Error, ExecutionEngine, MissingPolicy, ObservationSeries, Observations, Result,
    SequentialEngine,
};
use tracing::{debug, instrument};

/// Default significance level
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Parameters shared by every homogeneity test
#[derive(Debug, Clone, PartialEq)]
pub struct HomogeneityParameters {
    /// Significance threshold in `(0, 1)`
    pub alpha: f64,
    /// Monte Carlo simulation count; `None` or zero disables simulation
    pub simulations: Option<usize>,
    /// Base seed for reproducible simulations
    pub seed: Option<u64>,
    /// Handling of undefined observations
    pub missing: MissingPolicy,
}

impl Default for HomogeneityParameters {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            simulations: Some(DEFAULT_SIMULATIONS),
            seed: None,
            missing: MissingPolicy::Skip,
        }
    }
}

impl HomogeneityParameters {
    /// Check that the significance level lies in `(0, 1)`
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(Error::invalid_alpha(self.alpha));
        }
        Ok(())
    }

    /// Simulation count, if simulation is enabled
    pub fn active_simulations(&self) -> Option<usize> {
        self.simulations.filter(|&sim| sim > 0)
    }
}

/// A configured homogeneity test
///
/// ```rust
/// use homogeneity_tests::{HomogeneityMethod, HomogeneityTest};
///
/// let data = vec![5.1, 4.9, 5.2, 5.0, 2.1, 1.9, 2.2, 2.0];
/// let result = HomogeneityTest::new(HomogeneityMethod::Pettitt)
///     .without_simulations()
///     .run(&data)
///     .unwrap();
///
/// assert_eq!(*result.cp(), 4);
/// assert!(result.p().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct HomogeneityTest<E = SequentialEngine> {
    method: HomogeneityMethod,
    parameters: HomogeneityParameters,
    engine: E,
}

impl HomogeneityTest<SequentialEngine> {
    /// Create a test with default parameters on the sequential engine
    pub fn new(method: HomogeneityMethod) -> Self {
        Self {
            method,
            parameters: HomogeneityParameters::default(),
            engine: SequentialEngine,
        }
    }
}

impl<E: ExecutionEngine> HomogeneityTest<E> {
    /// Set the significance level
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.parameters.alpha = alpha;
        self
    }

    /// Set the number of Monte Carlo simulations
    pub fn with_simulations(mut self, simulations: usize) -> Self {
        self.parameters.simulations = Some(simulations);
        self
    }

    /// Disable Monte Carlo simulation
    pub fn without_simulations(mut self) -> Self {
        self.parameters.simulations = None;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.parameters.seed = Some(seed);
        self
    }

    /// Set the missing-value policy
    pub fn with_missing_policy(mut self, missing: MissingPolicy) -> Self {
        self.parameters.missing = missing;
        self
    }

    /// Replace all parameters at once
    pub fn with_parameters(mut self, parameters: HomogeneityParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Run simulations on a different execution engine
    pub fn with_engine<E2: ExecutionEngine>(self, engine: E2) -> HomogeneityTest<E2> {
        HomogeneityTest {
            method: self.method,
            parameters: self.parameters,
            engine,
        }
    }

    /// Method under test
    pub fn method(&self) -> HomogeneityMethod {
        self.method
    }

    /// Current parameters
    pub fn parameters(&self) -> &HomogeneityParameters {
        &self.parameters
    }

    /// Run on raw input, labelling the change point by raw position
    pub fn run<'a>(&self, x: impl Into<Observations<'a>>) -> Result<HomogeneityResult<usize>> {
        self.parameters.validate()?;
        let series = ObservationSeries::positional(x, self.parameters.missing)?;
        self.run_series(&series)
    }

    /// Run on raw input with one label per raw observation
    pub fn run_labeled<'a, L: Clone>(
        &self,
        x: impl Into<Observations<'a>>,
        labels: &[L],
    ) -> Result<HomogeneityResult<L>> {
        self.parameters.validate()?;
        let series = ObservationSeries::labeled(x, labels, self.parameters.missing)?;
        self.run_series(&series)
    }

    /// Run on an already cleaned series
    #[instrument(skip(self, series), fields(method = %self.method, n = series.len()))]
    pub fn run_series<L: Clone>(&self, series: &ObservationSeries<L>) -> Result<HomogeneityResult<L>> {
        self.parameters.validate()?;
        let values = series.values();
        let n = values.len();

        let outcome = self.method.compute(values)?;
        debug!(
            "{} = {:.6} at position {}",
            self.method.statistic_symbol(),
            outcome.value,
            outcome.location
        );

        let p = match self.parameters.active_simulations() {
            Some(sim) => {
                let mut estimator = MonteCarlo::new(sim).with_engine(self.engine.clone());
                if let Some(seed) = self.parameters.seed {
                    estimator = estimator.with_seed(seed);
                }
                Some(estimator.p_value(&self.method, outcome.value, n)?.p_value)
            }
            None => self.method.asymptotic_p_value(outcome.value, n),
        };
        let h = p.map(|p| self.parameters.alpha > p);

        let avg = segment_means(values, outcome.location);
        let cp = series.label_at(outcome.location).cloned().ok_or_else(|| {
            Error::Computation(format!(
                "change point {} outside series of length {}",
                outcome.location, n
            ))
        })?;

        Ok(HomogeneityResult::new(
            self.method,
            h,
            cp,
            p,
            outcome.value,
            avg,
            outcome.location,
            n,
        ))
    }
}
