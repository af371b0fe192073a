//! Homogeneity tests on Polars DataFrames

use crate::{Error, Result};
use homogeneity_core::{auto_engine, ObservationSeries};
use homogeneity_tests::{
    run_all_series, HomogeneityMethod, HomogeneityParameters, HomogeneityResult, HomogeneityTest,
};
use polars::prelude::*;

/// Extension trait for homogeneity testing on Polars DataFrames
///
/// Null entries in the value column count as missing observations.
pub trait HomogeneityExt {
    /// Test a single-column frame
    ///
    /// The frame must contain exactly one numeric column. The change point
    /// is labelled by its 1-based row position.
    fn homogeneity_test(
        &self,
        method: HomogeneityMethod,
        parameters: &HomogeneityParameters,
    ) -> Result<HomogeneityResult<usize>>;

    /// Test a frame of one value column plus an index column
    ///
    /// # Arguments
    /// * `index_col` - Column whose values, rendered as strings, label the
    ///   change point
    /// * `method` - Homogeneity test to run
    /// * `parameters` - Significance level, simulations and missing policy
    fn homogeneity_test_indexed(
        &self,
        index_col: &str,
        method: HomogeneityMethod,
        parameters: &HomogeneityParameters,
    ) -> Result<HomogeneityResult<String>>;

    /// Run all six methods on a single-column frame
    ///
    /// # Returns
    /// DataFrame with one row per method and columns
    /// `method, h, cp, p, statistic, mu1, mu2`
    fn homogeneity_summary(&self, parameters: &HomogeneityParameters) -> Result<DataFrame>;
}

impl HomogeneityExt for DataFrame {
    fn homogeneity_test(
        &self,
        method: HomogeneityMethod,
        parameters: &HomogeneityParameters,
    ) -> Result<HomogeneityResult<usize>> {
        let series = positional_series(self, parameters)?;
        Ok(HomogeneityTest::new(method)
            .with_parameters(parameters.clone())
            .with_engine(auto_engine())
            .run_series(&series)?)
    }

    fn homogeneity_test_indexed(
        &self,
        index_col: &str,
        method: HomogeneityMethod,
        parameters: &HomogeneityParameters,
    ) -> Result<HomogeneityResult<String>> {
        parameters.validate()?;
        let index = self
            .column(index_col)
            .map_err(|_| Error::InvalidColumn(index_col.to_string()))?;

        let value_columns: Vec<&Column> = self
            .get_columns()
            .iter()
            .filter(|c| c.name().as_str() != index_col)
            .collect();
        if value_columns.len() != 1 {
            return Err(homogeneity_core::Error::UnsupportedShape {
                columns: value_columns.len(),
            }
            .into());
        }

        let values = numeric_values(value_columns[0])?;
        let labels = label_strings(index)?;
        let series = ObservationSeries::from_parts(values, labels, parameters.missing)?;

        Ok(HomogeneityTest::new(method)
            .with_parameters(parameters.clone())
            .with_engine(auto_engine())
            .run_series(&series)?)
    }

    fn homogeneity_summary(&self, parameters: &HomogeneityParameters) -> Result<DataFrame> {
        let series = positional_series(self, parameters)?;
        let results = run_all_series(&series, parameters)?;

        let methods: Vec<String> = results.iter().map(|r| r.method().to_string()).collect();
        let h: Vec<Option<bool>> = results.iter().map(|r| r.h()).collect();
        let cp: Vec<u64> = results.iter().map(|r| *r.cp() as u64).collect();
        let p: Vec<Option<f64>> = results.iter().map(|r| r.p()).collect();
        let statistic: Vec<f64> = results.iter().map(|r| r.statistic()).collect();
        let mu1: Vec<f64> = results.iter().map(|r| r.avg().mu1).collect();
        let mu2: Vec<f64> = results.iter().map(|r| r.avg().mu2).collect();

        Ok(DataFrame::new(vec![
            Series::new("method".into(), methods).into(),
            Series::new("h".into(), h).into(),
            Series::new("cp".into(), cp).into(),
            Series::new("p".into(), p).into(),
            Series::new("statistic".into(), statistic).into(),
            Series::new("mu1".into(), mu1).into(),
            Series::new("mu2".into(), mu2).into(),
        ])?)
    }
}

/// Clean the only column of `df`, labelling rows by position
fn positional_series(
    df: &DataFrame,
    parameters: &HomogeneityParameters,
) -> Result<ObservationSeries<usize>> {
    parameters.validate()?;
    let columns = df.get_columns();
    if columns.len() != 1 {
        return Err(homogeneity_core::Error::UnsupportedShape {
            columns: columns.len(),
        }
        .into());
    }
    let values = numeric_values(&columns[0])?;
    Ok(ObservationSeries::positional(&values, parameters.missing)?)
}

/// Column values as `f64`, with nulls mapped to NaN
fn numeric_values(column: &Column) -> Result<Vec<f64>> {
    let float_column = match column.dtype() {
        DataType::Float64 => column.clone(),
        DataType::Float32
        | DataType::Int64
        | DataType::Int32
        | DataType::Int16
        | DataType::Int8
        | DataType::UInt64
        | DataType::UInt32
        | DataType::UInt16
        | DataType::UInt8 => column.cast(&DataType::Float64)?,
        dt => {
            return Err(Error::TypeMismatch {
                expected: "numeric".to_string(),
                got: format!("{:?}", dt),
            });
        }
    };

    let ca = float_column.f64()?;
    Ok(ca.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
}

/// Index values rendered as strings; nulls become `"null"`
fn label_strings(column: &Column) -> Result<Vec<String>> {
    let as_string = column.cast(&DataType::String)?;
    let ca = as_string.str()?;
    Ok(ca
        .into_iter()
        .map(|v| v.map_or_else(|| "null".to_string(), str::to_string))
        .collect())
}
