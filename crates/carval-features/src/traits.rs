//! The table-in, table-out interface shared by every transformer.

use crate::error::{FeatureError, Result};
use polars::prelude::*;

/// A single step of a feature-engineering pipeline.
///
/// Implementations take the input frame by reference and return a new frame;
/// the caller's data is never modified. There is no fit phase: anything a
/// transformer derives from the data (percentiles, say) is recomputed on each
/// call.
///
/// # Example
/// ```
/// use carval_features::{Transformer, ZeroToMissing};
/// use polars::prelude::*;
///
/// let df = df!["Mileage" => [0.0, 18.2]].unwrap();
/// let mut step = ZeroToMissing::default();
/// let out = step.transform(&df).unwrap();
/// assert_eq!(out.column("Mileage").unwrap().null_count(), 1);
/// assert_eq!(step.feature_names_out().unwrap(), ["Mileage"]);
/// ```
pub trait Transformer {
    /// Stable identifier used in logs and errors.
    fn name(&self) -> &str;

    /// Columns that must be present in the input.
    fn required_columns(&self) -> Vec<&str>;

    /// Transform `data` into a new frame.
    fn transform(&mut self, data: &DataFrame) -> Result<DataFrame>;

    /// Column names of the frame produced by the last successful `transform`.
    fn feature_names_out(&self) -> Option<&[String]>;

    /// Fail with [`FeatureError::MissingColumn`] if a required column is absent.
    fn check_columns(&self, data: &DataFrame) -> Result<()> {
        for column in self.required_columns() {
            if data.column(column).is_err() {
                return Err(FeatureError::MissingColumn {
                    transformer: self.name().to_string(),
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Integer and float dtypes count as numeric; booleans do not.
pub(crate) fn is_numeric(dtype: &DataType) -> bool {
    dtype.is_integer() || dtype.is_float()
}

pub(crate) fn column_names(data: &DataFrame) -> Vec<String> {
    data.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}
