//! Regression error and goodness-of-fit scores.
//!
//! All six scores are rounded to two decimal places, which is the precision
//! they are reported at.

use ndarray::{ArrayView1, Zip};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while computing or reading scores.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Ground truth and predictions differ in length.
    #[error("Shape mismatch: {truth} true values, {predictions} predictions")]
    Shape {
        /// Length of the ground truth
        truth: usize,
        /// Length of the predictions
        predictions: usize,
    },

    /// No observations to score.
    #[error("Cannot score an empty sequence")]
    Empty,

    /// A score record lacks a metric.
    #[error("Missing metric: {0}")]
    MissingKey(String),

    /// A scored column contains nulls.
    #[error("Column {0} contains null values")]
    NullValues(String),

    /// Polars error.
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for metrics operations.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Record keys, in display order.
pub const METRIC_KEYS: [&str; 6] = [
    "mean_abs_error",
    "median_abs_error",
    "mean_abs_perc_error",
    "rmse",
    "max_error",
    "r2",
];

/// Errors and scores of one set of predictions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionScores {
    /// Mean absolute error.
    pub mean_abs_error: f64,

    /// Median absolute error.
    pub median_abs_error: f64,

    /// Mean absolute percentage error, as a fraction.
    pub mean_abs_perc_error: f64,

    /// Root mean squared error.
    pub rmse: f64,

    /// Largest absolute error.
    pub max_error: f64,

    /// Coefficient of determination.
    pub r2: f64,
}

impl RegressionScores {
    /// Score `y_pred` against `y_true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use carval_metrics::RegressionScores;
    ///
    /// let scores = RegressionScores::compute(&[3.0, 5.0, 7.5], &[2.5, 5.0, 8.0]).unwrap();
    /// assert_eq!(scores.mean_abs_error, 0.33);
    /// assert_eq!(scores.max_error, 0.5);
    /// ```
    pub fn compute(y_true: &[f64], y_pred: &[f64]) -> Result<Self> {
        Self::compute_view(ArrayView1::from(y_true), ArrayView1::from(y_pred))
    }

    /// Score two ndarray views.
    pub fn compute_view(y_true: ArrayView1<'_, f64>, y_pred: ArrayView1<'_, f64>) -> Result<Self> {
        if y_true.len() != y_pred.len() {
            return Err(MetricsError::Shape {
                truth: y_true.len(),
                predictions: y_pred.len(),
            });
        }
        if y_true.is_empty() {
            return Err(MetricsError::Empty);
        }

        let n = y_true.len() as f64;
        let abs_errors = Zip::from(&y_true)
            .and(&y_pred)
            .map_collect(|t, p| (t - p).abs());

        let mean_abs_error = abs_errors.sum() / n;
        let median_abs_error = median(abs_errors.to_vec());
        let mean_abs_perc_error = Zip::from(&abs_errors)
            .and(&y_true)
            .fold(0.0, |acc, err, t| acc + err / t.abs().max(f64::EPSILON))
            / n;
        let ss_res = abs_errors.mapv(|e| e * e).sum();
        let rmse = (ss_res / n).sqrt();
        let max_error = abs_errors.fold(0.0_f64, |acc, e| acc.max(*e));
        let r2 = r_squared(y_true, ss_res);

        debug!(observations = y_true.len(), "computed regression scores");

        Ok(Self {
            mean_abs_error: round2(mean_abs_error),
            median_abs_error: round2(median_abs_error),
            mean_abs_perc_error: round2(mean_abs_perc_error),
            rmse: round2(rmse),
            max_error: round2(max_error),
            r2: round2(r2),
        })
    }

    /// Score two numeric columns of a frame.
    pub fn compute_from_frame(data: &DataFrame, truth: &str, prediction: &str) -> Result<Self> {
        let y_true = column_values(data, truth)?;
        let y_pred = column_values(data, prediction)?;
        Self::compute(&y_true, &y_pred)
    }

    /// Convert to a string-keyed record.
    pub fn to_record(&self) -> BTreeMap<String, f64> {
        METRIC_KEYS
            .iter()
            .zip(self.values())
            .map(|(key, value)| ((*key).to_string(), value))
            .collect()
    }

    /// Read scores back from a string-keyed record.
    ///
    /// Fails with [`MetricsError::MissingKey`] naming the first absent metric.
    pub fn from_record(record: &BTreeMap<String, f64>) -> Result<Self> {
        let get = |key: &str| {
            record
                .get(key)
                .copied()
                .ok_or_else(|| MetricsError::MissingKey(key.to_string()))
        };
        Ok(Self {
            mean_abs_error: get("mean_abs_error")?,
            median_abs_error: get("median_abs_error")?,
            mean_abs_perc_error: get("mean_abs_perc_error")?,
            rmse: get("rmse")?,
            max_error: get("max_error")?,
            r2: get("r2")?,
        })
    }

    const fn values(&self) -> [f64; 6] {
        [
            self.mean_abs_error,
            self.median_abs_error,
            self.mean_abs_perc_error,
            self.rmse,
            self.max_error,
            self.r2,
        ]
    }

    /// Human-readable labels paired with values, in display order.
    pub const fn labeled(&self) -> [(&'static str, f64); 6] {
        [
            ("Mean absolute error", self.mean_abs_error),
            ("Median absolute error", self.median_abs_error),
            ("Mean absolute percentage error", self.mean_abs_perc_error),
            ("Root mean squared error", self.rmse),
            ("Max error", self.max_error),
            ("R2 score", self.r2),
        ]
    }
}

impl fmt::Display for RegressionScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.labeled() {
            writeln!(f, "{label}: {value:?}")?;
        }
        Ok(())
    }
}

/// Round to two decimals on the exact binary value, ties to even.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Median of a non-empty sample; mean of the middle pair for even lengths.
fn median(mut values: Vec<f64>) -> f64 {
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

/// `1 - ss_res / ss_tot`; constant truth scores 1.0 if predicted exactly, else 0.0.
fn r_squared(y_true: ArrayView1<'_, f64>, ss_res: f64) -> f64 {
    let mean = y_true.sum() / y_true.len() as f64;
    let ss_tot = y_true.mapv(|t| (t - mean).powi(2)).sum();
    if ss_tot == 0.0 {
        if ss_res == 0.0 { 1.0 } else { 0.0 }
    } else {
        1.0 - ss_res / ss_tot
    }
}

fn column_values(data: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = data.column(name)?.cast(&DataType::Float64)?;
    if column.null_count() > 0 {
        return Err(MetricsError::NullValues(name.to_string()));
    }
    Ok(column.f64()?.into_no_null_iter().collect())
}
