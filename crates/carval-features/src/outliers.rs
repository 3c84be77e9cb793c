//! Outlier Clamping
//!
//! Tukey fences flag values below `q25 - 1.5 * iqr` or above
//! `q75 + 1.5 * iqr`. Flagged cells are pulled in to the 10th and 80th
//! percentiles instead of dropping the row, so the table keeps its height.
//!
//! Percentiles are computed from the frame passed to each `transform` call.
//! Running the clamper twice clamps against the already damped data, which
//! can move more values on the second pass.

use crate::error::Result;
use crate::traits::{Transformer, column_names, is_numeric};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Configuration for the OutlierClamper transformer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierClamperConfig {
    /// IQR multiplier for the fences (default: 1.5)
    pub fence: f64,
    /// Quantile at the bottom of the IQR (default: 0.25)
    pub lower_quantile: f64,
    /// Quantile at the top of the IQR (default: 0.75)
    pub upper_quantile: f64,
    /// Quantile substituted for low outliers (default: 0.10)
    pub low_replacement: f64,
    /// Quantile substituted for high outliers (default: 0.80)
    pub high_replacement: f64,
}

impl Default for OutlierClamperConfig {
    fn default() -> Self {
        Self {
            fence: 1.5,
            lower_quantile: 0.25,
            upper_quantile: 0.75,
            low_replacement: 0.10,
            high_replacement: 0.80,
        }
    }
}

/// Percentile summary of one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentileBounds {
    /// Value substituted for low outliers
    pub low_replacement: f64,
    /// Lower quartile
    pub q25: f64,
    /// Upper quartile
    pub q75: f64,
    /// Value substituted for high outliers
    pub high_replacement: f64,
    /// Interquartile range, `q75 - q25`
    pub iqr: f64,
    /// Values strictly below this are low outliers
    pub lower_fence: f64,
    /// Values strictly above this are high outliers
    pub upper_fence: f64,
}

impl PercentileBounds {
    /// Compute bounds for `column` with linear interpolation, ignoring nulls.
    ///
    /// Returns `None` when the column has no non-null values.
    pub fn compute(
        data: &DataFrame,
        column: &str,
        config: &OutlierClamperConfig,
    ) -> Result<Option<Self>> {
        let quantile = |q: f64, alias: &str| {
            col(column)
                .cast(DataType::Float64)
                .quantile(lit(q), QuantileMethod::Linear)
                .alias(alias)
        };

        let stats = data
            .clone()
            .lazy()
            .select([
                quantile(config.low_replacement, "low"),
                quantile(config.lower_quantile, "q25"),
                quantile(config.upper_quantile, "q75"),
                quantile(config.high_replacement, "high"),
            ])
            .collect()?;

        let scalar = |name: &str| -> Result<Option<f64>> {
            Ok(stats.column(name)?.cast(&DataType::Float64)?.f64()?.get(0))
        };

        let (Some(low), Some(q25), Some(q75), Some(high)) =
            (scalar("low")?, scalar("q25")?, scalar("q75")?, scalar("high")?)
        else {
            return Ok(None);
        };

        let iqr = q75 - q25;
        Ok(Some(Self {
            low_replacement: low,
            q25,
            q75,
            high_replacement: high,
            iqr,
            lower_fence: q25 - config.fence * iqr,
            upper_fence: q75 + config.fence * iqr,
        }))
    }

    /// Map a single value through the fences.
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.lower_fence {
            self.low_replacement
        } else if value > self.upper_fence {
            self.high_replacement
        } else {
            value
        }
    }
}

/// OutlierClamper pulls fence-breaking values in to near-boundary percentiles
#[derive(Debug, Default)]
pub struct OutlierClamper {
    config: OutlierClamperConfig,
    feature_names: Option<Vec<String>>,
}

impl OutlierClamper {
    /// Create a clamper with the given configuration.
    pub const fn with_config(config: OutlierClamperConfig) -> Self {
        Self {
            config,
            feature_names: None,
        }
    }

    /// Current configuration.
    pub const fn config(&self) -> &OutlierClamperConfig {
        &self.config
    }
}

/// Numeric columns with more than two distinct non-null values.
///
/// Binary columns are skipped: their quartiles coincide and every minority
/// value would sit outside the fences.
pub fn is_clampable(column: &Column) -> Result<bool> {
    if !is_numeric(column.dtype()) {
        return Ok(false);
    }
    Ok(column.as_materialized_series().drop_nulls().n_unique()? > 2)
}

impl Transformer for OutlierClamper {
    fn name(&self) -> &str {
        "outlier_clamper"
    }

    fn required_columns(&self) -> Vec<&str> {
        Vec::new()
    }

    fn transform(&mut self, data: &DataFrame) -> Result<DataFrame> {
        let mut clamps = Vec::new();

        for column in data.get_columns() {
            if !is_clampable(column)? {
                trace!(column = column.name().as_str(), "skipping ineligible column");
                continue;
            }
            let name = column.name().as_str();
            let Some(bounds) = PercentileBounds::compute(data, name, &self.config)? else {
                continue;
            };

            let clamped = column
                .cast(&DataType::Float64)?
                .f64()?
                .into_iter()
                .flatten()
                .filter(|value| *value < bounds.lower_fence || *value > bounds.upper_fence)
                .count();
            debug!(
                transformer = self.name(),
                column = name,
                clamped,
                lower_fence = bounds.lower_fence,
                upper_fence = bounds.upper_fence,
                "clamping outliers"
            );
            if clamped == 0 {
                continue;
            }

            let value = col(name).cast(DataType::Float64);
            clamps.push(
                when(value.clone().lt(lit(bounds.lower_fence)))
                    .then(lit(bounds.low_replacement))
                    .when(value.clone().gt(lit(bounds.upper_fence)))
                    .then(lit(bounds.high_replacement))
                    .otherwise(value)
                    .alias(name),
            );
        }

        let result = if clamps.is_empty() {
            data.clone()
        } else {
            data.clone().lazy().with_columns(clamps).collect()?
        };

        self.feature_names = Some(column_names(&result));
        Ok(result)
    }

    fn feature_names_out(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }
}
