//! Zero recoding
//!
//! A fuel-economy reading of exactly zero is a data-entry error rather than a
//! measurement, so it is recoded as missing.

use crate::error::{FeatureError, Result};
use crate::traits::{Transformer, column_names, is_numeric};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for the ZeroToMissing transformer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZeroToMissingConfig {
    /// Column to recode (default: "Mileage")
    pub column: String,
}

impl Default for ZeroToMissingConfig {
    fn default() -> Self {
        Self {
            column: "Mileage".to_string(),
        }
    }
}

/// ZeroToMissing replaces zeros in a single numeric column with nulls
#[derive(Debug, Default)]
pub struct ZeroToMissing {
    config: ZeroToMissingConfig,
    feature_names: Option<Vec<String>>,
}

impl ZeroToMissing {
    /// Create a transformer for the configured column.
    pub const fn with_config(config: ZeroToMissingConfig) -> Self {
        Self {
            config,
            feature_names: None,
        }
    }

    /// Current configuration.
    pub const fn config(&self) -> &ZeroToMissingConfig {
        &self.config
    }
}

/// Null out every zero in `column`, keeping its dtype.
pub(crate) fn zeros_to_null(data: DataFrame, column: &str) -> Result<DataFrame> {
    let dtype = data.column(column)?.dtype().clone();
    if !is_numeric(&dtype) {
        return Err(FeatureError::unsupported_dtype(column, &dtype));
    }

    let zeros = data
        .column(column)?
        .cast(&DataType::Float64)?
        .f64()?
        .into_iter()
        .filter(|value| *value == Some(0.0))
        .count();

    let result = data
        .lazy()
        .with_column(
            when(col(column).eq(lit(0)))
                .then(lit(NULL).cast(dtype))
                .otherwise(col(column))
                .alias(column),
        )
        .collect()?;

    debug!(column, zeros, "recoded zeros as missing");
    Ok(result)
}

impl Transformer for ZeroToMissing {
    fn name(&self) -> &str {
        "zero_to_missing"
    }

    fn required_columns(&self) -> Vec<&str> {
        vec![self.config.column.as_str()]
    }

    fn transform(&mut self, data: &DataFrame) -> Result<DataFrame> {
        self.check_columns(data)?;
        let result = zeros_to_null(data.clone(), &self.config.column)?;
        self.feature_names = Some(column_names(&result));
        Ok(result)
    }

    fn feature_names_out(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }
}
