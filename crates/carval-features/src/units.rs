//! Unit Stripping
//!
//! Listing fields such as engine size or fuel economy arrive as text with the
//! unit attached (`"1197 CC"`, `"19.3 kmpl"`, `"null bhp"`). This transformer
//! keeps the leading number of every cell and turns the placeholder token into
//! a missing value.

use crate::error::{FeatureError, Result};
use crate::traits::{Transformer, column_names, is_numeric};
use crate::zeros::zeros_to_null;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for the UnitStripper transformer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitStripperConfig {
    /// Leading token that marks a missing measurement (default: "null")
    pub missing_token: String,
    /// Column whose zeros are recoded as missing after parsing (default: "Mileage")
    pub zero_as_missing: Option<String>,
}

impl Default for UnitStripperConfig {
    fn default() -> Self {
        Self {
            missing_token: "null".to_string(),
            zero_as_missing: Some("Mileage".to_string()),
        }
    }
}

/// UnitStripper parses `"<number> <unit>"` cells into `Float64` values
#[derive(Debug, Default)]
pub struct UnitStripper {
    config: UnitStripperConfig,
    feature_names: Option<Vec<String>>,
}

impl UnitStripper {
    /// Create a stripper with the given configuration.
    pub const fn with_config(config: UnitStripperConfig) -> Self {
        Self {
            config,
            feature_names: None,
        }
    }

    /// Current configuration.
    pub const fn config(&self) -> &UnitStripperConfig {
        &self.config
    }

    fn strip_column(&self, column: &Column) -> Result<Column> {
        let name = column.name().clone();
        let dtype = column.dtype();

        if is_numeric(dtype) {
            return Ok(column.cast(&DataType::Float64)?);
        }
        if !matches!(dtype, DataType::String) {
            return Err(FeatureError::unsupported_dtype(name.as_str(), dtype));
        }

        let values = column
            .str()?
            .into_iter()
            .enumerate()
            .map(|(row, cell)| match cell {
                None => Ok(None),
                Some(raw) => parse_leading_number(raw, &self.config.missing_token).ok_or_else(
                    || FeatureError::Parse {
                        column: name.to_string(),
                        row,
                        value: raw.to_string(),
                    },
                ),
            })
            .collect::<Result<Vec<Option<f64>>>>()?;

        Ok(Column::new(name, values))
    }
}

/// Parse the first whitespace-delimited token of `raw`.
///
/// Returns `Some(None)` for the missing token, `Some(Some(v))` for a number and
/// `None` when the cell is blank or the token is not numeric.
fn parse_leading_number(raw: &str, missing_token: &str) -> Option<Option<f64>> {
    let token = raw.split_whitespace().next()?;
    if token == missing_token {
        return Some(None);
    }
    token.parse::<f64>().ok().map(Some)
}

impl Transformer for UnitStripper {
    fn name(&self) -> &str {
        "unit_stripper"
    }

    fn required_columns(&self) -> Vec<&str> {
        self.config.zero_as_missing.iter().map(String::as_str).collect()
    }

    fn transform(&mut self, data: &DataFrame) -> Result<DataFrame> {
        self.check_columns(data)?;

        let columns = data
            .get_columns()
            .iter()
            .map(|column| self.strip_column(column))
            .collect::<Result<Vec<_>>>()?;
        let mut result = DataFrame::new(columns)?;

        if let Some(zero_column) = &self.config.zero_as_missing {
            result = zeros_to_null(result, zero_column)?;
        }

        debug!(
            transformer = self.name(),
            rows = result.height(),
            columns = result.width(),
            "stripped units"
        );

        self.feature_names = Some(column_names(&result));
        Ok(result)
    }

    fn feature_names_out(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }
}
