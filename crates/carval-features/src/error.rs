//! Error types for feature transformations.

use thiserror::Error;

/// Result type for feature transformations.
pub type Result<T> = std::result::Result<T, FeatureError>;

/// Errors that can occur while transforming a table.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// A cell could not be parsed as a number
    #[error("Cannot parse {value:?} in column {column} (row {row}) as a number")]
    Parse {
        /// Column holding the cell
        column: String,
        /// Row index of the cell
        row: usize,
        /// Raw cell content
        value: String,
    },

    /// A non-empty value has no entry in the value map
    #[error("No mapping for value {value:?} in column {column}")]
    UnmappedValue {
        /// Column holding the value
        column: String,
        /// Stringified value that was looked up
        value: String,
    },

    /// The input table lacks a column the transformer needs
    #[error("{transformer}: missing required column {column}")]
    MissingColumn {
        /// Transformer that was applied
        transformer: String,
        /// Name of the missing column
        column: String,
    },

    /// A column has a dtype the transformer cannot handle
    #[error("Unsupported dtype {dtype} for column {column}")]
    UnsupportedDtype {
        /// Column name
        column: String,
        /// Dtype found in the input
        dtype: String,
    },

    /// A derived column would shadow an existing one
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FeatureError {
    pub(crate) fn unsupported_dtype(column: &str, dtype: &polars::prelude::DataType) -> Self {
        Self::UnsupportedDtype {
            column: column.to_string(),
            dtype: dtype.to_string(),
        }
    }
}
