//! Category Mapping
//!
//! Recodes categorical cells through a caller-supplied lookup table, e.g.
//! `Owner_Type` values `First`, `Second`, ... to ordinal numbers.
//!
//! Falsy cells (null, `""`, numeric zero, `false`) become null without a lookup.
//! A zero is therefore never mapped, even when the map has an entry for it.

use crate::error::{FeatureError, Result};
use crate::traits::{Transformer, column_names};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Replacement value stored in a [`ValueMap`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MappedValue {
    /// Numeric replacement
    Number(f64),
    /// Text replacement
    Text(String),
}

impl fmt::Display for MappedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<f64> for MappedValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for MappedValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for MappedValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MappedValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Lookup table from stringified cell value to replacement.
///
/// # Examples
///
/// ```
/// use carval_features::{MappedValue, ValueMap};
///
/// let owners = ValueMap::from_json(r#"{"First": 1, "Second": 2}"#).unwrap();
/// assert_eq!(owners.get("Second"), Some(&MappedValue::Number(2.0)));
///
/// let fuel: ValueMap = [("Diesel", "D"), ("Petrol", "P")].into_iter().collect();
/// assert_eq!(fuel.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueMap(HashMap<String, MappedValue>);

impl ValueMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of `key: number | string` pairs.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MappedValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a stringified value.
    pub fn get(&self, key: &str) -> Option<&MappedValue> {
        self.0.get(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<MappedValue>> FromIterator<(K, V)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl From<HashMap<String, MappedValue>> for ValueMap {
    fn from(map: HashMap<String, MappedValue>) -> Self {
        Self(map)
    }
}

/// CategoryMapper substitutes every cell of every column through a [`ValueMap`]
#[derive(Debug, Default)]
pub struct CategoryMapper {
    mapping: ValueMap,
    feature_names: Option<Vec<String>>,
}

impl CategoryMapper {
    /// Create a mapper over `mapping`.
    pub const fn new(mapping: ValueMap) -> Self {
        Self {
            mapping,
            feature_names: None,
        }
    }

    /// The lookup table.
    pub const fn mapping(&self) -> &ValueMap {
        &self.mapping
    }

    fn map_column(&self, column: &Column) -> Result<Column> {
        let keys = lookup_keys(column)?;
        let mapped = keys
            .into_iter()
            .map(|key| match key {
                None => Ok(None),
                Some(key) => self.mapping.get(&key).map(Some).ok_or_else(|| {
                    FeatureError::UnmappedValue {
                        column: column.name().to_string(),
                        value: key,
                    }
                }),
            })
            .collect::<Result<Vec<Option<&MappedValue>>>>()?;

        let name = column.name().clone();
        let all_numeric = mapped
            .iter()
            .flatten()
            .all(|value| matches!(value, MappedValue::Number(_)));

        if all_numeric {
            let values: Vec<Option<f64>> = mapped
                .iter()
                .map(|value| match value {
                    Some(MappedValue::Number(number)) => Some(*number),
                    _ => None,
                })
                .collect();
            Ok(Column::new(name, values))
        } else {
            let values: Vec<Option<String>> = mapped
                .iter()
                .map(|value| value.map(ToString::to_string))
                .collect();
            Ok(Column::new(name, values))
        }
    }
}

/// Stringify each cell for lookup; falsy cells yield `None`.
fn lookup_keys(column: &Column) -> Result<Vec<Option<String>>> {
    let dtype = column.dtype();
    let keys = match dtype {
        DataType::String => column
            .str()?
            .into_iter()
            .map(|cell| cell.filter(|s| !s.is_empty()).map(str::to_string))
            .collect(),
        DataType::Boolean => column
            .bool()?
            .into_iter()
            .map(|cell| cell.filter(|b| *b).map(|b| b.to_string()))
            .collect(),
        DataType::UInt64 => column
            .as_materialized_series()
            .u64()?
            .into_iter()
            .map(|cell| cell.filter(|v| *v != 0).map(|v| v.to_string()))
            .collect(),
        dt if dt.is_integer() => column
            .cast(&DataType::Int64)?
            .i64()?
            .into_iter()
            .map(|cell| cell.filter(|v| *v != 0).map(|v| v.to_string()))
            .collect(),
        dt if dt.is_float() => column
            .cast(&DataType::Float64)?
            .f64()?
            .into_iter()
            .map(|cell| cell.filter(|v| *v != 0.0).map(float_key))
            .collect(),
        other => return Err(FeatureError::unsupported_dtype(column.name(), other)),
    };
    Ok(keys)
}

/// Round-trip float form with a decimal point; NaN is `nan` and is not falsy.
fn float_key(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:?}")
    }
}

impl Transformer for CategoryMapper {
    fn name(&self) -> &str {
        "category_mapper"
    }

    fn required_columns(&self) -> Vec<&str> {
        Vec::new()
    }

    fn transform(&mut self, data: &DataFrame) -> Result<DataFrame> {
        let columns = data
            .get_columns()
            .iter()
            .map(|column| self.map_column(column))
            .collect::<Result<Vec<_>>>()?;
        let result = DataFrame::new(columns)?;

        debug!(
            transformer = self.name(),
            rows = result.height(),
            entries = self.mapping.len(),
            "mapped categories"
        );

        self.feature_names = Some(column_names(&result));
        Ok(result)
    }

    fn feature_names_out(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }
}
