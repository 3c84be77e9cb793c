//! Brand and model indicator encoding.
//!
//! Converts the free-text listing name (`"Maruti Swift Dzire VDI"`) into one
//! boolean column per known brand and one per known brand+model prefix.
//! Matching is exact and case-sensitive on whitespace tokens; names whose
//! brand is not listed get all-false indicators.

use crate::error::{FeatureError, Result};
use crate::traits::{Transformer, column_names};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Known brands and brand+model prefixes, in output column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceLists {
    /// Brand names matched against the first token of the name
    pub brands: Vec<String>,
    /// Two-token prefixes matched against the first two tokens of the name
    pub brand_models: Vec<String>,
}

impl ReferenceLists {
    /// Build reference lists from any string-like items.
    pub fn new<B, M>(brands: B, brand_models: M) -> Self
    where
        B: IntoIterator,
        B::Item: Into<String>,
        M: IntoIterator,
        M::Item: Into<String>,
    {
        Self {
            brands: brands.into_iter().map(Into::into).collect(),
            brand_models: brand_models.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse `{"brands": [...], "brand_models": [...]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of indicator columns the encoder will add.
    pub fn len(&self) -> usize {
        self.brands.len() + self.brand_models.len()
    }

    /// Whether both lists are empty.
    pub fn is_empty(&self) -> bool {
        self.brands.is_empty() && self.brand_models.is_empty()
    }
}

/// Configuration for the BrandModelEncoder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandModelEncoderConfig {
    /// Column holding the listing name (default: "Name")
    pub name_column: String,
    /// Known brands and brand+model prefixes
    pub reference: ReferenceLists,
}

impl Default for BrandModelEncoderConfig {
    fn default() -> Self {
        Self {
            name_column: "Name".to_string(),
            reference: ReferenceLists::default(),
        }
    }
}

/// First and first-two-token prefix of a listing name.
#[derive(Debug, Default)]
struct NameTokens<'a> {
    brand: Option<&'a str>,
    brand_model: Option<String>,
}

impl<'a> NameTokens<'a> {
    fn parse(name: Option<&'a str>) -> Self {
        let Some(name) = name else {
            return Self::default();
        };
        let mut tokens = name.split_whitespace();
        let brand = tokens.next();
        let brand_model = brand
            .zip(tokens.next())
            .map(|(brand, model)| format!("{brand} {model}"));
        Self { brand, brand_model }
    }
}

/// BrandModelEncoder replaces the name column with brand/model indicators
#[derive(Debug, Default)]
pub struct BrandModelEncoder {
    config: BrandModelEncoderConfig,
    feature_names: Option<Vec<String>>,
}

impl BrandModelEncoder {
    /// Create an encoder over the `Name` column.
    pub fn new(reference: ReferenceLists) -> Self {
        Self::with_config(BrandModelEncoderConfig {
            reference,
            ..Default::default()
        })
    }

    /// Create an encoder with the given configuration.
    pub const fn with_config(config: BrandModelEncoderConfig) -> Self {
        Self {
            config,
            feature_names: None,
        }
    }

    /// Current configuration.
    pub const fn config(&self) -> &BrandModelEncoderConfig {
        &self.config
    }

    /// Indicator column names in output order.
    pub fn indicator_names(&self) -> impl Iterator<Item = &str> {
        let reference = &self.config.reference;
        reference
            .brands
            .iter()
            .chain(&reference.brand_models)
            .map(String::as_str)
    }

    fn check_collisions(&self, data: &DataFrame) -> Result<()> {
        let mut seen: HashSet<&str> = data
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect();
        for name in self.indicator_names() {
            if !seen.insert(name) {
                return Err(FeatureError::DuplicateColumn(name.to_string()));
            }
        }
        Ok(())
    }
}

impl Transformer for BrandModelEncoder {
    fn name(&self) -> &str {
        "brand_model_encoder"
    }

    fn required_columns(&self) -> Vec<&str> {
        vec![self.config.name_column.as_str()]
    }

    fn transform(&mut self, data: &DataFrame) -> Result<DataFrame> {
        self.check_columns(data)?;
        self.check_collisions(data)?;

        let name_column = self.config.name_column.as_str();
        let names = data.column(name_column)?;
        if !matches!(names.dtype(), DataType::String) {
            return Err(FeatureError::unsupported_dtype(name_column, names.dtype()));
        }

        let tokens: Vec<NameTokens<'_>> = names.str()?.into_iter().map(NameTokens::parse).collect();
        let reference = &self.config.reference;

        let brand_columns = reference.brands.iter().map(|brand| {
            let flags: Vec<bool> = tokens
                .iter()
                .map(|t| t.brand == Some(brand.as_str()))
                .collect();
            Column::new(brand.as_str().into(), flags)
        });
        let model_columns = reference.brand_models.iter().map(|brand_model| {
            let flags: Vec<bool> = tokens
                .iter()
                .map(|t| t.brand_model.as_deref() == Some(brand_model.as_str()))
                .collect();
            Column::new(brand_model.as_str().into(), flags)
        });
        let indicators: Vec<Column> = brand_columns.chain(model_columns).collect();

        let unmatched = tokens
            .iter()
            .filter(|t| {
                t.brand
                    .is_none_or(|brand| !reference.brands.iter().any(|b| b == brand))
            })
            .count();
        debug!(
            transformer = self.name(),
            rows = data.height(),
            indicators = indicators.len(),
            unmatched,
            "encoded brands and models"
        );

        let result = data.hstack(&indicators)?.drop(name_column)?;

        self.feature_names = Some(column_names(&result));
        Ok(result)
    }

    fn feature_names_out(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn encoder() -> BrandModelEncoder {
        BrandModelEncoder::new(ReferenceLists::new(
            ["Maruti", "Honda"],
            ["Maruti Swift", "Honda City"],
        ))
    }

    fn flag(df: &DataFrame, column: &str, row: usize) -> Option<bool> {
        df.column(column).unwrap().bool().unwrap().get(row)
    }

    #[test]
    fn test_transformer_name() {
        assert_eq!(encoder().name(), "brand_model_encoder");
        assert_eq!(encoder().required_columns(), vec!["Name"]);
    }

    #[test]
    fn test_known_brand_and_model() {
        let df = df!["Name" => ["Maruti Swift Dzire VDI"]].unwrap();
        let out = encoder().transform(&df).unwrap();

        assert_eq!(flag(&out, "Maruti", 0), Some(true));
        assert_eq!(flag(&out, "Honda", 0), Some(false));
        assert_eq!(flag(&out, "Maruti Swift", 0), Some(true));
        assert_eq!(flag(&out, "Honda City", 0), Some(false));
        assert!(out.column("Name").is_err());
    }

    #[test]
    fn test_unknown_brand_is_all_false() {
        let df = df!["Name" => ["Tesla Model 3"]].unwrap();
        let out = encoder().transform(&df).unwrap();

        for column in ["Maruti", "Honda", "Maruti Swift", "Honda City"] {
            assert_eq!(flag(&out, column, 0), Some(false), "{column}");
        }
    }

    #[rstest]
    #[case("Honda", true, false)]
    #[case("Honda City", true, true)]
    #[case("Honda  City   ZX", true, true)]
    #[case("honda city", false, false)]
    #[case("HondaCity", false, false)]
    #[case("", false, false)]
    fn test_token_matching(#[case] name: &str, #[case] brand: bool, #[case] model: bool) {
        let df = df!["Name" => [name]].unwrap();
        let out = encoder().transform(&df).unwrap();
        assert_eq!(flag(&out, "Honda", 0), Some(brand));
        assert_eq!(flag(&out, "Honda City", 0), Some(model));
    }

    #[test]
    fn test_missing_name_is_all_false() {
        let df = df!["Name" => [None, Some("Honda City")]].unwrap();
        let out = encoder().transform(&df).unwrap();
        assert_eq!(flag(&out, "Honda", 0), Some(false));
        assert_eq!(flag(&out, "Honda City", 0), Some(false));
        assert_eq!(flag(&out, "Honda City", 1), Some(true));
    }

    #[test]
    fn test_column_order() {
        let df = df![
            "Year" => [2014i64, 2016],
            "Name" => ["Honda City 1.5", "Maruti Swift VDI"],
            "Price" => [6.5, 4.2],
        ]
        .unwrap();
        let mut encoder = encoder();
        let out = encoder.transform(&df).unwrap();

        let expected = [
            "Year",
            "Price",
            "Maruti",
            "Honda",
            "Maruti Swift",
            "Honda City",
        ];
        assert_eq!(encoder.feature_names_out().unwrap(), expected);
        assert_eq!(out.width(), df.width() - 1 + 4);
        assert_eq!(out.height(), 2);
    }

    #[test]
    fn test_missing_name_column() {
        let df = df!["Year" => [2014i64]].unwrap();
        let err = encoder().transform(&df).unwrap_err();
        assert!(matches!(err, FeatureError::MissingColumn { .. }));
    }

    #[test]
    fn test_non_text_name_column() {
        let df = df!["Name" => [1i64]].unwrap();
        let err = encoder().transform(&df).unwrap_err();
        assert!(matches!(err, FeatureError::UnsupportedDtype { .. }));
    }

    #[test]
    fn test_indicator_collision() {
        let df = df!["Name" => ["Honda City"], "Honda" => [1i64]].unwrap();
        let err = encoder().transform(&df).unwrap_err();
        assert!(matches!(err, FeatureError::DuplicateColumn(name) if name == "Honda"));
    }

    #[test]
    fn test_indicator_named_like_name_column() {
        let mut encoder = BrandModelEncoder::new(ReferenceLists::new(["Name"], ["Honda City"]));
        let df = df!["Name" => ["Name Brand"]].unwrap();
        let err = encoder.transform(&df).unwrap_err();
        assert!(matches!(err, FeatureError::DuplicateColumn(name) if name == "Name"));
    }

    #[test]
    fn test_duplicate_reference_entry() {
        let mut encoder =
            BrandModelEncoder::new(ReferenceLists::new(["Honda", "Honda"], ["Honda City"]));
        let df = df!["Name" => ["Honda City"]].unwrap();
        let err = encoder.transform(&df).unwrap_err();
        assert!(matches!(err, FeatureError::DuplicateColumn(name) if name == "Honda"));
    }

    #[test]
    fn test_custom_name_column() {
        let mut encoder = BrandModelEncoder::with_config(BrandModelEncoderConfig {
            name_column: "Title".to_string(),
            reference: ReferenceLists::new(["Audi"], ["Audi A4"]),
        });
        let df = df!["Title" => ["Audi A4 2.0 TDI"]].unwrap();
        let out = encoder.transform(&df).unwrap();
        assert_eq!(flag(&out, "Audi A4", 0), Some(true));
        assert!(out.column("Title").is_err());
    }

    #[test]
    fn test_reference_lists_from_json() {
        let reference =
            ReferenceLists::from_json(r#"{"brands": ["Jeep"], "brand_models": ["Jeep Compass"]}"#)
                .unwrap();
        assert_eq!(reference, ReferenceLists::new(["Jeep"], ["Jeep Compass"]));
        assert_eq!(reference.len(), 2);
        assert!(!reference.is_empty());
    }
}
