//! Transformers built from JSON configuration.

use carval_features::{
    BrandModelEncoder, BrandModelEncoderConfig, CategoryMapper, FeatureError, OutlierClamper,
    OutlierClamperConfig, Transformer, UnitStripper, UnitStripperConfig, ValueMap,
    get_transformer_info,
};
use polars::prelude::*;

#[test]
fn test_unit_stripper_from_json() {
    let config: UnitStripperConfig =
        serde_json::from_str(r#"{"missing_token": "NA", "zero_as_missing": null}"#).unwrap();
    let mut stripper = UnitStripper::with_config(config);

    let df = df!["Engine" => ["NA CC", "0 CC", "1498 CC"]].unwrap();
    let out = stripper.transform(&df).unwrap();
    let engine = out.column("Engine").unwrap().f64().unwrap();
    assert_eq!(engine.get(0), None);
    assert_eq!(engine.get(1), Some(0.0));
    assert_eq!(engine.get(2), Some(1498.0));
    assert!(stripper.required_columns().is_empty());
}

#[test]
fn test_outlier_clamper_from_json() {
    let config: OutlierClamperConfig = serde_json::from_str(
        r#"{"fence": 0.5, "lower_quantile": 0.25, "upper_quantile": 0.75,
            "low_replacement": 0.0, "high_replacement": 1.0}"#,
    )
    .unwrap();
    let mut clamper = OutlierClamper::with_config(config);

    // q25 = 2, q75 = 4, fences at 1 and 5
    let df = df!["Seats" => [1.0, 2.0, 3.0, 4.0, 5.0, 9.0, 0.0, 2.0, 4.0]].unwrap();
    let out = clamper.transform(&df).unwrap();
    let seats = out.column("Seats").unwrap().f64().unwrap();
    assert_eq!(seats.get(5), Some(9.0));
    assert_eq!(seats.get(6), Some(0.0));
    assert_eq!(seats.get(2), Some(3.0));
}

#[test]
fn test_encoder_config_from_json() {
    let config: BrandModelEncoderConfig = serde_json::from_str(
        r#"{
            "name_column": "Listing",
            "reference": {"brands": ["Toyota"], "brand_models": ["Toyota Innova"]}
        }"#,
    )
    .unwrap();
    let mut encoder = BrandModelEncoder::with_config(config);

    let df = df!["Listing" => ["Toyota Innova Crysta 2.8", "Toyota Corolla"]].unwrap();
    let out = encoder.transform(&df).unwrap();
    assert_eq!(
        encoder.feature_names_out().unwrap(),
        ["Toyota", "Toyota Innova"]
    );
    let innova = out.column("Toyota Innova").unwrap().bool().unwrap();
    assert_eq!(innova.get(0), Some(true));
    assert_eq!(innova.get(1), Some(false));
}

#[test]
fn test_mapper_with_bad_json() {
    let err = ValueMap::from_json(r#"{"First": [1]}"#).unwrap_err();
    assert!(matches!(err, FeatureError::Serialization(_)));
}

#[test]
fn test_mapper_error_names_value() {
    let map: ValueMap = [("Manual", 0.0), ("Automatic", 1.0)].into_iter().collect();
    let df = df!["Transmission" => ["Manual", "CVT"]].unwrap();
    let err = CategoryMapper::new(map).transform(&df).unwrap_err();
    assert_eq!(
        err.to_string(),
        "No mapping for value \"CVT\" in column Transmission"
    );
}

#[test]
fn test_registry_names_match_transformers() {
    let stripper = UnitStripper::default();
    let info = get_transformer_info(stripper.name()).unwrap();
    assert!(info.preserves_columns);
}
