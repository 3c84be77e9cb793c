//! End-to-end tests composing the transformers on a listing table.

use approx::assert_relative_eq;
use carval::reference::reference_lists;
use carval::{
    BrandModelEncoder, CategoryMapper, OutlierClamper, RegressionScores, Transformer,
    UnitStripper, ValueMap, ZeroToMissing,
};
use polars::prelude::*;

fn listings() -> DataFrame {
    df![
        "Name" => [
            "Maruti Wagon R LXI CNG",
            "Hyundai Creta 1.6 CRDi SX Option",
            "Honda Jazz V",
            "Maruti Ertiga VDI",
            "Audi A4 New 2.0 TDI Multitronic",
            "Tesla Model S",
        ],
        "Year" => [2010i64, 2015, 2011, 2012, 2013, 2019],
        "Kilometers_Driven" => [72000i64, 41000, 46000, 87000, 40670, 6500000],
        "Owner_Type" => ["First", "First", "First", "First", "Second", "First"],
        "Mileage" => ["26.6 km/kg", "19.67 kmpl", "0.0 kmpl", "20.77 kmpl", "15.2 kmpl", "null kmpl"],
        "Engine" => ["998 CC", "1582 CC", "1199 CC", "1248 CC", "1968 CC", "null CC"],
        "Power" => ["58.16 bhp", "126.2 bhp", "88.7 bhp", "88.76 bhp", "140.8 bhp", "null bhp"],
    ]
    .unwrap()
}

fn owner_map() -> ValueMap {
    ValueMap::from_json(r#"{"First": 1, "Second": 2, "Third": 3, "Fourth & Above": 4}"#).unwrap()
}

#[test]
fn test_full_feature_pipeline() {
    let input = listings();

    let mut encoder = BrandModelEncoder::new(reference_lists());
    let encoded = encoder.transform(&input).unwrap();

    let units = encoded
        .select(["Mileage", "Engine", "Power"])
        .unwrap();
    let mut stripper = UnitStripper::default();
    let stripped = stripper.transform(&units).unwrap();

    let owners = encoded.select(["Owner_Type"]).unwrap();
    let mapped = CategoryMapper::new(owner_map()).transform(&owners).unwrap();

    let numeric = encoded
        .select(["Year", "Kilometers_Driven"])
        .unwrap()
        .hstack(stripped.get_columns())
        .unwrap()
        .hstack(mapped.get_columns())
        .unwrap();
    let mut clamper = OutlierClamper::default();
    let clamped = clamper.transform(&numeric).unwrap();

    assert_eq!(clamped.height(), input.height());
    assert_eq!(
        clamper.feature_names_out().unwrap(),
        [
            "Year",
            "Kilometers_Driven",
            "Mileage",
            "Engine",
            "Power",
            "Owner_Type"
        ]
    );

    // Zero mileage and "null" measurements are missing
    let mileage = clamped.column("Mileage").unwrap().f64().unwrap();
    assert_eq!(mileage.get(2), None);
    assert_eq!(mileage.get(5), None);
    assert_eq!(clamped.column("Engine").unwrap().null_count(), 1);

    // The implausible odometer reading is pulled in
    let km = clamped.column("Kilometers_Driven").unwrap().f64().unwrap();
    assert!(km.get(5).unwrap() < 100_000.0);
    assert_eq!(km.get(0), Some(72000.0));

    // Owner_Type has two distinct values, so it passes the clamper untouched
    let owner = clamped.column("Owner_Type").unwrap().f64().unwrap();
    assert_eq!(owner.get(4), Some(2.0));

    // Brand and model indicators from the reference lists
    let flag = |column: &str, row: usize| {
        encoded.column(column).unwrap().bool().unwrap().get(row).unwrap()
    };
    assert!(flag("Maruti", 0));
    assert!(flag("Maruti Wagon", 0));
    assert!(flag("Hyundai Creta", 1));
    assert!(flag("Honda Jazz", 2));
    assert!(flag("Maruti Ertiga", 3));
    assert!(flag("Audi", 4));
    assert!(flag("Audi A4", 4));
    assert!(!flag("Maruti", 5));
    assert_eq!(
        encoded.width(),
        input.width() - 1 + reference_lists().len()
    );

    // The caller's table is untouched by every step
    assert!(input.equals(&listings()));
}

#[test]
fn test_unit_strip_then_zero_to_missing_is_stable() {
    let units = listings().select(["Mileage", "Engine"]).unwrap();
    let stripped = UnitStripper::default().transform(&units).unwrap();
    let recoded = ZeroToMissing::default().transform(&stripped).unwrap();
    assert!(recoded.equals_missing(&stripped));
}

#[test]
fn test_unknown_brand_rows_are_all_false() {
    let encoded = BrandModelEncoder::new(reference_lists())
        .transform(&listings())
        .unwrap();
    let row = encoded.slice(5, 1);

    for name in reference_lists().brands.iter().chain(&reference_lists().brand_models) {
        let flag = row.column(name).unwrap().bool().unwrap().get(0);
        assert_eq!(flag, Some(false), "{name}");
    }
}

#[test]
fn test_scores_for_pipeline_output() {
    let actual = [1.75, 12.5, 4.5, 6.0, 17.74];
    let predicted = [2.0, 11.9, 4.5, 6.4, 18.1];
    let scores = RegressionScores::compute(&actual, &predicted).unwrap();

    assert_relative_eq!(scores.max_error, 0.6);
    assert_relative_eq!(scores.median_abs_error, 0.36);
    assert!(scores.r2 > 0.9);
}
