//! Demonstration of the carval feature transformers
//!
//! This example shows how to:
//! - List the available transformers
//! - Chain unit stripping, category mapping and outlier clamping
//! - Encode listing names into brand/model indicators
//!
//! Run with: cargo run --example feature_pipeline_demo -p carval-features

use carval_features::{
    BrandModelEncoder, CategoryMapper, OutlierClamper, ReferenceLists, Transformer, UnitStripper,
    ValueMap, available_transformers, transformer_map,
};
use polars::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("carval Feature Pipeline Demo");
    println!("============================\n");

    println!("Available transformers:");
    for info in available_transformers() {
        println!("  {:20} {:?}  {}", info.name, info.kind, info.description);
    }
    println!();

    let listings = df![
        "Name" => [
            "Maruti Swift Dzire VDI",
            "Honda City 1.5 V MT",
            "Hyundai i20 Asta",
            "Honda Amaze S",
            "Maruti Swift VXI",
        ],
        "Kilometers_Driven" => [41000i64, 46000, 87000, 40670, 2_500_000],
        "Fuel_Type" => ["Diesel", "Petrol", "Petrol", "Diesel", "CNG"],
        "Mileage" => ["22.77 kmpl", "17.0 kmpl", "0.0 kmpl", "null kmpl", "26.6 km/kg"],
        "Power" => ["74 bhp", "117.3 bhp", "81.86 bhp", "null bhp", "81.8 bhp"],
    ]?;
    println!("Input listings:\n{listings}\n");

    // Names become indicators
    let reference = ReferenceLists::new(
        ["Maruti", "Honda", "Hyundai"],
        ["Maruti Swift", "Honda City", "Hyundai i20"],
    );
    let mut encoder = BrandModelEncoder::new(reference);
    let encoded = encoder.transform(&listings)?;

    // "<number> <unit>" text becomes Float64, zero mileage becomes null
    let mut stripper = UnitStripper::default();
    let units = stripper.transform(&encoded.select(["Mileage", "Power"])?)?;

    let fuel = ValueMap::from_json(r#"{"CNG": 1, "Diesel": 2, "Petrol": 3, "LPG": 4}"#)?;
    let mut mapper = CategoryMapper::new(fuel);
    let fuel_codes = mapper.transform(&encoded.select(["Fuel_Type"])?)?;

    let numeric = encoded
        .select(["Kilometers_Driven"])?
        .hstack(units.get_columns())?
        .hstack(fuel_codes.get_columns())?;
    let mut clamper = OutlierClamper::default();
    let clamped = clamper.transform(&numeric)?;
    println!("Cleaned numeric features:\n{clamped}\n");

    let indicators = encoded.drop_many(["Kilometers_Driven", "Fuel_Type", "Mileage", "Power"]);
    println!("Brand and model indicators:\n{indicators}\n");

    let registry = transformer_map();
    let steps: [&dyn Transformer; 4] = [&encoder, &stripper, &mapper, &clamper];
    println!("Steps applied:");
    for step in steps {
        if let Some(info) = registry.get(step.name()) {
            println!("  {:20} preserves columns: {}", info.name, info.preserves_columns);
        }
    }
    println!();

    if let Some(names) = clamper.feature_names_out() {
        println!("Output features: {}", names.join(", "));
    }

    Ok(())
}
