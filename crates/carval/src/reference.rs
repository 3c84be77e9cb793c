//! Reference lists of common brands and brand+model prefixes.
//!
//! Chosen from the listing data by frequency. The lists are plain values:
//! hand them to [`BrandModelEncoder::new`](carval_features::BrandModelEncoder::new)
//! through [`reference_lists`].

use carval_features::ReferenceLists;

/// Most common brands, in indicator column order.
pub const COMMON_BRANDS: [&str; 17] = [
    "Maruti",
    "Hyundai",
    "Honda",
    "Toyota",
    "Volkswagen",
    "Mercedes-Benz",
    "Ford",
    "Mahindra",
    "BMW",
    "Audi",
    "Tata",
    "Skoda",
    "Renault",
    "Chevrolet",
    "Nissan",
    "Land",
    "Jaguar",
];

/// Most common brand+model prefixes, in indicator column order.
///
/// Entries are the first two tokens of the listing name, so `"Land Rover"`
/// and `"Mercedes-Benz New"` are models here even though they are not.
pub const COMMON_MODELS: [&str; 89] = [
    "Maruti Swift",
    "Honda City",
    "Hyundai i20",
    "Toyota Innova",
    "Hyundai Grand",
    "Hyundai Verna",
    "Hyundai i10",
    "Maruti Wagon",
    "Volkswagen Polo",
    "Maruti Alto",
    "Toyota Fortuner",
    "Mahindra XUV500",
    "Ford Figo",
    "Honda Amaze",
    "BMW 3",
    "Mercedes-Benz E-Class",
    "Volkswagen Vento",
    "Mercedes-Benz New",
    "Hyundai Creta",
    "Audi A4",
    "Maruti Ritz",
    "Renault Duster",
    "Toyota Corolla",
    "BMW 5",
    "Maruti Ciaz",
    "Hyundai Santro",
    "Mahindra Scorpio",
    "Hyundai EON",
    "Maruti Ertiga",
    "Maruti Baleno",
    "Honda Brio",
    "Maruti Celerio",
    "Honda Jazz",
    "Hyundai Xcent",
    "Land Rover",
    "Ford Ecosport",
    "Toyota Etios",
    "Skoda Rapid",
    "Ford EcoSport",
    "Skoda Superb",
    "Maruti Vitara",
    "Audi A6",
    "Chevrolet Beat",
    "Tata Indica",
    "Renault KWID",
    "Ford Endeavour",
    "Ford Fiesta",
    "Audi Q7",
    "Skoda Octavia",
    "Jaguar XF",
    "Maruti SX4",
    "BMW X1",
    "Nissan Sunny",
    "Audi Q3",
    "Honda CR-V",
    "Tata Nano",
    "Honda Civic",
    "Nissan Terrano",
    "Volkswagen Jetta",
    "Audi Q5",
    "Skoda Laura",
    "Nissan Micra",
    "Maruti Dzire",
    "Honda Accord",
    "Mercedes-Benz M-Class",
    "BMW X5",
    "Maruti Zen",
    "Hyundai Elantra",
    "Mahindra Xylo",
    "Tata Zest",
    "Mini Cooper",
    "Tata Indigo",
    "Mitsubishi Pajero",
    "Maruti Omni",
    "Mahindra Bolero",
    "Chevrolet Cruze",
    "Chevrolet Aveo",
    "Tata Manza",
    "Honda Mobilio",
    "Hyundai Accent",
    "Maruti Eeco",
    "Jeep Compass",
    "Mercedes-Benz GLA",
    "Volkswagen Ameo",
    "Ford Ikon",
    "Mahindra KUV",
    "Hyundai Santa",
    "Hyundai Elite",
    "Mahindra Ssangyong",
];

/// Common brand names.
pub fn common_brands() -> Vec<&'static str> {
    COMMON_BRANDS.to_vec()
}

/// Common brand+model prefixes.
pub fn common_models() -> Vec<&'static str> {
    COMMON_MODELS.to_vec()
}

/// Both lists, ready for the brand/model encoder.
pub fn reference_lists() -> ReferenceLists {
    ReferenceLists::new(COMMON_BRANDS, COMMON_MODELS)
}
