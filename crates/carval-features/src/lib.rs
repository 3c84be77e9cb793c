#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/carval-rs/carval/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod brand_model;
pub mod error;
pub mod mapping;
pub mod outliers;
pub mod registry;
pub mod traits;
pub mod units;
pub mod zeros;

pub use brand_model::{BrandModelEncoder, BrandModelEncoderConfig, ReferenceLists};
pub use error::{FeatureError, Result};
pub use mapping::{CategoryMapper, MappedValue, ValueMap};
pub use outliers::{OutlierClamper, OutlierClamperConfig, PercentileBounds, is_clampable};
pub use traits::Transformer;
pub use units::{UnitStripper, UnitStripperConfig};
pub use zeros::{ZeroToMissing, ZeroToMissingConfig};

// Re-export registry types for convenience
pub use registry::{
    TransformerInfo, TransformerKind, available_transformers, get_transformer_info,
    transformer_map, transformers_by_kind,
};
