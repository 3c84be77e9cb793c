#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/carval-rs/carval/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod reference;

// Re-export main types from sub-crates
pub use carval_features as features;
pub use carval_metrics as metrics;

pub use carval_features::{
    BrandModelEncoder, CategoryMapper, FeatureError, OutlierClamper, ReferenceLists, Transformer,
    UnitStripper, ValueMap, ZeroToMissing,
};
pub use carval_metrics::{MetricsError, RegressionScores, ScoreReport, display_scores};
pub use reference::{common_brands, common_models, reference_lists};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
