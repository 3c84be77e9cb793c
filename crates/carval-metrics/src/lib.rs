#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/carval-rs/carval/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod report;
pub mod scores;

pub use report::{ScoreReport, comparison_table, display_record, display_scores, write_scores};
pub use scores::{METRIC_KEYS, MetricsError, RegressionScores, Result};
