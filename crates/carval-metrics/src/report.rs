//! Score reports for one or more models.

use crate::scores::{RegressionScores, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Write as _};
use std::io::{self, Write};

/// Scores of a single model at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Model identifier.
    pub model: String,

    /// Report generation timestamp.
    pub timestamp: DateTime<Utc>,

    /// The model's scores.
    pub scores: RegressionScores,
}

impl ScoreReport {
    /// Create a report stamped with the current time.
    pub fn new(model: impl Into<String>, scores: RegressionScores) -> Self {
        Self {
            model: model.into(),
            timestamp: Utc::now(),
            scores,
        }
    }

    /// Convert report to a pretty JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as a two-column markdown table.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        let _ = writeln!(md, "# Results for model {}\n", self.model);
        let _ = writeln!(md, "| Metric | Value |");
        let _ = writeln!(md, "|--------|-------|");
        for (label, value) in self.scores.labeled() {
            let _ = writeln!(md, "| {label} | {value:.2} |");
        }
        md
    }
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results for model {}", self.model)?;
        write!(f, "{}", self.scores)
    }
}

/// Write the labeled scores of `model` to `out`.
pub fn write_scores<W: Write>(out: &mut W, model: &str, scores: &RegressionScores) -> io::Result<()> {
    writeln!(out, "Results for model {model}")?;
    write!(out, "{scores}")
}

/// Print the labeled scores of `model` to stdout.
///
/// # Examples
///
/// ```
/// use carval_metrics::{RegressionScores, display_scores};
///
/// let scores = RegressionScores::compute(&[10.0, 12.0], &[11.0, 12.0]).unwrap();
/// display_scores("ridge", &scores);
/// ```
pub fn display_scores(model: &str, scores: &RegressionScores) {
    println!("Results for model {model}");
    print!("{scores}");
}

/// Print a string-keyed score record to stdout.
///
/// Fails with [`MissingKey`](crate::MetricsError::MissingKey) before printing
/// anything if the record is incomplete.
pub fn display_record(model: &str, record: &BTreeMap<String, f64>) -> Result<()> {
    let scores = RegressionScores::from_record(record)?;
    display_scores(model, &scores);
    Ok(())
}

/// Markdown table comparing several models, one row per report.
pub fn comparison_table(reports: &[ScoreReport]) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "| Model | MAE | MedAE | MAPE | RMSE | Max error | R2 |");
    let _ = writeln!(md, "|-------|-----|-------|------|------|-----------|----|");
    for report in reports {
        let s = &report.scores;
        let _ = writeln!(
            md,
            "| {} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} |",
            report.model,
            s.mean_abs_error,
            s.median_abs_error,
            s.mean_abs_perc_error,
            s.rmse,
            s.max_error,
            s.r2
        );
    }
    md
}
