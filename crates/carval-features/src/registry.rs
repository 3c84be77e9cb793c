//! Transformer Registry
//!
//! Static metadata for every transformer in this crate, for callers that
//! assemble pipelines from configuration.

use std::collections::HashMap;

/// What a transformer does to its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformerKind {
    /// Turns text into numbers (unit stripping)
    Parsing,
    /// Replaces sentinel or falsy values with nulls or mapped values
    Recoding,
    /// Damps extreme values
    Outliers,
    /// Derives new indicator columns
    Encoding,
}

/// Transformer metadata
#[derive(Debug, Clone)]
pub struct TransformerInfo {
    /// Transformer name (matches `Transformer::name`)
    pub name: &'static str,
    /// Transformer kind
    pub kind: TransformerKind,
    /// Brief description of the transformation
    pub description: &'static str,
    /// Required columns under the default configuration
    pub required_columns: &'static [&'static str],
    /// Whether the output has the same columns as the input
    pub preserves_columns: bool,
}

/// Get all available transformer info
pub fn available_transformers() -> Vec<TransformerInfo> {
    vec![
        TransformerInfo {
            name: "unit_stripper",
            kind: TransformerKind::Parsing,
            description: "Parse \"<number> <unit>\" cells into floats, \"null\" to missing",
            required_columns: &["Mileage"],
            preserves_columns: true,
        },
        TransformerInfo {
            name: "zero_to_missing",
            kind: TransformerKind::Recoding,
            description: "Recode zero Mileage as missing",
            required_columns: &["Mileage"],
            preserves_columns: true,
        },
        TransformerInfo {
            name: "category_mapper",
            kind: TransformerKind::Recoding,
            description: "Substitute every cell through a value map, falsy cells to missing",
            required_columns: &[],
            preserves_columns: true,
        },
        TransformerInfo {
            name: "outlier_clamper",
            kind: TransformerKind::Outliers,
            description: "Pull values outside 1.5 IQR fences to the 10th/80th percentile",
            required_columns: &[],
            preserves_columns: true,
        },
        TransformerInfo {
            name: "brand_model_encoder",
            kind: TransformerKind::Encoding,
            description: "Replace Name with brand and brand+model indicator columns",
            required_columns: &["Name"],
            preserves_columns: false,
        },
    ]
}

/// Get transformers of one kind
pub fn transformers_by_kind(kind: TransformerKind) -> Vec<TransformerInfo> {
    available_transformers()
        .into_iter()
        .filter(|t| t.kind == kind)
        .collect()
}

/// Get transformer info by name
pub fn get_transformer_info(name: &str) -> Option<TransformerInfo> {
    available_transformers().into_iter().find(|t| t.name == name)
}

/// Get a map of all transformers indexed by name
pub fn transformer_map() -> HashMap<&'static str, TransformerInfo> {
    available_transformers()
        .into_iter()
        .map(|t| (t.name, t))
        .collect()
}
