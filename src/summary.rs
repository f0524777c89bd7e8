//! Summary-stats metadata records and parsing
//!
//! The repository publishes a single TSV file describing the shape and
//! task type of every dataset it hosts. Parsing is deliberately lenient:
//! lines with the wrong field count are dropped and numeric values that
//! fail to parse become zero, so one malformed upstream row never sinks
//! the whole listing.

use serde::{Deserialize, Serialize};

/// Number of tab-separated columns in the summary-stats file.
const SUMMARY_COLUMNS: usize = 10;

/// Shape and task metadata for one dataset, one row of the
/// repository-wide summary-stats file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Dataset identifier, unique within the repository
    pub dataset: String,
    /// Number of instances (rows)
    pub n_instances: u64,
    /// Total number of features
    pub n_features: u64,
    /// Number of binary features
    pub n_binary_features: u64,
    /// Number of categorical features
    pub n_categorical_features: u64,
    /// Number of continuous features
    pub n_continuous_features: u64,
    /// Type of the target variable (e.g. "binary", "continuous")
    pub endpoint_type: String,
    /// Number of target classes
    pub n_classes: u64,
    /// Class imbalance measure, 0.0 for perfectly balanced
    pub imbalance: f64,
    /// Prediction task label (e.g. "classification", "regression")
    pub task: String,
}

/// Parse the raw summary-stats body into records.
///
/// Line 0 is the header and is always skipped. Every other line must have
/// exactly 10 tab-separated fields to produce a record; lines with any
/// other shape are dropped silently, which also swallows the empty
/// trailing line of a body ending in a newline. Numeric fields are
/// coerced best-effort and lossily: a value that fails to parse becomes
/// `0` / `0.0`, never an error.
#[must_use]
pub fn parse_summary_stats(body: &str) -> Vec<DatasetInfo> {
    let mut records = Vec::new();

    for line in body.split('\n').skip(1) {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != SUMMARY_COLUMNS {
            continue;
        }
        records.push(DatasetInfo {
            dataset: fields[0].to_string(),
            n_instances: parse_int_or_zero(fields[1]),
            n_features: parse_int_or_zero(fields[2]),
            n_binary_features: parse_int_or_zero(fields[3]),
            n_categorical_features: parse_int_or_zero(fields[4]),
            n_continuous_features: parse_int_or_zero(fields[5]),
            endpoint_type: fields[6].to_string(),
            n_classes: parse_int_or_zero(fields[7]),
            imbalance: parse_float_or_zero(fields[8]),
            task: fields[9].to_string(),
        });
    }

    records
}

/// Names of all datasets whose task label matches `task` exactly,
/// preserving file order.
///
/// The comparison is case-sensitive with no normalization.
#[must_use]
pub fn datasets_for_task(records: &[DatasetInfo], task: &str) -> Vec<String> {
    records.iter().filter(|r| r.task == task).map(|r| r.dataset.clone()).collect()
}

/// Best-effort integer coercion: `0` when the value does not parse.
fn parse_int_or_zero(s: &str) -> u64 {
    s.trim().parse().unwrap_or(0)
}

/// Best-effort float coercion: `0.0` when the value does not parse.
fn parse_float_or_zero(s: &str) -> f64 {
    s.trim().parse().unwrap_or(0.0)
}
