//! Tokenizing of raw TSV bodies into rows, fields, and X/y projections
//!
//! Pure functions kept apart from the HTTP client so the split semantics
//! are testable without a network.

use crate::error::{FetchError, Result};

/// Split a decompressed TSV body into rows of string fields.
///
/// Rows are split on `\n` and fields on `\t`, with no trimming, no type
/// coercion, and no header handling. A body ending in a newline therefore
/// yields a final empty row: row count is always `1 + newline count`, and
/// each row's field count `1 + tab count` for that line.
#[must_use]
pub fn split_rows(body: &str) -> Vec<Vec<String>> {
    body.split('\n').map(|line| line.split('\t').map(str::to_string).collect()).collect()
}

/// Project a TSV body into feature rows and a label column.
///
/// The last field of every row becomes the label; the remaining fields
/// are that row's features. Fully empty rows (the artifact of a trailing
/// newline) are skipped. A non-empty row with no tab at all has nothing
/// to split and yields [`FetchError::MalformedRow`].
pub fn split_xy(body: &str) -> Result<(Vec<Vec<String>>, Vec<String>)> {
    let mut features = Vec::new();
    let mut labels = Vec::new();

    for (line, row) in body.split('\n').enumerate() {
        if row.is_empty() {
            continue;
        }
        let Some((x, y)) = row.rsplit_once('\t') else {
            return Err(FetchError::MalformedRow { line, fields: 1 });
        };
        features.push(x.split('\t').map(str::to_string).collect());
        labels.push(y.to_string());
    }

    Ok((features, labels))
}
