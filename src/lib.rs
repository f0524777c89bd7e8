//! PMLB dataset repository client
//!
//! This crate fetches machine-learning benchmark datasets and their
//! metadata from the Penn Machine Learning Benchmarks (PMLB) repository:
//! - Per-dataset gzip-compressed TSV downloads, split into rows and fields
//! - Feature/label (X/y) projection of downloaded tables
//! - The repository-wide summary-stats file parsed into typed records
//! - Dataset lookup by task label
//!
//! All I/O is synchronous and blocking; each operation is a single HTTP
//! round trip with the response fully buffered in memory.
//!
//! # Example
//!
//! ```ignore
//! use pmlb::PmlbClient;
//!
//! let client = PmlbClient::new()?;
//! let (features, labels) = client.fetch_xy_data("iris")?;
//! let classification = client.find_datasets("classification")?;
//! ```

mod client;
mod error;
mod summary;
mod table;

#[cfg(test)]
mod tests;

pub use client::PmlbClient;
pub use error::{FetchError, Result};
pub use summary::{datasets_for_task, parse_summary_stats, DatasetInfo};
pub use table::{split_rows, split_xy};
