//! Blocking HTTP client for the PMLB dataset repository

use std::io::Read;

use flate2::read::GzDecoder;

use crate::error::{FetchError, Result};
use crate::summary::{datasets_for_task, parse_summary_stats, DatasetInfo};
use crate::table::{split_rows, split_xy};

/// Default location of the per-dataset gzip-compressed TSV files.
const DATASET_BASE: &str = "https://github.com/EpistasisLab/pmlb/raw/master/datasets";

/// Default location of the repository-wide summary-stats file.
const SUMMARY_URL: &str =
    "https://raw.githubusercontent.com/EpistasisLab/pmlb/master/pmlb/all_summary_stats.tsv";

/// Blocking client for the PMLB dataset repository
///
/// Every fetch is one unauthenticated GET with the response fully
/// buffered before parsing. Calls share nothing and are idempotent; no
/// retries, no caching, no explicit timeout beyond the HTTP client's
/// defaults.
pub struct PmlbClient {
    client: reqwest::blocking::Client,
    dataset_base: String,
    summary_url: String,
}

impl PmlbClient {
    /// Create a new client pointed at the upstream PMLB repository.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying HTTP client cannot be constructed.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("pmlb/0.1")
            .build()
            .map_err(|e| FetchError::ClientInit { source: e })?;

        Ok(Self {
            client,
            dataset_base: DATASET_BASE.to_string(),
            summary_url: SUMMARY_URL.to_string(),
        })
    }

    /// Override the base URL datasets are fetched from.
    #[must_use]
    pub fn dataset_base(mut self, base: impl Into<String>) -> Self {
        self.dataset_base = base.into();
        self
    }

    /// Override the summary-stats file URL.
    #[must_use]
    pub fn summary_url(mut self, url: impl Into<String>) -> Self {
        self.summary_url = url.into();
        self
    }

    /// Fetch a dataset and return its decompressed TSV body unsplit.
    ///
    /// The name is used as-is as a path segment; no existence check is
    /// made before the request, so an unknown name surfaces as an HTTP
    /// 404 error.
    pub fn fetch_raw(&self, dataset_name: &str) -> Result<String> {
        let url = self.dataset_url(dataset_name);
        let body = self.get_bytes(&url)?;
        decompress(&url, &body)
    }

    /// Fetch a dataset as rows of string fields.
    ///
    /// Rows are split on `\n` and fields on `\t` with no header handling
    /// and no type coercion; a body ending in a newline yields a final
    /// empty row.
    pub fn fetch_data(&self, dataset_name: &str) -> Result<Vec<Vec<String>>> {
        Ok(split_rows(&self.fetch_raw(dataset_name)?))
    }

    /// Fetch a dataset split into feature rows and a label column.
    ///
    /// The last field of each row is the label. Empty rows are skipped;
    /// a non-empty row with fewer than two fields is a
    /// [`FetchError::MalformedRow`].
    pub fn fetch_xy_data(&self, dataset_name: &str) -> Result<(Vec<Vec<String>>, Vec<String>)> {
        split_xy(&self.fetch_raw(dataset_name)?)
    }

    /// Download and parse the repository-wide summary-stats file.
    ///
    /// Malformed metadata lines are dropped and unparsable numeric
    /// values become zero, per [`parse_summary_stats`].
    pub fn summary_stats(&self) -> Result<Vec<DatasetInfo>> {
        let url = self.summary_url.clone();
        let response = self.get(&url)?;
        let body = response.text().map_err(|e| FetchError::Io { url, source: e })?;
        Ok(parse_summary_stats(&body))
    }

    /// Names of all datasets whose task label matches `task` exactly.
    ///
    /// The match is case-sensitive with no normalization; no matches is
    /// an empty vector, not an error.
    pub fn find_datasets(&self, task: &str) -> Result<Vec<String>> {
        Ok(datasets_for_task(&self.summary_stats()?, task))
    }

    /// URL of the compressed TSV for `dataset_name`.
    pub(crate) fn dataset_url(&self, dataset_name: &str) -> String {
        format!("{}/{name}/{name}.tsv.gz", self.dataset_base, name = dataset_name)
    }

    /// Shared GET: send the request and reject non-success responses.
    fn get(&self, url: &str) -> Result<reqwest::blocking::Response> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Network { url: url.to_string(), source: e })?;

        // Redirects are already followed, so anything but a plain 200
        // here is a failed fetch.
        let status = response.status();
        if status.as_u16() != 200 {
            return Err(FetchError::HttpStatus { url: url.to_string(), status: status.as_u16() });
        }
        Ok(response)
    }

    /// GET and fully buffer a response body.
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.get(url)?;
        let bytes =
            response.bytes().map_err(|e| FetchError::Io { url: url.to_string(), source: e })?;
        Ok(bytes.to_vec())
    }
}

/// Decompress a gzip response body into text.
pub(crate) fn decompress(url: &str, body: &[u8]) -> Result<String> {
    let mut text = String::new();
    GzDecoder::new(body)
        .read_to_string(&mut text)
        .map_err(|e| FetchError::Decompression { url: url.to_string(), source: e })?;
    Ok(text)
}

impl Default for PmlbClient {
    fn default() -> Self {
        Self::new().expect("Failed to create PMLB client")
    }
}

impl std::fmt::Debug for PmlbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PmlbClient")
            .field("dataset_base", &self.dataset_base)
            .field("summary_url", &self.summary_url)
            .finish_non_exhaustive()
    }
}
