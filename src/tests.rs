//! Crate-level tests for the PMLB client
//!
//! End-to-end coverage of the fetch-decode-split pipeline on canned
//! bodies, plus network integration tests that only run with --ignored.

use super::*;

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

/// Gzip-compress a text body the way the upstream repository serves it.
fn gzip(text: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).expect("gzip write");
    encoder.finish().expect("gzip finish")
}

#[test]
fn test_module_exports() {
    // Verify all public types are accessible
    let _: FetchError = FetchError::MalformedRow { line: 0, fields: 1 };
    let _: Vec<Vec<String>> = split_rows("");
    let _: Vec<DatasetInfo> = parse_summary_stats("");
}

// ─── URL assembly ───────────────────────────────────────────────────

#[test]
fn test_dataset_url_uses_name_twice() {
    let client = PmlbClient::new().expect("client");
    assert_eq!(
        client.dataset_url("iris"),
        "https://github.com/EpistasisLab/pmlb/raw/master/datasets/iris/iris.tsv.gz"
    );
}

#[test]
fn test_dataset_base_override() {
    let client = PmlbClient::new().expect("client").dataset_base("http://localhost:9999/data");
    assert_eq!(client.dataset_url("iris"), "http://localhost:9999/data/iris/iris.tsv.gz");
}

#[test]
fn test_client_debug_shows_endpoints() {
    let client = PmlbClient::new().expect("client");
    let repr = format!("{client:?}");
    assert!(repr.contains("PmlbClient"));
    assert!(repr.contains("all_summary_stats.tsv"));
}

// ─── Decode-and-split pipeline on canned bodies ─────────────────────

#[test]
fn test_gzip_body_decodes_to_rows() {
    let body = "5.1\t3.5\t0\n4.9\t3.0\t0\n";
    let compressed = gzip(body);

    let text = crate::client::decompress("http://example/iris.tsv.gz", &compressed).unwrap();
    assert_eq!(text, body);

    let rows = split_rows(&text);
    assert_eq!(rows.len(), 3); // two data rows plus the trailing empty row
    assert_eq!(rows[0], vec!["5.1", "3.5", "0"]);
    assert_eq!(rows[2], vec![String::new()]);
}

#[test]
fn test_gzip_body_decodes_to_xy() {
    let compressed = gzip("5.1\t3.5\t0\n4.9\t3.0\t1\n");

    let text = crate::client::decompress("http://example/iris.tsv.gz", &compressed).unwrap();
    let (x, y) = split_xy(&text).unwrap();
    assert_eq!(x, vec![vec!["5.1", "3.5"], vec!["4.9", "3.0"]]);
    assert_eq!(y, vec!["0", "1"]);
}

#[test]
fn test_non_gzip_body_is_a_decompression_error() {
    let err = crate::client::decompress("http://example/x.tsv.gz", b"plain text, not gzip")
        .unwrap_err();
    assert!(matches!(err, FetchError::Decompression { .. }));
}

#[test]
fn test_truncated_gzip_body_is_a_decompression_error() {
    let mut compressed = gzip("a\tb\nc\td\n");
    compressed.truncate(compressed.len() / 2);

    let err = crate::client::decompress("http://example/x.tsv.gz", &compressed).unwrap_err();
    assert!(matches!(err, FetchError::Decompression { .. }));
}

// ─── Integration tests (require network, run with --ignored) ────────

#[test]
#[ignore = "Requires network access to the PMLB repository"]
fn test_fetch_real_dataset() {
    let client = PmlbClient::new().expect("client");
    match client.fetch_data("iris") {
        Ok(rows) => {
            assert!(rows.len() > 1);
            // Every data row has the same field count as the header
            let width = rows[0].len();
            assert!(width >= 2);
            for row in rows.iter().filter(|r| r.len() > 1) {
                assert_eq!(row.len(), width);
            }
        }
        Err(e) => {
            // Network errors are acceptable in CI
            eprintln!("Dataset fetch failed (expected in CI): {e}");
        }
    }
}

#[test]
#[ignore = "Requires network access to the PMLB repository"]
fn test_fetch_real_xy_dataset() {
    let client = PmlbClient::new().expect("client");
    match client.fetch_xy_data("iris") {
        Ok((x, y)) => {
            assert_eq!(x.len(), y.len());
            assert!(!x.is_empty());
        }
        Err(e) => {
            eprintln!("Dataset fetch failed (expected in CI): {e}");
        }
    }
}

#[test]
#[ignore = "Requires network access to the PMLB repository"]
fn test_unknown_dataset_is_an_error_not_a_silent_success() {
    let client = PmlbClient::new().expect("client");
    let result = client.fetch_data("no-such-dataset-1f2e3d4c");
    let err = result.expect_err("fetching a nonexistent dataset must fail");
    // Upstream answers 404 for unknown names; any transport failure is
    // still an error, never a success-shaped return.
    if let Some(status) = err.status() {
        assert_eq!(status, 404);
        assert!(err.is_not_found());
    }
}

#[test]
#[ignore = "Requires network access to the PMLB repository"]
fn test_real_summary_stats_and_task_filter() {
    let client = PmlbClient::new().expect("client");
    match client.summary_stats() {
        Ok(records) => {
            assert!(!records.is_empty());
            let names = datasets_for_task(&records, "classification");
            assert!(!names.is_empty());
            // Filtering through the client agrees with the local scan
            let via_client = client.find_datasets("classification").expect("find_datasets");
            assert_eq!(names, via_client);
        }
        Err(e) => {
            eprintln!("Summary fetch failed (expected in CI): {e}");
        }
    }
}
