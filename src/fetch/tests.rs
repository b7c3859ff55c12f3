//! Unit tests for the network fetch and cache helpers.

use super::*;
use flate2::Compression;
use flate2::write::GzEncoder;
use rstest::rstest;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use tempfile::TempDir;

struct FakeClient {
    payloads: HashMap<String, Vec<u8>>,
    call_count: RefCell<usize>,
}

impl FakeClient {
    fn new(payloads: HashMap<String, Vec<u8>>) -> Self {
        Self {
            payloads,
            call_count: RefCell::new(0),
        }
    }

    fn calls(&self) -> usize {
        *self.call_count.borrow()
    }
}

impl DownloadClient for FakeClient {
    fn download_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        *self.call_count.borrow_mut() += 1;
        self.payloads
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Download {
                url: url.to_owned(),
                message: "missing fake payload".to_owned(),
            })
    }
}

fn gzip_bytes(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).expect("gzip encode must succeed");
    encoder.finish().expect("gzip finish must succeed")
}

fn config_with_payload(cache: &TempDir, payload: Vec<u8>) -> (DrugNetworkConfig, FakeClient) {
    let config = DrugNetworkConfig {
        cache_dir: cache.path().to_path_buf(),
        base_url: "https://example.invalid/files".to_owned(),
    };
    let url = format!("{}/{DRUG_INTERACTION_FILE}", config.base_url);
    let client = FakeClient::new(HashMap::from([(url, payload)]));
    (config, client)
}

const SAMPLE_EDGE_LIST: &str = "DB00001\tDB00002\nDB00002\tDB00003\nDB00001\tDB00002\n";

#[rstest]
fn fetch_builds_an_interned_undirected_graph() {
    let cache = TempDir::new().expect("temp dir must be created");
    let (config, client) = config_with_payload(&cache, gzip_bytes(SAMPLE_EDGE_LIST.as_bytes()));

    let graph = fetch_with_client(&config, &client).expect("fetch should succeed");

    assert_eq!(graph.node_count(), 3);
    // The repeated DB00001-DB00002 line collapses to one edge.
    assert_eq!(graph.edge_count(), 2);
    let labels: Vec<&str> = graph.node_weights().map(String::as_str).collect();
    assert!(labels.contains(&"DB00003"));
}

#[rstest]
fn fetch_uses_the_cache_after_the_first_download() {
    let cache = TempDir::new().expect("temp dir must be created");
    let (config, client) = config_with_payload(&cache, gzip_bytes(SAMPLE_EDGE_LIST.as_bytes()));

    let first = fetch_with_client(&config, &client).expect("first fetch should succeed");
    let second = fetch_with_client(&config, &client).expect("second fetch should succeed");

    assert_eq!(client.calls(), 1);
    assert_eq!(first.node_count(), second.node_count());
    assert!(cache.path().join(DRUG_INTERACTION_FILE).exists());
}

#[rstest]
fn fetch_rejects_lines_with_fewer_than_two_columns() {
    let cache = TempDir::new().expect("temp dir must be created");
    let (config, client) = config_with_payload(&cache, gzip_bytes(b"DB00001\tDB00002\nDB00003\n"));

    let error = fetch_with_client(&config, &client).expect_err("malformed line should fail");
    let FetchError::InvalidEdgeList { message, .. } = error else {
        panic!("expected InvalidEdgeList error");
    };
    assert!(message.contains("fewer than two columns"));
}

#[rstest]
fn fetch_rejects_a_corrupt_gzip_payload() {
    let cache = TempDir::new().expect("temp dir must be created");
    let (config, client) = config_with_payload(&cache, b"not a gzip stream".to_vec());

    let error = fetch_with_client(&config, &client).expect_err("corrupt payload should fail");
    let FetchError::InvalidEdgeList { message, .. } = error else {
        panic!("expected InvalidEdgeList error");
    };
    assert!(message.contains("gzip decode failure"));
}

#[rstest]
fn fetch_surfaces_download_failures() {
    let cache = TempDir::new().expect("temp dir must be created");
    let config = DrugNetworkConfig {
        cache_dir: cache.path().to_path_buf(),
        base_url: "https://example.invalid/files".to_owned(),
    };
    let client = FakeClient::new(HashMap::new());

    let error = fetch_with_client(&config, &client).expect_err("missing payload should fail");
    assert!(matches!(error, FetchError::Download { .. }));
}
