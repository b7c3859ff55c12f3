//! Download-and-cache helper for the real-world interaction network.
//!
//! Fetches the SNAP `ChCh-Miner` drug–drug interaction network, a
//! gzip-compressed tab-separated edge list, and builds an undirected graph
//! from its first two columns. Downloaded payloads are cached atomically
//! and reused on subsequent calls. The network is an opt-in benchmark
//! parameter; the default bench run never touches it.

use crate::generators::DEFAULT_EDGE_WEIGHT;
use flate2::read::GzDecoder;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

const DRUG_INTERACTION_FILE: &str = "ChCh-Miner_durgbank-chem-chem.tsv.gz";

/// Undirected interaction network with drug identifiers as node labels.
pub type InteractionGraph = UnGraph<String, u32>;

/// Errors that may occur while fetching or parsing the network.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Reading or writing cached dataset files failed.
    #[error("I/O failure while handling cached dataset data: {0}")]
    Io(#[from] std::io::Error),
    /// The dataset download failed.
    #[error("dataset download failed for `{url}`: {message}")]
    Download {
        /// URL that failed.
        url: String,
        /// Human-readable failure message.
        message: String,
    },
    /// The downloaded edge list was malformed.
    #[error("invalid edge list `{path}`: {message}")]
    InvalidEdgeList {
        /// Path of the malformed file.
        path: PathBuf,
        /// Human-readable validation failure.
        message: String,
    },
}

/// Configuration for network download and cache behaviour.
#[derive(Clone, Debug)]
pub struct DrugNetworkConfig {
    /// Local directory where the compressed edge list is cached.
    pub cache_dir: PathBuf,
    /// Base URL that hosts the dataset file.
    pub base_url: String,
}

impl Default for DrugNetworkConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            base_url: "https://snap.stanford.edu/biodata/datasets/10001/files".to_owned(),
        }
    }
}

/// Download client abstraction for the fetch helpers.
pub trait DownloadClient {
    /// Downloads URL contents as bytes.
    ///
    /// # Errors
    /// Returns [`FetchError`] if the request fails.
    fn download_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

struct UreqDownloadClient;

impl DownloadClient for UreqDownloadClient {
    fn download_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut response = ureq::get(url).call().map_err(|error| FetchError::Download {
            url: url.to_owned(),
            message: error.to_string(),
        })?;

        response
            .body_mut()
            .read_to_vec()
            .map_err(|error| FetchError::Download {
                url: url.to_owned(),
                message: error.to_string(),
            })
    }
}

/// Fetches the drug–drug interaction network using a download-and-cache
/// helper.
///
/// # Errors
/// Returns [`FetchError`] when downloading, decompressing, or parsing the
/// edge list fails.
pub fn fetch_drug_interaction_network(
    config: &DrugNetworkConfig,
) -> Result<InteractionGraph, FetchError> {
    fetch_with_client(config, &UreqDownloadClient)
}

fn fetch_with_client(
    config: &DrugNetworkConfig,
    client: &dyn DownloadClient,
) -> Result<InteractionGraph, FetchError> {
    fs::create_dir_all(&config.cache_dir)?;

    let path = config.cache_dir.join(DRUG_INTERACTION_FILE);
    let bytes = ensure_cached_bytes(&path, &file_url(config, DRUG_INTERACTION_FILE), client)?;
    let decoded = gunzip_bytes(&path, &bytes)?;
    parse_edge_list(&path, &decoded)
}

fn ensure_cached_bytes(
    path: &Path,
    url: &str,
    client: &dyn DownloadClient,
) -> Result<Vec<u8>, FetchError> {
    if path.exists() {
        return fs::read(path).map_err(FetchError::from);
    }

    let payload = client.download_bytes(url)?;
    write_atomic(path, &payload)?;
    Ok(payload)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), FetchError> {
    let mut part_path = path.to_path_buf();
    part_path.set_extension("part");
    if part_path.exists() {
        fs::remove_file(&part_path)?;
    }
    fs::write(&part_path, bytes)?;
    fs::rename(&part_path, path)?;
    Ok(())
}

fn file_url(config: &DrugNetworkConfig, file_name: &str) -> String {
    format!("{}/{}", config.base_url.trim_end_matches('/'), file_name)
}

fn default_cache_dir() -> PathBuf {
    if let Some(explicit) = env::var_os("SSSP_BENCHES_CACHE_DIR") {
        return PathBuf::from(explicit);
    }

    if let Some(xdg_cache) = env::var_os("XDG_CACHE_HOME") {
        return PathBuf::from(xdg_cache).join("sssp-benches").join("snap");
    }

    if let Some(home) = env::var_os("HOME") {
        return PathBuf::from(home)
            .join(".cache")
            .join("sssp-benches")
            .join("snap");
    }

    env::temp_dir().join("sssp-benches").join("snap")
}

fn gunzip_bytes(path: &Path, bytes: &[u8]) -> Result<Vec<u8>, FetchError> {
    let mut gzip_decoder = GzDecoder::new(bytes);
    let mut decompressed = Vec::new();
    gzip_decoder
        .read_to_end(&mut decompressed)
        .map_err(|error| invalid_edge_list(path, &format!("gzip decode failure: {error}")))?;
    Ok(decompressed)
}

fn parse_edge_list(path: &Path, bytes: &[u8]) -> Result<InteractionGraph, FetchError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|error| invalid_edge_list(path, &format!("edge list is not UTF-8: {error}")))?;

    let mut graph = InteractionGraph::new_undirected();
    let mut interned: HashMap<String, NodeIndex> = HashMap::new();
    for (line_number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let mut columns = line.split('\t');
        let (Some(source), Some(target)) = (columns.next(), columns.next()) else {
            return Err(invalid_edge_list(
                path,
                &format!("line {} has fewer than two columns", line_number + 1),
            ));
        };
        let source_label = source.trim();
        let target_label = target.trim();
        if source_label.is_empty() || target_label.is_empty() {
            return Err(invalid_edge_list(
                path,
                &format!("line {} has an empty endpoint", line_number + 1),
            ));
        }

        let source_id = intern(&mut graph, &mut interned, source_label);
        let target_id = intern(&mut graph, &mut interned, target_label);
        // Parallel edges in the raw data collapse to one.
        graph.update_edge(source_id, target_id, DEFAULT_EDGE_WEIGHT);
    }
    Ok(graph)
}

fn intern(
    graph: &mut InteractionGraph,
    interned: &mut HashMap<String, NodeIndex>,
    label: &str,
) -> NodeIndex {
    *interned
        .entry(label.to_owned())
        .or_insert_with(|| graph.add_node(label.to_owned()))
}

fn invalid_edge_list(path: &Path, message: &str) -> FetchError {
    FetchError::InvalidEdgeList {
        path: path.to_path_buf(),
        message: message.to_owned(),
    }
}

#[cfg(test)]
mod tests;
