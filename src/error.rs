//! Benchmark setup error type.
//!
//! Aggregates the error types that may arise while preparing benchmark
//! graphs so that setup functions can propagate failures with `?` instead
//! of using `.expect()`.

use crate::fetch::FetchError;
use crate::generators::GeneratorError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("graph generation failed: {0}")]
    Generator(#[from] GeneratorError),
    /// Downloading or parsing the real-world network failed.
    #[error("network fetch failed: {0}")]
    Fetch(#[from] FetchError),
}
