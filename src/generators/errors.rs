//! Error types for synthetic graph generation.

/// Errors that may occur while generating a benchmark graph.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// The requested edge probability was not a probability.
    #[error("edge probability must be finite and within [0, 1], got {probability}")]
    InvalidProbability {
        /// The rejected probability value.
        probability: f64,
    },
}
