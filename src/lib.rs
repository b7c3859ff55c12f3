//! Benchmark support crate for single-source shortest-path sweeps.
//!
//! Provides a fixed catalogue of synthetic graphs (Erdős–Rényi at several
//! densities, random labelled trees, path graphs, each with an optional
//! random-weight overlay), deterministic graph naming for benchmark
//! parameter keys, an all-pairs Dijkstra sweep used as the timed routine,
//! and a download-and-cache helper for a real-world interaction network.
//!
//! Shortest-path computation itself is delegated to `petgraph`; this crate
//! owns only the scaffolding around it.

pub mod catalog;
pub mod error;
pub mod fetch;
pub mod generators;
pub mod naming;
pub mod runner;
