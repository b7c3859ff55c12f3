//! Synthetic graph generators for benchmarking.
//!
//! Each generator produces an undirected `petgraph` graph with `u32` edge
//! weights. Unweighted graphs carry a uniform weight of one so that a
//! weighted shortest-path query reduces to hop counting; the random-weight
//! overlay replaces those weights in place.

mod errors;

pub use errors::GeneratorError;

use petgraph::graph::{NodeIndex, UnGraph};
use rand::Rng;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Undirected benchmark graph with `u32` edge weights.
pub type BenchGraph = UnGraph<(), u32>;

/// Weight carried by every edge of an unweighted graph.
pub const DEFAULT_EDGE_WEIGHT: u32 = 1;

/// Generates a G(n, p) Erdős–Rényi graph.
///
/// Every unordered node pair receives an edge independently with the given
/// probability.
///
/// # Errors
/// Returns [`GeneratorError`] when `nodes` is zero or `probability` is not
/// a finite value within `[0, 1]`.
pub fn erdos_renyi_graph<R: Rng>(
    nodes: usize,
    probability: f64,
    rng: &mut R,
) -> Result<BenchGraph, GeneratorError> {
    if nodes == 0 {
        return Err(GeneratorError::ZeroNodes);
    }
    if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
        return Err(GeneratorError::InvalidProbability { probability });
    }

    let mut graph = UnGraph::with_capacity(nodes, 0);
    let indices: Vec<NodeIndex> = (0..nodes).map(|_| graph.add_node(())).collect();
    for (offset, &source) in indices.iter().enumerate() {
        for &target in indices.iter().skip(offset + 1) {
            if rng.gen_bool(probability) {
                graph.add_edge(source, target, DEFAULT_EDGE_WEIGHT);
            }
        }
    }
    Ok(graph)
}

/// Generates a uniformly random labelled tree on `nodes` nodes.
///
/// Samples a random Prüfer sequence and decodes it, so every labelled tree
/// is equally likely. The result always has exactly `nodes - 1` edges and
/// is connected.
///
/// # Errors
/// Returns [`GeneratorError::ZeroNodes`] when `nodes` is zero.
pub fn random_labeled_tree<R: Rng>(
    nodes: usize,
    rng: &mut R,
) -> Result<BenchGraph, GeneratorError> {
    if nodes == 0 {
        return Err(GeneratorError::ZeroNodes);
    }

    let mut graph = UnGraph::with_capacity(nodes, nodes.saturating_sub(1));
    let indices: Vec<NodeIndex> = (0..nodes).map(|_| graph.add_node(())).collect();
    if nodes == 1 {
        return Ok(graph);
    }

    let prufer: Vec<usize> = (0..nodes.saturating_sub(2))
        .map(|_| rng.gen_range(0..nodes))
        .collect();

    let mut degrees = vec![1_usize; nodes];
    for &label in &prufer {
        if let Some(entry) = degrees.get_mut(label) {
            *entry += 1;
        }
    }

    // Smallest-leaf-first decoding keeps the result deterministic for a
    // fixed sequence.
    let mut leaves: BinaryHeap<Reverse<usize>> = degrees
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count == 1)
        .map(|(node, _)| Reverse(node))
        .collect();

    for &label in &prufer {
        let Some(Reverse(leaf)) = leaves.pop() else {
            break;
        };
        connect(&mut graph, &indices, leaf, label);
        if let Some(entry) = degrees.get_mut(label) {
            *entry -= 1;
            if *entry == 1 {
                leaves.push(Reverse(label));
            }
        }
    }

    if let (Some(Reverse(left)), Some(Reverse(right))) = (leaves.pop(), leaves.pop()) {
        connect(&mut graph, &indices, left, right);
    }
    Ok(graph)
}

/// Generates the deterministic path `0 - 1 - ... - nodes-1`.
///
/// # Errors
/// Returns [`GeneratorError::ZeroNodes`] when `nodes` is zero.
pub fn path_graph(nodes: usize) -> Result<BenchGraph, GeneratorError> {
    if nodes == 0 {
        return Err(GeneratorError::ZeroNodes);
    }

    let mut graph = UnGraph::with_capacity(nodes, nodes.saturating_sub(1));
    let indices: Vec<NodeIndex> = (0..nodes).map(|_| graph.add_node(())).collect();
    for pair in indices.windows(2) {
        if let [source, target] = pair {
            graph.add_edge(*source, *target, DEFAULT_EDGE_WEIGHT);
        }
    }
    Ok(graph)
}

/// Overwrites every edge weight with an independent uniform draw from the
/// closed range `[0, max_weight]`.
///
/// Assignment order does not affect correctness: edge weight lookup is
/// order-independent for undirected edges.
pub fn assign_random_weights<R: Rng>(graph: &mut BenchGraph, max_weight: u32, rng: &mut R) {
    for weight in graph.edge_weights_mut() {
        *weight = rng.gen_range(0..=max_weight);
    }
}

fn connect(graph: &mut BenchGraph, indices: &[NodeIndex], left: usize, right: usize) {
    if let (Some(&source), Some(&target)) = (indices.get(left), indices.get(right)) {
        graph.add_edge(source, target, DEFAULT_EDGE_WEIGHT);
    }
}
