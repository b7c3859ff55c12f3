//! The timed all-pairs shortest-path sweep.
//!
//! The benchmark's measured routine: for every ordered source/target pair,
//! run a single-source Dijkstra query restricted to that target and discard
//! the result. The sweep is an O(|V|) amplification of whatever one query
//! costs; nothing is validated or returned beyond the query count.

use petgraph::Undirected;
use petgraph::algo::dijkstra;
use petgraph::graph::Graph;
use std::hint::black_box;

/// Runs one Dijkstra query per ordered node pair, including pairs where the
/// source equals the target, and returns the number of queries executed.
///
/// For a graph with N nodes the count is exactly N². Query results are
/// black-boxed and dropped so the optimiser cannot elide the work.
#[must_use]
pub fn all_pairs_dijkstra<N>(graph: &Graph<N, u32, Undirected>) -> usize {
    let mut queries = 0_usize;
    for source in graph.node_indices() {
        for target in graph.node_indices() {
            let distances = dijkstra(graph, source, Some(target), |edge| *edge.weight());
            black_box(distances);
            queries += 1;
        }
    }
    queries
}

#[cfg(test)]
mod tests {
    use super::all_pairs_dijkstra;
    use crate::generators::{erdos_renyi_graph, path_graph};
    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    #[rstest]
    #[case::single_node(1)]
    #[case::small_path(4)]
    #[case::larger_path(25)]
    fn sweep_runs_one_query_per_ordered_pair(#[case] nodes: usize) {
        let graph = path_graph(nodes).expect("generation should succeed");
        assert_eq!(all_pairs_dijkstra(&graph), nodes * nodes);
    }

    #[rstest]
    fn sweep_tolerates_disconnected_targets() {
        let mut rng = SmallRng::seed_from_u64(3);
        let graph = erdos_renyi_graph(30, 0.0, &mut rng).expect("generation should succeed");
        // No edges at all: every non-trivial query misses its target.
        assert_eq!(all_pairs_dijkstra(&graph), 900);
    }
}
