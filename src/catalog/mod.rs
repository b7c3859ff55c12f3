//! The fixed benchmark graph catalogue.
//!
//! The catalogue is a hard-coded grid: three node-count tiers, each with
//! four Erdős–Rényi densities (the reciprocal `1/nodes` plus three fixed
//! values), a random labelled tree, and a path graph. The grid is repeated
//! a second time with random integer edge weights. Built once per benchmark
//! run and read-only afterwards; entry names are the benchmark parameter
//! keys.

use crate::error::BenchSetupError;
use crate::generators::{self, BenchGraph, GeneratorError};
use crate::naming::GraphName;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use std::collections::HashMap;

/// Node-count tiers of the catalogue.
pub const NODE_TIERS: &[usize] = &[10, 100, 1_000];

/// Erdős–Rényi densities applied at every tier alongside the reciprocal
/// density `1/nodes`.
pub const FIXED_DENSITIES: &[f64] = &[0.1, 0.5, 0.9];

/// Maximum random edge weight of the weighted catalogue family.
pub const MAX_RANDOM_WEIGHT: u32 = 20;

/// A generator/argument combination in the catalogue grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GraphSpec {
    /// G(n, p) random graph.
    ErdosRenyi {
        /// Number of nodes.
        nodes: usize,
        /// Independent edge probability.
        probability: f64,
    },
    /// Uniformly random labelled tree.
    RandomLabeledTree {
        /// Number of nodes.
        nodes: usize,
    },
    /// Deterministic path graph.
    PathGraph {
        /// Number of nodes.
        nodes: usize,
    },
}

impl GraphSpec {
    /// Deterministic label for this specification.
    #[must_use]
    pub fn name(&self) -> GraphName {
        match *self {
            Self::ErdosRenyi { nodes, probability } => GraphName::new("erdos_renyi_graph")
                .arg(nodes)
                .arg(probability),
            Self::RandomLabeledTree { nodes } => GraphName::new("random_labeled_tree").arg(nodes),
            Self::PathGraph { nodes } => GraphName::new("path_graph").arg(nodes),
        }
    }

    /// Generates the graph this specification describes.
    ///
    /// # Errors
    /// Returns [`GeneratorError`] when the specification's arguments are
    /// rejected by the underlying generator.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<BenchGraph, GeneratorError> {
        match *self {
            Self::ErdosRenyi { nodes, probability } => {
                generators::erdos_renyi_graph(nodes, probability, rng)
            }
            Self::RandomLabeledTree { nodes } => generators::random_labeled_tree(nodes, rng),
            Self::PathGraph { nodes } => generators::path_graph(nodes),
        }
    }
}

/// Edge weighting applied after generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weighting {
    /// Keep the generator's unit weights.
    Unweighted,
    /// Overwrite every edge weight with a uniform draw from `[0, max_weight]`.
    Random {
        /// Inclusive upper bound of the drawn weights.
        max_weight: u32,
    },
}

/// One row of the catalogue grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CatalogEntry {
    /// Generator and arguments.
    pub spec: GraphSpec,
    /// Post-generation edge weighting.
    pub weighting: Weighting,
}

impl CatalogEntry {
    /// Deterministic label for this entry.
    ///
    /// Weighted entries nest the inner specification's label, e.g.
    /// `generate_weighted_graph(20, path_graph(10))`.
    #[must_use]
    pub fn name(&self) -> String {
        let inner = self.spec.name();
        match self.weighting {
            Weighting::Unweighted => inner.to_string(),
            Weighting::Random { max_weight } => GraphName::new("generate_weighted_graph")
                .arg(max_weight)
                .arg(inner)
                .to_string(),
        }
    }

    /// Generates the entry's graph, applying the weighting overlay.
    ///
    /// # Errors
    /// Returns [`GeneratorError`] when generation fails.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<BenchGraph, GeneratorError> {
        let mut graph = self.spec.generate(rng)?;
        if let Weighting::Random { max_weight } = self.weighting {
            generators::assign_random_weights(&mut graph, max_weight, rng);
        }
        Ok(graph)
    }
}

/// A generated graph paired with its catalogue label.
#[derive(Clone, Debug)]
pub struct NamedGraph {
    /// Benchmark parameter key.
    pub name: String,
    /// The generated graph.
    pub graph: BenchGraph,
}

/// The catalogue of named graphs, in grid order, with a name index.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<NamedGraph>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// The hard-coded generator/argument grid, in definition order.
    #[must_use]
    pub fn grid() -> Vec<CatalogEntry> {
        let weightings = [
            Weighting::Unweighted,
            Weighting::Random {
                max_weight: MAX_RANDOM_WEIGHT,
            },
        ];
        let mut rows = Vec::new();
        for weighting in weightings {
            for &nodes in NODE_TIERS {
                let mut specs = vec![GraphSpec::ErdosRenyi {
                    nodes,
                    probability: reciprocal_density(nodes),
                }];
                for &probability in FIXED_DENSITIES {
                    specs.push(GraphSpec::ErdosRenyi { nodes, probability });
                }
                specs.push(GraphSpec::RandomLabeledTree { nodes });
                specs.push(GraphSpec::PathGraph { nodes });
                rows.extend(specs.into_iter().map(|spec| CatalogEntry { spec, weighting }));
            }
        }
        rows
    }

    /// Builds the catalogue by generating every grid entry with the given
    /// random number generator.
    ///
    /// For the 10-node tier the reciprocal density coincides with the `0.1`
    /// tier; the first occurrence of a repeated name wins and the duplicate
    /// specification is skipped without consuming randomness, so names stay
    /// unique lookup keys.
    ///
    /// # Errors
    /// Returns [`BenchSetupError`] when a grid entry fails to generate.
    pub fn build<R: Rng>(rng: &mut R) -> Result<Self, BenchSetupError> {
        let mut entries = Vec::new();
        let mut index = HashMap::new();
        for entry in Self::grid() {
            let name = entry.name();
            if index.contains_key(&name) {
                continue;
            }
            let graph = entry.generate(rng)?;
            index.insert(name.clone(), entries.len());
            entries.push(NamedGraph { name, graph });
        }
        Ok(Self { entries, index })
    }

    /// Builds the catalogue from a fixed seed; two builds from the same
    /// seed yield identical node and edge sets.
    ///
    /// # Errors
    /// Returns [`BenchSetupError`] when a grid entry fails to generate.
    pub fn build_seeded(seed: u64) -> Result<Self, BenchSetupError> {
        Self::build(&mut SmallRng::seed_from_u64(seed))
    }

    /// Builds the catalogue from entropy; successive builds are not
    /// reproducible, which the benchmark accepts.
    ///
    /// # Errors
    /// Returns [`BenchSetupError`] when a grid entry fails to generate.
    pub fn build_from_entropy() -> Result<Self, BenchSetupError> {
        Self::build(&mut SmallRng::from_entropy())
    }

    /// Looks up a graph by its catalogue name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BenchGraph> {
        self.index
            .get(name)
            .and_then(|&slot| self.entries.get(slot))
            .map(|entry| &entry.graph)
    }

    /// Iterates over catalogue names in grid order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Iterates over the named graphs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedGraph> {
        self.entries.iter()
    }

    /// Number of distinct named graphs in the catalogue.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalogue holds no graphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a NamedGraph;
    type IntoIter = std::slice::Iter<'a, NamedGraph>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "node tiers are far below f64 precision limits"
)]
#[expect(
    clippy::float_arithmetic,
    reason = "the reciprocal density is part of the catalogue definition"
)]
fn reciprocal_density(nodes: usize) -> f64 {
    1.0 / (nodes as f64)
}
