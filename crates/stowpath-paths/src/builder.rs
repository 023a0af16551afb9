//! Connectivity construction strategies.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::graph::ConnectivityGraph;

/// Strategy that decides which moves a [`ConnectivityGraph`] allows.
///
/// Implementations add nodes and edges derived from the graph's layout.
/// A strategy is meant to run once, on an empty graph.
pub trait ConnectivityBuilder {
    fn construct_graph(&mut self, graph: &mut ConnectivityGraph<'_>);
}

/// Random connectivity for exercising pathfinding without a physical model.
///
/// Each pass shuffles every location name and links consecutive names with
/// bidirectional edges, so every pass on its own already yields a spanning
/// chain. A layout with a single location has nothing to link and yields an
/// empty graph. It does not model aisles or rack adjacency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomConnectivity {
    seed: Option<u64>,
    passes: usize,
}

impl RandomConnectivity {
    pub const DEFAULT_PASSES: usize = 4;

    /// Builder using `seed` for reproducible graphs, or the thread RNG when
    /// `None`.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            passes: Self::DEFAULT_PASSES,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Override the number of shuffle passes.
    pub fn with_passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    fn connect(&self, graph: &mut ConnectivityGraph<'_>, rng: &mut impl Rng) {
        let layout = graph.layout();
        let mut nodes: Vec<&str> = layout.names().collect();
        for _ in 0..self.passes {
            nodes.shuffle(rng);
            for pair in nodes.windows(2) {
                graph.add_edge(pair[0], pair[1], true);
            }
        }
    }
}

impl Default for RandomConnectivity {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ConnectivityBuilder for RandomConnectivity {
    fn construct_graph(&mut self, graph: &mut ConnectivityGraph<'_>) {
        match self.seed {
            Some(seed) => self.connect(graph, &mut StdRng::seed_from_u64(seed)),
            None => self.connect(graph, &mut rand::rng()),
        }
        let (nodes, edges) = graph.compute_graph_size();
        log::info!("Generated random graph with {nodes} nodes, {edges} directed edges");
    }
}
