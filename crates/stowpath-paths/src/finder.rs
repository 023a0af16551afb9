use std::cmp::Ordering;

use crate::astar::Astar;
use crate::dijkstra::Dijkstra;
use crate::error::PathError;
use crate::traits::{AstarGraph, Graph};

/// A path between two nodes and its total cost.
///
/// An unreachable destination is not an error: it yields an empty path with
/// an infinite cost. Check [`is_reachable`](Self::is_reachable) before using
/// the path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Node names from source to destination, both included.
    pub path: Vec<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default = "unreachable_cost", skip_serializing_if = "is_unreachable_cost")
    )]
    pub cost: f64,
}

impl PathResult {
    pub fn new(path: Vec<String>, cost: f64) -> Self {
        Self { path, cost }
    }

    /// The empty path with infinite cost.
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty() && self.cost.is_finite()
    }

    /// Number of moves along the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    pub fn destination(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }
}

#[cfg(feature = "serde")]
fn unreachable_cost() -> f64 {
    f64::INFINITY
}

#[cfg(feature = "serde")]
fn is_unreachable_cost(cost: &f64) -> bool {
    cost.is_infinite()
}

/// Computes minimum-cost paths over a graph of type `G`.
pub trait PathFinder<G: ?Sized> {
    /// Cheapest path from `source` to `dest`.
    ///
    /// Fails with [`PathError::UnknownNode`] if either endpoint is not in the
    /// graph, before any traversal. Ties between equal-cost paths are broken
    /// arbitrarily.
    fn compute_optimal_path(
        &mut self,
        graph: &mut G,
        source: &str,
        dest: &str,
    ) -> Result<PathResult, PathError>;
}

/// The available path finders, selectable at runtime.
#[derive(Debug, Clone)]
pub enum PathAlgorithm {
    Dijkstra(Dijkstra),
    Astar(Astar),
}

impl PathAlgorithm {
    pub fn dijkstra() -> Self {
        Self::Dijkstra(Dijkstra::new())
    }

    pub fn astar() -> Self {
        Self::Astar(Astar::new())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dijkstra(_) => "dijkstra",
            Self::Astar(_) => "astar",
        }
    }
}

impl Default for PathAlgorithm {
    fn default() -> Self {
        Self::dijkstra()
    }
}

impl<G: AstarGraph + ?Sized> PathFinder<G> for PathAlgorithm {
    fn compute_optimal_path(
        &mut self,
        graph: &mut G,
        source: &str,
        dest: &str,
    ) -> Result<PathResult, PathError> {
        match self {
            Self::Dijkstra(d) => d.compute_optimal_path(graph, source, dest),
            Self::Astar(a) => a.compute_optimal_path(graph, source, dest),
        }
    }
}

/// Fail with `UnknownNode` unless both endpoints are in `graph`.
pub(crate) fn check_endpoints<G: Graph + ?Sized>(
    graph: &G,
    source: &str,
    dest: &str,
) -> Result<(), PathError> {
    for node in [source, dest] {
        if !graph.has_node(node) {
            return Err(PathError::UnknownNode(node.to_string()));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Internal priority-queue entry
// ---------------------------------------------------------------------------

/// Open-list entry, ordered by `priority` for use in `BinaryHeap`.
///
/// `cost` is the path cost to `node` when the entry was pushed; `priority`
/// is the same for Dijkstra and cost + heuristic for A*.
#[derive(Clone, Debug)]
pub(crate) struct QueueEntry {
    pub(crate) priority: f64,
    pub(crate) cost: f64,
    pub(crate) node: String,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first.
        other.priority.total_cmp(&self.priority)
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Walk predecessor links back from `dest` and return the path in order.
pub(crate) fn reconstruct(
    came_from: &std::collections::HashMap<String, String>,
    dest: &str,
) -> Vec<String> {
    let mut path = vec![dest.to_string()];
    let mut current = dest;
    while let Some(prev) = came_from.get(current) {
        path.push(prev.clone());
        current = prev;
    }
    path.reverse();
    path
}
