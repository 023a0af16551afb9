use crate::error::GraphError;

/// Node membership and adjacency lookup.
pub trait Graph {
    /// Whether `node` is a member of the graph.
    fn has_node(&self, node: &str) -> bool;

    /// Append neighbors of `node` into `buf`. The caller clears `buf` before
    /// calling. Unknown nodes append nothing.
    fn neighbors(&self, node: &str, buf: &mut Vec<String>);
}

/// Graph with weighted (non-negative) directed edges.
///
/// Takes `&mut self` because implementations may memoize costs.
pub trait WeightedGraph: Graph {
    /// Cost of moving from `from` to its neighbor `to`.
    fn move_cost(&mut self, from: &str, to: &str) -> Result<f64, GraphError>;
}

/// Weighted graph with a heuristic for A*.
pub trait AstarGraph: WeightedGraph {
    /// Estimate of the cost from `from` to `to`, which need not be adjacent.
    /// Must never overestimate the true path cost (admissible).
    fn estimate(&mut self, from: &str, to: &str) -> Result<f64, GraphError>;
}
