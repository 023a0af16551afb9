//! The [`ConnectivityGraph`]: which moves between layout locations are
//! allowed, and what they cost.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use stowpath_core::{Layout, Location};

use crate::builder::ConnectivityBuilder;
use crate::cost::MoveCostCalculator;
use crate::error::GraphError;
use crate::traits::{AstarGraph, Graph, WeightedGraph};

/// Adjacency over location names, backed by a [`Layout`].
///
/// Edges are directed; a bidirectional edge is stored as two entries. A
/// name becomes a node once it is the source of an edge (or is added with
/// [`add_node`](Self::add_node)); the target of a one-way edge with no
/// outgoing edges of its own is not a node. Costs are delegated to an
/// attached [`MoveCostCalculator`].
///
/// The graph is filled once by a [`ConnectivityBuilder`] and then only read
/// during pathfinding, apart from the calculator's cache.
pub struct ConnectivityGraph<'a> {
    layout: &'a Layout,
    adjacency: BTreeMap<String, BTreeSet<String>>,
    calculator: Option<Box<dyn MoveCostCalculator>>,
}

impl<'a> ConnectivityGraph<'a> {
    /// An empty graph over `layout`.
    pub fn new(layout: &'a Layout) -> Self {
        Self {
            layout,
            adjacency: BTreeMap::new(),
            calculator: None,
        }
    }

    /// Create a graph over `layout` and populate it with `builder`.
    pub fn build(layout: &'a Layout, builder: &mut impl ConnectivityBuilder) -> Self {
        let mut graph = Self::new(layout);
        builder.construct_graph(&mut graph);
        graph
    }

    /// The layout node names resolve against.
    pub fn layout(&self) -> &'a Layout {
        self.layout
    }

    /// Register `node` without adding any edge.
    pub fn add_node(&mut self, node: &str) {
        if !self.adjacency.contains_key(node) {
            self.adjacency.insert(node.to_string(), BTreeSet::new());
        }
    }

    /// Add `to` as a neighbor of `from`, and `from` of `to` when
    /// `bidirectional`. Self-loops are ignored; repeats are harmless.
    pub fn add_edge(&mut self, from: &str, to: &str, bidirectional: bool) {
        if from == to {
            return;
        }
        self.adjacency
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());
        if bidirectional {
            self.adjacency
                .entry(to.to_string())
                .or_default()
                .insert(from.to_string());
        }
    }

    /// Neighbor names of `node`; empty for unknown nodes.
    pub fn get_neighbors(&self, node: &str) -> Vec<String> {
        self.adjacency
            .get(node)
            .map(|n| n.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Whether `to` is currently a neighbor of `from`.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.adjacency.get(from).is_some_and(|n| n.contains(to))
    }

    pub fn has_node(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Node names in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// `(node count, directed edge count)`. A bidirectional edge counts twice.
    pub fn compute_graph_size(&self) -> (usize, usize) {
        let edges = self.adjacency.values().map(BTreeSet::len).sum();
        (self.adjacency.len(), edges)
    }

    /// Cost of the edge `from -> to` according to the attached calculator.
    pub fn calculate_move_cost(&mut self, from: &str, to: &str) -> Result<f64, GraphError> {
        let Some(calculator) = self.calculator.as_mut() else {
            return Err(GraphError::MissingCostCalculator);
        };
        if !self.adjacency.get(from).is_some_and(|n| n.contains(to)) {
            return Err(GraphError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        let a = resolve(self.layout, from)?;
        let b = resolve(self.layout, to)?;
        Ok(calculator.get_cost(a, b)?)
    }

    /// Attach `calculator`, returning the one it replaces.
    pub fn set_move_cost_calculator(
        &mut self,
        calculator: impl MoveCostCalculator + 'static,
    ) -> Option<Box<dyn MoveCostCalculator>> {
        self.calculator.replace(Box::new(calculator))
    }

    pub fn move_cost_calculator(&self) -> Option<&(dyn MoveCostCalculator + 'static)> {
        self.calculator.as_deref()
    }

    pub fn move_cost_calculator_mut(&mut self) -> Option<&mut (dyn MoveCostCalculator + 'static)> {
        self.calculator.as_deref_mut()
    }

    /// Detach the calculator, leaving the graph without one.
    pub fn take_move_cost_calculator(&mut self) -> Option<Box<dyn MoveCostCalculator>> {
        self.calculator.take()
    }
}

fn resolve<'l>(layout: &'l Layout, name: &str) -> Result<&'l Location, GraphError> {
    layout
        .get_location(name)
        .ok_or_else(|| GraphError::UnknownLocation(name.to_string()))
}

impl fmt::Debug for ConnectivityGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (nodes, edges) = self.compute_graph_size();
        f.debug_struct("ConnectivityGraph")
            .field("nodes", &nodes)
            .field("edges", &edges)
            .field("has_calculator", &self.calculator.is_some())
            .finish()
    }
}

impl Graph for ConnectivityGraph<'_> {
    fn has_node(&self, node: &str) -> bool {
        ConnectivityGraph::has_node(self, node)
    }

    fn neighbors(&self, node: &str, buf: &mut Vec<String>) {
        if let Some(n) = self.adjacency.get(node) {
            buf.extend(n.iter().cloned());
        }
    }
}

impl WeightedGraph for ConnectivityGraph<'_> {
    fn move_cost(&mut self, from: &str, to: &str) -> Result<f64, GraphError> {
        self.calculate_move_cost(from, to)
    }
}

impl AstarGraph for ConnectivityGraph<'_> {
    fn estimate(&mut self, from: &str, to: &str) -> Result<f64, GraphError> {
        let Some(calculator) = self.calculator.as_ref() else {
            return Err(GraphError::MissingCostCalculator);
        };
        let a = resolve(self.layout, from)?;
        let b = resolve(self.layout, to)?;
        Ok(calculator.estimate(a, b)?)
    }
}
