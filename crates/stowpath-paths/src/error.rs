use stowpath_core::Axis;

/// Errors raised by cost models and calculators.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CostError {
    /// A location has no usable (finite) centroid.
    #[error("location {0} has no finite centroid")]
    MissingCentroid(String),
    /// A per-axis speed is zero, negative or not finite.
    #[error("speed along {axis} must be positive and finite, got {speed}")]
    InvalidSpeed { axis: Axis, speed: f64 },
}

/// Errors raised by connectivity-graph cost queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("no move cost calculator attached to the graph")]
    MissingCostCalculator,
    #[error("no edge from {from} to {to}")]
    EdgeNotFound { from: String, to: String },
    /// A graph node has no matching location in the layout.
    #[error("node {0} does not resolve to a layout location")]
    UnknownLocation(String),
    #[error(transparent)]
    Cost(#[from] CostError),
}

/// Errors raised by path finders.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// The source or destination is not a node of the graph.
    #[error("node not in graph: {0}")]
    UnknownNode(String),
    #[error(transparent)]
    Graph(#[from] GraphError),
}
