//! Connectivity graphs, movement costs and shortest paths over warehouse
//! layouts.
//!
//! The three pieces compose as follows:
//!
//! - a [`ConnectivityGraph`] records which moves between layout locations
//!   are allowed; a [`ConnectivityBuilder`] such as [`RandomConnectivity`]
//!   fills it in;
//! - a [`MoveCostCalculator`] attached to the graph prices each move and
//!   memoizes the result ([`CachingCostCalculator`] over a
//!   [`MoveCostModel`] like [`TimeBasedCost`]);
//! - a [`PathFinder`] ([`Dijkstra`], or [`Astar`]) asks the graph for
//!   neighbors and edge costs and returns the cheapest [`PathResult`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Graph`] | endpoint checks, neighbor enumeration |
//! | [`WeightedGraph`] : [`Graph`] | Dijkstra |
//! | [`AstarGraph`] : [`WeightedGraph`] | A* |
//!
//! ```
//! use stowpath_core::{Bounds, Coord3, Layout, LocationRecord};
//! use stowpath_paths::{
//!     ConnectivityGraph, Dijkstra, PathFinder, RandomConnectivity, TimeBasedCostCalculator,
//! };
//!
//! let layout = Layout::new((0..5).map(|i| {
//!     let min = Coord3::new(i as f64, 0.0, 0.0);
//!     LocationRecord::new(format!("L{i}"), Bounds::new(min, min + Coord3::new(1.0, 1.0, 1.0)))
//!         .build()
//!         .unwrap()
//! }))
//! .unwrap();
//!
//! let mut graph = ConnectivityGraph::build(&layout, &mut RandomConnectivity::seeded(1));
//! graph.set_move_cost_calculator(TimeBasedCostCalculator::time_based());
//!
//! let result = Dijkstra::new().compute_optimal_path(&mut graph, "L0", "L4").unwrap();
//! assert!(result.is_reachable());
//! assert!(result.cost >= 4.0);
//! ```

mod astar;
mod builder;
mod cost;
mod dijkstra;
mod error;
mod finder;
mod graph;
mod traits;

#[cfg(test)]
mod testutil;

pub use astar::Astar;
pub use builder::{ConnectivityBuilder, RandomConnectivity};
pub use cost::{
    CachingCostCalculator, CostKey, MoveCostCalculator, MoveCostModel, TimeBasedCost,
    TimeBasedCostCalculator,
};
pub use dijkstra::Dijkstra;
pub use error::{CostError, GraphError, PathError};
pub use finder::{PathAlgorithm, PathFinder, PathResult};
pub use graph::ConnectivityGraph;
pub use traits::{AstarGraph, Graph, WeightedGraph};
