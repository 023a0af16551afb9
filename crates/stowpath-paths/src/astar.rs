use std::collections::{BinaryHeap, HashMap};

use crate::error::PathError;
use crate::finder::{PathFinder, PathResult, QueueEntry, check_endpoints, reconstruct};
use crate::traits::AstarGraph;

/// Single-pair shortest paths with A*.
///
/// Entries are ordered by cost so far plus [`AstarGraph::estimate`] towards
/// the destination. With a consistent estimate (such as the time-based
/// model on a graph costed by the same model) the first time the
/// destination is popped its cost is optimal, matching [`Dijkstra`](crate::Dijkstra)
/// while settling fewer nodes.
#[derive(Debug, Clone, Default)]
pub struct Astar {
    open: BinaryHeap<QueueEntry>,
    best: HashMap<String, f64>,
    came_from: HashMap<String, String>,
    nbuf: Vec<String>,
}

impl Astar {
    pub fn new() -> Self {
        Self::default()
    }

    fn search<G: AstarGraph + ?Sized>(
        &mut self,
        graph: &mut G,
        source: &str,
        dest: &str,
        nbuf: &mut Vec<String>,
    ) -> Result<usize, PathError> {
        let mut settled = 0usize;

        self.best.insert(source.to_string(), 0.0);
        self.open.push(QueueEntry {
            priority: graph.estimate(source, dest)?,
            cost: 0.0,
            node: source.to_string(),
        });

        while let Some(QueueEntry { cost, node, .. }) = self.open.pop() {
            if node == dest {
                break;
            }

            // Skip stale entries.
            if self.best.get(&node).is_some_and(|&best| cost > best) {
                continue;
            }
            settled += 1;

            nbuf.clear();
            graph.neighbors(&node, nbuf);

            for nb in nbuf.drain(..) {
                let tentative = cost + graph.move_cost(&node, &nb)?;
                if self.best.get(&nb).is_some_and(|&prev| tentative >= prev) {
                    continue;
                }
                let priority = tentative + graph.estimate(&nb, dest)?;
                self.best.insert(nb.clone(), tentative);
                self.came_from.insert(nb.clone(), node.clone());
                self.open.push(QueueEntry {
                    priority,
                    cost: tentative,
                    node: nb,
                });
            }
        }

        Ok(settled)
    }
}

impl<G: AstarGraph + ?Sized> PathFinder<G> for Astar {
    fn compute_optimal_path(
        &mut self,
        graph: &mut G,
        source: &str,
        dest: &str,
    ) -> Result<PathResult, PathError> {
        check_endpoints(graph, source, dest)?;

        self.open.clear();
        self.best.clear();
        self.came_from.clear();

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let searched = self.search(graph, source, dest, &mut nbuf);
        self.nbuf = nbuf;
        let settled = searched?;

        let Some(&cost) = self.best.get(dest) else {
            log::debug!("astar {source} -> {dest}: unreachable after {settled} nodes");
            return Ok(PathResult::unreachable());
        };
        let path = reconstruct(&self.came_from, dest);
        log::trace!("astar {source} -> {dest}: cost {cost}, {settled} nodes settled");
        Ok(PathResult::new(path, cost))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RandomConnectivity;
    use crate::cost::TimeBasedCostCalculator;
    use crate::dijkstra::Dijkstra;
    use crate::graph::ConnectivityGraph;
    use crate::testutil::line_layout;
    use stowpath_core::{Bounds, Coord3, Layout, LocationRecord};

    /// A 4x3 grid of unit cubes on two shelves.
    fn grid_layout() -> Layout {
        let mut locs = Vec::new();
        for col in 0..4 {
            for row in 0..3 {
                for shelf in 0..2 {
                    let min = Coord3::new(col as f64 * 2.0, row as f64 * 3.0, shelf as f64);
                    let max = min + Coord3::new(1.0, 1.0, 1.0);
                    locs.push(
                        LocationRecord::new(format!("L{col}{row}{shelf}"), Bounds::new(min, max))
                            .with_slot(col, shelf)
                            .with_rack_face(format!("F{row}"))
                            .build()
                            .unwrap(),
                    );
                }
            }
        }
        Layout::new(locs).unwrap()
    }

    #[test]
    fn agrees_with_dijkstra_on_random_graphs() {
        let layout = grid_layout();
        for seed in 0..5 {
            let mut g = ConnectivityGraph::build(&layout, &mut RandomConnectivity::seeded(seed));
            g.set_move_cost_calculator(TimeBasedCostCalculator::time_based());
            let mut dijkstra = Dijkstra::new();
            let mut astar = Astar::new();
            for (from, to) in [("L000", "L321"), ("L211", "L010"), ("L300", "L301")] {
                let d = dijkstra.compute_optimal_path(&mut g, from, to).unwrap();
                let a = astar.compute_optimal_path(&mut g, from, to).unwrap();
                assert!((d.cost - a.cost).abs() < 1e-9, "seed {seed}: {from} -> {to}");
                assert_eq!(a.source(), Some(from));
                assert_eq!(a.destination(), Some(to));
            }
        }
    }

    #[test]
    fn straight_line_is_found() {
        let layout = line_layout(&["A", "B", "C", "D"]);
        let mut g = ConnectivityGraph::new(&layout);
        g.add_edge("A", "B", true);
        g.add_edge("B", "C", true);
        g.add_edge("C", "D", true);
        g.add_edge("A", "D", false);
        g.set_move_cost_calculator(TimeBasedCostCalculator::time_based());
        let r = Astar::new().compute_optimal_path(&mut g, "A", "D").unwrap();
        assert_eq!(r.cost, 3.0);
        assert!(r.path == ["A", "D"] || r.path == ["A", "B", "C", "D"]);
    }

    #[test]
    fn unreachable_and_unknown() {
        let layout = line_layout(&["A", "B", "C"]);
        let mut g = ConnectivityGraph::new(&layout);
        g.add_edge("A", "B", true);
        g.add_node("C");
        g.set_move_cost_calculator(TimeBasedCostCalculator::time_based());
        let mut astar = Astar::new();
        let r = astar.compute_optimal_path(&mut g, "A", "C").unwrap();
        assert!(!r.is_reachable());
        assert_eq!(
            astar.compute_optimal_path(&mut g, "A", "Q"),
            Err(PathError::UnknownNode("Q".into()))
        );
    }
}
