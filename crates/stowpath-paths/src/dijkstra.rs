use std::collections::{BinaryHeap, HashMap};

use crate::error::PathError;
use crate::finder::{PathFinder, PathResult, QueueEntry, check_endpoints, reconstruct};
use crate::traits::WeightedGraph;

/// Single-pair shortest paths with Dijkstra's algorithm.
///
/// `Dijkstra` owns its open list, cost and predecessor maps, and neighbor
/// buffer, and reuses them across queries. Edge costs must be non-negative.
#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    open: BinaryHeap<QueueEntry>,
    best: HashMap<String, f64>,
    came_from: HashMap<String, String>,
    nbuf: Vec<String>,
}

impl Dijkstra {
    pub fn new() -> Self {
        Self::default()
    }

    fn search<G: WeightedGraph + ?Sized>(
        &mut self,
        graph: &mut G,
        source: &str,
        dest: &str,
        nbuf: &mut Vec<String>,
    ) -> Result<usize, PathError> {
        let mut settled = 0usize;

        self.best.insert(source.to_string(), 0.0);
        self.open.push(QueueEntry {
            priority: 0.0,
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
                let candidate = cost + graph.move_cost(&node, &nb)?;
                if self.best.get(&nb).is_none_or(|&prev| candidate < prev) {
                    self.best.insert(nb.clone(), candidate);
                    self.came_from.insert(nb.clone(), node.clone());
                    self.open.push(QueueEntry {
                        priority: candidate,
                        cost: candidate,
                        node: nb,
                    });
                }
            }
        }

        Ok(settled)
    }
}

impl<G: WeightedGraph + ?Sized> PathFinder<G> for Dijkstra {
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
            log::debug!("dijkstra {source} -> {dest}: unreachable after {settled} nodes");
            return Ok(PathResult::unreachable());
        };
        let path = reconstruct(&self.came_from, dest);
        log::trace!(
            "dijkstra {source} -> {dest}: cost {cost}, {} hops, {settled} nodes settled",
            path.len() - 1
        );
        Ok(PathResult::new(path, cost))
    }
}
