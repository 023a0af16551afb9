//! Choosing a destination for each task.

use serde::{Deserialize, Serialize};
use stowpath_io::Task;
use stowpath_paths::{PathError, PathFinder, PathResult};

/// The outcome of assigning one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub task: Task,
    /// Cheapest reachable candidate, `None` if no candidate is reachable.
    pub target: Option<String>,
    /// Route from the task location to `target`, empty without a target.
    pub path: Vec<String>,
    pub cost: Option<f64>,
}

impl Assignment {
    fn unassigned(task: &Task) -> Self {
        Self {
            task: task.clone(),
            target: None,
            path: Vec::new(),
            cost: None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.target.is_some()
    }
}

/// Route from the task's location to every candidate and keep the cheapest.
///
/// Unreachable candidates are skipped. On equal costs the earlier candidate
/// wins. A candidate or source that is not a graph node fails the whole task
/// with [`PathError::UnknownNode`].
pub fn assign_task<G, F>(finder: &mut F, graph: &mut G, task: &Task) -> Result<Assignment, PathError>
where
    G: ?Sized,
    F: PathFinder<G> + ?Sized,
{
    let mut best: Option<(&str, PathResult)> = None;
    for candidate in &task.candidates {
        let result = finder.compute_optimal_path(graph, &task.location, candidate)?;
        if !result.is_reachable() {
            log::debug!("{candidate} is unreachable from {}", task.location);
            continue;
        }
        if best.as_ref().is_none_or(|(_, b)| result.cost < b.cost) {
            best = Some((candidate.as_str(), result));
        }
    }

    Ok(match best {
        Some((target, result)) => Assignment {
            task: task.clone(),
            target: Some(target.to_string()),
            cost: Some(result.cost),
            path: result.path,
        },
        None => Assignment::unassigned(task),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stowpath_core::{Bounds, Coord3, Layout, LocationRecord};
    use stowpath_paths::{ConnectivityGraph, PathAlgorithm, TimeBasedCostCalculator};

    /// Unit cubes at the given x offsets on one rack face.
    fn layout(at: &[(&str, f64)]) -> Layout {
        Layout::new(at.iter().map(|&(name, x)| {
            LocationRecord::new(
                name,
                Bounds::new(Coord3::new(x, 0.0, 0.0), Coord3::new(x + 1.0, 1.0, 1.0)),
            )
            .with_rack_face("R")
            .build()
            .unwrap()
        }))
        .unwrap()
    }

    fn graph(layout: &Layout) -> ConnectivityGraph<'_> {
        let mut g = ConnectivityGraph::new(layout);
        for (a, b) in [("S", "near"), ("S", "far"), ("far", "near")] {
            g.add_edge(a, b, true);
        }
        g.add_node("island");
        g.set_move_cost_calculator(TimeBasedCostCalculator::time_based());
        g
    }

    #[test]
    fn picks_cheapest_reachable_candidate() {
        let layout = layout(&[("S", 0.0), ("near", 2.0), ("far", 10.0), ("island", 5.0)]);
        let mut g = graph(&layout);
        let task = Task::new("S", ["far", "island", "near"]);
        for mut finder in [PathAlgorithm::dijkstra(), PathAlgorithm::astar()] {
            let a = assign_task(&mut finder, &mut g, &task).unwrap();
            assert_eq!(a.target.as_deref(), Some("near"));
            assert_eq!(a.path, ["S", "near"]);
            assert_eq!(a.cost, Some(2.0));
        }
    }

    #[test]
    fn nothing_reachable_leaves_task_unassigned() {
        let layout = layout(&[("S", 0.0), ("near", 2.0), ("far", 10.0), ("island", 5.0)]);
        let mut g = graph(&layout);
        let a = assign_task(&mut PathAlgorithm::default(), &mut g, &Task::new("S", ["island"]))
            .unwrap();
        assert!(!a.is_assigned());
        assert!(a.path.is_empty());
        assert_eq!(a.cost, None);

        let none = assign_task(
            &mut PathAlgorithm::default(),
            &mut g,
            &Task::new("S", Vec::<String>::new()),
        )
        .unwrap();
        assert!(!none.is_assigned());
    }

    #[test]
    fn ties_keep_the_first_candidate() {
        let layout = layout(&[("left", -3.0), ("S", 0.0), ("right", 3.0)]);
        let mut g = ConnectivityGraph::new(&layout);
        g.add_edge("S", "left", true);
        g.add_edge("S", "right", true);
        g.set_move_cost_calculator(TimeBasedCostCalculator::time_based());
        let a = assign_task(
            &mut PathAlgorithm::default(),
            &mut g,
            &Task::new("S", ["right", "left"]),
        )
        .unwrap();
        assert_eq!(a.target.as_deref(), Some("right"));
    }

    #[test]
    fn unknown_candidate_is_an_error() {
        let layout = layout(&[("S", 0.0), ("near", 2.0), ("far", 10.0), ("island", 5.0)]);
        let mut g = graph(&layout);
        let err = assign_task(
            &mut PathAlgorithm::default(),
            &mut g,
            &Task::new("S", ["near", "ghost"]),
        )
        .unwrap_err();
        assert_eq!(err, PathError::UnknownNode("ghost".to_string()));
    }
}
