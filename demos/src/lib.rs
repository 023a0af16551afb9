//! Batch task assignment over a warehouse layout.
//!
//! Loads a layout and a task list, connects the locations, prices moves with
//! the configured cost model and routes every task to its cheapest reachable
//! candidate. Used by the `stowpath-assign` binary.

pub mod assignment;
pub mod config;

use std::path::{Path, PathBuf};

use stowpath_io::{JsonLayoutLoader, LayoutLoader, LoadError, load_tasks_as};
use stowpath_paths::{ConnectivityGraph, CostError, PathError};

pub use assignment::{Assignment, assign_task};
pub use config::{ConnectivityConfig, MoveCostConfig, PathfinderConfig, RunConfig};

/// Anything that stops a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid run configuration {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Cost(#[from] CostError),

    #[error("task at {location}: {source}")]
    Task {
        location: String,
        #[source]
        source: PathError,
    },

    #[error("failed to encode report: {0}")]
    Report(#[source] serde_json::Error),
}

/// Assign every task described by `config`.
pub fn run(config: &RunConfig) -> Result<Vec<Assignment>, RunError> {
    let layout = JsonLayoutLoader::new(&config.layout).load()?;
    let tasks = load_tasks_as(&config.tasks, config.task_format(), &config.task_columns())?;

    let mut graph = ConnectivityGraph::build(&layout, &mut config.connectivity.builder());
    graph.set_move_cost_calculator(config.move_cost.calculator()?);
    let mut finder = config.pathfinder.finder();
    log::info!("Routing {} tasks with {}", tasks.len(), finder.name());

    let mut assignments = Vec::with_capacity(tasks.len());
    for task in &tasks {
        let assignment =
            assign_task(&mut finder, &mut graph, task).map_err(|source| RunError::Task {
                location: task.location.clone(),
                source,
            })?;
        match (&assignment.target, assignment.cost) {
            (Some(target), Some(cost)) => log::info!(
                "{} -> {target}: cost {cost:.3} over {} hops",
                task.location,
                assignment.path.len().saturating_sub(1)
            ),
            _ => log::warn!("{}: no reachable candidate", task.location),
        }
        assignments.push(assignment);
    }

    if let Some(calc) = graph.move_cost_calculator() {
        log::debug!("{} move costs cached", calc.cache_len());
    }
    Ok(assignments)
}

/// Write `assignments` as a pretty-printed JSON array.
pub fn write_report(path: &Path, assignments: &[Assignment]) -> Result<(), RunError> {
    let json = serde_json::to_string_pretty(assignments).map_err(RunError::Report)?;
    std::fs::write(path, json).map_err(|source| RunError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Wrote {} assignments to {}", assignments.len(), path.display());
    Ok(())
}
