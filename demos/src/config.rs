//! Run configuration for `stowpath-assign`.
//!
//! ```json
//! {
//!   "layout": "layout.json",
//!   "tasks": "tasks.json",
//!   "report": "assignments.json",
//!   "connectivity": {"strategy": "random", "seed": 7, "passes": 4},
//!   "move_cost": {"model": "time_based", "speed_x": 1.0, "speed_y": 1.0, "speed_z": 0.5},
//!   "pathfinder": "dijkstra"
//! }
//! ```
//!
//! Everything except `layout` and `tasks` may be left out. A task file
//! ending in `.csv` is read as a table unless `task_format` says otherwise;
//! `location_column` and `reserve_column` name its columns.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stowpath_io::{TaskColumns, TaskFormat};
use stowpath_paths::{
    CachingCostCalculator, CostError, PathAlgorithm, RandomConnectivity, TimeBasedCost,
    TimeBasedCostCalculator,
};

use crate::RunError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Layout document to load.
    pub layout: PathBuf,
    /// Task list to assign.
    pub tasks: PathBuf,
    /// Encoding of `tasks`; guessed from its extension when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_format: Option<TaskFormat>,
    #[serde(default = "default_location_column")]
    pub location_column: String,
    #[serde(default = "default_reserve_column")]
    pub reserve_column: String,
    /// Where to write the assignment report, if anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<PathBuf>,
    #[serde(default)]
    pub connectivity: ConnectivityConfig,
    #[serde(default)]
    pub move_cost: MoveCostConfig,
    #[serde(default)]
    pub pathfinder: PathfinderConfig,
}

impl RunConfig {
    /// A configuration with default connectivity, cost model and finder.
    pub fn new(layout: impl Into<PathBuf>, tasks: impl Into<PathBuf>) -> Self {
        Self {
            layout: layout.into(),
            tasks: tasks.into(),
            task_format: None,
            location_column: default_location_column(),
            reserve_column: default_reserve_column(),
            report: None,
            connectivity: ConnectivityConfig::default(),
            move_cost: MoveCostConfig::default(),
            pathfinder: PathfinderConfig::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read a configuration file. Relative layout, task and report paths are
    /// resolved against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RunError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RunError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_json(&text).map_err(|source| RunError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(base) = path.parent() {
            config.resolve_against(base);
        }
        Ok(config)
    }

    pub fn task_format(&self) -> TaskFormat {
        self.task_format.unwrap_or_else(|| TaskFormat::from_path(&self.tasks))
    }

    pub fn task_columns(&self) -> TaskColumns {
        TaskColumns::new(&self.location_column, &self.reserve_column)
    }

    fn resolve_against(&mut self, base: &Path) {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.layout);
        resolve(&mut self.tasks);
        if let Some(report) = &mut self.report {
            resolve(report);
        }
    }
}

fn default_location_column() -> String {
    TaskColumns::DEFAULT_LOCATION.to_string()
}

fn default_reserve_column() -> String {
    TaskColumns::DEFAULT_RESERVE.to_string()
}

/// How the connectivity graph is generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ConnectivityConfig {
    /// Shuffled chains over every location, see [`RandomConnectivity`].
    Random {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
        #[serde(default = "default_passes")]
        passes: usize,
    },
}

fn default_passes() -> usize {
    RandomConnectivity::DEFAULT_PASSES
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self::Random {
            seed: None,
            passes: default_passes(),
        }
    }
}

impl ConnectivityConfig {
    pub fn set_seed(&mut self, new_seed: u64) {
        match self {
            Self::Random { seed, .. } => *seed = Some(new_seed),
        }
    }

    pub fn builder(&self) -> RandomConnectivity {
        match *self {
            Self::Random { seed, passes } => RandomConnectivity::new(seed).with_passes(passes),
        }
    }
}

/// Which cost model prices each move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum MoveCostConfig {
    TimeBased {
        #[serde(default = "default_speed_x")]
        speed_x: f64,
        #[serde(default = "default_speed_y")]
        speed_y: f64,
        #[serde(default = "default_speed_z")]
        speed_z: f64,
    },
}

fn default_speed_x() -> f64 {
    TimeBasedCost::DEFAULT_SPEED_X
}

fn default_speed_y() -> f64 {
    TimeBasedCost::DEFAULT_SPEED_Y
}

fn default_speed_z() -> f64 {
    TimeBasedCost::DEFAULT_SPEED_Z
}

impl Default for MoveCostConfig {
    fn default() -> Self {
        Self::TimeBased {
            speed_x: default_speed_x(),
            speed_y: default_speed_y(),
            speed_z: default_speed_z(),
        }
    }
}

impl MoveCostConfig {
    /// A fresh calculator with an empty cache. Fails on non-positive speeds.
    pub fn calculator(&self) -> Result<TimeBasedCostCalculator, CostError> {
        match *self {
            Self::TimeBased {
                speed_x,
                speed_y,
                speed_z,
            } => Ok(CachingCostCalculator::new(TimeBasedCost::new(
                speed_x, speed_y, speed_z,
            )?)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathfinderConfig {
    #[default]
    Dijkstra,
    Astar,
}

impl PathfinderConfig {
    pub fn finder(self) -> PathAlgorithm {
        match self {
            Self::Dijkstra => PathAlgorithm::dijkstra(),
            Self::Astar => PathAlgorithm::astar(),
        }
    }
}
