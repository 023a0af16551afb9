//! Assign storage tasks to their cheapest reachable destination.
//!
//! ```bash
//! # Everything from a run configuration
//! stowpath-assign --config run.json
//!
//! # No configuration file: defaults for connectivity, costs and finder
//! stowpath-assign --layout layout.json --tasks tasks.json --seed 7 --report out.json
//! ```
//!
//! Set `RUST_LOG=debug` for per-query search statistics.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use stowpath_demos::{PathfinderConfig, RunConfig, RunError, run, write_report};

#[derive(Parser)]
#[command(name = "stowpath-assign")]
#[command(author, version, about)]
struct Cli {
    /// Run configuration (JSON)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Layout document; overrides the configuration
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Task list; overrides the configuration
    #[arg(long)]
    tasks: Option<PathBuf>,

    /// Write the assignments here as JSON
    #[arg(long, short)]
    report: Option<PathBuf>,

    /// Seed for the random connectivity graph
    #[arg(long)]
    seed: Option<u64>,

    /// Path finder to route with
    #[arg(long, value_enum)]
    pathfinder: Option<Finder>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Finder {
    Dijkstra,
    Astar,
}

impl From<Finder> for PathfinderConfig {
    fn from(f: Finder) -> Self {
        match f {
            Finder::Dijkstra => PathfinderConfig::Dijkstra,
            Finder::Astar => PathfinderConfig::Astar,
        }
    }
}

impl Cli {
    fn into_config(self) -> Result<RunConfig, String> {
        let mut config = match (self.config, self.layout.clone(), self.tasks.clone()) {
            (Some(path), _, _) => RunConfig::load(path).map_err(|e| e.to_string())?,
            (None, Some(layout), Some(tasks)) => RunConfig::new(layout, tasks),
            (None, _, _) => {
                return Err("either --config or both --layout and --tasks are required".into());
            }
        };
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if let Some(tasks) = self.tasks {
            config.tasks = tasks;
        }
        if let Some(report) = self.report {
            config.report = Some(report);
        }
        if let Some(seed) = self.seed {
            config.connectivity.set_seed(seed);
        }
        if let Some(finder) = self.pathfinder {
            config.pathfinder = finder.into();
        }
        Ok(config)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = execute(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn execute(config: &RunConfig) -> Result<(), RunError> {
    let assignments = run(config)?;
    let assigned = assignments.iter().filter(|a| a.is_assigned()).count();
    log::info!("Assigned {assigned} of {} tasks", assignments.len());

    match &config.report {
        Some(path) => write_report(path, &assignments),
        None => {
            for a in &assignments {
                match (&a.target, a.cost) {
                    (Some(target), Some(cost)) => {
                        println!("{}\t{target}\t{cost:.3}", a.task.location)
                    }
                    _ => println!("{}\t-", a.task.location),
                }
            }
            Ok(())
        }
    }
}
