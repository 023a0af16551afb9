//! **stowpath-io**: reading warehouse layouts and task lists.
//!
//! Turns the JSON documents a warehouse exports into the validated
//! [`Layout`](stowpath_core::Layout) and [`Task`] values the pathfinding
//! crates consume.

mod error;
pub mod loader;
pub mod tasks;

pub use error::LoadError;
pub use loader::{JsonLayoutLoader, LayoutLoader, layout_from_value, parse_layout};
pub use tasks::{
    Task, TaskColumns, TaskFormat, load_tasks, load_tasks_as, parse_tasks, parse_tasks_csv,
};
