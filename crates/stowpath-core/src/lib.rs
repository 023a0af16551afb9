//! **stowpath-core**: warehouse location geometry and layout types.
//!
//! This crate provides the data the rest of the *stowpath* workspace reads:
//! 3D coordinates and bounding boxes, validated [`Location`]s with their
//! derived centroid and access point, and the [`Layout`] that indexes them.

pub mod geom;
pub mod layout;
pub mod location;

pub use geom::{Axis, Bounds, Coord3};
pub use layout::{ColumnKey, Layout, LayoutError};
pub use location::{Front, Location, LocationError, LocationRecord};
