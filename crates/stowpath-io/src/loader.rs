//! Layout loading from the `rack_face_areas` JSON document.
//!
//! ```json
//! {
//!   "rack_face_areas": [
//!     {
//!       "id": "face-1",
//!       "name": "A11 2",
//!       "locations": [
//!         {"id": "loc-001", "name": "A11-120-00", "type": "rack", "front": "POSITIVE_X",
//!          "column": 0, "shelf": 0,
//!          "bounds": {"min": {"x": 369.9, "y": 125.35, "z": 0.05},
//!                     "max": {"x": 371.9, "y": 126.075, "z": 1.25}}}
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Each location inherits any field it does not set itself from its rack
//! face area, and belongs to the rack face named by the area. Locations that
//! fail validation and repeated names are skipped with a warning.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use stowpath_core::{Layout, Location, LocationError, LocationRecord};

use crate::error::{LoadError, json_type, read_file};

/// A source of validated layouts.
pub trait LayoutLoader {
    fn load(&self) -> Result<Layout, LoadError>;
}

/// Loads a layout from a JSON file.
#[derive(Clone, Debug)]
pub struct JsonLayoutLoader {
    path: PathBuf,
}

impl JsonLayoutLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LayoutLoader for JsonLayoutLoader {
    fn load(&self) -> Result<Layout, LoadError> {
        let text = read_file(&self.path)?;
        log::info!("Loading layout from {}", self.path.display());
        parse_layout(&text)
    }
}

/// Parse a layout document from a string.
pub fn parse_layout(json: &str) -> Result<Layout, LoadError> {
    let doc: Value = serde_json::from_str(json)?;
    layout_from_value(doc)
}

/// Build a layout from an already-parsed document.
pub fn layout_from_value(doc: Value) -> Result<Layout, LoadError> {
    let mut root = match doc {
        Value::Object(root) => root,
        other => {
            return Err(LoadError::InvalidRoot {
                expected: "object",
                got: json_type(&other),
            });
        }
    };

    let areas = match root.remove("rack_face_areas") {
        Some(Value::Array(areas)) => areas,
        Some(other) => {
            log::warn!("Ignoring rack_face_areas of type {}", json_type(&other));
            Vec::new()
        }
        None => Vec::new(),
    };

    let mut seen = HashSet::new();
    let mut locations = Vec::new();
    let mut skipped = 0usize;

    for area in areas {
        let mut area = match area {
            Value::Object(area) => area,
            other => {
                log::warn!("Skipped rack face area of type {}", json_type(&other));
                continue;
            }
        };
        let area_name = area
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        log::info!("Parsing rack face area {area_name}");

        let entries = match area.remove("locations") {
            Some(Value::Array(entries)) => entries,
            _ => Vec::new(),
        };

        for entry in entries {
            let label = entry
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("<unnamed>")
                .to_string();
            let location = match parse_location(&area, &area_name, entry) {
                Ok(location) => location,
                Err(e) => {
                    log::warn!("Skipped invalid location {label}: {e}");
                    skipped += 1;
                    continue;
                }
            };
            if !seen.insert(location.name().to_string()) {
                log::warn!("Duplicate location: {}", location.name());
                skipped += 1;
                continue;
            }
            locations.push(location);
        }
    }

    log::info!("Loaded {} locations ({skipped} skipped)", locations.len());
    Ok(Layout::new(locations)?)
}

/// Why a single location entry was skipped.
#[derive(Debug, thiserror::Error)]
enum EntryError {
    #[error("expected object, got {0}")]
    NotAnObject(&'static str),

    #[error(transparent)]
    Fields(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] LocationError),
}

/// Overlay `entry` on the area's fields, then validate.
fn parse_location(
    area: &Map<String, Value>,
    area_name: &str,
    entry: Value,
) -> Result<Location, EntryError> {
    let fields = match entry {
        Value::Object(fields) => fields,
        other => return Err(EntryError::NotAnObject(json_type(&other))),
    };
    let mut merged = area.clone();
    merged.extend(fields);
    if !merged.contains_key("rack_face") && !merged.contains_key("rackface") {
        merged.insert("rack_face".to_string(), Value::String(area_name.to_string()));
    }
    let record: LocationRecord = serde_json::from_value(Value::Object(merged))?;
    Ok(Location::from_record(record)?)
}
