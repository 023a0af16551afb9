//! The [`Layout`]: every location of a warehouse keyed by name, plus
//! grouping indices by rack face and by (rack face, column).

use std::collections::BTreeMap;

use crate::location::Location;

/// Errors raised while assembling a [`Layout`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("duplicate location name: {0}")]
    DuplicateLocation(String),
}

/// Key of the per-column index.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnKey {
    pub rack_face: String,
    pub column: i32,
}

impl ColumnKey {
    pub fn new(rack_face: impl Into<String>, column: i32) -> Self {
        Self {
            rack_face: rack_face.into(),
            column,
        }
    }
}

/// All locations of a warehouse, read-only once built.
///
/// Locations are stored in name order so that iteration (and therefore any
/// seeded graph construction) is deterministic. The two indices list member
/// names in the order the locations were supplied; they are built together
/// with the location map and never updated on their own.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    locations: BTreeMap<String, Location>,
    keys_by_rack_face: BTreeMap<String, Vec<String>>,
    keys_by_column: BTreeMap<ColumnKey, Vec<String>>,
}

impl Layout {
    /// Build a layout, failing on the first repeated name.
    pub fn new(locations: impl IntoIterator<Item = Location>) -> Result<Self, LayoutError> {
        let mut layout = Self::default();
        for loc in locations {
            if layout.locations.contains_key(loc.name()) {
                return Err(LayoutError::DuplicateLocation(loc.name().to_string()));
            }
            layout
                .keys_by_rack_face
                .entry(loc.rack_face().to_string())
                .or_default()
                .push(loc.name().to_string());
            layout
                .keys_by_column
                .entry(ColumnKey::new(loc.rack_face(), loc.column()))
                .or_default()
                .push(loc.name().to_string());
            layout.locations.insert(loc.name().to_string(), loc);
        }
        Ok(layout)
    }

    /// Look up a location by name.
    pub fn get_location(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locations.contains_key(name)
    }

    /// Location names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Names of the locations on `rack_face`, in input order.
    pub fn keys_by_rack_face(&self, rack_face: &str) -> &[String] {
        self.keys_by_rack_face
            .get(rack_face)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Names of the locations in `column` of `rack_face`, in input order.
    pub fn keys_by_column(&self, rack_face: &str, column: i32) -> &[String] {
        self.keys_by_column
            .get(&ColumnKey::new(rack_face, column))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn rack_faces(&self) -> impl Iterator<Item = &str> {
        self.keys_by_rack_face.keys().map(String::as_str)
    }

    pub fn columns(&self) -> impl Iterator<Item = &ColumnKey> {
        self.keys_by_column.keys()
    }
}
