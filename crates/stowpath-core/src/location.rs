//! Warehouse locations: the [`Front`] orientation, the raw
//! [`LocationRecord`] and the validated, immutable [`Location`].

use std::fmt;
use std::str::FromStr;

use crate::geom::{Axis, Bounds, Coord3};

/// Errors raised while validating a [`LocationRecord`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// `front` is not one of the four recognized orientations.
    #[error("unsupported front direction: {0:?}")]
    UnsupportedFrontDirection(String),
    /// The record has an empty `name`.
    #[error("location name must not be empty")]
    EmptyName,
}

// ---------------------------------------------------------------------------
// Front
// ---------------------------------------------------------------------------

/// Which face of a location's bounding box is its access face.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Front {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
}

impl Front {
    pub const ALL: [Front; 4] = [
        Front::PositiveX,
        Front::NegativeX,
        Front::PositiveY,
        Front::NegativeY,
    ];

    /// Textual form used by layout documents.
    pub const fn as_str(self) -> &'static str {
        match self {
            Front::PositiveX => "POSITIVE_X",
            Front::NegativeX => "NEGATIVE_X",
            Front::PositiveY => "POSITIVE_Y",
            Front::NegativeY => "NEGATIVE_Y",
        }
    }

    /// The axis the access face is perpendicular to.
    pub const fn axis(self) -> Axis {
        match self {
            Front::PositiveX | Front::NegativeX => Axis::X,
            Front::PositiveY | Front::NegativeY => Axis::Y,
        }
    }

    /// Whether the face points along the positive direction of its axis.
    pub const fn is_positive(self) -> bool {
        matches!(self, Front::PositiveX | Front::PositiveY)
    }

    /// Project `centroid` onto this face of `bounds`.
    pub fn project(self, centroid: Coord3, bounds: Bounds) -> Coord3 {
        let axis = self.axis();
        let extreme = if self.is_positive() {
            bounds.max.get(axis)
        } else {
            bounds.min.get(axis)
        };
        centroid.with(axis, extreme)
    }
}

impl fmt::Display for Front {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Front {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Front::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| LocationError::UnsupportedFrontDirection(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Front {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Front {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// LocationRecord
// ---------------------------------------------------------------------------

/// Unvalidated location data, as read from a layout source.
///
/// `front` is kept as text; it only becomes a [`Front`] once the record is
/// turned into a [`Location`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationRecord {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    pub front: String,
    pub column: i32,
    pub shelf: i32,
    pub bounds: Bounds,
    #[cfg_attr(feature = "serde", serde(default, alias = "rackface"))]
    pub rack_face: String,
}

impl LocationRecord {
    /// A rack location facing `POSITIVE_X` at column 0, shelf 0.
    ///
    /// `id` defaults to `name`; use the `with_*` methods to fill the rest.
    pub fn new(name: impl Into<String>, bounds: Bounds) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            kind: "rack".to_string(),
            front: Front::PositiveX.as_str().to_string(),
            column: 0,
            shelf: 0,
            bounds,
            rack_face: String::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_front(mut self, front: impl Into<String>) -> Self {
        self.front = front.into();
        self
    }

    pub fn with_slot(mut self, column: i32, shelf: i32) -> Self {
        self.column = column;
        self.shelf = shelf;
        self
    }

    pub fn with_rack_face(mut self, rack_face: impl Into<String>) -> Self {
        self.rack_face = rack_face.into();
        self
    }

    /// Validate and derive. Shorthand for [`Location::from_record`].
    pub fn build(self) -> Result<Location, LocationError> {
        Location::from_record(self)
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A named, bounded warehouse slot.
///
/// Only obtainable through [`Location::from_record`], which validates the
/// record first and then derives `centroid` and `access_point` from
/// `bounds`. There are no setters, so the derived points always agree with
/// the bounds they came from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "LocationRecord"))]
pub struct Location {
    id: String,
    name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    kind: String,
    front: Front,
    column: i32,
    shelf: i32,
    bounds: Bounds,
    rack_face: String,
    centroid: Coord3,
    access_point: Coord3,
}

impl Location {
    /// Validate `record`, then compute the derived points.
    pub fn from_record(record: LocationRecord) -> Result<Self, LocationError> {
        if record.name.is_empty() {
            return Err(LocationError::EmptyName);
        }
        let front: Front = record.front.parse()?;

        let centroid = record.bounds.centroid();
        let access_point = front.project(centroid, record.bounds);

        Ok(Self {
            id: record.id,
            name: record.name,
            kind: record.kind,
            front,
            column: record.column,
            shelf: record.shelf,
            bounds: record.bounds,
            rack_face: record.rack_face,
            centroid,
            access_point,
        })
    }

    /// Unique name; the location's identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The `type` tag of the location (e.g. `"rack"`).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn front(&self) -> Front {
        self.front
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    pub fn shelf(&self) -> i32 {
        self.shelf
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Name of the rack face this location belongs to (may be empty).
    pub fn rack_face(&self) -> &str {
        &self.rack_face
    }

    /// Centre of the bounding box.
    pub fn centroid(&self) -> Coord3 {
        self.centroid
    }

    /// Centroid projected onto the face given by [`front`](Self::front).
    pub fn access_point(&self) -> Coord3 {
        self.access_point
    }
}

impl TryFrom<LocationRecord> for Location {
    type Error = LocationError;

    fn try_from(record: LocationRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.name, self.centroid)
    }
}
