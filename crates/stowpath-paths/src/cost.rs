//! Movement cost models and the caching calculator that serves them.

use std::collections::HashMap;

use stowpath_core::{Axis, Coord3, Location};

use crate::error::CostError;

/// A deterministic cost of moving between two locations.
///
/// Costs are directional: `compute_cost(a, b)` need not equal
/// `compute_cost(b, a)`.
pub trait MoveCostModel {
    fn compute_cost(&self, from: &Location, to: &Location) -> Result<f64, CostError>;
}

/// A cost source with a memo table, as attached to a connectivity graph.
pub trait MoveCostCalculator {
    /// Cost from `from` to `to`, computed at most once per ordered pair of
    /// location names until [`clear_cache`](Self::clear_cache) is called.
    fn get_cost(&mut self, from: &Location, to: &Location) -> Result<f64, CostError>;

    /// Uncached cost straight from the model. Used as an A* heuristic.
    fn estimate(&self, from: &Location, to: &Location) -> Result<f64, CostError>;

    /// Drop every cached cost.
    fn clear_cache(&mut self);

    /// Number of cached pairs.
    fn cache_len(&self) -> usize;
}

/// Cache key: (from name, to name).
pub type CostKey = (String, String);

/// Wraps a [`MoveCostModel`] with a per-instance memo table.
///
/// The cache starts empty, is only filled by [`get_cost`](MoveCostCalculator::get_cost)
/// and only emptied by [`clear_cache`](MoveCostCalculator::clear_cache). It is not
/// invalidated when the graph it serves changes; callers that rebuild a
/// topology with a different model or layout must clear it themselves.
#[derive(Clone, Debug, Default)]
pub struct CachingCostCalculator<M> {
    model: M,
    cache: HashMap<CostKey, f64>,
}

impl<M: MoveCostModel> CachingCostCalculator<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            cache: HashMap::new(),
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Cached cost for the pair, if any.
    pub fn cached(&self, from: &str, to: &str) -> Option<f64> {
        self.cache
            .get(&(from.to_string(), to.to_string()))
            .copied()
    }
}

impl<M: MoveCostModel> MoveCostCalculator for CachingCostCalculator<M> {
    fn get_cost(&mut self, from: &Location, to: &Location) -> Result<f64, CostError> {
        // Keyed on both endpoints: one entry per ordered pair.
        let key = (from.name().to_string(), to.name().to_string());
        if let Some(&cost) = self.cache.get(&key) {
            return Ok(cost);
        }
        let cost = self.model.compute_cost(from, to)?;
        self.cache.insert(key, cost);
        Ok(cost)
    }

    fn estimate(&self, from: &Location, to: &Location) -> Result<f64, CostError> {
        self.model.compute_cost(from, to)
    }

    fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

// ---------------------------------------------------------------------------
// Time-based model
// ---------------------------------------------------------------------------

/// Travel time between centroids, moving along each axis independently.
///
/// `cost = |dx| / speed_x + |dy| / speed_y + |dz| / speed_z`, an anisotropic
/// Manhattan metric. Being a metric it satisfies the triangle inequality, so
/// it is also a consistent A* heuristic for graphs costed with it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeBasedCost {
    speed_x: f64,
    speed_y: f64,
    speed_z: f64,
}

impl TimeBasedCost {
    pub const DEFAULT_SPEED_X: f64 = 1.0;
    pub const DEFAULT_SPEED_Y: f64 = 1.0;
    pub const DEFAULT_SPEED_Z: f64 = 0.5;

    /// Create a model with the given per-axis speeds, each of which must be
    /// positive and finite.
    pub fn new(speed_x: f64, speed_y: f64, speed_z: f64) -> Result<Self, CostError> {
        for (axis, speed) in [(Axis::X, speed_x), (Axis::Y, speed_y), (Axis::Z, speed_z)] {
            if !(speed.is_finite() && speed > 0.0) {
                return Err(CostError::InvalidSpeed { axis, speed });
            }
        }
        Ok(Self {
            speed_x,
            speed_y,
            speed_z,
        })
    }

    pub fn speeds(&self) -> Coord3 {
        Coord3::new(self.speed_x, self.speed_y, self.speed_z)
    }
}

impl Default for TimeBasedCost {
    fn default() -> Self {
        Self {
            speed_x: Self::DEFAULT_SPEED_X,
            speed_y: Self::DEFAULT_SPEED_Y,
            speed_z: Self::DEFAULT_SPEED_Z,
        }
    }
}

impl MoveCostModel for TimeBasedCost {
    fn compute_cost(&self, from: &Location, to: &Location) -> Result<f64, CostError> {
        let a = finite_centroid(from)?;
        let b = finite_centroid(to)?;
        let d = a.abs_diff(b);
        Ok(d.x / self.speed_x + d.y / self.speed_y + d.z / self.speed_z)
    }
}

/// A time-based model behind a cache.
pub type TimeBasedCostCalculator = CachingCostCalculator<TimeBasedCost>;

impl TimeBasedCostCalculator {
    /// Calculator with the default speeds (x = 1.0, y = 1.0, z = 0.5).
    pub fn time_based() -> Self {
        Self::new(TimeBasedCost::default())
    }
}

fn finite_centroid(loc: &Location) -> Result<Coord3, CostError> {
    let c = loc.centroid();
    if c.is_finite() {
        Ok(c)
    } else {
        Err(CostError::MissingCentroid(loc.name().to_string()))
    }
}
