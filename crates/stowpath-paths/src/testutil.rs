//! Fixtures shared by the unit tests of this crate.

use std::collections::HashMap;

use stowpath_core::{Bounds, Coord3, Layout, Location, LocationRecord};

use crate::cost::{CachingCostCalculator, MoveCostModel};
use crate::error::CostError;

/// Unit cubes placed one unit apart along x, in the given order.
pub(crate) fn line_layout(names: &[&str]) -> Layout {
    Layout::new(names.iter().enumerate().map(|(i, name)| {
        let x = i as f64;
        LocationRecord::new(
            *name,
            Bounds::new(Coord3::new(x, 0.0, 0.0), Coord3::new(x + 1.0, 1.0, 1.0)),
        )
        .with_rack_face("R")
        .with_slot(i as i32, 0)
        .build()
        .unwrap()
    }))
    .unwrap()
}

/// Cost model backed by an explicit table of symmetric edge costs.
pub(crate) struct TableCost {
    costs: HashMap<(String, String), f64>,
}

impl TableCost {
    pub(crate) fn new(edges: &[(&str, &str, f64)]) -> Self {
        let mut costs = HashMap::new();
        for &(a, b, c) in edges {
            costs.insert((a.to_string(), b.to_string()), c);
            costs.insert((b.to_string(), a.to_string()), c);
        }
        Self { costs }
    }

    pub(crate) fn calculator(edges: &[(&str, &str, f64)]) -> CachingCostCalculator<TableCost> {
        CachingCostCalculator::new(Self::new(edges))
    }
}

impl MoveCostModel for TableCost {
    fn compute_cost(&self, from: &Location, to: &Location) -> Result<f64, CostError> {
        Ok(self
            .costs
            .get(&(from.name().to_string(), to.name().to_string()))
            .copied()
            .unwrap_or(0.0))
    }
}
