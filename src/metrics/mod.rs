//! Metrics computed over the location hierarchy
//!
//! Every metric is a [`MetricVisitor`]. Area and cube are plain sums, light
//! and energy are sums of per-room ratios, and the cost visitors price a ratio
//! with a unit cost.
//!
//! # Examples
//!
//! ```
//! use building_info::facility::{Building, Level, Room};
//! use building_info::metrics::{compute_metric, AreaVisitor, Visitable};
//! use building_info::types::MetricKind;
//!
//! let building = Building::with_levels(
//!     1,
//!     "Main",
//!     vec![Level::with_rooms(1, "Ground", vec![Room::new(1, "Lab", 50.0, 120.0, 10.5, 20.0)])],
//! );
//!
//! assert_eq!(building.accept(&mut AreaVisitor), 50.0);
//! assert_eq!(compute_metric(&building, MetricKind::Cube), 120.0);
//! ```

pub mod cost;
pub mod exceeding;
pub mod intensity;
pub mod physical;
pub mod visitor;

pub use cost::{EnergyCostVisitor, LightCostVisitor};
pub use exceeding::{ExceedingHeating, ExceedingHeatingVisitor};
pub use intensity::{EnergyVisitor, LightVisitor};
pub use physical::{AreaVisitor, CubeVisitor};
pub use visitor::{ratio, sum_in_order, MetricVisitor, Visitable};

use crate::types::{CostKind, MetricKind};

/// Compute a plain metric for any node
pub fn compute_metric<N: Visitable + ?Sized>(node: &N, kind: MetricKind) -> f64 {
    match kind {
        MetricKind::Area => node.accept(&mut AreaVisitor),
        MetricKind::Cube => node.accept(&mut CubeVisitor),
        MetricKind::LightPower => node.accept(&mut LightVisitor),
        MetricKind::EnergyConsumption => node.accept(&mut EnergyVisitor),
    }
}

/// Compute a cost metric for any node
pub fn compute_cost<N: Visitable + ?Sized>(node: &N, kind: CostKind, unit_cost: f64) -> f64 {
    match kind {
        CostKind::Light => node.accept(&mut LightCostVisitor::new(unit_cost)),
        CostKind::Energy => node.accept(&mut EnergyCostVisitor::new(unit_cost)),
    }
}

/// Energy total plus the rooms whose ratio is strictly above `energy_limit`
pub fn find_exceeding_heating<N: Visitable + ?Sized>(node: &N, energy_limit: f64) -> ExceedingHeating {
    ExceedingHeatingVisitor::run(energy_limit, node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::{Location, Room};

    #[test]
    fn test_compute_metric_matches_visitors() {
        let room = Location::from(Room::new(1, "r", 20.0, 60.0, 6.0, 10.0));

        assert_eq!(compute_metric(&room, MetricKind::Area), 20.0);
        assert_eq!(compute_metric(&room, MetricKind::Cube), 60.0);
        assert_eq!(compute_metric(&room, MetricKind::LightPower), 0.5);
        assert_eq!(compute_metric(&room, MetricKind::EnergyConsumption), 0.1);
    }

    #[test]
    fn test_compute_cost_and_exceeding() {
        let room = Room::new(1, "r", 20.0, 60.0, 6.0, 10.0);

        assert_eq!(compute_cost(&room, CostKind::Light, 4.0), 2.0);
        assert_eq!(compute_cost(&room, CostKind::Energy, 10.0), 1.0);

        let exceeding = find_exceeding_heating(&room, 0.05);
        assert_eq!(exceeding.count(), 1);
        assert_eq!(exceeding.total, 0.1);
    }
}
