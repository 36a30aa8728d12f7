//! Cost metrics
//!
//! A cost visitor holds a unit cost and the ratio visitor it prices. It never
//! recurses on its own: every node is handed to the inner visitor and the
//! result is multiplied by the unit cost.

use crate::facility::{Building, Level, Room};
use crate::metrics::intensity::{EnergyVisitor, LightVisitor};
use crate::metrics::visitor::{MetricVisitor, Visitable};

/// Light power ratio priced with a unit cost
#[derive(Debug, Clone, Copy)]
pub struct LightCostVisitor {
    unit_cost: f64,
    light: LightVisitor,
}

impl LightCostVisitor {
    /// Create a visitor pricing light power at `unit_cost`
    pub fn new(unit_cost: f64) -> Self {
        Self { unit_cost, light: LightVisitor }
    }

    /// The unit cost this visitor applies
    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }
}

impl MetricVisitor for LightCostVisitor {
    fn visit_room(&mut self, room: &Room) -> f64 {
        room.accept(&mut self.light) * self.unit_cost
    }

    fn visit_level(&mut self, level: &Level) -> f64 {
        level.accept(&mut self.light) * self.unit_cost
    }

    fn visit_building(&mut self, building: &Building) -> f64 {
        building.accept(&mut self.light) * self.unit_cost
    }
}

/// Energy consumption ratio priced with a unit cost
#[derive(Debug, Clone, Copy)]
pub struct EnergyCostVisitor {
    unit_cost: f64,
    energy: EnergyVisitor,
}

impl EnergyCostVisitor {
    /// Create a visitor pricing energy consumption at `unit_cost`
    pub fn new(unit_cost: f64) -> Self {
        Self { unit_cost, energy: EnergyVisitor }
    }

    /// The unit cost this visitor applies
    pub fn unit_cost(&self) -> f64 {
        self.unit_cost
    }
}

impl MetricVisitor for EnergyCostVisitor {
    fn visit_room(&mut self, room: &Room) -> f64 {
        room.accept(&mut self.energy) * self.unit_cost
    }

    fn visit_level(&mut self, level: &Level) -> f64 {
        level.accept(&mut self.energy) * self.unit_cost
    }

    fn visit_building(&mut self, building: &Building) -> f64 {
        building.accept(&mut self.energy) * self.unit_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_level(id: i64, count: usize) -> Level {
        let rooms = (1..=count as i64).map(|rid| Room::new(rid, "r", 10.0, 10.0, 1000.0, 100.0)).collect();
        Level::with_rooms(id, "L", rooms)
    }

    fn uniform_building() -> Building {
        Building::with_levels(1, "B", vec![uniform_level(1, 5), uniform_level(2, 5)])
    }

    #[test]
    fn test_energy_cost_of_room() {
        let mut visitor = EnergyCostVisitor::new(5.0);
        let room = Room::new(1, "r", 10.0, 10.0, 100.0, 100.0);
        assert_eq!(room.accept(&mut visitor), 50.0);
    }

    #[test]
    fn test_energy_cost_of_level_and_building() {
        let mut visitor = EnergyCostVisitor::new(5.0);
        assert_eq!(Level::new(1, "L").accept(&mut visitor), 0.0);
        assert_eq!(uniform_level(1, 5).accept(&mut visitor), 2500.0);
        assert_eq!(uniform_building().accept(&mut visitor), 5000.0);
        assert_eq!(Building::new(2, "Empty").accept(&mut visitor), 0.0);
    }

    #[test]
    fn test_light_cost_of_room_level_and_building() {
        let mut visitor = LightCostVisitor::new(5.0);
        let room = Room::new(1, "r", 10.0, 10.0, 1000.0, 100.0);
        assert_eq!(room.accept(&mut visitor), 50.0);
        assert_eq!(Level::new(1, "L").accept(&mut visitor), 0.0);
        assert_eq!(uniform_level(1, 5).accept(&mut visitor), 250.0);
        assert_eq!(uniform_building().accept(&mut visitor), 500.0);
    }

    #[test]
    fn test_cost_is_ratio_times_unit_cost() {
        let building = uniform_building();
        for unit_cost in [0.0, 0.5, 2.0, -1.0] {
            let light = building.accept(&mut LightVisitor);
            let energy = building.accept(&mut EnergyVisitor);

            assert_eq!(building.accept(&mut LightCostVisitor::new(unit_cost)), light * unit_cost);
            assert_eq!(building.accept(&mut EnergyCostVisitor::new(unit_cost)), energy * unit_cost);
        }
    }
}
