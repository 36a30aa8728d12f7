//! Additive physical metrics: floor area and volume

use crate::facility::Room;
use crate::metrics::visitor::MetricVisitor;

/// Total floor area of a subtree
#[derive(Debug, Clone, Copy, Default)]
pub struct AreaVisitor;

impl MetricVisitor for AreaVisitor {
    fn visit_room(&mut self, room: &Room) -> f64 {
        room.area()
    }
}

/// Total volume of a subtree
#[derive(Debug, Clone, Copy, Default)]
pub struct CubeVisitor;

impl MetricVisitor for CubeVisitor {
    fn visit_room(&mut self, room: &Room) -> f64 {
        room.cube()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::{Building, Level};
    use crate::metrics::visitor::Visitable;

    fn level_with_rooms(count: usize) -> Level {
        let rooms = (1..=count as i64).map(|id| Room::new(id, "r", 10.0, 10.0, 100.0, 1000.0)).collect();
        Level::with_rooms(1, "L", rooms)
    }

    #[test]
    fn test_area_of_room() {
        let room = Room::new(1, "r", 10.0, 30.0, 1.0, 1.0);
        assert_eq!(room.accept(&mut AreaVisitor), 10.0);
    }

    #[test]
    fn test_area_of_level_without_rooms() {
        assert_eq!(Level::new(1, "L").accept(&mut AreaVisitor), 0.0);
    }

    #[test]
    fn test_area_of_level_with_rooms() {
        assert_eq!(level_with_rooms(5).accept(&mut AreaVisitor), 50.0);
    }

    #[test]
    fn test_area_of_building() {
        let building =
            Building::with_levels(1, "B", vec![level_with_rooms(5), level_with_rooms(5)]);
        assert_eq!(building.accept(&mut AreaVisitor), 100.0);
        assert_eq!(Building::new(2, "Empty").accept(&mut AreaVisitor), 0.0);
    }

    #[test]
    fn test_cube_of_room_level_and_building() {
        let room = Room::new(1, "r", 10.0, 30.0, 1.0, 1.0);
        assert_eq!(room.accept(&mut CubeVisitor), 30.0);
        assert_eq!(level_with_rooms(5).accept(&mut CubeVisitor), 50.0);

        let building =
            Building::with_levels(1, "B", vec![level_with_rooms(5), level_with_rooms(5)]);
        assert_eq!(building.accept(&mut CubeVisitor), 100.0);
    }
}
