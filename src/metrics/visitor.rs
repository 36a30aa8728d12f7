//! The metric protocol
//!
//! A metric is a [`MetricVisitor`]: one method per node kind, each returning
//! a number. Nodes implement [`Visitable`] and hand themselves to the matching
//! method. The default level and building methods sum their children's
//! results in insertion order, so most metrics only define the room rule.

use crate::facility::{Building, Level, Location, LocationRef, Room};

/// A computation over the location hierarchy
pub trait MetricVisitor {
    /// Value of the metric for a single room
    fn visit_room(&mut self, room: &Room) -> f64;

    /// Value of the metric for a level, by default the sum over its rooms
    fn visit_level(&mut self, level: &Level) -> f64 {
        sum_in_order(level.rooms().iter().map(|room| room.accept(self)))
    }

    /// Value of the metric for a building, by default the sum over its levels
    fn visit_building(&mut self, building: &Building) -> f64 {
        sum_in_order(building.levels().iter().map(|level| level.accept(self)))
    }
}

/// A node that can hand itself to a [`MetricVisitor`]
pub trait Visitable {
    /// Dispatch to the visitor method for this node's kind
    fn accept<V: MetricVisitor + ?Sized>(&self, visitor: &mut V) -> f64;
}

impl Visitable for Room {
    fn accept<V: MetricVisitor + ?Sized>(&self, visitor: &mut V) -> f64 {
        visitor.visit_room(self)
    }
}

impl Visitable for Level {
    fn accept<V: MetricVisitor + ?Sized>(&self, visitor: &mut V) -> f64 {
        visitor.visit_level(self)
    }
}

impl Visitable for Building {
    fn accept<V: MetricVisitor + ?Sized>(&self, visitor: &mut V) -> f64 {
        visitor.visit_building(self)
    }
}

impl Visitable for Location {
    fn accept<V: MetricVisitor + ?Sized>(&self, visitor: &mut V) -> f64 {
        match self {
            Location::Building(building) => visitor.visit_building(building),
            Location::Level(level) => visitor.visit_level(level),
            Location::Room(room) => visitor.visit_room(room),
        }
    }
}

impl Visitable for LocationRef<'_> {
    fn accept<V: MetricVisitor + ?Sized>(&self, visitor: &mut V) -> f64 {
        match *self {
            LocationRef::Building(building) => visitor.visit_building(building),
            LocationRef::Level(level) => visitor.visit_level(level),
            LocationRef::Room(room) => visitor.visit_room(room),
        }
    }
}

/// Sum values left to right starting from `+0.0`
///
/// Keeps empty subtrees at positive zero and fixes the rounding order to the
/// order children were inserted in.
pub fn sum_in_order(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().fold(0.0, |total, value| total + value)
}

/// Intensity ratio with the zero-denominator policy applied
///
/// A zero denominator contributes `0.0` instead of `NaN` or an infinity.
/// Every ratio-based metric goes through this function.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts visits per kind; the room value is always 1
    #[derive(Default)]
    struct CountingVisitor {
        rooms: usize,
        levels: usize,
        buildings: usize,
    }

    impl MetricVisitor for CountingVisitor {
        fn visit_room(&mut self, _room: &Room) -> f64 {
            self.rooms += 1;
            1.0
        }

        fn visit_level(&mut self, level: &Level) -> f64 {
            self.levels += 1;
            sum_in_order(level.rooms().iter().map(|room| room.accept(self)))
        }

        fn visit_building(&mut self, building: &Building) -> f64 {
            self.buildings += 1;
            sum_in_order(building.levels().iter().map(|level| level.accept(self)))
        }
    }

    fn building() -> Building {
        let room = |id| Room::new(id, "r", 1.0, 1.0, 1.0, 1.0);
        Building::with_levels(
            1,
            "B",
            vec![
                Level::with_rooms(1, "L1", vec![room(1), room(2)]),
                Level::new(2, "L2"),
                Level::with_rooms(3, "L3", vec![room(3)]),
            ],
        )
    }

    #[test]
    fn test_accept_visits_every_node_once() {
        let mut visitor = CountingVisitor::default();
        let total = building().accept(&mut visitor);

        assert_eq!(total, 3.0);
        assert_eq!(visitor.rooms, 3);
        assert_eq!(visitor.levels, 3);
        assert_eq!(visitor.buildings, 1);
    }

    #[test]
    fn test_location_dispatches_to_variant() {
        let mut visitor = CountingVisitor::default();
        let location = Location::from(building().levels()[0].clone());

        assert_eq!(location.accept(&mut visitor), 2.0);
        assert_eq!(visitor.buildings, 0);
        assert_eq!(visitor.levels, 1);
    }

    #[test]
    fn test_borrowed_view_dispatches_to_variant() {
        let building = building();
        let mut visitor = CountingVisitor::default();

        assert_eq!(LocationRef::Room(&building.levels()[2].rooms()[0]).accept(&mut visitor), 1.0);
        assert_eq!(LocationRef::Building(&building).accept(&mut visitor), 3.0);
        assert_eq!(visitor.buildings, 1);
    }

    #[test]
    fn test_works_through_trait_object() {
        let mut visitor = CountingVisitor::default();
        let dynamic: &mut dyn MetricVisitor = &mut visitor;
        assert_eq!(building().accept(dynamic), 3.0);
    }

    #[test]
    fn test_empty_sum_is_positive_zero() {
        let total = sum_in_order(std::iter::empty());
        assert_eq!(total, 0.0);
        assert!(total.is_sign_positive());
    }

    #[test]
    fn test_ratio_zero_denominator_policy() {
        assert_eq!(ratio(10.0, 4.0), 2.5);
        assert_eq!(ratio(10.0, 0.0), 0.0);
        assert_eq!(ratio(0.0, 0.0), 0.0);
        assert_eq!(ratio(-3.0, 0.0), 0.0);
        assert_eq!(ratio(3.0, -1.5), -2.0);
    }
}
