//! Heterogeneous location nodes
//!
//! [`Location`] is the closed sum over the three node kinds. It carries the
//! type-checked `add`/`remove` contract used when the kind of a node is only
//! known at runtime; statically typed callers can use the concrete
//! `Building::add_level` and `Level::add_room` directly.

use crate::facility::building::Building;
use crate::facility::error::LocationError;
use crate::facility::level::Level;
use crate::facility::room::Room;
use crate::types::{LocationId, LocationKind};
use serde::Serialize;

/// Any node of the location hierarchy
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Location {
    /// A building, owning levels
    Building(Building),
    /// A level, owning rooms
    Level(Level),
    /// A room, the leaf
    Room(Room),
}

impl Location {
    /// Variant tag of this node
    pub fn kind(&self) -> LocationKind {
        match self {
            Location::Building(_) => LocationKind::Building,
            Location::Level(_) => LocationKind::Level,
            Location::Room(_) => LocationKind::Room,
        }
    }

    /// Identifier of this node
    pub fn id(&self) -> LocationId {
        match self {
            Location::Building(building) => building.id(),
            Location::Level(level) => level.id(),
            Location::Room(room) => room.id(),
        }
    }

    /// Name of this node
    pub fn name(&self) -> &str {
        match self {
            Location::Building(building) => building.name(),
            Location::Level(level) => level.name(),
            Location::Room(room) => room.name(),
        }
    }

    /// Rename this node
    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Location::Building(building) => building.set_name(name),
            Location::Level(level) => level.set_name(name),
            Location::Room(room) => room.set_name(name),
        }
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        match self {
            Location::Building(building) => building.level_count(),
            Location::Level(level) => level.room_count(),
            Location::Room(_) => 0,
        }
    }

    /// Attach a child at the end of this node's child list
    ///
    /// Buildings accept levels and levels accept rooms. Any other pairing
    /// fails with [`LocationError::InvalidChildType`]; rooms reject every
    /// child with [`LocationError::UnsupportedOperation`]. On failure the
    /// tree is left unchanged.
    pub fn add(&mut self, child: Location) -> Result<(), LocationError> {
        match (self, child) {
            (Location::Building(building), Location::Level(level)) => {
                building.add_level(level);
                Ok(())
            }
            (Location::Level(level), Location::Room(room)) => {
                level.add_room(room);
                Ok(())
            }
            (Location::Room(_), _) => Err(LocationError::unsupported_on_room("add")),
            (parent, child) => Err(Self::invalid_child(parent.kind(), child.kind())),
        }
    }

    /// Detach the first child structurally equal to `child` and return it
    ///
    /// Same type checks as [`Location::add`]. A well-typed child that is not
    /// attached fails with [`LocationError::NotFound`].
    pub fn remove(&mut self, child: &Location) -> Result<Location, LocationError> {
        match (self, child) {
            (Location::Building(building), Location::Level(level)) => {
                building.remove_level(level).map(Location::Level)
            }
            (Location::Level(level), Location::Room(room)) => {
                level.remove_room(room).map(Location::Room)
            }
            (Location::Room(_), _) => Err(LocationError::unsupported_on_room("remove")),
            (parent, child) => Err(Self::invalid_child(parent.kind(), child.kind())),
        }
    }

    fn invalid_child(parent: LocationKind, child: LocationKind) -> LocationError {
        LocationError::InvalidChildType {
            parent,
            // Room is handled before this point, so every parent here has a child kind
            expected: parent.child_kind().unwrap_or(LocationKind::Room),
            child,
        }
    }

    /// Borrow as a building, if it is one
    pub fn as_building(&self) -> Option<&Building> {
        match self {
            Location::Building(building) => Some(building),
            _ => None,
        }
    }

    /// Borrow as a level, if it is one
    pub fn as_level(&self) -> Option<&Level> {
        match self {
            Location::Level(level) => Some(level),
            _ => None,
        }
    }

    /// Borrow as a room, if it is one
    pub fn as_room(&self) -> Option<&Room> {
        match self {
            Location::Room(room) => Some(room),
            _ => None,
        }
    }
}

/// Borrowed view of a node somewhere inside a tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationRef<'a> {
    /// A borrowed building
    Building(&'a Building),
    /// A borrowed level
    Level(&'a Level),
    /// A borrowed room
    Room(&'a Room),
}

impl LocationRef<'_> {
    /// Variant tag of the viewed node
    pub fn kind(&self) -> LocationKind {
        match self {
            LocationRef::Building(_) => LocationKind::Building,
            LocationRef::Level(_) => LocationKind::Level,
            LocationRef::Room(_) => LocationKind::Room,
        }
    }

    /// Identifier of the viewed node
    pub fn id(&self) -> LocationId {
        match self {
            LocationRef::Building(building) => building.id(),
            LocationRef::Level(level) => level.id(),
            LocationRef::Room(room) => room.id(),
        }
    }

    /// Name of the viewed node
    pub fn name(&self) -> &str {
        match self {
            LocationRef::Building(building) => building.name(),
            LocationRef::Level(level) => level.name(),
            LocationRef::Room(room) => room.name(),
        }
    }

    /// Number of rooms in the subtree, 1 for a room
    pub fn room_count(&self) -> usize {
        match self {
            LocationRef::Building(building) => building.room_count(),
            LocationRef::Level(level) => level.room_count(),
            LocationRef::Room(_) => 1,
        }
    }

    /// Clone the viewed subtree into an owned [`Location`]
    pub fn to_owned_location(&self) -> Location {
        match *self {
            LocationRef::Building(building) => Location::Building(building.clone()),
            LocationRef::Level(level) => Location::Level(level.clone()),
            LocationRef::Room(room) => Location::Room(room.clone()),
        }
    }
}

impl<'a> From<&'a Location> for LocationRef<'a> {
    fn from(location: &'a Location) -> Self {
        match location {
            Location::Building(building) => LocationRef::Building(building),
            Location::Level(level) => LocationRef::Level(level),
            Location::Room(room) => LocationRef::Room(room),
        }
    }
}

impl From<Building> for Location {
    fn from(building: Building) -> Self {
        Location::Building(building)
    }
}

impl From<Level> for Location {
    fn from(level: Level) -> Self {
        Location::Level(level)
    }
}

impl From<Room> for Location {
    fn from(room: Room) -> Self {
        Location::Room(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: i64) -> Room {
        Room::new(id, format!("Room {}", id), 10.0, 30.0, 3.0, 5.0)
    }

    #[test]
    fn test_building_accepts_only_levels() {
        let mut building = Location::from(Building::new(1, "B"));

        assert!(building.add(Level::new(1, "L1").into()).is_ok());
        assert_eq!(building.child_count(), 1);

        let err = building.add(room(1).into()).unwrap_err();
        assert_eq!(
            err,
            LocationError::InvalidChildType {
                parent: LocationKind::Building,
                expected: LocationKind::Level,
                child: LocationKind::Room,
            }
        );

        let err = building.add(Building::new(2, "Nested").into()).unwrap_err();
        assert!(matches!(err, LocationError::InvalidChildType { .. }));
        assert_eq!(building.child_count(), 1);
    }

    #[test]
    fn test_level_accepts_only_rooms() {
        let mut level = Location::from(Level::new(1, "L1"));
        level.add(room(1).into()).unwrap();
        level.add(room(2).into()).unwrap();

        let err = level.add(Level::new(2, "L2").into()).unwrap_err();
        assert!(matches!(
            err,
            LocationError::InvalidChildType { parent: LocationKind::Level, .. }
        ));

        let ids: Vec<i64> =
            level.as_level().unwrap().rooms().iter().map(|r| r.id().value()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_room_rejects_all_mutation() {
        let mut leaf = Location::from(room(1));
        let before = leaf.clone();

        assert_eq!(leaf.add(room(2).into()).unwrap_err(), LocationError::unsupported_on_room("add"));
        assert_eq!(
            leaf.remove(&room(2).into()).unwrap_err(),
            LocationError::unsupported_on_room("remove")
        );
        assert_eq!(leaf, before);
    }

    #[test]
    fn test_remove_type_checks_and_not_found() {
        let mut level = Location::from(Level::with_rooms(1, "L1", vec![room(1), room(2)]));

        let removed = level.remove(&room(2).into()).unwrap();
        assert_eq!(removed, Location::Room(room(2)));
        assert_eq!(level.child_count(), 1);

        assert!(level.remove(&room(2).into()).unwrap_err().is_not_found());
        assert!(matches!(
            level.remove(&Building::new(1, "B").into()).unwrap_err(),
            LocationError::InvalidChildType { .. }
        ));
        assert_eq!(level.child_count(), 1);
    }

    #[test]
    fn test_accessors_dispatch_on_variant() {
        let mut location = Location::from(Level::new(7, "Seventh"));
        assert_eq!(location.kind(), LocationKind::Level);
        assert_eq!(location.id(), LocationId(7));

        location.set_name("Top");
        assert_eq!(location.name(), "Top");
        assert!(location.as_building().is_none());
        assert!(location.as_room().is_none());
    }

    #[test]
    fn test_untagged_serialization_matches_node_shape() {
        let location = Location::from(Building::new(1, "B"));
        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["id"], 1);
        assert!(json["levelsInBuilding"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_borrowed_view_reports_subtree() {
        let level = Level::with_rooms(2, "L2", vec![room(1), room(2)]);
        let view = LocationRef::Level(&level);

        assert_eq!(view.kind(), LocationKind::Level);
        assert_eq!(view.id(), LocationId(2));
        assert_eq!(view.name(), "L2");
        assert_eq!(view.room_count(), 2);
        assert_eq!(view.to_owned_location(), Location::Level(level.clone()));

        let owned = Location::from(room(5));
        assert_eq!(LocationRef::from(&owned).room_count(), 1);
    }
}
