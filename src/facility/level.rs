//! Levels and the rooms on them
//!
//! A level owns an ordered list of rooms. Insertion order is the only order
//! and is the order metrics are summed in.

use crate::facility::error::LocationError;
use crate::facility::lookup::{self, Identified};
use crate::facility::room::Room;
use crate::types::{LocationId, LocationKind};
use serde::{Deserialize, Serialize};

/// Represents one level (floor) of a building
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Identifier of the level
    pub id: LocationId,
    /// Human-readable name of the level
    pub name: String,
    /// Rooms on this level, in insertion order
    #[serde(rename = "roomsOnLevel", default)]
    pub rooms: Vec<Room>,
}

impl Level {
    /// Create a new empty level
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self { id: LocationId(id), name: name.into(), rooms: Vec::new() }
    }

    /// Create a level with rooms already attached
    pub fn with_rooms(id: i64, name: impl Into<String>, rooms: Vec<Room>) -> Self {
        Self { id: LocationId(id), name: name.into(), rooms }
    }

    /// Identifier of the level
    pub fn id(&self) -> LocationId {
        self.id
    }

    /// Name of the level
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the level
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Rooms on this level
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Live room list, for in-place mutation
    pub fn rooms_mut(&mut self) -> &mut Vec<Room> {
        &mut self.rooms
    }

    /// Replace the room list wholesale
    pub fn set_rooms(&mut self, rooms: Vec<Room>) {
        self.rooms = rooms;
    }

    /// Append a room to the end of the level
    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Detach the first room equal to `room`
    pub fn remove_room(&mut self, room: &Room) -> Result<Room, LocationError> {
        lookup::remove_equal_child(&mut self.rooms, room)
    }

    /// Detach the first room with the given id
    pub fn remove_room_by_id(&mut self, room_id: LocationId) -> Result<Room, LocationError> {
        lookup::remove_child_by_id(&mut self.rooms, room_id)
    }

    /// Get a room by id
    pub fn room(&self, room_id: LocationId) -> Result<&Room, LocationError> {
        lookup::find_child_by_id(&self.rooms, room_id)
    }

    /// Get a mutable reference to a room by id
    pub fn room_mut(&mut self, room_id: LocationId) -> Result<&mut Room, LocationError> {
        lookup::find_child_by_id_mut(&mut self.rooms, room_id)
    }

    /// Check if a room with this id is on the level
    pub fn contains_room(&self, room_id: LocationId) -> bool {
        self.rooms.iter().any(|r| r.id == room_id)
    }

    /// Get the number of rooms on the level
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Copy name and rooms from another level, keeping this level's id
    pub fn update_from(&mut self, other: Level) {
        self.name = other.name;
        self.rooms = other.rooms;
    }
}

impl Identified for Level {
    const KIND: LocationKind = LocationKind::Level;

    fn location_id(&self) -> LocationId {
        self.id
    }

    fn same_node(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && lookup::same_children(&self.rooms, &other.rooms)
    }
}
