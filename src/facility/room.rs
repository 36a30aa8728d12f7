//! Rooms: the leaves of the location hierarchy
//!
//! A room carries the four physical measurements every metric is derived
//! from. Rooms have no children; structural mutation is rejected by
//! [`Location`](crate::facility::Location).

use crate::facility::lookup::Identified;
use crate::types::{LocationId, LocationKind};
use serde::{Deserialize, Serialize};

/// Represents a room on a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Identifier of the room
    pub id: LocationId,
    /// Human-readable name of the room
    pub name: String,
    /// Floor area
    pub area: f64,
    /// Volume
    pub cube: f64,
    /// Heating energy draw
    pub heating: f64,
    /// Lighting power draw
    pub light: f64,
}

impl Room {
    /// Create a new room
    pub fn new(
        id: i64,
        name: impl Into<String>,
        area: f64,
        cube: f64,
        heating: f64,
        light: f64,
    ) -> Self {
        Self { id: LocationId(id), name: name.into(), area, cube, heating, light }
    }

    /// Identifier of the room
    pub fn id(&self) -> LocationId {
        self.id
    }

    /// Name of the room
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the room
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Floor area
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Set the floor area
    pub fn set_area(&mut self, area: f64) {
        self.area = area;
    }

    /// Volume
    pub fn cube(&self) -> f64 {
        self.cube
    }

    /// Set the volume
    pub fn set_cube(&mut self, cube: f64) {
        self.cube = cube;
    }

    /// Heating energy draw
    pub fn heating(&self) -> f64 {
        self.heating
    }

    /// Set the heating energy draw
    pub fn set_heating(&mut self, heating: f64) {
        self.heating = heating;
    }

    /// Lighting power draw
    pub fn light(&self) -> f64 {
        self.light
    }

    /// Set the lighting power draw
    pub fn set_light(&mut self, light: f64) {
        self.light = light;
    }

    /// Copy name and measurements from another room, keeping this room's id
    pub fn update_from(&mut self, other: &Room) {
        self.name = other.name.clone();
        self.area = other.area;
        self.cube = other.cube;
        self.heating = other.heating;
        self.light = other.light;
    }
}

impl Identified for Room {
    const KIND: LocationKind = LocationKind::Room;

    fn location_id(&self) -> LocationId {
        self.id
    }

    fn same_node(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.area.to_bits() == other.area.to_bits()
            && self.cube.to_bits() == other.cube.to_bits()
            && self.heating.to_bits() == other.heating.to_bits()
            && self.light.to_bits() == other.light.to_bits()
    }
}
