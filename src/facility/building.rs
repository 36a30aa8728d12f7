//! Buildings and the levels within them
//!
//! This module contains the Building struct, the root of a location tree.
//! A building owns an ordered list of levels; each level owns its rooms.

use crate::facility::error::LocationError;
use crate::facility::level::Level;
use crate::facility::lookup::{self, Identified};
use crate::facility::room::Room;
use crate::types::{LocationId, LocationKind};
use serde::{Deserialize, Serialize};

/// Represents a building, the top of the location hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Identifier of the building
    pub id: LocationId,
    /// Human-readable name of the building
    pub name: String,
    /// Levels within this building, in insertion order
    #[serde(rename = "levelsInBuilding", default)]
    pub levels: Vec<Level>,
}

impl Building {
    /// Create a new building with no levels
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self { id: LocationId(id), name: name.into(), levels: Vec::new() }
    }

    /// Create a building with levels already attached
    pub fn with_levels(id: i64, name: impl Into<String>, levels: Vec<Level>) -> Self {
        Self { id: LocationId(id), name: name.into(), levels }
    }

    /// Identifier of the building
    pub fn id(&self) -> LocationId {
        self.id
    }

    /// Name of the building
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the building
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Levels within this building
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Live level list, for in-place mutation
    pub fn levels_mut(&mut self) -> &mut Vec<Level> {
        &mut self.levels
    }

    /// Replace the level list wholesale
    pub fn set_levels(&mut self, levels: Vec<Level>) {
        self.levels = levels;
    }

    /// Append a level to the top of the building
    pub fn add_level(&mut self, level: Level) {
        self.levels.push(level);
    }

    /// Detach the first level equal to `level`
    pub fn remove_level(&mut self, level: &Level) -> Result<Level, LocationError> {
        lookup::remove_equal_child(&mut self.levels, level)
    }

    /// Detach the first level with the given id
    pub fn remove_level_by_id(&mut self, level_id: LocationId) -> Result<Level, LocationError> {
        lookup::remove_child_by_id(&mut self.levels, level_id)
    }

    /// Get a level by id
    pub fn level(&self, level_id: LocationId) -> Result<&Level, LocationError> {
        lookup::find_child_by_id(&self.levels, level_id)
    }

    /// Get a mutable reference to a level by id
    pub fn level_mut(&mut self, level_id: LocationId) -> Result<&mut Level, LocationError> {
        lookup::find_child_by_id_mut(&mut self.levels, level_id)
    }

    /// Check if a level with this id is in the building
    pub fn contains_level(&self, level_id: LocationId) -> bool {
        self.levels.iter().any(|l| l.id == level_id)
    }

    /// Get the number of levels in the building
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Get the number of rooms across all levels
    pub fn room_count(&self) -> usize {
        self.levels.iter().map(Level::room_count).sum()
    }

    /// Iterate over every room in the building, level by level
    pub fn all_rooms(&self) -> impl Iterator<Item = &Room> {
        self.levels.iter().flat_map(|level| level.rooms.iter())
    }

    /// Copy name and levels from another building, keeping this building's id
    pub fn update_from(&mut self, other: Building) {
        self.name = other.name;
        self.levels = other.levels;
    }
}

impl Identified for Building {
    const KIND: LocationKind = LocationKind::Building;

    fn location_id(&self) -> LocationId {
        self.id
    }

    fn same_node(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && lookup::same_children(&self.levels, &other.levels)
    }
}
