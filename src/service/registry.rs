//! Building registry
//!
//! [`BuildingRegistry`] owns the set of building trees a front end works
//! with. It keeps buildings in insertion order with an id index, enforces
//! unique ids among siblings, loads and saves the JSON data file, and runs
//! metric queries against a node addressed by a [`LocationPath`].

use crate::facility::{Building, Level, LocationRef, Room};
use crate::metrics::{compute_cost, compute_metric, find_exceeding_heating, ExceedingHeating};
use crate::service::error::{ServiceError, ServiceResult};
use crate::service::report::{CostSettings, MetricsReport};
use crate::types::{CostKind, LocationId, LocationKind, MetricKind};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Address of a node: a building, optionally narrowed to a level and a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationPath {
    /// Building id
    pub building: LocationId,
    /// Level id within the building
    pub level: Option<LocationId>,
    /// Room id within the level; only meaningful when `level` is set
    pub room: Option<LocationId>,
}

impl LocationPath {
    /// Path to a building
    pub fn building(building: i64) -> Self {
        Self { building: LocationId(building), level: None, room: None }
    }

    /// Path to a level
    pub fn level(building: i64, level: i64) -> Self {
        Self { building: LocationId(building), level: Some(LocationId(level)), room: None }
    }

    /// Path to a room
    pub fn room(building: i64, level: i64, room: i64) -> Self {
        Self {
            building: LocationId(building),
            level: Some(LocationId(level)),
            room: Some(LocationId(room)),
        }
    }

    /// Kind of node the path points at
    pub fn target_kind(&self) -> LocationKind {
        match (self.level, self.room) {
            (Some(_), Some(_)) => LocationKind::Room,
            (Some(_), None) => LocationKind::Level,
            (None, _) => LocationKind::Building,
        }
    }
}

impl fmt::Display for LocationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "building {}", self.building)?;
        if let Some(level) = self.level {
            write!(f, " / level {}", level)?;
            if let Some(room) = self.room {
                write!(f, " / room {}", room)?;
            }
        }
        Ok(())
    }
}

/// Registry of building trees with sibling-unique ids
#[derive(Debug, Clone, Default)]
pub struct BuildingRegistry {
    buildings: Vec<Building>,
    building_index: HashMap<LocationId, usize>,
}

impl BuildingRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from existing trees, rejecting duplicate ids among siblings
    pub fn from_buildings(buildings: Vec<Building>) -> ServiceResult<Self> {
        ensure_unique(buildings.iter().map(Building::id), LocationKind::Building)?;
        for building in &buildings {
            ensure_unique_levels(building)?;
        }

        let mut registry = Self { buildings, building_index: HashMap::new() };
        registry.rebuild_indices();
        Ok(registry)
    }

    /// Parse a JSON array of buildings
    pub fn from_json_str(json: &str) -> ServiceResult<Self> {
        let buildings: Vec<Building> = serde_json::from_str(json)?;
        Self::from_buildings(buildings)
    }

    /// Load a JSON array of buildings from a file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            warn!("Failed to read building data from {}: {}", path.display(), e);
            e
        })?;
        let registry = Self::from_json_str(&content).map_err(|e| {
            warn!("Failed to load building data from {}: {}", path.display(), e);
            e
        })?;

        info!(
            "Loaded {} buildings ({} levels, {} rooms) from {}",
            registry.len(),
            registry.total_level_count(),
            registry.total_room_count(),
            path.display()
        );
        Ok(registry)
    }

    /// Serialize every building as a pretty-printed JSON array
    pub fn to_json_pretty(&self) -> ServiceResult<String> {
        Ok(serde_json::to_string_pretty(&self.buildings)?)
    }

    /// Write every building to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> ServiceResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_pretty()?)?;
        info!("Saved {} buildings to {}", self.len(), path.display());
        Ok(())
    }

    /// Rebuild the building id index after the building list was reshaped
    fn rebuild_indices(&mut self) {
        self.building_index.clear();
        for (idx, building) in self.buildings.iter().enumerate() {
            self.building_index.insert(building.id(), idx);
        }
    }

    /// Number of buildings
    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    /// Whether the registry holds no buildings
    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    /// Total number of levels across all buildings
    pub fn total_level_count(&self) -> usize {
        self.buildings.iter().map(Building::level_count).sum()
    }

    /// Total number of rooms across all buildings
    pub fn total_room_count(&self) -> usize {
        self.buildings.iter().map(Building::room_count).sum()
    }

    // Buildings

    /// All buildings in insertion order
    pub fn all_buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Whether a building with this id exists
    pub fn contains_building(&self, id: LocationId) -> bool {
        self.building_index.contains_key(&id)
    }

    /// Get a building by id
    pub fn building(&self, id: LocationId) -> ServiceResult<&Building> {
        self.building_index
            .get(&id)
            .and_then(|&idx| self.buildings.get(idx))
            .ok_or_else(|| not_found(LocationKind::Building, id))
    }

    /// Get a building by id, mutably
    ///
    /// Callers must keep level and room ids unique; use the registry's level
    /// and room methods where possible.
    pub fn building_mut(&mut self, id: LocationId) -> ServiceResult<&mut Building> {
        let idx = *self
            .building_index
            .get(&id)
            .ok_or_else(|| not_found(LocationKind::Building, id))?;
        Ok(&mut self.buildings[idx])
    }

    /// Add a building; its id must not be in use
    pub fn add_building(&mut self, building: Building) -> ServiceResult<&Building> {
        if self.contains_building(building.id()) {
            warn!("Rejected building {}: id already in use", building.id());
            return Err(ServiceError::duplicate(LocationKind::Building, building.id()));
        }
        ensure_unique_levels(&building)?;

        info!("Adding building {} \"{}\"", building.id(), building.name());
        let idx = self.buildings.len();
        self.building_index.insert(building.id(), idx);
        self.buildings.push(building);
        Ok(&self.buildings[idx])
    }

    /// Replace a building's name and levels, keeping its id
    pub fn update_building(&mut self, id: LocationId, update: Building) -> ServiceResult<&Building> {
        ensure_unique_levels(&update)?;
        let building = self.building_mut(id)?;
        building.update_from(update);
        info!("Updated building {}", id);
        Ok(&*building)
    }

    /// Remove a building and return it
    pub fn delete_building(&mut self, id: LocationId) -> ServiceResult<Building> {
        let idx = *self
            .building_index
            .get(&id)
            .ok_or_else(|| not_found(LocationKind::Building, id))?;
        let removed = self.buildings.remove(idx);
        self.rebuild_indices();
        info!("Deleted building {}", id);
        Ok(removed)
    }

    // Levels

    /// All levels of a building
    pub fn all_levels(&self, building_id: LocationId) -> ServiceResult<&[Level]> {
        Ok(self.building(building_id)?.levels())
    }

    /// Get a level within a building
    pub fn level(&self, building_id: LocationId, level_id: LocationId) -> ServiceResult<&Level> {
        Ok(self.building(building_id)?.level(level_id)?)
    }

    /// Add a level to a building; its id must not be used by a sibling
    pub fn add_level(&mut self, building_id: LocationId, level: Level) -> ServiceResult<&Level> {
        ensure_unique(level.rooms().iter().map(Room::id), LocationKind::Room)?;
        let building = self.building_mut(building_id)?;
        if building.contains_level(level.id()) {
            warn!("Rejected level {} in building {}: id already in use", level.id(), building_id);
            return Err(ServiceError::duplicate(LocationKind::Level, level.id()));
        }

        info!("Adding level {} \"{}\" to building {}", level.id(), level.name(), building_id);
        building.add_level(level);
        let idx = building.level_count() - 1;
        Ok(&building.levels()[idx])
    }

    /// Replace a level's name and rooms, keeping its id
    pub fn update_level(
        &mut self,
        building_id: LocationId,
        level_id: LocationId,
        update: Level,
    ) -> ServiceResult<&Level> {
        ensure_unique(update.rooms().iter().map(Room::id), LocationKind::Room)?;
        let level = self.building_mut(building_id)?.level_mut(level_id)?;
        level.update_from(update);
        info!("Updated level {} in building {}", level_id, building_id);
        Ok(&*level)
    }

    /// Remove a level from a building and return it
    pub fn delete_level(&mut self, building_id: LocationId, level_id: LocationId) -> ServiceResult<Level> {
        let removed = self.building_mut(building_id)?.remove_level_by_id(level_id)?;
        info!("Deleted level {} from building {}", level_id, building_id);
        Ok(removed)
    }

    // Rooms

    /// All rooms on a level
    pub fn all_rooms(&self, building_id: LocationId, level_id: LocationId) -> ServiceResult<&[Room]> {
        Ok(self.level(building_id, level_id)?.rooms())
    }

    /// Get a room on a level
    pub fn room(
        &self,
        building_id: LocationId,
        level_id: LocationId,
        room_id: LocationId,
    ) -> ServiceResult<&Room> {
        Ok(self.level(building_id, level_id)?.room(room_id)?)
    }

    fn level_mut(&mut self, building_id: LocationId, level_id: LocationId) -> ServiceResult<&mut Level> {
        Ok(self.building_mut(building_id)?.level_mut(level_id)?)
    }

    /// Add a room to a level; its id must not be used by a sibling
    pub fn add_room(
        &mut self,
        building_id: LocationId,
        level_id: LocationId,
        room: Room,
    ) -> ServiceResult<&Room> {
        let level = self.level_mut(building_id, level_id)?;
        if level.contains_room(room.id()) {
            warn!("Rejected room {} on level {}: id already in use", room.id(), level_id);
            return Err(ServiceError::duplicate(LocationKind::Room, room.id()));
        }

        info!("Adding room {} \"{}\" to level {} in building {}", room.id(), room.name(), level_id, building_id);
        level.add_room(room);
        let idx = level.room_count() - 1;
        Ok(&level.rooms()[idx])
    }

    /// Replace a room's name and measurements, keeping its id
    pub fn update_room(
        &mut self,
        building_id: LocationId,
        level_id: LocationId,
        room_id: LocationId,
        update: &Room,
    ) -> ServiceResult<&Room> {
        let room = self.level_mut(building_id, level_id)?.room_mut(room_id)?;
        room.update_from(update);
        info!("Updated room {} on level {} in building {}", room_id, level_id, building_id);
        Ok(&*room)
    }

    /// Remove a room from a level and return it
    pub fn delete_room(
        &mut self,
        building_id: LocationId,
        level_id: LocationId,
        room_id: LocationId,
    ) -> ServiceResult<Room> {
        let removed = self.level_mut(building_id, level_id)?.remove_room_by_id(room_id)?;
        info!("Deleted room {} from level {} in building {}", room_id, level_id, building_id);
        Ok(removed)
    }

    // Queries

    /// Resolve a path one step at a time
    ///
    /// A room id without a level id is ignored and the path resolves to the
    /// building.
    pub fn resolve(&self, path: &LocationPath) -> ServiceResult<LocationRef<'_>> {
        let building = self.building(path.building)?;
        let Some(level_id) = path.level else {
            return Ok(LocationRef::Building(building));
        };

        let level = building.level(level_id)?;
        match path.room {
            Some(room_id) => Ok(LocationRef::Room(level.room(room_id)?)),
            None => Ok(LocationRef::Level(level)),
        }
    }

    /// Compute a plain metric for the node at `path`
    pub fn metric_at(&self, path: &LocationPath, kind: MetricKind) -> ServiceResult<f64> {
        let node = self.resolve(path)?;
        let value = compute_metric(&node, kind);
        debug!(%path, metric = %kind, value, "Computed metric");
        Ok(value)
    }

    /// Compute a cost metric for the node at `path`
    pub fn cost_at(&self, path: &LocationPath, kind: CostKind, unit_cost: f64) -> ServiceResult<f64> {
        let node = self.resolve(path)?;
        let value = compute_cost(&node, kind, unit_cost);
        debug!(%path, cost = %kind, unit_cost, value, "Computed cost");
        Ok(value)
    }

    /// Find rooms under `path` whose heating ratio is strictly above `energy_limit`
    pub fn exceeding_heating_at(
        &self,
        path: &LocationPath,
        energy_limit: f64,
    ) -> ServiceResult<ExceedingHeating> {
        let node = self.resolve(path)?;
        let result = find_exceeding_heating(&node, energy_limit);
        debug!(%path, energy_limit, exceeding = result.count(), "Checked heating limit");
        Ok(result)
    }

    /// Build a full metrics report for the node at `path`
    pub fn report_at(&self, path: &LocationPath, settings: CostSettings) -> ServiceResult<MetricsReport> {
        let node = self.resolve(path)?;
        debug!(%path, "Building metrics report");
        Ok(MetricsReport::build(node, settings))
    }
}

fn not_found(kind: LocationKind, id: LocationId) -> ServiceError {
    crate::facility::LocationError::not_found(kind, id).into()
}

fn ensure_unique(ids: impl Iterator<Item = LocationId>, kind: LocationKind) -> ServiceResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ServiceError::duplicate(kind, id));
        }
    }
    Ok(())
}

fn ensure_unique_levels(building: &Building) -> ServiceResult<()> {
    ensure_unique(building.levels().iter().map(Level::id), LocationKind::Level)?;
    for level in building.levels() {
        ensure_unique(level.rooms().iter().map(Room::id), LocationKind::Room)?;
    }
    Ok(())
}
