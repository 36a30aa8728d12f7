//! Synthetic building generation
//!
//! This module contains a generator for creating building trees with
//! plausible room measurements. It is used to produce demo data and to drive
//! property tests over trees of arbitrary shape.

use crate::facility::{building::Building, level::Level, room::Room};
use rand::{prelude::*, rngs::StdRng, RngCore, SeedableRng};
use std::fmt;
use std::ops::Range;

/// Typical floor area of a generated room
const AREA_RANGE: Range<f64> = 8.0..120.0;
/// Typical ceiling height, multiplied by the area to get the volume
const HEIGHT_RANGE: Range<f64> = 2.4..4.2;
/// Heating draw per unit of volume
const HEATING_RATIO_RANGE: Range<f64> = 0.04..0.16;
/// Light draw per unit of area
const LIGHT_RATIO_RANGE: Range<f64> = 0.2..0.9;

const ROOM_NAMES: [&str; 8] =
    ["Office", "Meeting Room", "Kitchen", "Storage", "Laboratory", "Hall", "Archive", "Workshop"];

/// Generator for buildings, levels and rooms with sequential ids
pub struct FacilityGenerator {
    rng: Box<dyn RngCore>,
    next_room_id: i64,
}

impl fmt::Debug for FacilityGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacilityGenerator").field("next_room_id", &self.next_room_id).finish()
    }
}

impl Default for FacilityGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FacilityGenerator {
    /// Create a new generator seeded from the thread RNG
    pub fn new() -> Self {
        Self { rng: Box::new(thread_rng()), next_room_id: 1 }
    }

    /// Create a new generator with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: Box::new(StdRng::seed_from_u64(seed)), next_room_id: 1 }
    }

    /// Create a generator from an optional seed
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map(Self::with_seed).unwrap_or_default()
    }

    /// Generate a single room with plausible measurements
    pub fn generate_room(&mut self) -> Room {
        let id = self.next_room_id;
        self.next_room_id += 1;

        let area = round2(self.rng.gen_range(AREA_RANGE));
        let cube = round2(area * self.rng.gen_range(HEIGHT_RANGE));
        let heating = round2(cube * self.rng.gen_range(HEATING_RATIO_RANGE));
        let light = round2(area * self.rng.gen_range(LIGHT_RATIO_RANGE));
        let name = format!("{} {}", ROOM_NAMES[self.rng.gen_range(0..ROOM_NAMES.len())], id);

        Room::new(id, name, area, cube, heating, light)
    }

    /// Generate a level with the given number of rooms
    pub fn generate_level(&mut self, id: i64, room_count: usize) -> Level {
        let rooms = (0..room_count).map(|_| self.generate_room()).collect();
        Level::with_rooms(id, level_name(id), rooms)
    }

    /// Generate a building with `level_count` levels of `rooms_per_level` rooms
    ///
    /// Level ids start at 1 within the building; room ids keep counting
    /// across every building this generator produces.
    pub fn generate_building(
        &mut self,
        id: i64,
        name: impl Into<String>,
        level_count: usize,
        rooms_per_level: usize,
    ) -> Building {
        let levels = (1..=level_count as i64)
            .map(|level_id| self.generate_level(level_id, rooms_per_level))
            .collect();
        Building::with_levels(id, name, levels)
    }

    /// Generate a building whose levels have a random room count in `rooms_range`
    pub fn generate_irregular_building(
        &mut self,
        id: i64,
        level_count: usize,
        rooms_range: Range<usize>,
    ) -> Building {
        let levels = (1..=level_count as i64)
            .map(|level_id| {
                let rooms = if rooms_range.is_empty() {
                    rooms_range.start
                } else {
                    self.rng.gen_range(rooms_range.clone())
                };
                self.generate_level(level_id, rooms)
            })
            .collect();
        Building::with_levels(id, format!("Building {}", id), levels)
    }
}

fn level_name(id: i64) -> String {
    if id == 1 {
        "Ground floor".to_string()
    } else {
        format!("Floor {}", id - 1)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_building_shape() {
        let mut generator = FacilityGenerator::with_seed(1);
        let building = generator.generate_building(1, "Generated", 3, 4);

        assert_eq!(building.level_count(), 3);
        assert_eq!(building.room_count(), 12);
        assert_eq!(building.levels()[0].name(), "Ground floor");
        assert_eq!(building.levels()[2].name(), "Floor 2");

        let ids: Vec<i64> = building.all_rooms().map(|r| r.id().value()).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn test_generated_measurements_are_positive() {
        let mut generator = FacilityGenerator::with_seed(2);
        for _ in 0..50 {
            let room = generator.generate_room();
            assert!(room.area() > 0.0);
            assert!(room.cube() >= room.area() * 2.0);
            assert!(room.heating() > 0.0);
            assert!(room.light() > 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_building() {
        let a = FacilityGenerator::with_seed(99).generate_building(1, "A", 2, 3);
        let b = FacilityGenerator::with_seed(99).generate_building(1, "A", 2, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_irregular_building_respects_range() {
        let mut generator = FacilityGenerator::with_seed(5);
        let building = generator.generate_irregular_building(4, 6, 0..4);

        assert_eq!(building.level_count(), 6);
        assert!(building.levels().iter().all(|level| level.room_count() < 4));
    }
}
