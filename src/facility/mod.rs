//! Location hierarchy: buildings, levels and rooms
//!
//! This module manages the composite location model: a building owns levels,
//! a level owns rooms, and rooms carry the physical measurements.
//!
//! # Overview
//!
//! - **Building**: root of a tree, owns an ordered list of levels
//! - **Level**: owns an ordered list of rooms
//! - **Room**: leaf with area, volume, heating and light measurements
//! - **Location**: closed sum over the three, with type-checked `add`/`remove`
//! - **Lookup helpers**: shallow find-by-id over one child list
//! - **FacilityGenerator**: synthetic trees for demos and tests
//!
//! # Usage Example
//!
//! ```rust
//! use building_info::facility::*;
//! use building_info::types::LocationId;
//!
//! let mut level = Level::new(1, "Ground floor");
//! level.add_room(Room::new(1, "Lobby", 50.0, 120.0, 10.5, 20.0));
//!
//! let mut building = Location::from(Building::new(1, "Main"));
//! building.add(Location::from(level)).unwrap();
//!
//! // Rooms cannot be attached directly to a building
//! let room = Room::new(2, "Office", 60.0, 150.0, 15.0, 30.0);
//! assert!(building.add(Location::from(room)).is_err());
//!
//! let lobby = building
//!     .as_building()
//!     .unwrap()
//!     .level(LocationId::new(1))
//!     .and_then(|level| level.room(LocationId::new(1)))
//!     .unwrap();
//! assert_eq!(lobby.name(), "Lobby");
//! ```

pub mod building;
pub mod error;
pub mod generator;
pub mod level;
pub mod location;
pub mod lookup;
pub mod room;

// Re-export all public types for convenience
pub use building::Building;
pub use error::LocationError;
pub use generator::FacilityGenerator;
pub use level::Level;
pub use location::{Location, LocationRef};
pub use lookup::{find_child_by_id, find_child_by_id_mut, remove_child_by_id, Identified};
pub use room::Room;
