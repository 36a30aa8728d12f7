//! Building Info
//!
//! A location hierarchy of buildings, levels and rooms with aggregate metrics
//! computed over any subtree.
//!
//! # Overview
//!
//! Rooms are the leaves and carry the physical measurements: floor area,
//! volume (`cube`), heating draw and lighting power. Levels own rooms and
//! buildings own levels. Metrics are visitors that walk a subtree and fold
//! the per-room values upwards.
//!
//! ## Key Features
//!
//! - **Typed hierarchy**: concrete `Building`, `Level` and `Room` structs plus
//!   the `Location` sum type for runtime-typed mutation
//! - **Metric visitors**: area, cube, light power, energy consumption, light
//!   and energy cost, rooms exceeding a heating limit
//! - **Registry**: CRUD over many buildings with sibling-unique ids and JSON
//!   persistence
//! - **Command line front end**: query any building, level or room
//!
//! ## Quick Start
//!
//! ```rust
//! use building_info::*;
//!
//! let mut building = Building::new(1, "Main");
//! let mut ground = Level::new(1, "Ground floor");
//! ground.add_room(Room::new(1, "Lab", 50.0, 120.0, 10.5, 20.0));
//! ground.add_room(Room::new(2, "Office", 60.0, 150.0, 15.0, 30.0));
//! building.add_level(ground);
//!
//! assert_eq!(compute_metric(&building, MetricKind::Area), 110.0);
//!
//! let exceeding = find_exceeding_heating(&building, 0.09);
//! assert_eq!(exceeding.rooms.len(), 1);
//! assert_eq!(exceeding.rooms[0].name(), "Office");
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: identifiers, enums and configuration
//! - [`facility`]: the location hierarchy, lookups and the synthetic generator
//! - [`metrics`]: the visitor protocol and every metric
//! - [`service`]: registry, reports, errors and logging for front ends
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod facility;
pub mod metrics;
pub mod service;
pub mod types;

// Core types and identifiers
pub use types::{
    AppConfig, ConfigError, ConfigValidationError, CostKind, LocationId, LocationKind, MetricKind,
    OutputFormat, Query,
};

// Location hierarchy
pub use facility::{
    Building, FacilityGenerator, Level, Location, LocationError, LocationRef, Room,
};

// Metrics
pub use metrics::{
    compute_cost, compute_metric, find_exceeding_heating, ExceedingHeating, MetricVisitor,
    Visitable,
};

// Registry and reports
pub use service::{
    BuildingRegistry, CostSettings, LocationPath, LoggingConfig, MetricsReport, ServiceError,
    ServiceResult,
};
