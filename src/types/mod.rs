//! Core types and identifiers for the building info crate
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the crate.
//!
//! # Overview
//!
//! - **Identifiers**: integer identifiers shared by buildings, levels and rooms
//! - **Enums**: node kinds, metric kinds, cost kinds, queries and output formats
//! - **Configuration**: application configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use building_info::types::*;
//!
//! let id: LocationId = "1".parse().unwrap();
//! assert_eq!(id, LocationId::new(1));
//!
//! let metric: MetricKind = "energy-consumption".parse().unwrap();
//! assert_eq!(metric, MetricKind::EnergyConsumption);
//!
//! let config = AppConfig { unit_energy_cost: 5.0, ..Default::default() };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
