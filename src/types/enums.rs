//! Enumeration types for the building info crate
//!
//! This module contains the enumerations shared between the location model,
//! the metric engine and the command line front end: node kinds, metric kinds,
//! cost kinds, query selectors and output formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Variant tag of a node in the location hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationKind {
    /// Root of a tree, owns levels
    Building,
    /// Floor of a building, owns rooms
    Level,
    /// Leaf node carrying the physical measurements
    Room,
}

impl LocationKind {
    /// The kind of node this kind accepts as a direct child, if any
    pub fn child_kind(self) -> Option<LocationKind> {
        match self {
            LocationKind::Building => Some(LocationKind::Level),
            LocationKind::Level => Some(LocationKind::Room),
            LocationKind::Room => None,
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationKind::Building => write!(f, "Building"),
            LocationKind::Level => write!(f, "Level"),
            LocationKind::Room => write!(f, "Room"),
        }
    }
}

/// Physical metrics computed by a plain recursive visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// Floor area
    Area,
    /// Volume
    Cube,
    /// Lighting power per unit of area
    LightPower,
    /// Heating energy per unit of volume
    EnergyConsumption,
}

impl MetricKind {
    /// All metric kinds in presentation order
    pub const ALL: [MetricKind; 4] =
        [MetricKind::Area, MetricKind::Cube, MetricKind::LightPower, MetricKind::EnergyConsumption];
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricKind::Area => write!(f, "area"),
            MetricKind::Cube => write!(f, "cube"),
            MetricKind::LightPower => write!(f, "light power"),
            MetricKind::EnergyConsumption => write!(f, "energy consumption"),
        }
    }
}

impl FromStr for MetricKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "area" => Ok(MetricKind::Area),
            "cube" | "volume" => Ok(MetricKind::Cube),
            "light-power" | "light power" | "lightpower" | "light" => Ok(MetricKind::LightPower),
            "energy-consumption" | "energy consumption" | "energyconsumption" | "energy" => {
                Ok(MetricKind::EnergyConsumption)
            }
            _ => Err(format!("Unknown metric: {}", s)),
        }
    }
}

/// Metrics that are priced with a unit cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostKind {
    /// Light power ratio multiplied by the unit light cost
    Light,
    /// Energy consumption ratio multiplied by the unit energy cost
    Energy,
}

impl fmt::Display for CostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostKind::Light => write!(f, "cost of lighting"),
            CostKind::Energy => write!(f, "cost of energy"),
        }
    }
}

impl FromStr for CostKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" | "light-cost" | "lighting" => Ok(CostKind::Light),
            "energy" | "energy-cost" | "heating" => Ok(CostKind::Energy),
            _ => Err(format!("Unknown cost kind: {}", s)),
        }
    }
}

/// What the command line front end should compute for the selected node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Query {
    /// One of the plain metrics
    Metric(MetricKind),
    /// One of the cost metrics, priced with the configured unit cost
    Cost(CostKind),
    /// Rooms whose heating ratio exceeds the configured limit
    ExceedingHeating,
    /// Every metric at once
    Report,
    /// Print the selected node itself
    List,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Metric(kind) => write!(f, "{}", kind),
            Query::Cost(kind) => write!(f, "{}", kind),
            Query::ExceedingHeating => write!(f, "exceeding heating"),
            Query::Report => write!(f, "report"),
            Query::List => write!(f, "list"),
        }
    }
}

impl FromStr for Query {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light-cost" => Ok(Query::Cost(CostKind::Light)),
            "energy-cost" => Ok(Query::Cost(CostKind::Energy)),
            "exceeding-heating" | "exceeding heating" => Ok(Query::ExceedingHeating),
            "report" => Ok(Query::Report),
            "list" | "show" => Ok(Query::List),
            other => other
                .parse::<MetricKind>()
                .map(Query::Metric)
                .map_err(|_| format!("Unknown query: {}", s)),
        }
    }
}

/// Output format options for command line results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Pretty printed JSON
    Json,
    /// Human readable text
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Text => write!(f, "Text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
