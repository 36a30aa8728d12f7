//! Metric reports
//!
//! A [`MetricsReport`] gathers every metric of one node into a single value
//! for the `report` query. It is serialized as JSON or rendered as text.

use crate::facility::{LocationRef, Room};
use crate::metrics::{compute_cost, compute_metric, find_exceeding_heating};
use crate::types::config::{defaults, AppConfig};
use crate::types::{CostKind, LocationId, LocationKind, MetricKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unit costs and threshold applied when a report is built
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostSettings {
    /// Unit cost of lighting
    pub unit_light_cost: f64,
    /// Unit cost of heating energy
    pub unit_energy_cost: f64,
    /// Heating ratio threshold for the exceeding-rooms list
    pub energy_limit: f64,
}

impl Default for CostSettings {
    fn default() -> Self {
        Self {
            unit_light_cost: defaults::UNIT_LIGHT_COST,
            unit_energy_cost: defaults::UNIT_ENERGY_COST,
            energy_limit: defaults::ENERGY_LIMIT,
        }
    }
}

impl From<&AppConfig> for CostSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            unit_light_cost: config.unit_light_cost,
            unit_energy_cost: config.unit_energy_cost,
            energy_limit: config.energy_limit,
        }
    }
}

/// Every metric of one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    /// Kind of the reported node
    pub kind: LocationKind,
    /// Identifier of the reported node
    pub id: LocationId,
    /// Name of the reported node
    pub name: String,
    /// Rooms in the subtree
    pub room_count: usize,
    /// Total floor area
    pub area: f64,
    /// Total volume
    pub cube: f64,
    /// Sum of per-room light power ratios
    pub light_power: f64,
    /// Sum of per-room heating ratios
    pub energy_consumption: f64,
    /// Light power priced at the configured unit cost
    pub light_cost: f64,
    /// Energy consumption priced at the configured unit cost
    pub energy_cost: f64,
    /// Settings the report was built with
    pub settings: CostSettings,
    /// Rooms whose heating ratio is above `settings.energy_limit`
    pub exceeding_rooms: Vec<Room>,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
}

impl MetricsReport {
    /// Compute every metric for `node`
    pub fn build(node: LocationRef<'_>, settings: CostSettings) -> Self {
        let exceeding = find_exceeding_heating(&node, settings.energy_limit);

        Self {
            kind: node.kind(),
            id: node.id(),
            name: node.name().to_string(),
            room_count: node.room_count(),
            area: compute_metric(&node, MetricKind::Area),
            cube: compute_metric(&node, MetricKind::Cube),
            light_power: compute_metric(&node, MetricKind::LightPower),
            energy_consumption: exceeding.total,
            light_cost: compute_cost(&node, CostKind::Light, settings.unit_light_cost),
            energy_cost: compute_cost(&node, CostKind::Energy, settings.unit_energy_cost),
            settings,
            exceeding_rooms: exceeding.rooms,
            generated_at: Utc::now(),
        }
    }

    /// Value of a plain metric as recorded in the report
    pub fn metric(&self, kind: MetricKind) -> f64 {
        match kind {
            MetricKind::Area => self.area,
            MetricKind::Cube => self.cube,
            MetricKind::LightPower => self.light_power,
            MetricKind::EnergyConsumption => self.energy_consumption,
        }
    }

    /// Human readable multi-line summary
    pub fn summary_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} {} \"{}\" ({} rooms)\n",
            self.kind, self.id, self.name, self.room_count
        ));
        for kind in MetricKind::ALL {
            out.push_str(&format!("  {:<20} {:.4}\n", kind.to_string(), self.metric(kind)));
        }
        out.push_str(&format!(
            "  {:<20} {:.4} (unit {})\n",
            CostKind::Light.to_string(),
            self.light_cost,
            self.settings.unit_light_cost
        ));
        out.push_str(&format!(
            "  {:<20} {:.4} (unit {})\n",
            CostKind::Energy.to_string(),
            self.energy_cost,
            self.settings.unit_energy_cost
        ));

        if self.exceeding_rooms.is_empty() {
            out.push_str(&format!("  no rooms above heating limit {}\n", self.settings.energy_limit));
        } else {
            out.push_str(&format!(
                "  {} rooms above heating limit {}:\n",
                self.exceeding_rooms.len(),
                self.settings.energy_limit
            ));
            for room in &self.exceeding_rooms {
                out.push_str(&format!("    - Room {} \"{}\"\n", room.id(), room.name()));
            }
        }

        out.push_str(&format!(
            "  generated at {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        out
    }
}
