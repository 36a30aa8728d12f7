//! Intensity metrics: light power per area and heating energy per volume
//!
//! Both aggregate as a sum of per-room ratios. The value for a level is the
//! sum of its rooms' own intensities, not the level's total draw divided by
//! its total area or volume.

use crate::facility::Room;
use crate::metrics::visitor::{ratio, MetricVisitor};

/// Light power ratio, `light / area` per room
#[derive(Debug, Clone, Copy, Default)]
pub struct LightVisitor;

impl MetricVisitor for LightVisitor {
    fn visit_room(&mut self, room: &Room) -> f64 {
        ratio(room.light(), room.area())
    }
}

/// Energy consumption ratio, `heating / cube` per room
#[derive(Debug, Clone, Copy, Default)]
pub struct EnergyVisitor;

impl MetricVisitor for EnergyVisitor {
    fn visit_room(&mut self, room: &Room) -> f64 {
        ratio(room.heating(), room.cube())
    }
}
