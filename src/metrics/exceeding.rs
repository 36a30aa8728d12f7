//! Rooms whose heating ratio exceeds a limit
//!
//! [`ExceedingHeatingVisitor`] computes the same value as the energy metric
//! while collecting every room whose own ratio is strictly above the limit.
//! The collected list lives inside the visitor, so a visitor serves exactly
//! one traversal: build it, run it, consume it.

use crate::facility::Room;
use crate::metrics::intensity::EnergyVisitor;
use crate::metrics::visitor::{MetricVisitor, Visitable};
use serde::{Deserialize, Serialize};

/// Outcome of an exceeding-heating query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExceedingHeating {
    /// Energy consumption of the whole subtree
    pub total: f64,
    /// The limit the rooms were compared against
    pub energy_limit: f64,
    /// Rooms above the limit, in traversal order
    #[serde(rename = "exceedingRooms")]
    pub rooms: Vec<Room>,
}

impl ExceedingHeating {
    /// Number of flagged rooms
    pub fn count(&self) -> usize {
        self.rooms.len()
    }

    /// Whether no room exceeded the limit
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Energy consumption visitor that records rooms above a limit
#[derive(Debug, Clone)]
pub struct ExceedingHeatingVisitor {
    energy_limit: f64,
    energy: EnergyVisitor,
    rooms: Vec<Room>,
}

impl ExceedingHeatingVisitor {
    /// Create a visitor flagging rooms whose ratio is above `energy_limit`
    pub fn new(energy_limit: f64) -> Self {
        Self { energy_limit, energy: EnergyVisitor, rooms: Vec::new() }
    }

    /// Traverse `node` with a fresh visitor and return the total and the flagged rooms
    pub fn run<N: Visitable + ?Sized>(energy_limit: f64, node: &N) -> ExceedingHeating {
        let mut visitor = Self::new(energy_limit);
        let total = node.accept(&mut visitor);
        visitor.into_result(total)
    }

    /// Rooms flagged so far
    pub fn rooms_exceeding_limit(&self) -> &[Room] {
        &self.rooms
    }

    /// Consume the visitor, pairing the flagged rooms with the traversal total
    pub fn into_result(self, total: f64) -> ExceedingHeating {
        ExceedingHeating { total, energy_limit: self.energy_limit, rooms: self.rooms }
    }
}

impl MetricVisitor for ExceedingHeatingVisitor {
    fn visit_room(&mut self, room: &Room) -> f64 {
        let energy = room.accept(&mut self.energy);
        if energy > self.energy_limit {
            self.rooms.push(room.clone());
        }
        energy
    }
}
