//! Identifier type for buildings, levels and rooms
//!
//! Every node in the location hierarchy carries an integer identifier. The
//! identifier is shared across node kinds: a building, a level and a room may
//! all use `1` without conflict, because lookups are always scoped to the
//! children of one parent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a location node (building, level or room)
///
/// Serialized as a bare integer so that trees round-trip through the
/// `id` field of the JSON representation unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub i64);

impl LocationId {
    /// Wrap a raw integer identifier
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw integer value
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for LocationId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<LocationId> for i64 {
    fn from(id: LocationId) -> Self {
        id.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LocationId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(LocationId)
    }
}
