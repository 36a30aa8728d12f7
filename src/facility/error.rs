//! Structural errors raised by the location hierarchy

use crate::types::{LocationId, LocationKind};
use thiserror::Error;

/// Errors raised by structural operations on the location hierarchy
///
/// Every variant is local and deterministic: the operation that raised it was
/// rejected and left the tree unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The parent does not accept children of this kind
    #[error("{parent} only accepts {expected} children, got {child}")]
    InvalidChildType {
        /// Kind of the node being mutated
        parent: LocationKind,
        /// Kind the parent accepts
        expected: LocationKind,
        /// Kind that was supplied
        child: LocationKind,
    },

    /// The node kind does not support this operation at all
    #[error("Cannot {operation} location on {kind}")]
    UnsupportedOperation {
        /// Kind of the node being mutated
        kind: LocationKind,
        /// Name of the rejected operation
        operation: &'static str,
    },

    /// No child matched the lookup
    #[error("{kind} with ID: {id} not found")]
    NotFound {
        /// Kind of the node that was looked up
        kind: LocationKind,
        /// Identifier that was looked up
        id: LocationId,
    },
}

impl LocationError {
    /// Create a not-found error for a lookup by id
    pub fn not_found(kind: LocationKind, id: LocationId) -> Self {
        Self::NotFound { kind, id }
    }

    /// Create an error for a mutation attempted on a room
    pub fn unsupported_on_room(operation: &'static str) -> Self {
        Self::UnsupportedOperation { kind: LocationKind::Room, operation }
    }

    /// Whether the error means that the requested node does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            LocationError::InvalidChildType { .. } => "Invalid Child Type",
            LocationError::UnsupportedOperation { .. } => "Unsupported Operation",
            LocationError::NotFound { .. } => "Not Found",
        }
    }
}
