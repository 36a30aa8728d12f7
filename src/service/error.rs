//! Error types for the registry and front-end layer

use crate::facility::LocationError;
use crate::types::{LocationId, LocationKind};
use thiserror::Error;

/// Errors raised by the registry, reports and persistence
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A structural or lookup error from the location tree
    #[error(transparent)]
    Location(#[from] LocationError),

    /// A node with the same id already exists among its siblings
    #[error("{kind} with ID: {id} already exists")]
    DuplicateId {
        /// Kind of the rejected node
        kind: LocationKind,
        /// The clashing id
        id: LocationId,
    },

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    /// Create a duplicate id error
    pub fn duplicate(kind: LocationKind, id: LocationId) -> Self {
        Self::DuplicateId { kind, id }
    }

    /// Whether the error means a requested node does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::Location(error) if error.is_not_found())
    }

    /// Whether the error means the request clashes with existing data
    pub fn is_conflict(&self) -> bool {
        matches!(self, ServiceError::DuplicateId { .. })
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            ServiceError::Location(error) => error.category(),
            ServiceError::DuplicateId { .. } => "Conflict",
            ServiceError::Io(_) => "IO",
            ServiceError::Serialization(_) => "Serialization",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
