//! Registry, reports and process plumbing around the metric engine
//!
//! - [`registry`]: owned set of buildings with CRUD and path-scoped queries
//! - [`report`]: all metrics of one node in a single value
//! - [`error`]: error type for this layer
//! - [`logging`]: tracing subscriber setup for the binary

pub mod error;
pub mod logging;
pub mod registry;
pub mod report;

pub use error::{ServiceError, ServiceResult};
pub use logging::{LoggingConfig, LoggingGuard};
pub use registry::{BuildingRegistry, LocationPath};
pub use report::{CostSettings, MetricsReport};
