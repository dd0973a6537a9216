//! Error types for the topology metadata query module.

use thiserror::Error;

use crate::models::{NodeType, ServiceId};

/// Failure raised by a storage DAO or the inventory cache.
///
/// The metadata query facade forwards these unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The query could not be executed (connectivity, query execution failure).
    #[error("storage I/O error: {0}")]
    Io(String),

    /// The backend refused the request, e.g. while still starting up.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// An endpoint id that `endpoint_id::encode` could not have produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointIdError {
    #[error("malformed endpoint id '{id}': missing '_' separator")]
    MissingSeparator { id: String },

    #[error("malformed endpoint id '{id}': '{segment}' is not a canonical service id")]
    InvalidServiceId { id: String, segment: String },
}

/// Errors returned by [`crate::MetadataQueryClient`].
#[derive(Debug, Error)]
pub enum MetadataQueryError {
    /// A collaborator is missing from the module registry.
    ///
    /// `module` is the registry module that was looked up, `reason` says
    /// whether the module or the service it should publish was missing.
    #[error("configuration error: module '{module}': {reason}")]
    Configuration { module: String, reason: String },

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    InvalidEndpointId(#[from] EndpointIdError),

    /// The decoded service id has no inventory entry.
    #[error("service not found: {service_id}")]
    ServiceNotFound { service_id: ServiceId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown node type value: {0}")]
pub struct UnknownNodeType(pub i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("node type {0:?} is not a conjectural node type")]
pub struct NotConjectural(pub NodeType);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid time window: start {start} is after end {end}")]
pub struct InvalidTimeWindow {
    pub start: i64,
    pub end: i64,
}
