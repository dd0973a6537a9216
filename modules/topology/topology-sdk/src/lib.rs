#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Topology SDK
//!
//! Public surface of the `metadata_query` module:
//!
//! - [`MetadataQueryClient`] - read-only topology queries for the presentation layer
//! - [`MetadataQueryDao`], [`ServiceInventoryCache`] - collaborators the facade consumes
//! - [`endpoint_id`] - the composite endpoint identifier codec
//! - Domain models and error types

pub mod api;
pub mod backend;
pub mod endpoint_id;
pub mod error;
pub mod models;

pub use api::MetadataQueryClient;
pub use backend::{MetadataQueryDao, ServiceInventoryCache};
pub use endpoint_id::EndpointId;
pub use error::{
    BackendError, EndpointIdError, InvalidTimeWindow, MetadataQueryError, NotConjectural,
    UnknownNodeType,
};
pub use models::{
    Attribute, ConjecturalNodeType, Database, Endpoint, EndpointInfo, Language, NodeType,
    ServiceDescriptor, ServiceId, ServiceInstance, ServiceSummary, TimeWindow, TopologyBrief,
};
