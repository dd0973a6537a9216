#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Metadata Query Module
//!
//! Read-only topology queries (services, instances, endpoints, conjectural
//! dependency nodes) for the presentation layer. The storage DAO and the
//! service inventory cache are resolved lazily from the module registry.
//!
//! The module publishes `MetadataQueryClient` in the registry for consumption
//! by other modules.

pub mod config;
pub mod domain;
pub mod module;

pub use config::MetadataQueryConfig;
pub use module::{MODULE_NAME, MetadataQueryModule};
