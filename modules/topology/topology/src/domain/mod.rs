//! Domain layer for the metadata query module.

pub mod error;
pub mod local_client;
pub mod service;

pub use error::DomainError;
pub use local_client::MetadataQueryLocalClient;
pub use service::Service;
