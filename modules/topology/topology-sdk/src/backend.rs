//! Collaborator contracts consumed by the metadata query facade.
//!
//! Implementations are published in the module registry by the modules that
//! own them: the storage module provides [`MetadataQueryDao`], the core module
//! provides [`ServiceInventoryCache`].
//!
//! ```ignore
//! registry.register::<dyn MetadataQueryDao>("storage", Arc::new(EsMetadataQueryDao::new(client)));
//! registry.register::<dyn ServiceInventoryCache>("core", Arc::new(inventory));
//! ```

use async_trait::async_trait;

use crate::error::BackendError;
use crate::models::{
    ConjecturalNodeType, Database, Endpoint, ServiceDescriptor, ServiceId, ServiceInstance,
    ServiceSummary, TimeWindow,
};

/// Topology queries answered by the durable store.
#[async_trait]
pub trait MetadataQueryDao: Send + Sync {
    /// Services that reported traffic inside `window`.
    async fn count_services(&self, window: TimeWindow) -> Result<u64, BackendError>;

    /// All known endpoints, regardless of time.
    async fn count_endpoints(&self) -> Result<u64, BackendError>;

    /// Conjectural nodes of one kind, regardless of time.
    async fn count_conjectural_nodes(
        &self,
        kind: ConjecturalNodeType,
    ) -> Result<u64, BackendError>;

    async fn list_services(&self, window: TimeWindow) -> Result<Vec<ServiceSummary>, BackendError>;

    async fn list_browser_services(
        &self,
        window: TimeWindow,
    ) -> Result<Vec<ServiceSummary>, BackendError>;

    async fn list_databases(&self) -> Result<Vec<Database>, BackendError>;

    async fn search_services(
        &self,
        window: TimeWindow,
        keyword: &str,
    ) -> Result<Vec<ServiceSummary>, BackendError>;

    async fn list_service_instances(
        &self,
        window: TimeWindow,
        service_id: ServiceId,
    ) -> Result<Vec<ServiceInstance>, BackendError>;

    /// At most `limit` endpoints of `service_id` whose name matches `keyword`.
    async fn search_endpoints(
        &self,
        keyword: &str,
        service_id: ServiceId,
        limit: u32,
    ) -> Result<Vec<Endpoint>, BackendError>;

    async fn search_service_by_code(
        &self,
        code: &str,
    ) -> Result<Option<ServiceSummary>, BackendError>;
}

/// In-memory, read-through service inventory.
#[async_trait]
pub trait ServiceInventoryCache: Send + Sync {
    /// `Ok(None)` when the service is unknown.
    async fn get(&self, service_id: ServiceId) -> Result<Option<ServiceDescriptor>, BackendError>;
}
