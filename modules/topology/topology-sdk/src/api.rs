//! Public API trait for the metadata query module.

use async_trait::async_trait;

use crate::error::MetadataQueryError;
use crate::models::{
    Database, Endpoint, EndpointInfo, ServiceId, ServiceInstance, ServiceSummary, TimeWindow,
    TopologyBrief,
};

/// Read-only topology queries for the presentation layer.
///
/// Registered in the module registry under the `metadata_query` module:
///
/// ```ignore
/// let queries = registry.get::<dyn MetadataQueryClient>("metadata_query")?;
///
/// let window = TimeWindow::new(start_ms, end_ms)?;
/// let brief = queries.get_global_brief(window).await?;
/// let info = queries.get_endpoint_info("42_/api/orders").await?;
/// ```
///
/// Collaborator failures are returned unchanged; nothing is retried.
#[async_trait]
pub trait MetadataQueryClient: Send + Sync {
    /// Service, endpoint and conjectural-node counts.
    ///
    /// The five counts are fetched independently and are not a consistent
    /// snapshot. If any of them fails, the whole call fails.
    async fn get_global_brief(&self, window: TimeWindow)
    -> Result<TopologyBrief, MetadataQueryError>;

    async fn get_all_services(
        &self,
        window: TimeWindow,
    ) -> Result<Vec<ServiceSummary>, MetadataQueryError>;

    async fn get_all_browser_services(
        &self,
        window: TimeWindow,
    ) -> Result<Vec<ServiceSummary>, MetadataQueryError>;

    async fn get_all_databases(&self) -> Result<Vec<Database>, MetadataQueryError>;

    async fn search_services(
        &self,
        window: TimeWindow,
        keyword: &str,
    ) -> Result<Vec<ServiceSummary>, MetadataQueryError>;

    async fn get_service_instances(
        &self,
        window: TimeWindow,
        service_id: ServiceId,
    ) -> Result<Vec<ServiceInstance>, MetadataQueryError>;

    async fn search_endpoint(
        &self,
        keyword: &str,
        service_id: ServiceId,
        limit: u32,
    ) -> Result<Vec<Endpoint>, MetadataQueryError>;

    async fn search_service(
        &self,
        service_code: &str,
    ) -> Result<Option<ServiceSummary>, MetadataQueryError>;

    /// Resolves an encoded endpoint id (see [`crate::endpoint_id`]).
    ///
    /// # Errors
    ///
    /// - `InvalidEndpointId` if `endpoint_id` is malformed
    /// - `ServiceNotFound` if the owning service is not in the inventory
    async fn get_endpoint_info(&self, endpoint_id: &str)
    -> Result<EndpointInfo, MetadataQueryError>;
}
