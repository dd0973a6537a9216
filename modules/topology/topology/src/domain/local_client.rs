//! Local (in-process) client for the metadata query module.

use std::sync::Arc;

use async_trait::async_trait;
use topology_sdk::{
    Database, Endpoint, EndpointInfo, MetadataQueryClient, MetadataQueryError, ServiceId,
    ServiceInstance, ServiceSummary, TimeWindow, TopologyBrief,
};

use super::{DomainError, Service};

/// Local client wrapping the metadata query service.
///
/// Registered in the module registry by the module during `init()`.
pub struct MetadataQueryLocalClient {
    svc: Arc<Service>,
}

impl MetadataQueryLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(operation: &'static str) -> impl FnOnce(DomainError) -> MetadataQueryError {
    move |e| {
        tracing::error!(operation = operation, error = ?e, "metadata_query call failed");
        e.into()
    }
}

#[async_trait]
impl MetadataQueryClient for MetadataQueryLocalClient {
    async fn get_global_brief(
        &self,
        window: TimeWindow,
    ) -> Result<TopologyBrief, MetadataQueryError> {
        self.svc
            .get_global_brief(window)
            .await
            .map_err(log_and_convert("get_global_brief"))
    }

    async fn get_all_services(
        &self,
        window: TimeWindow,
    ) -> Result<Vec<ServiceSummary>, MetadataQueryError> {
        self.svc
            .get_all_services(window)
            .await
            .map_err(log_and_convert("get_all_services"))
    }

    async fn get_all_browser_services(
        &self,
        window: TimeWindow,
    ) -> Result<Vec<ServiceSummary>, MetadataQueryError> {
        self.svc
            .get_all_browser_services(window)
            .await
            .map_err(log_and_convert("get_all_browser_services"))
    }

    async fn get_all_databases(&self) -> Result<Vec<Database>, MetadataQueryError> {
        self.svc
            .get_all_databases()
            .await
            .map_err(log_and_convert("get_all_databases"))
    }

    async fn search_services(
        &self,
        window: TimeWindow,
        keyword: &str,
    ) -> Result<Vec<ServiceSummary>, MetadataQueryError> {
        self.svc
            .search_services(window, keyword)
            .await
            .map_err(log_and_convert("search_services"))
    }

    async fn get_service_instances(
        &self,
        window: TimeWindow,
        service_id: ServiceId,
    ) -> Result<Vec<ServiceInstance>, MetadataQueryError> {
        self.svc
            .get_service_instances(window, service_id)
            .await
            .map_err(log_and_convert("get_service_instances"))
    }

    async fn search_endpoint(
        &self,
        keyword: &str,
        service_id: ServiceId,
        limit: u32,
    ) -> Result<Vec<Endpoint>, MetadataQueryError> {
        self.svc
            .search_endpoint(keyword, service_id, limit)
            .await
            .map_err(log_and_convert("search_endpoint"))
    }

    async fn search_service(
        &self,
        service_code: &str,
    ) -> Result<Option<ServiceSummary>, MetadataQueryError> {
        self.svc
            .search_service(service_code)
            .await
            .map_err(log_and_convert("search_service"))
    }

    async fn get_endpoint_info(
        &self,
        endpoint_id: &str,
    ) -> Result<EndpointInfo, MetadataQueryError> {
        self.svc
            .get_endpoint_info(endpoint_id)
            .await
            .map_err(log_and_convert("get_endpoint_info"))
    }
}
