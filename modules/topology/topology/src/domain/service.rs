//! Domain service for the metadata query module.
//!
//! Collaborator discovery is lazy: the storage DAO and the inventory cache are
//! looked up in the module registry on the first query that needs them, so the
//! facade can be constructed before its providers have registered.

use std::sync::Arc;

use modkit::ModuleRegistry;
use tokio::sync::OnceCell;
use topology_sdk::{
    ConjecturalNodeType, Database, Endpoint, EndpointId, EndpointInfo, MetadataQueryDao,
    ServiceId, ServiceInstance, ServiceInventoryCache, ServiceSummary, TimeWindow, TopologyBrief,
};
use tracing::info;

use super::error::DomainError;
use crate::config::MetadataQueryConfig;

/// Metadata query facade.
///
/// Resolved collaborators are cached for the lifetime of the service; a failed
/// resolution is not cached and is retried by the next query.
pub struct Service {
    registry: Arc<ModuleRegistry>,
    storage_module: String,
    core_module: String,
    dao: OnceCell<Arc<dyn MetadataQueryDao>>,
    inventory_cache: OnceCell<Arc<dyn ServiceInventoryCache>>,
}

impl Service {
    /// Creates a service with lazy collaborator resolution.
    #[must_use]
    pub fn new(registry: Arc<ModuleRegistry>, cfg: &MetadataQueryConfig) -> Self {
        Self {
            registry,
            storage_module: cfg.storage_module.clone(),
            core_module: cfg.core_module.clone(),
            dao: OnceCell::new(),
            inventory_cache: OnceCell::new(),
        }
    }

    /// Creates a service wired to the given collaborators. The registry is never consulted.
    #[must_use]
    pub fn with_clients(
        dao: Arc<dyn MetadataQueryDao>,
        inventory_cache: Arc<dyn ServiceInventoryCache>,
    ) -> Self {
        // Both cells are already set, so the empty registry and the default
        // module names below are never read.
        let cfg = MetadataQueryConfig::default();
        Self {
            registry: Arc::new(ModuleRegistry::new()),
            storage_module: cfg.storage_module,
            core_module: cfg.core_module,
            dao: OnceCell::from(dao),
            inventory_cache: OnceCell::from(inventory_cache),
        }
    }

    async fn dao(&self) -> Result<&Arc<dyn MetadataQueryDao>, DomainError> {
        self.dao
            .get_or_try_init(|| async { self.resolve::<dyn MetadataQueryDao>(&self.storage_module) })
            .await
    }

    async fn inventory_cache(&self) -> Result<&Arc<dyn ServiceInventoryCache>, DomainError> {
        self.inventory_cache
            .get_or_try_init(|| async {
                self.resolve::<dyn ServiceInventoryCache>(&self.core_module)
            })
            .await
    }

    /// Looks up `T` among the services published by `module`.
    fn resolve<T>(&self, module: &str) -> Result<Arc<T>, DomainError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let client = self
            .registry
            .find(module)
            .and_then(|provider| provider.get::<T>())
            .map_err(|source| DomainError::DependencyUnavailable {
                module: module.to_owned(),
                source,
            })?;

        info!(
            module = %module,
            service = std::any::type_name::<T>(),
            "Resolved metadata query dependency"
        );
        Ok(client)
    }

    /// Service, endpoint and conjectural-node counts.
    ///
    /// Sub-queries run one after another and are not a consistent snapshot.
    ///
    /// # Errors
    ///
    /// - `DependencyUnavailable` if the storage module cannot be resolved
    /// - `Backend` if any of the five counts fails
    #[tracing::instrument(skip_all, fields(window.start = window.start(), window.end = window.end()))]
    pub async fn get_global_brief(&self, window: TimeWindow) -> Result<TopologyBrief, DomainError> {
        let dao = self.dao().await?;

        let num_of_service = dao.count_services(window).await?;
        let num_of_endpoint = dao.count_endpoints().await?;
        let num_of_database = dao
            .count_conjectural_nodes(ConjecturalNodeType::Database)
            .await?;
        let num_of_cache = dao
            .count_conjectural_nodes(ConjecturalNodeType::Cache)
            .await?;
        let num_of_mq = dao.count_conjectural_nodes(ConjecturalNodeType::Mq).await?;

        Ok(TopologyBrief {
            num_of_service,
            num_of_endpoint,
            num_of_database,
            num_of_cache,
            num_of_mq,
        })
    }

    /// # Errors
    /// `DependencyUnavailable` if the storage module cannot be resolved, `Backend` on DAO failure.
    pub async fn get_all_services(
        &self,
        window: TimeWindow,
    ) -> Result<Vec<ServiceSummary>, DomainError> {
        Ok(self.dao().await?.list_services(window).await?)
    }

    /// # Errors
    /// `DependencyUnavailable` if the storage module cannot be resolved, `Backend` on DAO failure.
    pub async fn get_all_browser_services(
        &self,
        window: TimeWindow,
    ) -> Result<Vec<ServiceSummary>, DomainError> {
        Ok(self.dao().await?.list_browser_services(window).await?)
    }

    /// # Errors
    /// `DependencyUnavailable` if the storage module cannot be resolved, `Backend` on DAO failure.
    pub async fn get_all_databases(&self) -> Result<Vec<Database>, DomainError> {
        Ok(self.dao().await?.list_databases().await?)
    }

    /// # Errors
    /// `DependencyUnavailable` if the storage module cannot be resolved, `Backend` on DAO failure.
    #[tracing::instrument(skip_all, fields(keyword = %keyword))]
    pub async fn search_services(
        &self,
        window: TimeWindow,
        keyword: &str,
    ) -> Result<Vec<ServiceSummary>, DomainError> {
        Ok(self.dao().await?.search_services(window, keyword).await?)
    }

    /// # Errors
    /// `DependencyUnavailable` if the storage module cannot be resolved, `Backend` on DAO failure.
    #[tracing::instrument(skip_all, fields(service.id = service_id))]
    pub async fn get_service_instances(
        &self,
        window: TimeWindow,
        service_id: ServiceId,
    ) -> Result<Vec<ServiceInstance>, DomainError> {
        Ok(self
            .dao()
            .await?
            .list_service_instances(window, service_id)
            .await?)
    }

    /// At most `limit` endpoints of `service_id` matching `keyword`, ids already encoded.
    ///
    /// # Errors
    /// Same as [`Service::get_all_services`].
    #[tracing::instrument(skip_all, fields(keyword = %keyword, service.id = service_id, limit = limit))]
    pub async fn search_endpoint(
        &self,
        keyword: &str,
        service_id: ServiceId,
        limit: u32,
    ) -> Result<Vec<Endpoint>, DomainError> {
        Ok(self
            .dao()
            .await?
            .search_endpoints(keyword, service_id, limit)
            .await?)
    }

    /// Looks a service up by its exact code. `Ok(None)` when nothing matches.
    ///
    /// # Errors
    /// Same as [`Service::get_all_services`].
    #[tracing::instrument(skip_all, fields(service.code = service_code))]
    pub async fn search_service(
        &self,
        service_code: &str,
    ) -> Result<Option<ServiceSummary>, DomainError> {
        Ok(self
            .dao()
            .await?
            .search_service_by_code(service_code)
            .await?)
    }

    /// Decodes `endpoint_id` and joins it with the owning service's name.
    ///
    /// # Errors
    ///
    /// - `InvalidEndpointId` if `endpoint_id` is malformed (no collaborator is touched)
    /// - `ServiceNotFound` if the inventory has no entry for the decoded service id
    /// - `DependencyUnavailable`, `Backend` from the inventory cache
    #[tracing::instrument(skip_all, fields(endpoint.id = endpoint_id))]
    pub async fn get_endpoint_info(&self, endpoint_id: &str) -> Result<EndpointInfo, DomainError> {
        let decoded: EndpointId = endpoint_id.parse()?;

        let descriptor = self
            .inventory_cache()
            .await?
            .get(decoded.service_id)
            .await?
            .ok_or(DomainError::ServiceNotFound {
                service_id: decoded.service_id,
            })?;

        Ok(EndpointInfo {
            id: endpoint_id.to_owned(),
            name: decoded.endpoint_name,
            service_id: decoded.service_id,
            service_name: descriptor.name,
        })
    }
}
