#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Common test utilities for metadata query integration tests

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use modkit::ModuleRegistry;
use topology_sdk::{
    BackendError, ConjecturalNodeType, Database, Endpoint, MetadataQueryDao, NodeType,
    ServiceDescriptor, ServiceId, ServiceInstance, ServiceInventoryCache, ServiceSummary,
    TimeWindow, endpoint_id,
};

/// The sub-query of `get_global_brief` a `MockDao` should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountQuery {
    Services,
    Endpoints,
    Conjectural(ConjecturalNodeType),
}

impl CountQuery {
    pub const ALL: [Self; 5] = [
        Self::Services,
        Self::Endpoints,
        Self::Conjectural(ConjecturalNodeType::Database),
        Self::Conjectural(ConjecturalNodeType::Cache),
        Self::Conjectural(ConjecturalNodeType::Mq),
    ];
}

/// DAO with fixed answers and a call counter.
pub struct MockDao {
    pub services: u64,
    pub endpoints: u64,
    pub databases: u64,
    pub caches: u64,
    pub mqs: u64,
    pub fail_on: Option<CountQuery>,
    pub label: &'static str,
    calls: AtomicUsize,
}

impl MockDao {
    pub fn new(label: &'static str) -> Self {
        Self {
            services: 5,
            endpoints: 12,
            databases: 2,
            caches: 1,
            mqs: 0,
            fail_on: None,
            label,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_on(query: CountQuery) -> Self {
        Self {
            fail_on: Some(query),
            ..Self::new("failing")
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn count(&self, query: CountQuery, value: u64) -> Result<u64, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on == Some(query) {
            return Err(BackendError::Io(format!("{query:?} query failed")));
        }
        Ok(value)
    }

    fn summary(&self) -> ServiceSummary {
        ServiceSummary {
            id: 1,
            name: self.label.to_owned(),
        }
    }
}

#[async_trait]
impl MetadataQueryDao for MockDao {
    async fn count_services(&self, _window: TimeWindow) -> Result<u64, BackendError> {
        self.count(CountQuery::Services, self.services)
    }

    async fn count_endpoints(&self) -> Result<u64, BackendError> {
        self.count(CountQuery::Endpoints, self.endpoints)
    }

    async fn count_conjectural_nodes(
        &self,
        kind: ConjecturalNodeType,
    ) -> Result<u64, BackendError> {
        let value = match kind {
            ConjecturalNodeType::Database => self.databases,
            ConjecturalNodeType::Cache => self.caches,
            ConjecturalNodeType::Mq => self.mqs,
        };
        self.count(CountQuery::Conjectural(kind), value)
    }

    async fn list_services(&self, _window: TimeWindow) -> Result<Vec<ServiceSummary>, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![self.summary()])
    }

    async fn list_browser_services(
        &self,
        _window: TimeWindow,
    ) -> Result<Vec<ServiceSummary>, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn list_databases(&self) -> Result<Vec<Database>, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![Database {
            id: 9,
            name: "orders-db:3306".to_owned(),
            db_type: "Mysql".to_owned(),
        }])
    }

    async fn search_services(
        &self,
        _window: TimeWindow,
        keyword: &str,
    ) -> Result<Vec<ServiceSummary>, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(std::iter::once(self.summary())
            .filter(|s| s.name.contains(keyword))
            .collect())
    }

    async fn list_service_instances(
        &self,
        _window: TimeWindow,
        _service_id: ServiceId,
    ) -> Result<Vec<ServiceInstance>, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(BackendError::Unavailable("instances index not ready".to_owned()))
    }

    async fn search_endpoints(
        &self,
        keyword: &str,
        service_id: ServiceId,
        limit: u32,
    ) -> Result<Vec<Endpoint>, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(["/api/orders", "/api/orders/{id}", "/health"]
            .into_iter()
            .filter(|name| name.contains(keyword))
            .take(limit as usize)
            .map(|name| Endpoint {
                id: endpoint_id::encode(service_id, name),
                name: name.to_owned(),
            })
            .collect())
    }

    async fn search_service_by_code(
        &self,
        code: &str,
    ) -> Result<Option<ServiceSummary>, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok((code == self.label).then(|| self.summary()))
    }
}

/// Inventory backed by a fixed map.
#[derive(Default)]
pub struct MockInventoryCache {
    services: HashMap<ServiceId, ServiceDescriptor>,
    lookups: AtomicUsize,
}

impl MockInventoryCache {
    pub fn with_service(mut self, id: ServiceId, name: &str) -> Self {
        self.services.insert(
            id,
            ServiceDescriptor {
                id,
                name: name.to_owned(),
                node_type: NodeType::Normal,
            },
        );
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ServiceInventoryCache for MockInventoryCache {
    async fn get(&self, service_id: ServiceId) -> Result<Option<ServiceDescriptor>, BackendError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.services.get(&service_id).cloned())
    }
}

/// Inventory whose every lookup fails with the same error.
pub struct FailingInventoryCache {
    error: BackendError,
}

impl FailingInventoryCache {
    pub fn new(error: BackendError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl ServiceInventoryCache for FailingInventoryCache {
    async fn get(&self, _service_id: ServiceId) -> Result<Option<ServiceDescriptor>, BackendError> {
        Err(self.error.clone())
    }
}

pub fn window() -> TimeWindow {
    TimeWindow::new(1_700_000_000_000, 1_700_000_900_000).unwrap()
}

/// Registry with `dao` under `storage` and `cache` under `core`.
pub fn registry_with(
    dao: Arc<MockDao>,
    cache: Arc<MockInventoryCache>,
) -> Arc<ModuleRegistry> {
    let registry = Arc::new(ModuleRegistry::new());
    registry.register::<dyn MetadataQueryDao>("storage", dao);
    registry.register::<dyn ServiceInventoryCache>("core", cache);
    registry
}
