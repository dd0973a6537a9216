//! Metadata query module.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use modkit::Module;
use modkit::context::ModuleCtx;
use topology_sdk::MetadataQueryClient;
use tracing::info;

use crate::config::MetadataQueryConfig;
use crate::domain::{MetadataQueryLocalClient, Service};

/// Registry name of this module.
pub const MODULE_NAME: &str = "metadata_query";

/// Metadata query module.
///
/// Publishes `MetadataQueryClient` under its own module name. The storage DAO
/// and the service inventory cache are resolved on the first query, so their
/// modules may be initialized after this one.
#[derive(Default)]
pub struct MetadataQueryModule {
    service: OnceLock<Arc<Service>>,
}

#[async_trait]
impl Module for MetadataQueryModule {
    #[tracing::instrument(skip_all, fields(module = ctx.module_name()))]
    async fn init(&self, ctx: &ModuleCtx) -> anyhow::Result<()> {
        let cfg: MetadataQueryConfig = ctx.config()?;
        info!(
            storage_module = %cfg.storage_module,
            core_module = %cfg.core_module,
            "Initializing metadata_query module"
        );

        let registry = ctx.registry();
        let svc = Arc::new(Service::new(registry.clone(), &cfg));

        let api: Arc<dyn MetadataQueryClient> =
            Arc::new(MetadataQueryLocalClient::new(svc.clone()));
        registry.register::<dyn MetadataQueryClient>(ctx.module_name(), api);

        self.service
            .set(svc)
            .map_err(|_| anyhow::anyhow!("Service already initialized"))?;

        Ok(())
    }
}
