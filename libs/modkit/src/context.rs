use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::config::{ConfigError, ConfigProvider, module_config_or_default};
use crate::registry::ModuleRegistry;

/// Module execution context, passed to `Module::init`.
///
/// Provides access to:
/// - **Configuration**: type-safe config loading via `config()`
/// - **Service discovery**: the process-wide [`ModuleRegistry`] for publishing
///   and consuming other modules' clients
///
/// ```ignore
/// async fn init(&self, ctx: &ModuleCtx) -> anyhow::Result<()> {
///     let cfg: MyConfig = ctx.config()?;
///     ctx.registry().register::<dyn MyApi>(ctx.module_name(), Arc::new(MyService::new(cfg)));
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ModuleCtx {
    module_name: Arc<str>,
    config_provider: Arc<dyn ConfigProvider>,
    registry: Arc<ModuleRegistry>,
}

impl ModuleCtx {
    pub fn new(
        module_name: impl Into<Arc<str>>,
        config_provider: Arc<dyn ConfigProvider>,
        registry: Arc<ModuleRegistry>,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            config_provider,
            registry,
        }
    }

    #[inline]
    #[must_use]
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    #[inline]
    #[must_use]
    pub fn config_provider(&self) -> &dyn ConfigProvider {
        &*self.config_provider
    }

    /// Shared handle to the module registry.
    #[inline]
    #[must_use]
    pub fn registry(&self) -> Arc<ModuleRegistry> {
        self.registry.clone()
    }

    /// Deserialize the module's config section into T, or use defaults if missing.
    ///
    /// Reads the `config` field of `modules.<name> = { config: ... }`.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidConfig` if the section exists but does not deserialize.
    pub fn config<T: DeserializeOwned + Default>(&self) -> Result<T, ConfigError> {
        module_config_or_default(self.config_provider.as_ref(), &self.module_name)
    }
}
