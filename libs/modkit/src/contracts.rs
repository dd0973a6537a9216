use async_trait::async_trait;

/// Core module: DI/wiring only.
///
/// `init` publishes the module's clients in the registry. It must not assume
/// that modules it consumes have finished their own `init`.
#[async_trait]
pub trait Module: Send + Sync + 'static {
    async fn init(&self, ctx: &crate::context::ModuleCtx) -> anyhow::Result<()>;
}
