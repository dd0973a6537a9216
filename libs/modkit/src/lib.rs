#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! ModKit core: module contract, execution context, configuration, logging
//! and the process-wide [`ModuleRegistry`] through which modules find each
//! other's clients.

pub mod config;
pub mod context;
pub mod contracts;
pub mod registry;
pub mod telemetry;

pub use config::{AppConfig, ConfigError, ConfigProvider};
pub use context::ModuleCtx;
pub use contracts::Module;
pub use registry::{ModuleProvider, ModuleRegistry, RegistryError};
