//! Configuration for the metadata query module.

use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_MODULE: &str = "storage";
pub const DEFAULT_CORE_MODULE: &str = "core";

/// Metadata query configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetadataQueryConfig {
    /// Registry module that publishes the `MetadataQueryDao`.
    pub storage_module: String,

    /// Registry module that publishes the `ServiceInventoryCache`.
    pub core_module: String,
}

impl Default for MetadataQueryConfig {
    fn default() -> Self {
        Self {
            storage_module: DEFAULT_STORAGE_MODULE.to_owned(),
            core_module: DEFAULT_CORE_MODULE.to_owned(),
        }
    }
}
