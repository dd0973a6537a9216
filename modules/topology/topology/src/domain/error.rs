//! Domain errors for the metadata query facade.

use modkit::RegistryError;
use thiserror::Error;
use topology_sdk::{BackendError, EndpointIdError, MetadataQueryError, ServiceId};

#[derive(Error, Debug)]
pub enum DomainError {
    /// A collaborator could not be resolved from the module registry.
    #[error("dependency of module '{module}' unavailable: {source}")]
    DependencyUnavailable {
        module: String,
        #[source]
        source: RegistryError,
    },

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    InvalidEndpointId(#[from] EndpointIdError),

    #[error("service not found: {service_id}")]
    ServiceNotFound { service_id: ServiceId },
}

impl From<DomainError> for MetadataQueryError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::DependencyUnavailable { module, source } => Self::Configuration {
                module,
                reason: source.to_string(),
            },
            DomainError::Backend(e) => Self::Backend(e),
            DomainError::InvalidEndpointId(e) => Self::InvalidEndpointId(e),
            DomainError::ServiceNotFound { service_id } => Self::ServiceNotFound { service_id },
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn dependency_failure_maps_to_configuration_error() {
        let err = DomainError::DependencyUnavailable {
            module: "storage".to_owned(),
            source: RegistryError::ModuleNotFound {
                module: "storage".to_owned(),
            },
        };

        match MetadataQueryError::from(err) {
            MetadataQueryError::Configuration { module, reason } => {
                assert_eq!(module, "storage");
                assert_eq!(reason, "module not registered: storage");
            }
            other => panic!("Expected Configuration, got {other:?}"),
        }
    }

    #[test]
    fn missing_service_type_is_distinguishable_at_the_boundary() {
        let err = DomainError::DependencyUnavailable {
            module: "core".to_owned(),
            source: RegistryError::ModuleNotFound {
                module: "core".to_owned(),
            },
        };
        let module_missing = MetadataQueryError::from(err);

        let registry = modkit::ModuleRegistry::new();
        registry.register::<str>("core", std::sync::Arc::from("not an inventory"));
        let source = registry
            .get::<dyn topology_sdk::ServiceInventoryCache>("core")
            .err()
            .unwrap();
        let service_missing = MetadataQueryError::from(DomainError::DependencyUnavailable {
            module: "core".to_owned(),
            source,
        });

        match (module_missing, service_missing) {
            (
                MetadataQueryError::Configuration { module: a, reason: ra },
                MetadataQueryError::Configuration { module: b, reason: rb },
            ) => {
                assert_eq!((a.as_str(), b.as_str()), ("core", "core"));
                assert!(ra.contains("not registered"), "{ra}");
                assert!(rb.contains("provides no service"), "{rb}");
            }
            other => panic!("Expected two Configuration errors, got {other:?}"),
        }
    }

    #[test]
    fn backend_failure_is_forwarded_unchanged() {
        let backend = BackendError::Io("connection reset".to_owned());
        let err: MetadataQueryError = DomainError::from(backend.clone()).into();

        assert!(matches!(err, MetadataQueryError::Backend(ref e) if *e == backend));
        assert_eq!(err.to_string(), backend.to_string());
    }

    #[test]
    fn service_not_found_keeps_id() {
        let err: MetadataQueryError = DomainError::ServiceNotFound { service_id: 7 }.into();
        assert!(matches!(
            err,
            MetadataQueryError::ServiceNotFound { service_id: 7 }
        ));
    }
}
