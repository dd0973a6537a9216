//! Composite endpoint identifier.
//!
//! An endpoint is addressed by its owning service and its name. The encoded
//! form is `"{service_id}_{endpoint_name}"`, so the owning service can be
//! recovered without a storage round trip:
//!
//! ```
//! use topology_sdk::endpoint_id::{self, EndpointId};
//!
//! let id = endpoint_id::encode(42, "/api/orders_v2");
//! assert_eq!(id, "42_/api/orders_v2");
//! assert_eq!(endpoint_id::decode(&id).unwrap(), EndpointId::new(42, "/api/orders_v2"));
//! ```
//!
//! The service id is written in canonical decimal, which never contains the
//! separator, so the first `_` always ends it. Endpoint names are therefore
//! stored verbatim, separators included, and need no escaping. `decode` accepts
//! only canonical service ids (no sign, no leading zeros), which keeps the
//! encoding injective in both directions.

use std::fmt;
use std::str::FromStr;

use crate::error::EndpointIdError;
use crate::models::ServiceId;

pub const ENDPOINT_ID_SEPARATOR: char = '_';

/// Structured endpoint identifier. Encode only at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointId {
    pub service_id: ServiceId,
    pub endpoint_name: String,
}

impl EndpointId {
    #[must_use]
    pub fn new(service_id: ServiceId, endpoint_name: impl Into<String>) -> Self {
        Self {
            service_id,
            endpoint_name: endpoint_name.into(),
        }
    }

    #[must_use]
    pub fn encode(&self) -> String {
        encode(self.service_id, &self.endpoint_name)
    }
}

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{ENDPOINT_ID_SEPARATOR}{}",
            self.service_id, self.endpoint_name
        )
    }
}

impl FromStr for EndpointId {
    type Err = EndpointIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

/// Encodes `(service_id, endpoint_name)`. Total over every name.
#[must_use]
pub fn encode(service_id: ServiceId, endpoint_name: &str) -> String {
    format!("{service_id}{ENDPOINT_ID_SEPARATOR}{endpoint_name}")
}

/// Inverse of [`encode`].
///
/// # Errors
/// - `MissingSeparator` if `id` has no `_`
/// - `InvalidServiceId` if the text before the first `_` is not a canonical `u32`
pub fn decode(id: &str) -> Result<EndpointId, EndpointIdError> {
    let (segment, endpoint_name) = id
        .split_once(ENDPOINT_ID_SEPARATOR)
        .ok_or_else(|| EndpointIdError::MissingSeparator { id: id.to_owned() })?;

    let service_id =
        parse_service_id(segment).ok_or_else(|| EndpointIdError::InvalidServiceId {
            id: id.to_owned(),
            segment: segment.to_owned(),
        })?;

    Ok(EndpointId::new(service_id, endpoint_name))
}

fn parse_service_id(segment: &str) -> Option<ServiceId> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if !canonical {
        return None;
    }
    // Still fails on overflow.
    segment.parse().ok()
}
