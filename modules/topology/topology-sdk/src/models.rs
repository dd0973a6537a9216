//! Domain models for the topology metadata query module.

use serde::{Deserialize, Serialize};

use crate::error::{InvalidTimeWindow, NotConjectural, UnknownNodeType};

/// Stable numeric identifier of a service.
pub type ServiceId = u32;

/// Kind of node a service descriptor stands for.
///
/// Numeric values are stable and shared with the storage layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    /// Instrumented application service.
    #[default]
    Normal,
    Database,
    RpcFramework,
    Http,
    Mq,
    Cache,
    Browser,
}

impl NodeType {
    /// Stable numeric value used by the storage layer.
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Self::Normal => 0,
            Self::Database => 1,
            Self::RpcFramework => 2,
            Self::Http => 3,
            Self::Mq => 4,
            Self::Cache => 5,
            Self::Browser => 6,
        }
    }

    /// Whether the node is inferred from traffic rather than instrumented.
    #[must_use]
    pub fn is_conjectural(self) -> bool {
        ConjecturalNodeType::try_from(self).is_ok()
    }
}

impl TryFrom<i32> for NodeType {
    type Error = UnknownNodeType;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Database),
            2 => Ok(Self::RpcFramework),
            3 => Ok(Self::Http),
            4 => Ok(Self::Mq),
            5 => Ok(Self::Cache),
            6 => Ok(Self::Browser),
            other => Err(UnknownNodeType(other)),
        }
    }
}

/// The node kinds counted as conjectural dependencies in a [`TopologyBrief`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConjecturalNodeType {
    Database,
    Cache,
    Mq,
}

impl ConjecturalNodeType {
    pub const ALL: [Self; 3] = [Self::Database, Self::Cache, Self::Mq];
}

impl From<ConjecturalNodeType> for NodeType {
    fn from(kind: ConjecturalNodeType) -> Self {
        match kind {
            ConjecturalNodeType::Database => Self::Database,
            ConjecturalNodeType::Cache => Self::Cache,
            ConjecturalNodeType::Mq => Self::Mq,
        }
    }
}

impl TryFrom<NodeType> for ConjecturalNodeType {
    type Error = NotConjectural;

    fn try_from(node_type: NodeType) -> Result<Self, Self::Error> {
        match node_type {
            NodeType::Database => Ok(Self::Database),
            NodeType::Cache => Ok(Self::Cache),
            NodeType::Mq => Ok(Self::Mq),
            NodeType::Normal | NodeType::RpcFramework | NodeType::Http | NodeType::Browser => {
                Err(NotConjectural(node_type))
            }
        }
    }
}

/// Inventory entry for a service, owned by the inventory cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDescriptor {
    pub id: ServiceId,
    pub name: String,
    pub node_type: NodeType,
}

/// Closed query window in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: i64,
    end: i64,
}

impl TimeWindow {
    /// # Errors
    /// `InvalidTimeWindow` if `start` is after `end`.
    pub fn new(start: i64, end: i64) -> Result<Self, InvalidTimeWindow> {
        if start > end {
            return Err(InvalidTimeWindow { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> i64 {
        self.end
    }
}

/// Aggregate counts describing the traced system over a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyBrief {
    pub num_of_service: u64,
    pub num_of_endpoint: u64,
    pub num_of_database: u64,
    pub num_of_cache: u64,
    #[serde(rename = "numOfMQ")]
    pub num_of_mq: u64,
}

/// Endpoint view joined with its owning service's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointInfo {
    /// Encoded endpoint id, as supplied by the caller.
    pub id: String,
    pub name: String,
    pub service_id: ServiceId,
    /// Resolved from the inventory cache at query time.
    pub service_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub id: ServiceId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInstance {
    pub id: String,
    pub name: String,
    pub service_id: ServiceId,
    #[serde(rename = "instanceUUID")]
    pub instance_uuid: String,
    pub language: Language,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// Agent language reported by a service instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    #[default]
    Unknown,
    Java,
    DotNet,
    NodeJs,
    Python,
    Ruby,
    Go,
    Lua,
    Php,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Encoded endpoint id (see [`crate::endpoint_id`]).
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    pub id: ServiceId,
    pub name: String,
    #[serde(rename = "type")]
    pub db_type: String,
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn node_type_values_are_stable() {
        let expected = [
            (NodeType::Normal, 0),
            (NodeType::Database, 1),
            (NodeType::RpcFramework, 2),
            (NodeType::Http, 3),
            (NodeType::Mq, 4),
            (NodeType::Cache, 5),
            (NodeType::Browser, 6),
        ];
        for (node_type, value) in expected {
            assert_eq!(node_type.value(), value);
            assert_eq!(NodeType::try_from(value).unwrap(), node_type);
        }
        assert_eq!(NodeType::try_from(7).unwrap_err(), UnknownNodeType(7));
        assert_eq!(NodeType::try_from(-1).unwrap_err(), UnknownNodeType(-1));
    }

    #[test]
    fn conjectural_subset_is_exactly_database_cache_mq() {
        let conjectural: Vec<NodeType> = ConjecturalNodeType::ALL
            .into_iter()
            .map(NodeType::from)
            .collect();
        assert_eq!(
            conjectural,
            vec![NodeType::Database, NodeType::Cache, NodeType::Mq]
        );

        assert!(NodeType::Mq.is_conjectural());
        assert!(!NodeType::Normal.is_conjectural());
        assert!(!NodeType::Browser.is_conjectural());
        assert_eq!(
            ConjecturalNodeType::try_from(NodeType::Http),
            Err(NotConjectural(NodeType::Http))
        );
    }

    #[test]
    fn time_window_rejects_inverted_bounds() {
        let window = TimeWindow::new(1_000, 2_000).unwrap();
        assert_eq!((window.start(), window.end()), (1_000, 2_000));
        assert!(TimeWindow::new(5, 5).is_ok());
        assert_eq!(
            TimeWindow::new(2_000, 1_000),
            Err(InvalidTimeWindow {
                start: 2_000,
                end: 1_000
            })
        );
    }

    #[test]
    fn brief_serializes_with_presentation_field_names() {
        let brief = TopologyBrief {
            num_of_service: 5,
            num_of_endpoint: 12,
            num_of_database: 2,
            num_of_cache: 1,
            num_of_mq: 0,
        };
        let json = serde_json::to_value(brief).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "numOfService": 5,
                "numOfEndpoint": 12,
                "numOfDatabase": 2,
                "numOfCache": 1,
                "numOfMQ": 0
            })
        );
    }
}
