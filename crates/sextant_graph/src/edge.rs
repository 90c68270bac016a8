//! Edge types for analyzer graphs.
//!
//! An [`Edge`] points from a dependency's node to the dependent's node, so
//! edges follow data flow: upstream analyzers feed downstream ones.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::node::NodeId;

/// Identifier of an edge.
///
/// Formed as `"edge-" + source + "-" + target + "-" + index`, where `index`
/// is the position of the dependency in the dependent's `depends_on` list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    /// Creates the edge ID for a dependency relation.
    #[must_use]
    pub fn for_dependency(source: &NodeId, target: &NodeId, index: usize) -> Self {
        Self(format!("edge-{source}-{target}-{index}"))
    }

    /// Creates an edge ID from a raw string value.
    #[must_use]
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A directed dependency edge: dependency -> dependent.
///
/// Both handles carry the dependency's plugin name, giving a node one
/// anchor point per upstream dependency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Unique identifier for this edge.
    pub id: EdgeId,
    /// Node of the dependency.
    pub source: NodeId,
    /// Node of the dependent plugin.
    pub target: NodeId,
    /// Dependency plugin name.
    pub source_handle: String,
    /// Dependency plugin name.
    pub target_handle: String,
}

impl Edge {
    /// Creates the edge for the `index`-th dependency of a plugin.
    #[must_use]
    pub fn dependency(source: NodeId, target: NodeId, dependency: &str, index: usize) -> Self {
        Self {
            id: EdgeId::for_dependency(&source, &target, index),
            source,
            target,
            source_handle: dependency.to_owned(),
            target_handle: dependency.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dependency_edge_shape() {
        let edge = Edge::dependency(
            NodeId::for_plugin("A"),
            NodeId::for_plugin("B"),
            "A",
            0,
        );
        assert_eq!(edge.id.as_str(), "edge-analyzer-A-analyzer-B-0");
        assert_eq!(edge.source.as_str(), "analyzer-A");
        assert_eq!(edge.target.as_str(), "analyzer-B");
        assert_eq!(edge.source_handle, "A");
        assert_eq!(edge.target_handle, "A");
    }

    #[test]
    fn index_disambiguates_same_pair() {
        let a = NodeId::for_plugin("A");
        let b = NodeId::for_plugin("B");
        let first = Edge::dependency(a.clone(), b.clone(), "A", 0);
        let second = Edge::dependency(a, b, "A", 2);
        assert_ne!(first.id, second.id);
        assert_eq!(second.id.as_str(), "edge-analyzer-A-analyzer-B-2");
    }

    #[test]
    fn edge_serializes_camel_case_handles() {
        let edge = Edge::dependency(
            NodeId::for_plugin("A"),
            NodeId::for_plugin("B"),
            "A",
            0,
        );
        assert_eq!(
            serde_json::to_value(&edge).unwrap(),
            json!({
                "id": "edge-analyzer-A-analyzer-B-0",
                "source": "analyzer-A",
                "target": "analyzer-B",
                "sourceHandle": "A",
                "targetHandle": "A"
            })
        );
    }
}
