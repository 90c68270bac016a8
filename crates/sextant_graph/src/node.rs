//! Node types for analyzer graphs.
//!
//! A [`Node`] is a projection of one retained plugin. It has no lifecycle of
//! its own: nodes are built fresh from a catalog snapshot for each
//! computation and discarded afterwards.

use core::fmt;

use serde::{Deserialize, Serialize};
use sextant_catalog::Plugin;

/// Prefix of every analyzer node ID.
pub const NODE_ID_PREFIX: &str = "analyzer-";

/// Identifier of a node, formed as `"analyzer-" + plugin name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Creates the node ID for a plugin name.
    #[must_use]
    pub fn for_plugin(name: &str) -> Self {
        Self(format!("{NODE_ID_PREFIX}{name}"))
    }

    /// Creates a node ID from a raw string value.
    ///
    /// This is primarily useful for testing or when restoring serialized graphs.
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

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind tag consumed by the rendering side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// An analyzer plugin node.
    #[default]
    Analyzer,
}

/// 2-D position of a node, assigned by the layout engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Presentation data carried by a node.
///
/// Holds the full plugin record so that staging can read `config` and layout
/// can read `depends_on` without going back to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    /// Display label (the plugin name).
    pub label: String,
    /// The plugin this node projects.
    pub plugin: Plugin,
    /// Plugin version.
    pub version: String,
    /// Plugin description.
    pub description: String,
}

/// A node in the analyzer graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node.
    pub id: NodeId,
    /// Node kind, serialized as `type`.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Current position. Zero until laid out.
    pub position: Position,
    /// Presentation data.
    pub data: NodeData,
}

impl Node {
    /// Creates the analyzer node for a plugin, positioned at the origin.
    #[must_use]
    pub fn analyzer(plugin: &Plugin) -> Self {
        Self {
            id: NodeId::for_plugin(&plugin.name),
            kind: NodeKind::Analyzer,
            position: Position::default(),
            data: NodeData {
                label: plugin.name.clone(),
                plugin: plugin.clone(),
                version: plugin.version.clone(),
                description: plugin.description.clone(),
            },
        }
    }

    /// Returns the name of the plugin this node projects.
    #[must_use]
    pub fn plugin_name(&self) -> &str {
        &self.data.plugin.name
    }

    /// Returns the plugin this node projects.
    #[must_use]
    pub fn plugin(&self) -> &Plugin {
        &self.data.plugin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn node_id_is_prefixed_plugin_name() {
        assert_eq!(NodeId::for_plugin("lint").as_str(), "analyzer-lint");
        assert_eq!(NodeId::for_plugin("lint").to_string(), "analyzer-lint");
    }

    #[test]
    fn analyzer_node_projects_plugin() {
        let plugin = Plugin::new("lint", "1.0.0").with_description("Lints sources");
        let node = Node::analyzer(&plugin);

        assert_eq!(node.id.as_str(), "analyzer-lint");
        assert_eq!(node.kind, NodeKind::Analyzer);
        assert_eq!(node.position, Position::default());
        assert_eq!(node.data.label, "lint");
        assert_eq!(node.data.version, "1.0.0");
        assert_eq!(node.data.description, "Lints sources");
        assert_eq!(node.plugin_name(), "lint");
    }

    #[test]
    fn node_serializes_to_render_contract() {
        let node = Node::analyzer(&Plugin::new("lint", "1.0.0"));
        let value = serde_json::to_value(&node).unwrap();

        assert_eq!(value["id"], json!("analyzer-lint"));
        assert_eq!(value["type"], json!("analyzer"));
        assert_eq!(value["position"], json!({ "x": 0.0, "y": 0.0 }));
        assert_eq!(value["data"]["label"], json!("lint"));
        assert_eq!(value["data"]["plugin"]["name"], json!("lint"));
        assert_eq!(value["data"]["version"], json!("1.0.0"));
    }
}
