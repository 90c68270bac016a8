//! Graph structure and construction from a plugin catalog.
//!
//! [`Graph::from_plugins`] turns a flat plugin list into nodes and edges.
//! [`build_edges`] recomputes edges for an already-built (and possibly
//! filtered or edited) node list. Both share one edge-construction routine,
//! so they agree on edge shape and on which dependencies are skipped.
//!
//! # Skip policy
//!
//! - Plugins whose name contains [`EXCLUDED_MARKER`](sextant_catalog::EXCLUDED_MARKER)
//!   produce no node and no edge, in either direction.
//! - A dependency name that does not resolve to a retained plugin produces no
//!   edge. This is not an error.

use hashbrown::HashMap;
use sextant_catalog::{Catalog, Plugin};
use tracing::{debug, instrument};

use crate::edge::Edge;
use crate::node::{Node, NodeId};

/// An analyzer graph: nodes in catalog order plus dependency edges.
///
/// # Example
///
/// ```
/// use sextant_catalog::Plugin;
/// use sextant_graph::Graph;
///
/// let graph = Graph::from_plugins(&[
///     Plugin::new("A", "1"),
///     Plugin::new("B", "1").with_dependency("A"),
/// ]);
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edges()[0].id.as_str(), "edge-analyzer-A-analyzer-B-0");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    /// Nodes in catalog order.
    nodes: Vec<Node>,
    /// Edges in dependent order, then `depends_on` order.
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds the graph for a plugin list.
    #[must_use]
    #[instrument(level = "trace", skip_all, fields(plugin_count = plugins.len()))]
    pub fn from_plugins(plugins: &[Plugin]) -> Self {
        let retained: Vec<&Plugin> = plugins.iter().filter(|p| !p.is_excluded()).collect();

        let nodes: Vec<Node> = retained.iter().map(|p| Node::analyzer(p)).collect();
        let ids: HashMap<&str, NodeId> = retained
            .iter()
            .map(|p| (p.name.as_str(), NodeId::for_plugin(&p.name)))
            .collect();
        let edges = connect(&retained, &ids);

        debug!(
            node_count = nodes.len(),
            edge_count = edges.len(),
            excluded = plugins.len() - retained.len(),
            "built analyzer graph"
        );
        Self { nodes, edges }
    }

    /// Builds the graph for the plugins of a catalog.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::from_plugins(catalog.plugins())
    }

    /// Assembles a graph from parts, without checking consistency.
    #[must_use]
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Returns all nodes in the graph.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns mutable access to the nodes, e.g. for layout.
    #[must_use]
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Returns all edges in the graph.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Gets a node by ID.
    #[must_use]
    pub fn get_node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| &node.id == id)
    }

    /// Gets the node projecting the named plugin.
    #[must_use]
    pub fn node_for_plugin(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.plugin_name() == name)
    }

    /// Consumes the graph, returning its nodes and edges.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Node>, Vec<Edge>) {
        (self.nodes, self.edges)
    }
}

impl From<&Catalog> for Graph {
    fn from(catalog: &Catalog) -> Self {
        Self::from_catalog(catalog)
    }
}

/// Builds dependency edges for an existing node list.
///
/// Produces exactly the edges [`Graph::from_plugins`] would produce for the
/// plugins carried by `nodes`, in the same order and with the same IDs.
#[must_use]
#[instrument(level = "trace", skip_all, fields(node_count = nodes.len()))]
pub fn build_edges(nodes: &[Node]) -> Vec<Edge> {
    let retained: Vec<&Node> = nodes.iter().filter(|n| !n.plugin().is_excluded()).collect();

    let ids: HashMap<&str, NodeId> = retained
        .iter()
        .map(|node| (node.plugin_name(), node.id.clone()))
        .collect();
    let plugins: Vec<&Plugin> = retained.iter().map(|node| node.plugin()).collect();

    connect(&plugins, &ids)
}

/// Emits one edge per resolvable dependency of each plugin.
///
/// `plugins` must already be filtered; `ids` maps every retained plugin name
/// to its node ID.
fn connect(plugins: &[&Plugin], ids: &HashMap<&str, NodeId>) -> Vec<Edge> {
    let mut edges = Vec::new();

    for plugin in plugins {
        let Some(target) = ids.get(plugin.name.as_str()) else {
            continue;
        };
        for (index, dependency) in plugin.depends_on.iter().enumerate() {
            if let Some(source) = ids.get(dependency.as_str()) {
                edges.push(Edge::dependency(
                    source.clone(),
                    target.clone(),
                    dependency,
                    index,
                ));
            }
        }
    }

    edges
}
