//! Execution staging.
//!
//! Groups the nodes of a [`Graph`] into sequential stages by dependency
//! depth. Every stage holds plugins whose resolvable dependencies all sit in
//! earlier stages, so the stages can run one after another with the members
//! of a stage running together.
//!
//! Empty depth buckets are dropped, so a stage's index equals its depth only
//! until the first gap. Gaps can only arise from cycle defusal.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::depth::{DependencyMap, DepthResolver};
use crate::edge::Edge;
use crate::graph::Graph;
use crate::node::Node;

/// The plugin descriptor submitted for execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagePlugin {
    /// Plugin name.
    pub name: String,
    /// Plugin version.
    pub version: String,
    /// Opaque plugin config, copied verbatim.
    pub config: Value,
}

impl StagePlugin {
    /// Draws the descriptor from a node's data.
    #[must_use]
    pub fn from_node(node: &Node) -> Self {
        Self {
            name: node.plugin_name().to_owned(),
            version: node.data.version.clone(),
            config: node.plugin().config.clone(),
        }
    }
}

/// One batch of plugins sharing the same dependency depth, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stage {
    plugins: Vec<StagePlugin>,
}

impl Stage {
    /// Returns the plugins of this stage.
    #[must_use]
    pub fn plugins(&self) -> &[StagePlugin] {
        &self.plugins
    }

    /// Returns the plugin names of this stage.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|plugin| plugin.name.as_str())
    }

    /// Returns the number of plugins in this stage.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns true if the stage has no plugins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

/// The ordered execution plan handed to the orchestration backend.
///
/// Serializes as an array of stages, each an array of
/// `{ name, version, config }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PipelineDefinition {
    stages: Vec<Stage>,
}

impl PipelineDefinition {
    /// Returns the stages in execution order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Returns the number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns true if there are no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Returns the stage names as nested lists, mostly for assertions and logs.
    #[must_use]
    pub fn names(&self) -> Vec<Vec<&str>> {
        self.stages.iter().map(|stage| stage.names().collect()).collect()
    }

    /// Consumes the plan, returning its stages.
    #[must_use]
    pub fn into_stages(self) -> Vec<Stage> {
        self.stages
    }
}

/// Groups nodes into execution stages.
///
/// Dependencies are read from `edges`: each edge makes its source plugin a
/// dependency of its target plugin. Within a stage, nodes keep their order
/// in `nodes`.
#[must_use]
#[instrument(level = "trace", skip_all, fields(node_count = nodes.len(), edge_count = edges.len()))]
pub fn group_stages(nodes: &[Node], edges: &[Edge]) -> PipelineDefinition {
    let dependencies = DependencyMap::from_edges(nodes, edges);
    let mut resolver = DepthResolver::new(&dependencies);

    let depths: Vec<usize> = nodes
        .iter()
        .map(|node| resolver.depth(node.plugin_name()))
        .collect();
    let max_depth = depths.iter().copied().max().unwrap_or(0);

    let mut buckets: Vec<Vec<StagePlugin>> = vec![Vec::new(); max_depth + 1];
    for (node, depth) in nodes.iter().zip(depths) {
        buckets[depth].push(StagePlugin::from_node(node));
    }

    let stages: Vec<Stage> = buckets
        .into_iter()
        .filter(|bucket| !bucket.is_empty())
        .map(|plugins| Stage { plugins })
        .collect();

    debug!(stage_count = stages.len(), max_depth, "grouped nodes into stages");
    PipelineDefinition { stages }
}

/// Computes the execution plan for a graph.
#[must_use]
pub fn retrieve_workflow_steps(graph: &Graph) -> PipelineDefinition {
    group_stages(graph.nodes(), graph.edges())
}

impl Graph {
    /// Computes the execution plan for this graph.
    ///
    /// See [`retrieve_workflow_steps`].
    #[must_use]
    pub fn stages(&self) -> PipelineDefinition {
        retrieve_workflow_steps(self)
    }
}
