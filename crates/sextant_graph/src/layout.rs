//! Deterministic column layout.
//!
//! Nodes are placed in columns by dependency level and centered vertically
//! within each column:
//!
//! ```text
//! x = start_x + level * column_width
//! y = start_y - (k - 1) * row_height / 2 + i * row_height
//! ```
//!
//! where `k` is the number of nodes at that level and `i` is a node's index
//! among them in input order. There is no crossing minimization; pipeline
//! graphs are shallow and narrow.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::depth::{DependencyMap, DepthResolver};
use crate::graph::Graph;
use crate::node::{Node, Position};

/// Layout constants.
///
/// Deserializable with every field optional, so a partial config document
/// overrides only what it names.
///
/// # Example
///
/// ```
/// use sextant_graph::layout::LayoutConfig;
///
/// let config = LayoutConfig::default().with_column_width(400.0);
/// assert_eq!(config.start_x, 150.0);
/// assert_eq!(config.column_width, 400.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// X of the level-0 column.
    pub start_x: f64,
    /// Y around which every column is centered.
    pub start_y: f64,
    /// Horizontal distance between levels.
    pub column_width: f64,
    /// Vertical distance between nodes of one level.
    pub row_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            start_x: 150.0,
            start_y: 200.0,
            column_width: 500.0,
            row_height: 300.0,
        }
    }
}

impl LayoutConfig {
    /// Sets the X of the level-0 column.
    #[must_use]
    pub fn with_start_x(mut self, start_x: f64) -> Self {
        self.start_x = start_x;
        self
    }

    /// Sets the Y every column is centered on.
    #[must_use]
    pub fn with_start_y(mut self, start_y: f64) -> Self {
        self.start_y = start_y;
        self
    }

    /// Sets the horizontal distance between levels.
    #[must_use]
    pub fn with_column_width(mut self, column_width: f64) -> Self {
        self.column_width = column_width;
        self
    }

    /// Sets the vertical distance between nodes of one level.
    #[must_use]
    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    /// Returns the position of the `index`-th of `count` nodes at `level`.
    #[must_use]
    pub fn position(&self, level: usize, index: usize, count: usize) -> Position {
        let total_height = count.saturating_sub(1) as f64 * self.row_height;
        Position {
            x: self.start_x + level as f64 * self.column_width,
            y: self.start_y - total_height / 2.0 + index as f64 * self.row_height,
        }
    }
}

/// Assigns positions to analyzer nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Creates an engine with the default constants.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom constants.
    #[must_use]
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Returns the layout constants.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Positions `nodes` in place.
    ///
    /// Levels are resolved from the `depends_on` lists carried by the nodes;
    /// dependencies outside `nodes` are ignored. Returns the number of levels.
    #[instrument(level = "trace", skip_all, fields(node_count = nodes.len()))]
    pub fn layout(&self, nodes: &mut [Node]) -> usize {
        let levels = node_levels(nodes);

        let level_count = levels.iter().copied().max().map_or(0, |max| max + 1);
        let mut columns: Vec<Vec<usize>> = vec![Vec::new(); level_count];
        for (index, level) in levels.iter().copied().enumerate() {
            columns[level].push(index);
        }

        for (level, column) in columns.iter().enumerate() {
            for (row, &index) in column.iter().enumerate() {
                nodes[index].position = self.config.position(level, row, column.len());
            }
        }

        debug!(level_count, "laid out analyzer nodes");
        level_count
    }
}

/// Resolves the level of every node, in node order.
fn node_levels(nodes: &[Node]) -> Vec<usize> {
    let dependencies = DependencyMap::from_node_plugins(nodes);
    let mut resolver = DepthResolver::new(&dependencies);
    nodes
        .iter()
        .map(|node| resolver.depth(node.plugin_name()))
        .collect()
}

/// Positions nodes with the default constants and returns them.
#[must_use]
pub fn layout_nodes(mut nodes: Vec<Node>) -> Vec<Node> {
    LayoutEngine::new().layout(&mut nodes);
    nodes
}

impl Graph {
    /// Positions this graph's nodes with the given constants.
    ///
    /// Returns the number of levels.
    pub fn layout(&mut self, config: LayoutConfig) -> usize {
        LayoutEngine::with_config(config).layout(self.nodes_mut())
    }
}
