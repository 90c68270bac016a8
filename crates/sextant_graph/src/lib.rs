//! Analyzer-pipeline graph engine for Sextant.
//!
//! `sextant_graph` turns a plugin catalog into a dependency graph and derives
//! two independent products from it: an ordered execution plan and
//! deterministic layout coordinates. Every computation is a pure, synchronous
//! function of its input order; nothing is cached between calls.
//!
//! # Core Concepts
//!
//! - [`Graph`] - Nodes and dependency edges built from plugins
//! - [`DepthResolver`] - Cycle-safe dependency depth, shared by staging and layout
//! - [`PipelineDefinition`] - Ordered, non-empty execution stages
//! - [`LayoutEngine`] - Column-per-level node positions
//!
//! # Example
//!
//! ```
//! use sextant_catalog::Plugin;
//! use sextant_graph::{Graph, LayoutConfig};
//!
//! let plugins = vec![
//!     Plugin::new("A", "1"),
//!     Plugin::new("B", "1").with_dependency("A"),
//!     Plugin::new("C", "1").with_dependency("A"),
//!     Plugin::new("D", "1").with_dependencies(["B", "C"]),
//! ];
//!
//! let mut graph = Graph::from_plugins(&plugins);
//! assert_eq!(graph.stages().names(), vec![vec!["A"], vec!["B", "C"], vec!["D"]]);
//!
//! graph.layout(LayoutConfig::default());
//! assert_eq!(graph.nodes()[3].position.x, 1150.0);
//! ```
//!
//! # Lenient inputs
//!
//! Unresolvable dependency names and excluded plugins are skipped, and
//! dependency cycles are defused during depth resolution. None of these
//! conditions produce an error or a diagnostic.

/// Deterministic presentation colors.
pub mod color;

/// Dependency maps and depth resolution.
pub mod depth;

/// Edge types for connecting nodes.
pub mod edge;

/// Graph structure and construction.
pub mod graph;

/// Column layout.
pub mod layout;

/// Node types.
pub mod node;

/// Execution staging.
pub mod stage;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::color::{Color, ColorScale, color_for};
    pub use crate::depth::{DependencyMap, DepthResolver, resolve_depth};
    pub use crate::edge::{Edge, EdgeId};
    pub use crate::graph::{Graph, build_edges};
    pub use crate::layout::{LayoutConfig, LayoutEngine, layout_nodes};
    pub use crate::node::{Node, NodeData, NodeId, NodeKind, Position};
    pub use crate::stage::{
        PipelineDefinition, Stage, StagePlugin, group_stages, retrieve_workflow_steps,
    };
}

// Re-export key types at crate root for convenience
pub use depth::{DependencyMap, DepthResolver};
pub use graph::{Graph, build_edges};
pub use layout::{LayoutConfig, LayoutEngine};
pub use node::NodeId;
pub use stage::{PipelineDefinition, retrieve_workflow_steps};
