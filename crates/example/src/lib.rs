//! Planning front end for the `sextant-plan` binary.
//!
//! Loads a catalog and an optional layout config, builds the graph, and
//! assembles a [`PlanReport`] holding the execution plan and the positioned
//! graph.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sextant_catalog::{Catalog, CatalogError};
use sextant_graph::color::color_for;
use sextant_graph::edge::Edge;
use sextant_graph::node::{Node, NodeId};
use sextant_graph::{Graph, LayoutConfig, PipelineDefinition};
use tracing::info;

/// Command-line usage of `sextant-plan`.
pub const USAGE: &str = "usage: sextant-plan <catalog.json> [layout.json]";

/// Errors raised while producing a plan.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    /// The command line is missing the catalog path.
    #[error("{USAGE}")]
    Usage,

    /// The catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The layout config file could not be read.
    #[error("failed to read layout config '{}': {source}", path.display())]
    LayoutIo {
        /// The layout config path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The layout config file is not a valid config document.
    #[error("invalid layout config '{}': {source}", path.display())]
    LayoutJson {
        /// The layout config path.
        path: PathBuf,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// The report could not be written.
    #[error("failed to write report: {0}")]
    Output(#[from] serde_json::Error),
}

/// Presentation color of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeColor {
    /// The colored node.
    pub node: NodeId,
    /// CSS hex color.
    pub color: String,
}

/// Everything `sextant-plan` prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    /// Ordered execution stages.
    pub stages: PipelineDefinition,
    /// Positioned analyzer nodes.
    pub nodes: Vec<Node>,
    /// Dependency edges.
    pub edges: Vec<Edge>,
    /// Per-node presentation colors, in node order.
    pub colors: Vec<NodeColor>,
}

impl PlanReport {
    /// Plans a catalog with the given layout constants.
    #[must_use]
    pub fn build(catalog: &Catalog, layout: LayoutConfig) -> Self {
        let mut graph = Graph::from_catalog(catalog);
        let stages = graph.stages();
        let level_count = graph.layout(layout);

        info!(
            plugins = catalog.len(),
            nodes = graph.node_count(),
            stages = stages.len(),
            level_count,
            "planned pipeline"
        );

        let colors = graph
            .nodes()
            .iter()
            .map(|node| NodeColor {
                node: node.id.clone(),
                color: color_for(node.plugin_name()).to_css(),
            })
            .collect();
        let (nodes, edges) = graph.into_parts();

        Self {
            stages,
            nodes,
            edges,
            colors,
        }
    }

    /// Writes the report as pretty JSON followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Output`] if writing fails.
    pub fn write_json(&self, mut out: impl Write) -> Result<(), PlanError> {
        serde_json::to_writer_pretty(&mut out, self)?;
        out.write_all(b"\n").map_err(serde_json::Error::io)?;
        Ok(())
    }
}

/// Reads a layout config file. Fields it omits keep their defaults.
///
/// # Errors
///
/// Returns [`PlanError::LayoutIo`] or [`PlanError::LayoutJson`].
pub fn load_layout(path: impl AsRef<Path>) -> Result<LayoutConfig, PlanError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| PlanError::LayoutIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| PlanError::LayoutJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the inputs and plans them.
///
/// # Errors
///
/// Returns the first load error.
pub fn plan_files(catalog: &Path, layout: Option<&Path>) -> Result<PlanReport, PlanError> {
    let catalog = Catalog::from_json_file(catalog)?;
    let layout = layout.map(load_layout).transpose()?.unwrap_or_default();
    Ok(PlanReport::build(&catalog, layout))
}

/// Runs the planner on command-line arguments (without the program name),
/// writing the report to `out`.
///
/// # Errors
///
/// Returns [`PlanError::Usage`] without a catalog path, otherwise the first
/// load or write error.
pub fn run(args: &[String], out: impl Write) -> Result<(), PlanError> {
    let Some(catalog) = args.first() else {
        return Err(PlanError::Usage);
    };
    let layout = args.get(1).map(Path::new);
    plan_files(Path::new(catalog), layout)?.write_json(out)
}
