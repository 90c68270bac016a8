//! Error types for catalog loading.

use std::path::PathBuf;

/// Errors raised while loading a plugin catalog.
///
/// Only the catalog boundary is fallible. Once a catalog is decoded, graph
/// construction, staging and layout never fail.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog document is not valid JSON or does not match the plugin shape.
    #[error("invalid catalog document: {0}")]
    Json(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
