//! # Sextant Internal Library
//!
//! Re-exports the core Sextant crates for convenience.

/// Plugin catalog model and loading.
pub use sextant_catalog;

/// Dependency graph, staging and layout.
pub use sextant_graph;

/// Tracing setup.
pub use sextant_core;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use sextant_catalog::{Catalog, CatalogError, Plugin};
    pub use sextant_core::{TracingFormat, TracingSetup};
    pub use sextant_graph::prelude::*;
}
