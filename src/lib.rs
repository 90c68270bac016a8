//! Dependency graph engine for analyzer pipelines.
//!
//! Turns a catalog of analyzer plugins into a graph, an ordered execution
//! plan, and deterministic layout coordinates.

pub use sextant_internal::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use sextant_internal::prelude::*;
}
