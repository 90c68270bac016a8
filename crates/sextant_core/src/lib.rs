//! Ambient infrastructure shared by Sextant binaries.
//!
//! The graph engine itself only emits `tracing` events. Installing a
//! subscriber is the job of whatever hosts the engine; [`TracingSetup`] is the
//! standard way to do it.

/// Tracing subscriber setup.
pub mod logging;

pub use logging::{ParseFormatError, TracingFormat, TracingSetup};
