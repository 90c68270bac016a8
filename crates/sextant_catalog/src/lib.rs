//! Analyzer plugin catalog for Sextant.
//!
//! A catalog is the ordered list of analyzer [`Plugin`] records handed to the
//! graph engine. Each plugin names the plugins it depends on; the `config`
//! payload is carried through untouched.
//!
//! # Example
//!
//! ```
//! use sextant_catalog::Catalog;
//!
//! let catalog = Catalog::from_json_str(r#"[
//!     { "name": "lint", "version": "1.0.0", "depends_on": [] },
//!     { "name": "report", "version": "1.2.0", "depends_on": ["lint"] }
//! ]"#).unwrap();
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.get("report").unwrap().depends_on, vec!["lint"]);
//! ```

/// Catalog container and decoding.
pub mod catalog;

/// Catalog errors.
pub mod error;

/// The analyzer plugin record.
pub mod plugin;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use plugin::{EXCLUDED_MARKER, Plugin};
