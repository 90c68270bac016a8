//! Ordered plugin catalog.
//!
//! The catalog preserves input order exactly. Every downstream computation
//! (node order, edge order, order within a stage) derives from it, so two
//! catalogs with the same plugins in a different order are different inputs.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CatalogError;
use crate::plugin::Plugin;

/// Accepted catalog document shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    /// A bare array of plugin records.
    List(Vec<Plugin>),
    /// An envelope object with a `plugins` array.
    Envelope { plugins: Vec<Plugin> },
}

impl From<CatalogDocument> for Vec<Plugin> {
    fn from(doc: CatalogDocument) -> Self {
        match doc {
            CatalogDocument::List(plugins) | CatalogDocument::Envelope { plugins } => plugins,
        }
    }
}

/// An ordered snapshot of the plugin catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    plugins: Vec<Plugin>,
}

impl Catalog {
    /// Creates a catalog from plugins in the given order.
    #[must_use]
    pub fn new(plugins: Vec<Plugin>) -> Self {
        Self { plugins }
    }

    /// Decodes a catalog from JSON text.
    ///
    /// Accepts either a bare array of plugins or `{ "plugins": [...] }`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if the text is not a catalog document.
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(text)?;
        let catalog = Self::new(doc.into());
        debug!(plugin_count = catalog.len(), "decoded plugin catalog");
        Ok(catalog)
    }

    /// Reads and decodes a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, or
    /// [`CatalogError::Json`] if its contents are not a catalog document.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Returns all plugins, including excluded ones, in input order.
    #[must_use]
    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    /// Returns the plugins that take part in graph computations.
    pub fn retained(&self) -> impl Iterator<Item = &Plugin> {
        self.plugins.iter().filter(|plugin| !plugin.is_excluded())
    }

    /// Returns the first plugin with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Plugin> {
        self.plugins.iter().find(|plugin| plugin.name == name)
    }

    /// Returns the number of plugins, including excluded ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns true if the catalog has no plugins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Consumes the catalog, returning its plugins.
    #[must_use]
    pub fn into_plugins(self) -> Vec<Plugin> {
        self.plugins
    }
}

impl From<Vec<Plugin>> for Catalog {
    fn from(plugins: Vec<Plugin>) -> Self {
        Self::new(plugins)
    }
}

impl FromIterator<Plugin> for Catalog {
    fn from_iter<I: IntoIterator<Item = Plugin>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Catalog {
    type Item = Plugin;
    type IntoIter = std::vec::IntoIter<Plugin>;

    fn into_iter(self) -> Self::IntoIter {
        self.plugins.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Plugin;
    type IntoIter = core::slice::Iter<'a, Plugin>;

    fn into_iter(self) -> Self::IntoIter {
        self.plugins.iter()
    }
}
