//! The analyzer plugin record.
//!
//! A [`Plugin`] is one entry of the catalog. Its `name` is both its identity
//! and the key other plugins use in `depends_on`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Substring that removes a plugin from every graph computation.
///
/// Notifier plugins are delivery side-effects rather than analyses, so they
/// are neither nodes nor dependency endpoints.
pub const EXCLUDED_MARKER: &str = "notifier";

/// A catalog entry describing one analyzer plugin.
///
/// Field names follow the catalog wire format, so `depends_on` stays
/// snake_case when serialized.
///
/// # Example
///
/// ```
/// use sextant_catalog::Plugin;
///
/// let plugin = Plugin::new("report", "1.2.0")
///     .with_description("Summarizes findings")
///     .with_dependency("lint");
///
/// assert_eq!(plugin.depends_on, vec!["lint"]);
/// assert!(!plugin.is_excluded());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugin {
    /// Unique plugin name, also the dependency-reference key.
    pub name: String,
    /// Plugin version string.
    pub version: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Names of upstream plugins, in declaration order.
    #[serde(default)]
    pub depends_on: Vec<String>,
    /// Opaque configuration document, passed through verbatim.
    #[serde(default)]
    pub config: Value,
}

impl Plugin {
    /// Creates a plugin with no description, dependencies or config.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            description: String::new(),
            depends_on: Vec::new(),
            config: Value::Null,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends one dependency name.
    #[must_use]
    pub fn with_dependency(mut self, name: impl Into<String>) -> Self {
        self.depends_on.push(name.into());
        self
    }

    /// Appends several dependency names, keeping their order.
    #[must_use]
    pub fn with_dependencies<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends_on.extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets the opaque config document.
    #[must_use]
    pub fn with_config(mut self, config: Value) -> Self {
        self.config = config;
        self
    }

    /// Returns true if this plugin is excluded from the graph.
    #[must_use]
    pub fn is_excluded(&self) -> bool {
        self.name.contains(EXCLUDED_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn excluded_when_name_contains_marker() {
        assert!(Plugin::new("notifier", "1").is_excluded());
        assert!(Plugin::new("slack-notifier", "1").is_excluded());
        assert!(Plugin::new("notifier_email", "1").is_excluded());
        assert!(!Plugin::new("notify", "1").is_excluded());
        assert!(!Plugin::new("Notifier", "1").is_excluded());
    }

    #[test]
    fn missing_optional_fields_default() {
        let plugin: Plugin = serde_json::from_value(json!({
            "name": "lint",
            "version": "0.1.0"
        }))
        .unwrap();

        assert_eq!(plugin.description, "");
        assert!(plugin.depends_on.is_empty());
        assert_eq!(plugin.config, Value::Null);
    }

    #[test]
    fn config_round_trips_untouched() {
        let config = json!({ "threshold": 0.7, "rules": ["a", "b"], "nested": { "z": 1, "a": 2 } });
        let plugin = Plugin::new("lint", "1").with_config(config.clone());

        let text = serde_json::to_string(&plugin).unwrap();
        assert!(text.contains("\"depends_on\""));

        let back: Plugin = serde_json::from_str(&text).unwrap();
        assert_eq!(back.config, config);
    }

    #[test]
    fn builder_keeps_dependency_order() {
        let plugin = Plugin::new("d", "1")
            .with_dependency("b")
            .with_dependencies(["c", "a"]);
        assert_eq!(plugin.depends_on, vec!["b", "c", "a"]);
    }
}
