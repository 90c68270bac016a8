//! Dependency depth resolution.
//!
//! The depth of a plugin is the length of the longest resolvable dependency
//! chain ending at it:
//!
//! - `depth(n) = 0` if `n` has no dependencies in the map,
//! - otherwise `depth(n) = 1 + max(depth(d))` over its dependencies.
//!
//! Staging and layout both resolve depths through [`DepthResolver`], so the
//! execution order and the visual columns always agree.
//!
//! # Cycles
//!
//! Cycles are defused, not reported. The guard is scoped to the current
//! traversal path: when a name is reached again while it is still on the
//! path, that branch contributes depth `0`. Sibling branches never see each
//! other's visits, so a node shared by two branches is resolved in full on
//! both.
//!
//! ```
//! use sextant_graph::depth::{DependencyMap, DepthResolver};
//!
//! let mut deps = DependencyMap::new();
//! deps.insert("a", ["b"]);
//! deps.insert("b", ["a"]);
//!
//! let mut resolver = DepthResolver::new(&deps);
//! assert_eq!(resolver.depth("a"), 2);
//! assert_eq!(resolver.depth("b"), 2);
//! ```

use hashbrown::{HashMap, HashSet};

use crate::edge::Edge;
use crate::node::{Node, NodeId};

/// Direct dependencies per plugin name.
///
/// Names absent from the map have no dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    entries: HashMap<String, Vec<String>>,
}

impl DependencyMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the dependencies of `name`, replacing any previous entry.
    pub fn insert<I, S>(&mut self, name: impl Into<String>, dependencies: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.insert(
            name.into(),
            dependencies.into_iter().map(Into::into).collect(),
        );
    }

    /// Appends one dependency to `name`.
    pub fn push(&mut self, name: &str, dependency: impl Into<String>) {
        match self.entries.get_mut(name) {
            Some(deps) => deps.push(dependency.into()),
            None => {
                self.entries.insert(name.to_owned(), vec![dependency.into()]);
            }
        }
    }

    /// Returns the direct dependencies of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> &[String] {
        self.entries
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of names with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no name has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds the map from graph edges.
    ///
    /// Each edge adds its source plugin as a dependency of its target plugin,
    /// in edge order. Edges whose endpoints are not among `nodes` are ignored.
    #[must_use]
    pub fn from_edges(nodes: &[Node], edges: &[Edge]) -> Self {
        let names: HashMap<&NodeId, &str> = nodes
            .iter()
            .map(|node| (&node.id, node.plugin_name()))
            .collect();

        let mut map = Self::new();
        for edge in edges {
            if let (Some(source), Some(target)) = (names.get(&edge.source), names.get(&edge.target))
            {
                map.push(target, *source);
            }
        }
        map
    }

    /// Builds the map from the `depends_on` lists carried by `nodes`.
    ///
    /// Dependencies naming a plugin outside `nodes` are dropped.
    #[must_use]
    pub fn from_node_plugins(nodes: &[Node]) -> Self {
        let present: HashSet<&str> = nodes.iter().map(Node::plugin_name).collect();

        let mut map = Self::new();
        for node in nodes {
            map.insert(
                node.plugin_name(),
                node.plugin()
                    .depends_on
                    .iter()
                    .filter(|dep| present.contains(dep.as_str()))
                    .map(String::as_str),
            );
        }
        map
    }
}

/// Outcome of resolving one name on one path.
#[derive(Debug, Clone, Copy)]
struct Visit {
    depth: usize,
    /// True if the cycle guard fired anywhere below this name.
    guarded: bool,
}

/// Resolves dependency depths against a [`DependencyMap`].
///
/// A resolver memoizes depths that were computed without hitting the cycle
/// guard. Such depths do not depend on the traversal path, so memoized and
/// fresh resolution always return the same value. Create one resolver per
/// computation; it borrows the map and is not meant to outlive it.
#[derive(Debug)]
pub struct DepthResolver<'a> {
    dependencies: &'a DependencyMap,
    memo: HashMap<&'a str, usize>,
}

impl<'a> DepthResolver<'a> {
    /// Creates a resolver with an empty memo.
    #[must_use]
    pub fn new(dependencies: &'a DependencyMap) -> Self {
        Self {
            dependencies,
            memo: HashMap::new(),
        }
    }

    /// Returns the depth of `name`, starting from an empty path.
    pub fn depth(&mut self, name: &'a str) -> usize {
        let mut path = Vec::new();
        self.visit(name, &mut path).depth
    }

    fn visit(&mut self, name: &'a str, path: &mut Vec<&'a str>) -> Visit {
        if path.contains(&name) {
            return Visit {
                depth: 0,
                guarded: true,
            };
        }
        if let Some(&depth) = self.memo.get(name) {
            return Visit {
                depth,
                guarded: false,
            };
        }

        let map: &'a DependencyMap = self.dependencies;
        let dependencies = map.get(name);
        if dependencies.is_empty() {
            self.memo.insert(name, 0);
            return Visit {
                depth: 0,
                guarded: false,
            };
        }

        path.push(name);
        let mut deepest = 0;
        let mut guarded = false;
        for dependency in dependencies {
            let visit = self.visit(dependency, path);
            deepest = deepest.max(visit.depth);
            guarded |= visit.guarded;
        }
        path.pop();

        let depth = deepest + 1;
        if !guarded {
            self.memo.insert(name, depth);
        }
        Visit { depth, guarded }
    }
}

/// Resolves the depth of a single name with a throwaway resolver.
#[must_use]
pub fn resolve_depth(dependencies: &DependencyMap, name: &str) -> usize {
    let mut path = Vec::new();
    DepthResolver::new(dependencies).visit(name, &mut path).depth
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &[&str])]) -> DependencyMap {
        let mut deps = DependencyMap::new();
        for (name, list) in entries {
            deps.insert(*name, list.iter().copied());
        }
        deps
    }

    #[test]
    fn unknown_and_dependency_free_names_are_roots() {
        let deps = map(&[("a", &[])]);
        assert_eq!(resolve_depth(&deps, "a"), 0);
        assert_eq!(resolve_depth(&deps, "zzz"), 0);
    }

    #[test]
    fn chain_depth_counts_links() {
        let deps = map(&[("b", &["a"]), ("c", &["b"]), ("d", &["c"])]);
        let mut resolver = DepthResolver::new(&deps);
        assert_eq!(resolver.depth("a"), 0);
        assert_eq!(resolver.depth("b"), 1);
        assert_eq!(resolver.depth("c"), 2);
        assert_eq!(resolver.depth("d"), 3);
    }

    #[test]
    fn longest_chain_wins() {
        let deps = map(&[("b", &["a"]), ("c", &["b"]), ("d", &["a", "c"])]);
        assert_eq!(resolve_depth(&deps, "d"), 3);
    }

    #[test]
    fn self_dependency_is_defused() {
        let deps = map(&[("a", &["a"])]);
        // a -> a hits the guard (0), so a = 1 + 0.
        assert_eq!(resolve_depth(&deps, "a"), 1);
    }

    #[test]
    fn two_cycle_resolves_from_either_end() {
        let deps = map(&[("a", &["b"]), ("b", &["a"])]);
        // a -> b -> a(guard 0): b = 1, a = 2.
        assert_eq!(resolve_depth(&deps, "a"), 2);
        assert_eq!(resolve_depth(&deps, "b"), 2);
    }

    #[test]
    fn guard_is_local_to_the_path() {
        // x is reached directly and again through c. A traversal-wide visited
        // set would cut the second visit to 0 and make d = 2 instead of 3.
        let deps = map(&[("x", &["root"]), ("c", &["x"]), ("d", &["x", "c"])]);
        assert_eq!(resolve_depth(&deps, "d"), 3);
    }

    #[test]
    fn memoized_resolution_matches_fresh_resolution_on_cycles() {
        let deps = map(&[
            ("a", &["c"]),
            ("b", &["a"]),
            ("c", &["b"]),
            ("d", &["c", "a"]),
            ("e", &["d", "b"]),
        ]);
        let names = ["e", "a", "d", "c", "b"];

        let mut shared = DepthResolver::new(&deps);
        for name in names {
            assert_eq!(shared.depth(name), resolve_depth(&deps, name), "{name}");
        }
    }

    #[test]
    fn push_appends_in_order() {
        let mut deps = DependencyMap::new();
        deps.push("c", "b");
        deps.push("c", "a");
        assert_eq!(deps.get("c"), ["b", "a"]);
        assert_eq!(deps.len(), 1);
        assert!(deps.get("missing").is_empty());
    }
}
