//! Property tests over randomly generated plugin catalogs.
//!
//! Catalogs are drawn from a small name pool so that dependency lists hit
//! existing plugins, missing plugins, notifiers and cycles.

use proptest::prelude::*;
use sextant_catalog::Plugin;
use sextant_graph::graph::{Graph, build_edges};
use sextant_graph::layout::LayoutConfig;

const NAMES: [&str; 8] = ["a", "b", "c", "d", "e", "f", "ops-notifier", "ghost"];

/// Generates catalogs whose plugins only depend on earlier plugins (a DAG).
fn arb_dag() -> impl Strategy<Value = Vec<Plugin>> {
    (1..=6usize).prop_flat_map(|len| {
        prop::collection::vec(prop::collection::vec(any::<prop::sample::Index>(), 0..=3), len)
            .prop_map(|deps| {
                deps.into_iter()
                    .enumerate()
                    .map(|(i, picks)| {
                        let earlier: Vec<String> = if i == 0 {
                            Vec::new()
                        } else {
                            picks.iter().map(|p| format!("p{}", p.index(i))).collect()
                        };
                        Plugin::new(format!("p{i}"), "1").with_dependencies(earlier)
                    })
                    .collect()
            })
    })
}

/// Generates arbitrary catalogs, including cycles and dangling names.
fn arb_catalog() -> impl Strategy<Value = Vec<Plugin>> {
    prop::collection::vec(
        (
            prop::sample::select(NAMES.to_vec()),
            prop::collection::vec(prop::sample::select(NAMES.to_vec()), 0..=3),
        ),
        0..=8,
    )
    .prop_map(|entries| {
        let mut seen = Vec::new();
        entries
            .into_iter()
            .filter(|(name, _)| {
                let fresh = !seen.contains(name);
                seen.push(*name);
                fresh
            })
            .map(|(name, deps)| Plugin::new(name, "1").with_dependencies(deps))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Later stages only depend on earlier stages.
    #[test]
    fn prop_dag_stages_respect_dependencies(plugins in arb_dag()) {
        let plan = Graph::from_plugins(&plugins).stages();
        let stage_of = |name: &str| {
            plan.stages().iter().position(|s| s.names().any(|n| n == name))
        };

        for plugin in &plugins {
            let own = stage_of(&plugin.name).unwrap();
            for dep in &plugin.depends_on {
                prop_assert!(stage_of(dep).unwrap() < own);
            }
        }
    }

    /// Every retained plugin is staged exactly once and no stage is empty.
    #[test]
    fn prop_stages_partition_retained_plugins(plugins in arb_catalog()) {
        let plan = Graph::from_plugins(&plugins).stages();

        let mut staged: Vec<&str> = plan.stages().iter().flat_map(|s| s.names()).collect();
        staged.sort_unstable();
        let mut retained: Vec<&str> = plugins
            .iter()
            .filter(|p| !p.is_excluded())
            .map(|p| p.name.as_str())
            .collect();
        retained.sort_unstable();

        prop_assert_eq!(staged, retained);
        prop_assert!(plan.stages().iter().all(|s| !s.is_empty()));
    }

    /// Notifiers never appear as nodes or edge endpoints.
    #[test]
    fn prop_notifiers_are_excluded(plugins in arb_catalog()) {
        let graph = Graph::from_plugins(&plugins);
        prop_assert!(graph.nodes().iter().all(|n| !n.plugin_name().contains("notifier")));
        prop_assert!(graph.edges().iter().all(|e|
            !e.source.as_str().contains("notifier") && !e.target.as_str().contains("notifier")
        ));
    }

    /// Building twice gives identical graphs, plans and layouts.
    #[test]
    fn prop_computations_are_deterministic(plugins in arb_catalog()) {
        let mut first = Graph::from_plugins(&plugins);
        let mut second = Graph::from_plugins(&plugins);
        prop_assert_eq!(first.stages(), second.stages());

        first.layout(LayoutConfig::default());
        second.layout(LayoutConfig::default());
        prop_assert_eq!(&first, &second);
    }

    /// Rebuilding edges from nodes reproduces the original edges.
    #[test]
    fn prop_build_edges_agrees(plugins in arb_catalog()) {
        let graph = Graph::from_plugins(&plugins);
        prop_assert_eq!(build_edges(graph.nodes()), graph.edges().to_vec());
    }

    /// Every node of a column shares x, and rows are `row_height` apart and
    /// centered on `start_y`.
    #[test]
    fn prop_columns_are_centered(plugins in arb_catalog()) {
        let mut graph = Graph::from_plugins(&plugins);
        let config = LayoutConfig::default();
        graph.layout(config);

        let mut columns: Vec<(f64, Vec<f64>)> = Vec::new();
        for node in graph.nodes() {
            match columns.iter_mut().find(|(x, _)| *x == node.position.x) {
                Some((_, ys)) => ys.push(node.position.y),
                None => columns.push((node.position.x, vec![node.position.y])),
            }
        }
        for (x, ys) in columns {
            prop_assert_eq!((x - config.start_x) % config.column_width, 0.0);
            let mean = ys.iter().sum::<f64>() / ys.len() as f64;
            prop_assert!((mean - config.start_y).abs() < 1e-9);
            for pair in ys.windows(2) {
                prop_assert_eq!(pair[1] - pair[0], config.row_height);
            }
        }
    }
}
