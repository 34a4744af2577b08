//! Property tests for deployment planning.

use std::collections::HashMap;

use proptest::prelude::*;

use caravan::{ArgBinding, CaravanError, Planner, ResourceGraph, ResourceName, ResourceSpec};

fn node(i: usize) -> ResourceName {
    ResourceName::parse(&format!("node-{i}")).unwrap()
}

/// Random acyclic dependency lists: entry `i` holds the indices it
/// depends on, each strictly below `i`, so a cycle cannot occur.
fn acyclic_edges() -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(
        prop::collection::vec(any::<prop::sample::Index>(), 0..4),
        1..16,
    )
    .prop_map(|nodes| {
        nodes
            .iter()
            .enumerate()
            .map(|(i, deps)| {
                if i == 0 {
                    return Vec::new();
                }
                let mut resolved: Vec<usize> = deps.iter().map(|idx| idx.index(i)).collect();
                resolved.sort_unstable();
                resolved.dedup();
                resolved
            })
            .collect()
    })
}

fn specs_from_edges(edges: &[Vec<usize>]) -> Vec<ResourceSpec> {
    edges
        .iter()
        .enumerate()
        .map(|(i, deps)| {
            let args = deps
                .iter()
                .map(|&d| ArgBinding::Reference(node(d)))
                .collect();
            ResourceSpec::new(node(i), args)
        })
        .collect()
}

fn plan_positions(graph: &ResourceGraph) -> HashMap<String, usize> {
    Planner::plan(graph)
        .unwrap()
        .names()
        .enumerate()
        .map(|(pos, name)| (name.to_string(), pos))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every acyclic graph plans, visiting each resource once with dependencies first.
    #[test]
    fn property_acyclic_graphs_always_plan(edges in acyclic_edges()) {
        let graph = ResourceGraph::from_specs(specs_from_edges(&edges)).unwrap();

        let plan = Planner::plan(&graph);
        prop_assert!(plan.is_ok(), "acyclic graph failed to plan: {:?}", plan.err());

        let positions = plan_positions(&graph);
        prop_assert_eq!(positions.len(), edges.len());
        for (i, deps) in edges.iter().enumerate() {
            for &d in deps {
                prop_assert!(
                    positions[&format!("node-{d}")] < positions[&format!("node-{i}")],
                    "node-{d} must deploy before node-{i}"
                );
            }
        }
    }

    /// PROPERTY: Declaring the same graph in reverse still puts dependencies first.
    #[test]
    fn property_reversed_declaration_still_satisfies_edges(edges in acyclic_edges()) {
        let mut specs = specs_from_edges(&edges);
        specs.reverse();
        let graph = ResourceGraph::from_specs(specs).unwrap();

        let positions = plan_positions(&graph);
        for (i, deps) in edges.iter().enumerate() {
            for &d in deps {
                prop_assert!(
                    positions[&format!("node-{d}")] < positions[&format!("node-{i}")],
                    "node-{d} must deploy before node-{i}"
                );
            }
        }
    }

    /// PROPERTY: Planning is deterministic: the same graph always yields the same order.
    #[test]
    fn property_plans_are_deterministic(edges in acyclic_edges()) {
        let graph = ResourceGraph::from_specs(specs_from_edges(&edges)).unwrap();

        let first: Vec<String> = Planner::plan(&graph).unwrap().names().map(str::to_string).collect();
        let second: Vec<String> = Planner::plan(&graph).unwrap().names().map(str::to_string).collect();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: Without references the plan is exactly declaration order.
    #[test]
    fn property_no_edges_keeps_declaration_order(n in 1usize..24) {
        let specs: Vec<ResourceSpec> = (0..n).map(|i| ResourceSpec::bare(node(i))).collect();
        let graph = ResourceGraph::from_specs(specs).unwrap();

        let planned: Vec<String> = Planner::plan(&graph).unwrap().names().map(str::to_string).collect();
        let declared: Vec<String> = (0..n).map(|i| format!("node-{i}")).collect();
        prop_assert_eq!(planned, declared);
    }

    /// PROPERTY: A dependency ring of any size is reported as a cycle covering the whole ring.
    #[test]
    fn property_rings_never_plan(n in 2usize..8) {
        let specs: Vec<ResourceSpec> = (0..n)
            .map(|i| ResourceSpec::new(node(i), vec![ArgBinding::Reference(node((i + 1) % n))]))
            .collect();
        let graph = ResourceGraph::from_specs(specs).unwrap();

        match Planner::plan(&graph) {
            Err(CaravanError::CycleDetected { names }) => prop_assert_eq!(names.len(), n),
            other => prop_assert!(false, "expected a cycle error, got {:?}", other.map(|p| p.len())),
        }
    }
}
