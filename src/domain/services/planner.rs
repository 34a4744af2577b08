//! Deployment planning service
//!
//! Pure domain logic for ordering a resource graph. The planner turns a
//! declared graph into a topologically ordered plan, or reports why no
//! such order exists. It performs no I/O and never looks at the ledger;
//! skip decisions belong to the executor.

use crate::domain::entities::{ResourceGraph, ResourceSpec};
use crate::error::{CaravanError, CaravanResult};

/// A topologically ordered sequence of resources to deploy
///
/// Every resource appears strictly after all resources it references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentPlan {
    steps: Vec<ResourceSpec>,
}

impl DeploymentPlan {
    pub fn steps(&self) -> &[ResourceSpec] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceSpec> {
        self.steps.iter()
    }

    /// Step names in plan order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|spec| spec.name().as_str())
    }
}

/// Deployment planner
pub struct Planner;

impl Planner {
    /// Order the graph for deployment
    ///
    /// Fails with `UnresolvedReference` when a binding names a resource
    /// absent from the graph, or `CycleDetected` when the dependency
    /// relation is not acyclic. Ties between unordered resources break by
    /// declaration order, so plans are deterministic across runs.
    pub fn plan(graph: &ResourceGraph) -> CaravanResult<DeploymentPlan> {
        for spec in graph.iter() {
            for dep in spec.dependencies() {
                if !graph.contains(dep) {
                    return Err(CaravanError::UnresolvedReference {
                        resource: spec.name().to_string(),
                        missing: dep.to_string(),
                    });
                }
            }
        }

        let mut scheduled = vec![false; graph.len()];
        let mut steps = Vec::with_capacity(graph.len());

        while steps.len() < graph.len() {
            // Earliest declared resource whose dependencies are all
            // scheduled goes next. A self-reference is never ready.
            let next = graph.iter().enumerate().find(|(idx, spec)| {
                !scheduled[*idx]
                    && spec
                        .dependencies()
                        .all(|dep| graph.position(dep).is_some_and(|pos| scheduled[pos]))
            });

            match next {
                Some((idx, spec)) => {
                    scheduled[idx] = true;
                    steps.push(spec.clone());
                }
                None => {
                    return Err(CaravanError::CycleDetected {
                        names: Self::trace_cycle(graph, &scheduled),
                    });
                }
            }
        }

        Ok(DeploymentPlan { steps })
    }

    /// Walk unscheduled dependencies until a node repeats; the repeated
    /// segment is an actual cycle in the graph.
    fn trace_cycle(graph: &ResourceGraph, scheduled: &[bool]) -> Vec<String> {
        let specs: Vec<&ResourceSpec> = graph.iter().collect();
        let Some(start) = (0..specs.len()).find(|idx| !scheduled[*idx]) else {
            return Vec::new();
        };

        let mut path: Vec<usize> = Vec::new();
        let mut current = start;
        loop {
            if let Some(pos) = path.iter().position(|&idx| idx == current) {
                return path[pos..]
                    .iter()
                    .map(|&idx| specs[idx].name().to_string())
                    .collect();
            }
            path.push(current);

            let next = specs[current]
                .dependencies()
                .find_map(|dep| graph.position(dep).filter(|pos| !scheduled[*pos]));
            match next {
                Some(idx) => current = idx,
                None => {
                    return path
                        .iter()
                        .map(|&idx| specs[idx].name().to_string())
                        .collect();
                }
            }
        }
    }
}
