//! Resource graph entity - declared resources and their dependency edges
//!
//! The graph is built once per run from the manifest and is immutable
//! afterwards. Dependency edges are implicit: a resource depends on every
//! resource its reference bindings name. Ordering and cycle questions are
//! answered by the planner, not here.

use crate::domain::value_objects::ResourceName;
use crate::error::{CaravanError, CaravanResult};

/// One constructor argument for a resource
///
/// Either a literal value passed through unchanged, or a reference to
/// another resource whose deployed identifier is substituted at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgBinding {
    Literal(String),
    Reference(ResourceName),
}

impl ArgBinding {
    /// The referenced resource name, if this is a reference binding
    pub fn reference(&self) -> Option<&ResourceName> {
        match self {
            ArgBinding::Literal(_) => None,
            ArgBinding::Reference(name) => Some(name),
        }
    }
}

/// A single resource to deploy: unique name plus ordered constructor args
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSpec {
    name: ResourceName,
    args: Vec<ArgBinding>,
}

impl ResourceSpec {
    pub fn new(name: ResourceName, args: Vec<ArgBinding>) -> Self {
        Self { name, args }
    }

    /// Resource with no constructor arguments
    pub fn bare(name: ResourceName) -> Self {
        Self { name, args: Vec::new() }
    }

    pub fn name(&self) -> &ResourceName {
        &self.name
    }

    pub fn args(&self) -> &[ArgBinding] {
        &self.args
    }

    /// Names of the resources this spec depends on, in argument order
    pub fn dependencies(&self) -> impl Iterator<Item = &ResourceName> {
        self.args.iter().filter_map(ArgBinding::reference)
    }
}

/// Declared resources in manifest order
///
/// Declaration order matters: it is the planner's tie-break for resources
/// with no ordering constraint between them. Name uniqueness is enforced
/// at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceGraph {
    resources: Vec<ResourceSpec>,
}

impl ResourceGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from specs, rejecting duplicate names
    pub fn from_specs(specs: Vec<ResourceSpec>) -> CaravanResult<Self> {
        let mut graph = Self::new();
        for spec in specs {
            graph.push(spec)?;
        }
        Ok(graph)
    }

    /// Append a resource, rejecting a duplicate name
    pub fn push(&mut self, spec: ResourceSpec) -> CaravanResult<()> {
        if self.contains(spec.name()) {
            return Err(CaravanError::DuplicateResource {
                name: spec.name().to_string(),
            });
        }
        self.resources.push(spec);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn contains(&self, name: &ResourceName) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &ResourceName) -> Option<&ResourceSpec> {
        self.resources.iter().find(|spec| spec.name() == name)
    }

    /// Declaration index of a resource
    pub fn position(&self, name: &ResourceName) -> Option<usize> {
        self.resources.iter().position(|spec| spec.name() == name)
    }

    /// Resources in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &ResourceSpec> {
        self.resources.iter()
    }
}
