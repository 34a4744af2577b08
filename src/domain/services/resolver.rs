//! Argument resolution service
//!
//! Turns a resource's declared bindings into the concrete argument vector
//! handed to the deployer: literals pass through, references substitute
//! the identifier recorded in the ledger. Topological execution order
//! guarantees referenced successes exist by the time a resource runs; a
//! miss here still surfaces as `UnresolvedReference` rather than a panic.

use crate::domain::entities::{ArgBinding, Ledger, ResourceSpec};
use crate::error::{CaravanError, CaravanResult};

/// Resolve a resource's bindings against the ledger
pub fn resolve_args(spec: &ResourceSpec, ledger: &Ledger) -> CaravanResult<Vec<String>> {
    let mut resolved = Vec::with_capacity(spec.args().len());
    for binding in spec.args() {
        match binding {
            ArgBinding::Literal(value) => resolved.push(value.clone()),
            ArgBinding::Reference(name) => match ledger.identifier_of(name) {
                Some(identifier) => resolved.push(identifier.to_string()),
                None => {
                    return Err(CaravanError::UnresolvedReference {
                        resource: spec.name().to_string(),
                        missing: name.to_string(),
                    });
                }
            },
        }
    }
    Ok(resolved)
}
