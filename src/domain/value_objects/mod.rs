//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod fingerprint;
mod resource_name;

pub use fingerprint::ArgsFingerprint;
pub use resource_name::{ResourceName, ResourceNameError};
