//! Common test utilities for caravan integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory with CLI execution helpers
//! - Fixtures: reusable deployer scripts and manifest snippets

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
