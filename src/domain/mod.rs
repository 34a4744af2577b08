//! Domain Layer
//!
//! The core of caravan - pure orchestration logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (ResourceGraph, Ledger, DeploymentRecord)
//! - `value_objects/` - Immutable value types (ResourceName, ArgsFingerprint)
//! - `services/` - Domain services (Planner, argument resolver)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
