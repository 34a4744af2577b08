//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod ledger;

pub use ledger::TomlLedgerRepository;
