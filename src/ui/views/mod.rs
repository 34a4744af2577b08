//! Pure view functions.
//!
//! Each view renders command output to a string; the command layer
//! decides where it goes. Keeping views free of I/O makes them testable
//! without a terminal.

pub mod deploy;
pub mod plan;
pub mod status;
