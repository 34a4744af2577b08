//! UI primitives: icons, colored text, and border characters.
//!
//! Everything here renders to plain strings; color and unicode support
//! are passed in so callers stay testable without a terminal.

pub mod border;
pub mod icon;
pub mod text;
