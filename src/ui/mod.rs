//! Terminal UI
//!
//! Rendering is split from printing: `views` and the building blocks under
//! `blocks`/`widgets`/`primitives` produce strings, and only the command
//! layer writes them out. `terminal` detects what the terminal supports;
//! `context` folds that together with CLI flags and manifest preferences.

pub mod blocks;
pub mod context;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
