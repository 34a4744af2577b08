//! Composite UI widgets.

pub mod panel;
