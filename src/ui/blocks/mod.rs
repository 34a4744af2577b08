//! Reusable output blocks shared by the command views.

pub mod header;
pub mod summary;

pub use header::CommandHeader;
pub use summary::ResultSummary;
