//! Data models
//!
//! Shared between report-server and the dashboard frontend (via API).

pub mod report;
pub mod sales;

// Re-exports
pub use report::*;
pub use sales::*;
