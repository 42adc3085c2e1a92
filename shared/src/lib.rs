//! Shared types for the Tally sales report service
//!
//! Data models exchanged between the report server and its clients over the
//! HTTP API.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
