//! Platform Sales Model

use serde::{Deserialize, Serialize};

/// Sales figures for one channel over the reporting day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformSales {
    /// Display name of the channel (e.g. "POS (In-Store)")
    pub platform: String,
    /// Revenue actually taken on the channel (non-negative)
    pub actual_revenue: f64,
    /// Revenue target set for the channel (non-negative, may be zero)
    pub target_revenue: f64,
    /// Number of orders taken on the channel
    pub orders: i64,
}
