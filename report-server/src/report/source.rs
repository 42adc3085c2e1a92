//! Sales data sources
//!
//! [`SalesDataSource`] is the seam between upload handling and report
//! assembly: produce one sales row per platform from a batch of stored
//! exports. [`SimulatedSalesSource`] is the current stand-in that does not
//! read the files and returns fixed figures.

use std::path::PathBuf;

use shared::models::PlatformSales;

/// Stored file paths for one upload batch, one per platform
#[derive(Debug, Clone)]
pub struct UploadBatch {
    pub pos: PathBuf,
    pub swiggy: PathBuf,
    pub zomato: PathBuf,
}

/// Errors raised while producing report data
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A platform export could not be read or parsed
    #[error("failed to read sales data from {path}: {reason}")]
    Source { path: String, reason: String },

    /// The source produced no platform rows
    #[error("no platform sales rows produced")]
    Empty,
}

/// Capability: produce platform sales rows from stored exports
///
/// Real CSV/XLSX ingestion plugs in here; the assembler contract does not
/// change when it does.
pub trait SalesDataSource: Send + Sync {
    /// Produce one sales row per platform for the given batch, in channel
    /// order (POS, Swiggy, Zomato)
    fn platform_sales(&self, batch: &UploadBatch) -> Result<Vec<PlatformSales>, ReportError>;
}

// Platform display labels
const POS_LABEL: &str = "POS (In-Store)";
const SWIGGY_LABEL: &str = "Swiggy";
const ZOMATO_LABEL: &str = "Zomato";

/// Fixed daily figures used until real spreadsheet ingestion lands
///
/// Actuals and targets mirror the demo dataset the dashboard was built
/// against. The uploaded files are deliberately not read.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSalesSource;

impl SalesDataSource for SimulatedSalesSource {
    fn platform_sales(&self, batch: &UploadBatch) -> Result<Vec<PlatformSales>, ReportError> {
        tracing::debug!(
            pos = %batch.pos.display(),
            swiggy = %batch.swiggy.display(),
            zomato = %batch.zomato.display(),
            "Simulating sales analysis, stored exports are not read yet"
        );

        Ok(vec![
            PlatformSales {
                platform: POS_LABEL.to_string(),
                actual_revenue: 25000.0,
                target_revenue: 23000.0,
                orders: 170,
            },
            PlatformSales {
                platform: SWIGGY_LABEL.to_string(),
                actual_revenue: 12500.0,
                target_revenue: 13000.0,
                orders: 90,
            },
            PlatformSales {
                platform: ZOMATO_LABEL.to_string(),
                actual_revenue: 7700.0,
                target_revenue: 7000.0,
                orders: 52,
            },
        ])
    }
}
