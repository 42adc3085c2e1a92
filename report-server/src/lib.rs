//! Tally Report Server - daily sales reconciliation for a café
//!
//! # Architecture overview
//!
//! The server accepts the day's sales exports (in-store POS plus the Swiggy
//! and Zomato delivery platforms) as one multipart upload, stores them, and
//! answers with a JSON sales report:
//!
//! - **Report core** (`report`): variance percentages, report assembly and
//!   the [`SalesDataSource`] seam for future spreadsheet ingestion
//! - **HTTP API** (`routes`): upload endpoint, embedded upload form, health
//! - **Core** (`core`): configuration, state, server lifecycle
//! - **Utilities** (`utils`): errors, logging, upload validation
//!
//! # Module structure
//!
//! ```text
//! report-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── report/        # Variance calculation and report assembly
//! ├── routes/        # HTTP routes and middleware
//! └── utils/         # Errors, logging, validation
//! ```

pub mod core;
pub mod report;
pub mod routes;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use report::{
    SalesDataSource, SimulatedSalesSource, UploadBatch, generate_report, variance_percentage,
};
pub use utils::AppError;

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Set up the process environment: .env file and logging
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    utils::logger::init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
 ______      ____
/_  __/___ _/ / /_  __
 / / / __ `/ / / / / /
/ / / /_/ / / / /_/ /
/_/  \__,_/_/_/\__, /
              /____/
    "#
    );
}
