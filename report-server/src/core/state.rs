use std::path::PathBuf;
use std::sync::Arc;

use crate::core::Config;
use crate::report::{SalesDataSource, SimulatedSalesSource};

/// Server state - shared handles for all request handlers
///
/// Cloning is shallow; the data source is behind an `Arc`.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | Configuration (immutable) |
/// | source | Arc<dyn SalesDataSource> | Producer of platform sales rows |
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Source of platform sales rows; the simulated source stands in until
    /// real spreadsheet ingestion lands
    pub source: Arc<dyn SalesDataSource>,
}

impl ServerState {
    /// Create server state with an explicit data source
    pub fn new(config: Config, source: Arc<dyn SalesDataSource>) -> Self {
        Self { config, source }
    }

    /// Initialize server state
    ///
    /// Ensures the work directory structure exists and wires the simulated
    /// sales source.
    ///
    /// # Panics
    ///
    /// Panics when the work directory cannot be created
    pub fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        Self::new(config.clone(), Arc::new(SimulatedSalesSource))
    }

    /// Directory uploaded sales exports are written to
    pub fn upload_dir(&self) -> PathBuf {
        self.config.upload_dir()
    }
}
