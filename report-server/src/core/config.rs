use std::path::PathBuf;

/// File extensions accepted for uploaded sales exports
pub const ALLOWED_EXTENSIONS: &[&str] = &["csv", "xlsx"];

/// Subdirectory of `work_dir` where uploaded exports are written
const UPLOADS_SUBDIR: &str = "uploads";

/// Server configuration
///
/// Built once at startup and handed to the handlers through
/// [`crate::core::ServerState`]; nothing reads process-wide mutable state.
///
/// # Environment variables
///
/// All settings fall back to their defaults when unset:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Working directory holding uploads and logs |
/// | HTTP_PORT | 3000 | HTTP service port |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/var/lib/tally HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory, stores uploaded exports and log files
    pub work_dir: String,
    /// HTTP API service port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables use the defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override parts of the configuration with custom values
    ///
    /// Mostly used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Directory uploaded sales exports are written to
    pub fn upload_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(UPLOADS_SUBDIR)
    }

    /// Create the work directory structure if it does not exist yet
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.upload_dir())
    }

    /// Is this a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Is this a development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
