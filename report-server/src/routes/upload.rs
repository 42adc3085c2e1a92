//! Sales Export Upload Handler
//!
//! Accepts the three daily sales exports (POS, Swiggy, Zomato) as one
//! multipart request, stores them in the upload directory and responds with
//! the generated sales report.

use axum::Json;
use axum::Router;
use axum::extract::{Multipart, State};
use axum::routing::post;
use std::fs;
use std::path::PathBuf;

use shared::models::SalesReport;

use crate::core::ServerState;
use crate::report::{UploadBatch, generate_report};
use crate::utils::AppError;
use crate::utils::validation::{has_allowed_extension, sanitize_filename};

/// Multipart fields required on every upload, with the platform each feeds
const REQUIRED_FIELDS: &[(&str, &str)] = &[
    ("pos-file", "POS"),
    ("swiggy-file", "Swiggy"),
    ("zomato-file", "Zomato"),
];

pub fn router() -> Router<ServerState> {
    Router::new().route("/upload", post(upload))
}

/// Sales export upload handler
///
/// The upload directory is not request-isolated: concurrent uploads with
/// identical filenames overwrite each other, last write wins.
pub async fn upload(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> Result<Json<SalesReport>, AppError> {
    let uploads_dir = state.upload_dir();
    fs::create_dir_all(&uploads_dir)
        .map_err(|e| AppError::Internal(format!("Failed to create uploads directory: {}", e)))?;

    let mut saved: [Option<PathBuf>; 3] = [None, None, None];

    while let Some(field) = multipart.next_field().await? {
        // Unknown fields are ignored
        let Some(slot) = field
            .name()
            .and_then(|name| REQUIRED_FIELDS.iter().position(|(f, _)| *f == name))
        else {
            continue;
        };
        let (_, platform) = REQUIRED_FIELDS[slot];

        let original_name = field
            .file_name()
            .map(|s| s.to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                AppError::MissingFile(format!("Invalid or missing file for {}", platform))
            })?;

        let filename = sanitize_filename(&original_name).ok_or_else(|| {
            AppError::Validation(format!(
                "Unsafe filename for {}: {}",
                platform, original_name
            ))
        })?;

        if !has_allowed_extension(&filename) {
            return Err(AppError::InvalidFileType(format!(
                "Unsupported file type for {}: {}. Allowed: csv, xlsx",
                platform, filename
            )));
        }

        let data = field.bytes().await?;
        if data.is_empty() {
            return Err(AppError::MissingFile(format!(
                "Invalid or missing file for {}",
                platform
            )));
        }

        let path = uploads_dir.join(&filename);
        fs::write(&path, &data)
            .map_err(|e| AppError::Internal(format!("Failed to save file: {}", e)))?;

        tracing::info!(
            platform = %platform,
            file = %path.display(),
            size = data.len(),
            "Stored sales export"
        );

        saved[slot] = Some(path);
    }

    // All three exports must be present
    let [Some(pos), Some(swiggy), Some(zomato)] = saved else {
        return Err(AppError::MissingFile(
            "Missing one or more platform files".to_string(),
        ));
    };

    let batch = UploadBatch {
        pos,
        swiggy,
        zomato,
    };
    let report = generate_report(state.source.as_ref(), &batch)?;

    tracing::info!(
        revenue = report.daily_report.revenue,
        orders = report.daily_report.orders,
        "Sales report generated"
    );

    Ok(Json(report))
}
