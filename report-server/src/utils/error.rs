//! Unified Error Handling
//!
//! Application-wide error type mapped onto HTTP responses.
//!
//! | Variant | Status | `error` discriminant |
//! |---------|--------|----------------------|
//! | MissingFile | 400 | missing_file |
//! | InvalidFileType | 400 | invalid_file_type |
//! | Validation | 400 | validation_error |
//! | Report | 500 | report_error |
//! | Internal | 500 | internal_error |

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::report::ReportError;

/// Application-level error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Client Errors (4xx) ==========
    #[error("Missing file: {0}")]
    MissingFile(String),

    #[error("Invalid file type: {0}")]
    InvalidFileType(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    // ========== Server Errors (5xx) ==========
    #[error("Report generation failed: {0}")]
    Report(#[from] ReportError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// JSON body for error responses
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            AppError::MissingFile(msg) => (StatusCode::BAD_REQUEST, "missing_file", msg.clone()),

            AppError::InvalidFileType(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_file_type", msg.clone())
            }

            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg.clone())
            }

            // 5xx details are logged, not echoed to clients
            AppError::Report(err) => {
                error!(target: "report", error = %err, "Report generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "report_error",
                    "Report generation failed".to_string(),
                )
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Validation(format!("Multipart error: {}", e))
    }
}
