//! Upload form page
//!
//! Serves the static upload form, embedded at compile time.

use axum::{Router, response::Html, routing::get};

use crate::core::ServerState;

/// Embedded upload form (see `static/upload.html`)
const UPLOAD_FORM: &str = include_str!("../../static/upload.html");

/// Upload form route - public (no auth)
pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(index))
}

pub async fn index() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}
