//! Router extension for oneshot calls
//!
//! Allows processing HTTP requests against the router directly, without
//! going through the network stack. Integration tests drive the full
//! upload-to-report flow this way.

use http::Response;
use tower::Service;

use crate::core::ServerState;
use anyhow::Result;
use axum::Router;
use axum::body::Body;
use http::Request;

/// Result type for oneshot API calls
pub type OneshotResult = Result<Response<Body>>;

/// Extension trait for Router to support oneshot calls
///
/// # Example
///
/// ```ignore
/// use http::Request;
///
/// let state = ServerState::initialize(&config);
/// let request = Request::builder()
///     .uri("/health")
///     .body(Body::empty())?;
///
/// let response = build_router().oneshot(&state, request).await?;
/// ```
#[async_trait::async_trait]
pub trait OneshotRouter {
    /// Process a request using the oneshot pattern
    async fn oneshot(&mut self, state: &ServerState, request: Request<Body>) -> OneshotResult;
}

#[async_trait::async_trait]
impl OneshotRouter for Router<ServerState> {
    async fn oneshot(&mut self, state: &ServerState, request: Request<Body>) -> OneshotResult {
        // Clone router and apply state, then call as Service
        let mut svc = self.clone().with_state(state.clone());
        let response = svc.call(request).await?;
        Ok(response)
    }
}
