//! Request tracing middleware

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Logs each request once it completes, at a level chosen by status class
pub async fn request_tracing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    // Route template keeps ids out of the log key, e.g. `/student/:id`
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let start = Instant::now();
    let response = next.run(request).await;
    let duration_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        tracing::error!(%method, %route, status, duration_ms, "Request failed");
    } else if response.status().is_client_error() {
        tracing::warn!(%method, %route, status, duration_ms, "Request rejected");
    } else {
        tracing::info!(%method, %route, status, duration_ms, "Request completed");
    }

    response
}
