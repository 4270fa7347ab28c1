use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// Logs method, matched route, status and latency for every request.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let response = next.run(req).await;

    let latency = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        warn!(
            %method,
            path = %matched_path,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            "request failed"
        );
    } else {
        info!(
            %method,
            path = %matched_path,
            status = %status.as_u16(),
            latency_ms = %latency.as_millis(),
            "request"
        );
    }

    response
}
