use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Request logging middleware.
///
/// Logs every request as a structured `tracing` event once the response is
/// ready, including how long the handler took. Report generation is slow
/// (eight sequential model calls), so latency is the field worth watching.
pub async fn request_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    tracing::info!(
        method = %method,
        path = %uri,
        status = status,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "api_request"
    );

    response
}
