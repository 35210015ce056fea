//! prospecta-server
//!
//! HTTP surface: upload documents, receive a link to the generated report.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod storage;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use prospecta_core::report_files::STATIC_URL_PREFIX;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use state::AppState;

/// The full application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.config.static_dir);
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        // Liveness
        .route("/", get(routes::health::liveness))
        // Report generation
        .route("/generate", post(routes::generate::generate_report))
        // Report downloads
        .nest_service(STATIC_URL_PREFIX, static_files)
        .layer(body_limit)
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
