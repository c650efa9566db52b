//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One API route plus static files. The upload page is served from the
//! `website/` directory at `/`, and `POST /api/detect` forwards the uploaded
//! image to the external detection endpoint.

pub mod detect;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Upload cap. Axum's 2 MiB default is too small for MRI scans.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Resolve the path to the static website directory.
fn website_dir() -> PathBuf {
    std::env::var("WEBSITE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("website"))
}

/// Full application router: API routes + upload page at `/`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let website_service = ServeDir::new(website_dir()).append_index_html_on_directories(true);

    Router::new()
        .route("/api/detect", post(detect::detect))
        .route("/healthz", get(healthz))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .fallback_service(website_service)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
