//! Application router and shared state.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use ordsum_core::models::config::OrdsumConfig;

use crate::routes::{health_handler, upload_form, upload_pdf};

/// Largest accepted upload body.
const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Immutable per-process state passed to the request handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<OrdsumConfig>,
}

/// Build the axum application router.
pub fn build_app(config: OrdsumConfig) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(upload_form).post(upload_pdf))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
