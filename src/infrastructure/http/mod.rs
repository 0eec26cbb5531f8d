//! HTTP REST API routes

mod body;
mod error;
mod export_routes;
mod groom_routes;
mod page_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::infrastructure::state::AppState;

pub use error::ApiError;

/// Create all API and page routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Browser client
        .route("/", get(page_routes::index))
        .route("/app.js", get(page_routes::app_js))
        .route("/styles.css", get(page_routes::styles_css))
        // Grooming
        .route(
            "/api/groom",
            post(groom_routes::groom).fallback(method_not_allowed),
        )
        // Export
        .route(
            "/api/export",
            post(export_routes::export_backlog).fallback(method_not_allowed),
        )
}

/// Full application router with middleware and state attached
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(create_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

/// Any method other than POST on a POST-only route
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
