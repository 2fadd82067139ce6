//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        // Listing and reader
        .route("/novels", get(handlers::browse_novels))
        .route("/novels/:id", get(handlers::novel_detail))
        // JSON API
        .route("/api/novels", get(handlers::api_novels))
        .route("/api/novels/:id", get(handlers::api_novel_page))
        // Static assets (CSS/JS)
        .route("/static/style.css", get(handlers::serve_css))
        .route("/static/reader.js", get(handlers::serve_js))
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
