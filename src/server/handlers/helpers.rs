//! Helper types and utility functions for handlers.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::Datelike;

use super::super::template_structs::{ErrorTemplate, NotFoundTemplate};
use super::super::AppState;
use crate::error::CatalogError;

/// Raw query string pairs in request order. Repeated keys are all kept.
pub type QueryPairs = Vec<(String, String)>;

/// Value of the first occurrence of `key`.
pub fn first_param<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Year shown in the footer copyright.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Render a template to an HTML response with the given status.
pub fn render<T: Template>(status: StatusCode, template: &T) -> Response {
    let body = template
        .render()
        .unwrap_or_else(|e| format!("Template error: {}", e));
    (status, Html(body)).into_response()
}

/// 404 page.
pub fn not_found_page(state: &AppState, message: &str) -> Response {
    let template = NotFoundTemplate {
        title: "Not Found",
        site_title: &state.site_title,
        year: current_year(),
        message,
    };
    render(StatusCode::NOT_FOUND, &template)
}

/// 500 page for a catalog that could not be loaded.
pub fn catalog_error_page(state: &AppState, error: &CatalogError) -> Response {
    tracing::error!("Failed to load catalog: {}", error);
    let template = ErrorTemplate {
        title: "Error",
        site_title: &state.site_title,
        year: current_year(),
        message: "The library could not be opened. Please try again later.",
    };
    render(StatusCode::INTERNAL_SERVER_ERROR, &template)
}

/// Fallback for unknown routes.
pub async fn not_found(State(state): State<AppState>) -> Response {
    not_found_page(&state, "There is nothing at this address.")
}
