//! Landing page handler.

use axum::{extract::State, http::StatusCode, response::Response};

use super::super::template_structs::HomeTemplate;
use super::super::AppState;
use super::helpers::{current_year, render};

/// Entrance page linking into the library.
pub async fn home(State(state): State<AppState>) -> Response {
    let template = HomeTemplate {
        title: &state.site_title,
        site_title: &state.site_title,
        year: current_year(),
    };
    render(StatusCode::OK, &template)
}
