//! Story reader handler.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};

use super::super::template_structs::NovelTemplate;
use super::super::AppState;
use super::helpers::{
    catalog_error_page, current_year, first_param, not_found_page, render, QueryPairs,
};
use crate::services::{paginate, parse_page_param};

/// Query params for the reader. `page` is kept as text so that malformed
/// values fall back to the first page instead of rejecting the request.
/// A repeated `page` keeps its first value.
#[derive(Debug, Clone, Default)]
pub struct ReaderParams {
    pub page: Option<String>,
}

impl ReaderParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            page: first_param(pairs, "page").map(str::to_string),
        }
    }
}

/// One page of a story.
pub async fn novel_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(pairs): Query<QueryPairs>,
) -> Response {
    let params = ReaderParams::from_pairs(&pairs);
    let catalog = match state.catalog().await {
        Ok(c) => c,
        Err(e) => return catalog_error_page(&state, &e),
    };

    let Some(novel) = catalog.find_by_id(&id) else {
        return not_found_page(&state, "That story is not in the library.");
    };

    let requested = parse_page_param(params.page.as_deref());
    let Some(view) = paginate(&novel.content, requested) else {
        tracing::warn!("Story '{}' has no pages", novel.id);
        return not_found_page(&state, "That story has no pages yet.");
    };
    if view.was_clamped() {
        tracing::debug!(
            "Clamped page {} to {} for '{}'",
            view.requested_page,
            view.page,
            novel.id
        );
    }

    let template = NovelTemplate::new(&state.site_title, current_year(), novel, &view);
    render(StatusCode::OK, &template)
}
