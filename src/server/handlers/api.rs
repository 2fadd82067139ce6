//! JSON API handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::super::AppState;
use super::browse::BrowseParams;
use super::helpers::QueryPairs;
use super::novels::ReaderParams;
use crate::error::CatalogError;
use crate::models::{NovelSummary, PageView};
use crate::services::{paginate, parse_page_param, query};

/// Response for `/api/novels`.
#[derive(Debug, Serialize)]
pub struct NovelListResponse {
    pub novels: Vec<NovelSummary>,
    pub categories: Vec<String>,
    pub total: usize,
    /// Whether any filter was applied, so an empty list can be told apart
    /// from an empty catalog.
    pub filtered: bool,
}

/// Response for `/api/novels/:id`.
#[derive(Debug, Serialize)]
pub struct NovelPageResponse<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub category: &'a str,
    pub lang: &'a str,
    pub page: PageView<'a>,
}

fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}

fn catalog_error(e: &CatalogError) -> Response {
    tracing::error!("Failed to load catalog: {}", e);
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to load catalog")
}

/// Filtered listing as JSON. Accepts the same params as the listing page.
pub async fn api_novels(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Response {
    let params = BrowseParams::from_pairs(&pairs);
    let catalog = match state.catalog().await {
        Ok(c) => c,
        Err(e) => return catalog_error(&e),
    };

    let filter = params.filter();
    let result = query::resolve(catalog.novels(), &filter);

    Json(NovelListResponse {
        total: result.len(),
        novels: result.novels.iter().map(|n| n.summary()).collect(),
        categories: result.categories,
        filtered: filter.is_active(),
    })
    .into_response()
}

/// One page of a story as JSON.
pub async fn api_novel_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(pairs): Query<QueryPairs>,
) -> Response {
    let params = ReaderParams::from_pairs(&pairs);
    let catalog = match state.catalog().await {
        Ok(c) => c,
        Err(e) => return catalog_error(&e),
    };

    let Some(novel) = catalog.find_by_id(&id) else {
        return json_error(StatusCode::NOT_FOUND, format!("Novel not found: {}", id));
    };

    let requested = parse_page_param(params.page.as_deref());
    let Some(page) = paginate(&novel.content, requested) else {
        return json_error(StatusCode::NOT_FOUND, format!("Novel has no pages: {}", id));
    };

    Json(NovelPageResponse {
        id: &novel.id,
        title: &novel.title,
        category: &novel.category,
        lang: &novel.lang,
        page,
    })
    .into_response()
}
