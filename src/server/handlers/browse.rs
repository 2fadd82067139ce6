//! Listing page handler.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};

use super::super::template_structs::{BrowseTemplate, FilterOption, HiddenField, NovelCard};
use super::super::AppState;
use super::helpers::{catalog_error_page, current_year, first_param, render, QueryPairs};
use crate::models::{Facet, FilterState, Locale};
use crate::services::query;

const LISTING_PATH: &str = "/novels";

/// Query params for the listing page. A repeated key keeps its first value.
#[derive(Debug, Clone, Default)]
pub struct BrowseParams {
    pub lang: Option<String>,
    pub category: Option<String>,
    pub q: Option<String>,
}

impl BrowseParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let get = |key: &str| first_param(pairs, key).map(str::to_string);
        Self {
            lang: get("lang"),
            category: get("category"),
            q: get("q"),
        }
    }

    pub fn filter(&self) -> FilterState {
        FilterState::from_params(
            self.lang.as_deref(),
            self.category.as_deref(),
            self.q.as_deref(),
        )
    }
}

/// Listing of stories with language, category, and text filters.
pub async fn browse_novels(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Response {
    let params = BrowseParams::from_pairs(&pairs);
    let catalog = match state.catalog().await {
        Ok(c) => c,
        Err(e) => return catalog_error_page(&state, &e),
    };

    let filter = params.filter();
    let result = query::resolve(catalog.novels(), &filter);
    tracing::debug!(
        "Listing {} of {} novels for {:?}",
        result.len(),
        catalog.len(),
        filter
    );

    let cards: Vec<NovelCard> = result
        .novels
        .iter()
        .map(|n| NovelCard::from_novel(n))
        .collect();

    let template = BrowseTemplate {
        title: "Library",
        site_title: &state.site_title,
        year: current_year(),
        total_count: cards.len(),
        novels: cards,
        filter_active: filter.is_active(),
        query: filter.query.clone(),
        lang_options: lang_options(&filter),
        category_options: category_options(&filter, &result.categories),
        hidden_fields: hidden_fields(&filter),
    };

    render(StatusCode::OK, &template)
}

/// "All" plus each supported language; every link keeps the other filters.
fn lang_options(filter: &FilterState) -> Vec<FilterOption> {
    let all = FilterOption {
        label: "All".to_string(),
        href: filter.with_lang(Facet::All).href(LISTING_PATH),
        selected: filter.lang.is_all(),
    };

    std::iter::once(all)
        .chain(Locale::ALL.iter().map(|locale| {
            let facet = Facet::Only(locale.tag().to_string());
            FilterOption {
                label: locale.label().to_string(),
                href: filter.with_lang(facet.clone()).href(LISTING_PATH),
                selected: filter.lang == facet,
            }
        }))
        .collect()
}

/// "All" plus every category in the catalog; every link keeps the other filters.
fn category_options(filter: &FilterState, categories: &[String]) -> Vec<FilterOption> {
    let all = FilterOption {
        label: "All".to_string(),
        href: filter.with_category(Facet::All).href(LISTING_PATH),
        selected: filter.category.is_all(),
    };

    std::iter::once(all)
        .chain(categories.iter().map(|category| {
            let facet = Facet::Only(category.clone());
            FilterOption {
                label: category.clone(),
                href: filter.with_category(facet.clone()).href(LISTING_PATH),
                selected: filter.category == facet,
            }
        }))
        .collect()
}

/// Active facets the search form must resubmit alongside `q`.
fn hidden_fields(filter: &FilterState) -> Vec<HiddenField> {
    let mut fields = Vec::new();
    if let Some(lang) = filter.lang.as_param() {
        fields.push(HiddenField {
            name: "lang",
            value: lang.to_string(),
        });
    }
    if let Some(category) = filter.category.as_param() {
        fields.push(HiddenField {
            name: "category",
            value: category.to_string(),
        });
    }
    fields
}
