//! Listing query resolution.

use std::collections::BTreeSet;

use crate::models::{FilterState, Novel};

/// Filtered listing plus the category options for the filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult<'a> {
    /// Matching records in catalog order.
    pub novels: Vec<&'a Novel>,
    /// Every distinct category in the unfiltered catalog, sorted ascending.
    pub categories: Vec<String>,
}

impl QueryResult<'_> {
    pub fn is_empty(&self) -> bool {
        self.novels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.novels.len()
    }
}

/// Apply `filter` to `records`.
///
/// Language and category are exact matches; the text query is a
/// case-insensitive substring match over title, description, and keywords.
/// All filters must hold. Relative order of `records` is kept.
pub fn resolve<'a>(records: &'a [Novel], filter: &FilterState) -> QueryResult<'a> {
    let needle = filter.needle();

    let novels = records
        .iter()
        .filter(|n| filter.lang.admits(&n.lang))
        .filter(|n| filter.category.admits(&n.category))
        .filter(|n| needle.as_deref().map_or(true, |q| n.matches_text(q)))
        .collect();

    QueryResult {
        novels,
        categories: categories(records),
    }
}

/// Distinct categories across `records`, sorted ascending.
pub fn categories(records: &[Novel]) -> Vec<String> {
    records
        .iter()
        .map(|n| n.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
