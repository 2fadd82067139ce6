//! One rendered page of a story.

use serde::Serialize;

/// The page of a story selected by a request, after clamping.
///
/// Borrowed from the catalog for the lifetime of one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView<'a> {
    /// Page number as parsed from the request, before clamping.
    pub requested_page: i64,
    /// 1-based page number actually shown.
    pub page: usize,
    pub total_pages: usize,
    pub text: &'a str,
    pub has_previous: bool,
    pub has_next: bool,
    pub is_first: bool,
    pub is_last: bool,
}

impl PageView<'_> {
    pub fn previous_page(&self) -> Option<usize> {
        self.has_previous.then(|| self.page - 1)
    }

    pub fn next_page(&self) -> Option<usize> {
        self.has_next.then(|| self.page + 1)
    }

    /// Whether the requested number had to be corrected.
    pub fn was_clamped(&self) -> bool {
        self.requested_page != self.page as i64
    }
}
