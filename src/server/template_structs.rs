//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Askama provides compile-time verification that templates are valid.
//!
//! Every page extends `base.html`, which reads `title`, `site_title`, and
//! `year`. Fields ending in `href` are built from percent-encoded parts and
//! are emitted unescaped.

use askama::Template;

use crate::models::{Locale, Novel, PageView};

/// Helper struct for cards in the listing grid.
pub struct NovelCard {
    pub href: String,
    pub title: String,
    pub description: String,
    pub category_upper: String,
    pub category_class: &'static str,
}

/// Helper struct for one choice in a filter control.
pub struct FilterOption {
    pub label: String,
    pub href: String,
    pub selected: bool,
}

/// Helper struct for hidden inputs that carry filters through the search form.
pub struct HiddenField {
    pub name: &'static str,
    pub value: String,
}

/// Landing page.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate<'a> {
    pub title: &'a str,
    pub site_title: &'a str,
    pub year: i32,
}

/// Listing page with filters.
#[derive(Template)]
#[template(path = "browse.html")]
pub struct BrowseTemplate<'a> {
    pub title: &'a str,
    pub site_title: &'a str,
    pub year: i32,
    pub novels: Vec<NovelCard>,
    pub total_count: usize,
    pub filter_active: bool,
    pub query: String,
    pub lang_options: Vec<FilterOption>,
    pub category_options: Vec<FilterOption>,
    pub hidden_fields: Vec<HiddenField>,
}

/// Story reader page.
#[derive(Template)]
#[template(path = "novel.html")]
pub struct NovelTemplate<'a> {
    /// `lang` attribute of the page, from the story's locale.
    pub html_lang: &'static str,
    pub title: &'a str,
    pub site_title: &'a str,
    pub year: i32,
    pub category: &'a str,
    pub category_class: &'static str,
    pub text: &'a str,
    pub page: usize,
    pub total_pages: usize,
    pub is_first: bool,
    pub is_last: bool,
    pub has_prev: bool,
    pub prev_href: String,
    pub has_next: bool,
    pub next_href: String,
    pub greeting: &'static str,
    pub completion: &'static str,
    pub back_label: &'static str,
    pub pulse_class: &'static str,
}

/// Not-found page.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate<'a> {
    pub title: &'a str,
    pub site_title: &'a str,
    pub year: i32,
    pub message: &'a str,
}

/// Error page template.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub title: &'a str,
    pub site_title: &'a str,
    pub year: i32,
    pub message: &'a str,
}

// Helper implementations for converting data to template structs

/// Link to one page of a story.
pub fn page_href(novel_id: &str, page: usize) -> String {
    format!("/novels/{}?page={}", urlencoding::encode(novel_id), page)
}

impl NovelCard {
    pub fn from_novel(novel: &Novel) -> Self {
        Self {
            href: format!("/novels/{}", urlencoding::encode(&novel.id)),
            title: novel.title.clone(),
            description: novel.description.clone(),
            category_upper: novel.category.to_uppercase(),
            category_class: novel.category_class(),
        }
    }
}

impl<'a> NovelTemplate<'a> {
    pub fn new(site_title: &'a str, year: i32, novel: &'a Novel, view: &PageView<'a>) -> Self {
        let locale = Locale::for_lang(&novel.lang);
        let boundary = view.is_first || view.is_last;

        Self {
            html_lang: locale.tag(),
            title: &novel.title,
            site_title,
            year,
            category: &novel.category,
            category_class: novel.category_class(),
            text: view.text,
            page: view.page,
            total_pages: view.total_pages,
            is_first: view.is_first,
            is_last: view.is_last,
            has_prev: view.has_previous,
            prev_href: view
                .previous_page()
                .map(|p| page_href(&novel.id, p))
                .unwrap_or_default(),
            has_next: view.has_next,
            next_href: view
                .next_page()
                .map(|p| page_href(&novel.id, p))
                .unwrap_or_default(),
            greeting: locale.greeting(),
            completion: locale.completion(),
            back_label: locale.back_to_library(),
            pulse_class: if boundary { "pulse-strong" } else { "pulse-soft" },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::paginate;

    fn novel(lang: &str) -> Novel {
        Novel {
            id: "a b".to_string(),
            title: "Night <Shift>".to_string(),
            description: "desc".to_string(),
            category: "Spy".to_string(),
            keywords: String::new(),
            lang: lang.to_string(),
            content: vec!["one".to_string(), "two".to_string(), "three".to_string()],
        }
    }

    #[test]
    fn test_page_href_encodes_id() {
        assert_eq!(page_href("a b", 2), "/novels/a%20b?page=2");
    }

    #[test]
    fn test_card_from_novel() {
        let card = NovelCard::from_novel(&novel("en"));
        assert_eq!(card.href, "/novels/a%20b");
        assert_eq!(card.category_upper, "SPY");
        assert_eq!(card.category_class, "other");
    }

    #[test]
    fn test_reader_middle_page_has_soft_pulse() {
        let n = novel("en");
        let view = paginate(&n.content, 2).unwrap();
        let t = NovelTemplate::new("Site", 2025, &n, &view);
        assert_eq!(t.html_lang, "en");
        assert_eq!(t.pulse_class, "pulse-soft");
        assert_eq!(t.prev_href, "/novels/a%20b?page=1");
        assert_eq!(t.next_href, "/novels/a%20b?page=3");
    }

    #[test]
    fn test_reader_escapes_title() {
        let n = novel("ja");
        let view = paginate(&n.content, 1).unwrap();
        let html = NovelTemplate::new("Site", 2025, &n, &view).render().unwrap();
        assert!(html.contains("<html lang=\"ja\">"));
        assert!(html.contains("Night &lt;Shift&gt;"));
        assert!(html.contains(Locale::Ja.greeting()));
        assert!(html.contains("pulse-strong"));
    }
}
