//! Story records as stored in the static catalog file.

use serde::{Deserialize, Serialize};

/// Category that gets the red accent in listings and the reader.
const HORROR_CATEGORY: &str = "Horror";

/// One story in the catalog.
///
/// Records are read once from the data source and never mutated. The
/// `content` vector is in reading order; each element is one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Novel {
    /// Unique identifier, used in `/novels/:id` links.
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Free-form search terms, matched by the text query.
    pub keywords: String,
    /// Language tag, e.g. `en` or `ja`.
    pub lang: String,
    /// Page texts in reading order.
    pub content: Vec<String>,
}

impl Novel {
    /// Number of pages in the story.
    pub fn page_count(&self) -> usize {
        self.content.len()
    }

    /// CSS accent class for the category badge.
    pub fn category_class(&self) -> &'static str {
        if self.category == HORROR_CATEGORY {
            "horror"
        } else {
            "other"
        }
    }

    /// Check whether an already-lowercased needle occurs in the title,
    /// description, or keywords (case-insensitive).
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.keywords.to_lowercase().contains(needle)
    }

    /// Lightweight projection without page texts.
    pub fn summary(&self) -> NovelSummary {
        NovelSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            lang: self.lang.clone(),
            page_count: self.page_count(),
        }
    }
}

/// Listing/API projection of a [`Novel`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NovelSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub lang: String,
    pub page_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn novel(category: &str) -> Novel {
        Novel {
            id: "n1".to_string(),
            title: "The Whispering Well".to_string(),
            description: "Something below answers back.".to_string(),
            category: category.to_string(),
            keywords: "well, village, Echo".to_string(),
            lang: "en".to_string(),
            content: vec!["one".to_string(), "two".to_string()],
        }
    }

    #[test]
    fn test_category_class() {
        assert_eq!(novel("Horror").category_class(), "horror");
        assert_eq!(novel("Spy").category_class(), "other");
        // Exact match only
        assert_eq!(novel("horror").category_class(), "other");
    }

    #[test]
    fn test_matches_text_fields() {
        let n = novel("Horror");
        assert!(n.matches_text("whispering"));
        assert!(n.matches_text("answers"));
        assert!(n.matches_text("echo"));
        assert!(!n.matches_text("cipher"));
    }

    #[test]
    fn test_summary_drops_content() {
        let s = novel("Spy").summary();
        assert_eq!(s.id, "n1");
        assert_eq!(s.page_count, 2);
    }

    #[test]
    fn test_deserialize_record() {
        let json = r#"{
            "id": "a", "title": "T", "description": "D", "category": "Spy",
            "keywords": "k", "lang": "ja", "content": ["p1", "p2"]
        }"#;
        let n: Novel = serde_json::from_str(json).unwrap();
        assert_eq!(n.lang, "ja");
        assert_eq!(n.content, vec!["p1", "p2"]);
    }

    #[test]
    fn test_deserialize_rejects_missing_content() {
        let json = r#"{
            "id": "a", "title": "T", "description": "D", "category": "Spy",
            "keywords": "k", "lang": "ja"
        }"#;
        assert!(serde_json::from_str::<Novel>(json).is_err());
    }
}
