//! In-memory snapshot of the story catalog.

use std::collections::HashMap;
use std::fmt;

use crate::models::Novel;

/// All records of one catalog load, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    novels: Vec<Novel>,
}

/// A data problem found by [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// `id` appears again at index `duplicate`; lookups return the record at `first`.
    DuplicateId {
        id: String,
        first: usize,
        duplicate: usize,
    },
    /// Record has no pages and cannot be read.
    EmptyContent { id: String, index: usize },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateId {
                id,
                first,
                duplicate,
            } => write!(
                f,
                "duplicate id '{}' at record {} (first seen at record {})",
                id, duplicate, first
            ),
            CatalogIssue::EmptyContent { id, index } => {
                write!(f, "record {} ('{}') has no pages", index, id)
            }
        }
    }
}

impl Catalog {
    pub fn new(novels: Vec<Novel>) -> Self {
        Self { novels }
    }

    pub fn novels(&self) -> &[Novel] {
        &self.novels
    }

    pub fn len(&self) -> usize {
        self.novels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.novels.is_empty()
    }

    /// Linear scan by id. With duplicate ids the earliest record wins.
    pub fn find_by_id(&self, id: &str) -> Option<&Novel> {
        self.novels.iter().find(|n| n.id == id)
    }

    /// Report duplicate ids and records without pages.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for (index, novel) in self.novels.iter().enumerate() {
            if let Some(&first) = seen.get(novel.id.as_str()) {
                issues.push(CatalogIssue::DuplicateId {
                    id: novel.id.clone(),
                    first,
                    duplicate: index,
                });
            } else {
                seen.insert(&novel.id, index);
            }

            if novel.content.is_empty() {
                issues.push(CatalogIssue::EmptyContent {
                    id: novel.id.clone(),
                    index,
                });
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn novel(id: &str, title: &str, pages: usize) -> Novel {
        Novel {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            category: "Spy".to_string(),
            keywords: String::new(),
            lang: "en".to_string(),
            content: (0..pages).map(|i| format!("page {}", i)).collect(),
        }
    }

    #[test]
    fn test_find_by_id_round_trip() {
        let catalog = Catalog::new(vec![novel("a", "A", 1), novel("b", "B", 2)]);
        for n in catalog.novels() {
            assert_eq!(catalog.find_by_id(&n.id), Some(n));
        }
        assert!(catalog.find_by_id("missing").is_none());
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let catalog = Catalog::new(vec![novel("a", "First", 1), novel("a", "Second", 1)]);
        assert_eq!(catalog.find_by_id("a").unwrap().title, "First");
        assert_eq!(
            catalog.validate(),
            vec![CatalogIssue::DuplicateId {
                id: "a".to_string(),
                first: 0,
                duplicate: 1,
            }]
        );
    }

    #[test]
    fn test_validate_reports_empty_content() {
        let catalog = Catalog::new(vec![novel("a", "A", 1), novel("b", "B", 0)]);
        let issues = catalog.validate();
        assert_eq!(
            issues,
            vec![CatalogIssue::EmptyContent {
                id: "b".to_string(),
                index: 1,
            }]
        );
        assert_eq!(issues[0].to_string(), "record 1 ('b') has no pages");
    }

    #[test]
    fn test_clean_catalog_has_no_issues() {
        let catalog = Catalog::new(vec![novel("a", "A", 3), novel("b", "B", 1)]);
        assert!(catalog.validate().is_empty());
    }
}
