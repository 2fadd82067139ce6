//! Catalog listing command.

use console::style;

use crate::config::Settings;
use crate::models::FilterState;
use crate::repository::NovelRepository;
use crate::services::query::{self, QueryResult};

/// Print stories matching the given filters.
pub async fn cmd_list(
    settings: &Settings,
    lang: Option<&str>,
    category: Option<&str>,
    q: Option<&str>,
) -> anyhow::Result<()> {
    let repo = NovelRepository::from_path(settings.data_file.clone());
    let catalog = repo.load().await?;

    let filter = FilterState::from_params(lang, category, q);
    let result = query::resolve(catalog.novels(), &filter);

    print!("{}", format_listing(&result, catalog.len(), filter.is_active()));
    Ok(())
}

/// Render a listing as plain text, one story per line.
fn format_listing(result: &QueryResult<'_>, catalog_len: usize, filtered: bool) -> String {
    let mut out = String::new();

    if result.is_empty() {
        if filtered {
            out.push_str("No stories match these filters.\n");
        } else {
            out.push_str("The catalog is empty.\n");
        }
    } else {
        for novel in &result.novels {
            out.push_str(&format!(
                "{:<20} {:<4} {:<10} {} ({} pages)\n",
                novel.id,
                novel.lang,
                novel.category,
                novel.title,
                novel.page_count()
            ));
        }
    }

    out.push_str(&format!(
        "{} {} of {} stories · categories: {}\n",
        style("→").cyan(),
        result.len(),
        catalog_len,
        result.categories.join(", ")
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Novel;

    fn novel(id: &str, category: &str) -> Novel {
        Novel {
            id: id.to_string(),
            title: format!("Title {}", id),
            description: String::new(),
            category: category.to_string(),
            keywords: String::new(),
            lang: "en".to_string(),
            content: vec!["p".to_string(), "q".to_string()],
        }
    }

    #[test]
    fn test_format_listing_rows() {
        let records = vec![novel("a", "Spy"), novel("b", "Horror")];
        let result = query::resolve(&records, &FilterState::default());
        let out = format_listing(&result, records.len(), false);
        assert!(out.contains("Title a (2 pages)"));
        assert!(out.contains("Title b (2 pages)"));
        assert!(out.contains("2 of 2 stories"));
        assert!(out.contains("categories: Horror, Spy"));
    }

    #[test]
    fn test_format_listing_no_matches() {
        let records = vec![novel("a", "Spy")];
        let filter = FilterState::from_params(Some("ja"), None, None);
        let result = query::resolve(&records, &filter);
        let out = format_listing(&result, records.len(), true);
        assert!(out.starts_with("No stories match"));
    }
}
