//! Story reading command.

use anyhow::anyhow;
use console::style;

use crate::config::Settings;
use crate::models::{Locale, Novel, PageView};
use crate::repository::NovelRepository;
use crate::services::{paginate, parse_page_param};

/// Print one page of a story.
pub async fn cmd_read(settings: &Settings, id: &str, page: Option<&str>) -> anyhow::Result<()> {
    let repo = NovelRepository::from_path(settings.data_file.clone());
    let novel = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| anyhow!("Novel not found: {}", id))?;

    let view = paginate(&novel.content, parse_page_param(page))
        .ok_or_else(|| anyhow!("Novel has no pages: {}", id))?;

    print!("{}", format_page(&novel, &view));
    Ok(())
}

fn format_page(novel: &Novel, view: &PageView<'_>) -> String {
    let locale = Locale::for_lang(&novel.lang);
    let mut out = format!(
        "{}  [{}]\n\n{}\n\n",
        style(&novel.title).bold(),
        novel.category,
        view.text
    );

    out.push_str(&format!("Page {} of {}", view.page, view.total_pages));
    if let Some(next) = view.next_page() {
        out.push_str(&format!("  (next: --page {})", next));
    }
    out.push('\n');

    if view.is_last {
        out.push_str(locale.completion());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_page() {
        let novel = Novel {
            id: "n".to_string(),
            title: "Night".to_string(),
            description: String::new(),
            category: "Horror".to_string(),
            keywords: String::new(),
            lang: "en".to_string(),
            content: vec!["first".to_string(), "second".to_string()],
        };

        let first = format_page(&novel, &paginate(&novel.content, 1).unwrap());
        assert!(first.contains("first"));
        assert!(first.contains("Page 1 of 2  (next: --page 2)"));
        assert!(!first.contains("Thanks for reading"));

        let last = format_page(&novel, &paginate(&novel.content, 9).unwrap());
        assert!(last.contains("Page 2 of 2\n"));
        assert!(last.contains("Thanks for reading"));
    }
}
