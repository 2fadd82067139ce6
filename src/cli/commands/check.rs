//! Catalog validation command.

use anyhow::bail;
use console::style;

use crate::config::Settings;
use crate::repository::NovelRepository;

/// Validate the catalog file and report problems.
pub async fn cmd_check(settings: &Settings) -> anyhow::Result<()> {
    let repo = NovelRepository::from_path(settings.data_file.clone());
    let catalog = repo.load().await?;
    let issues = catalog.validate();

    if issues.is_empty() {
        println!(
            "{} {} stories in {}",
            style("✓").green(),
            catalog.len(),
            repo.describe()
        );
        return Ok(());
    }

    for issue in &issues {
        eprintln!("  {} {}", style("✗").red(), issue);
    }
    bail!("{} problem(s) in {}", issues.len(), repo.describe())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_catalog(dir: &tempfile::TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("novels.json");
        std::fs::write(&path, json).unwrap();
        path
    }

    #[tokio::test]
    async fn test_check_passes_clean_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(
            &dir,
            r#"[{"id": "a", "title": "A", "description": "", "category": "Spy",
                 "keywords": "", "lang": "en", "content": ["p1"]}]"#,
        );
        assert!(cmd_check(&Settings::with_data_file(path)).await.is_ok());
    }

    #[tokio::test]
    async fn test_check_fails_on_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_catalog(
            &dir,
            r#"[{"id": "a", "title": "A", "description": "", "category": "Spy",
                 "keywords": "", "lang": "en", "content": ["p1"]},
                {"id": "a", "title": "B", "description": "", "category": "Spy",
                 "keywords": "", "lang": "en", "content": []}]"#,
        );
        let err = cmd_check(&Settings::with_data_file(path)).await.unwrap_err();
        assert!(err.to_string().starts_with("2 problem(s)"));
    }
}
