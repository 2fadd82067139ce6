//! Configuration management using the prefer crate for file discovery.
//!
//! Settings are layered: built-in defaults, then a config file, then
//! environment variables, then command-line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Catalog file used when nothing else is configured.
pub const DEFAULT_DATA_FILE: &str = "data/novels.json";

/// Default listen address for `serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:3030";

pub const DEFAULT_SITE_TITLE: &str = "Tales of Shadow and Cipher";

const ENV_DATA: &str = "SHADOWCIPHER_DATA";
const ENV_BIND: &str = "SHADOWCIPHER_BIND";
const ENV_CACHE_TTL: &str = "SHADOWCIPHER_CACHE_TTL";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path to the JSON catalog.
    pub data_file: PathBuf,
    /// Listen address (`HOST`, `PORT`, or `HOST:PORT`).
    pub bind: String,
    /// How long a loaded catalog may be reused. Zero reloads on every request.
    pub cache_ttl: Duration,
    /// Site name shown in the landing page and page titles.
    pub site_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            bind: DEFAULT_BIND.to_string(),
            cache_ttl: Duration::ZERO,
            site_title: DEFAULT_SITE_TITLE.to_string(),
        }
    }
}

impl Settings {
    /// Create settings reading a specific catalog file.
    pub fn with_data_file(data_file: PathBuf) -> Self {
        Self {
            data_file,
            ..Default::default()
        }
    }

    /// Apply environment overrides from `lookup`.
    fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(data) = lookup(ENV_DATA) {
            tracing::debug!("Using {} from environment: {}", ENV_DATA, data);
            self.data_file = PathBuf::from(data);
        }
        if let Some(bind) = lookup(ENV_BIND) {
            tracing::debug!("Using {} from environment: {}", ENV_BIND, bind);
            self.bind = bind;
        }
        if let Some(ttl) = lookup(ENV_CACHE_TTL) {
            let secs = ttl.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                key: ENV_CACHE_TTL,
                value: ttl.clone(),
            })?;
            self.cache_ttl = Duration::from_secs(secs);
        }
        Ok(())
    }
}

/// Config file contents. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog path, relative to the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_ttl_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_title: Option<String>,
    /// File this config was read from.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Falls back to an empty config when no file is found or it fails to parse.
    pub async fn load() -> Self {
        match prefer::load("shadowcipher").await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Ignoring config file: {}", e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// The format is chosen by extension: TOML, YAML, or JSON (the default).
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let mut config = Self::parse(&contents, path)?;
        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse config text, picking the format from `path`'s extension.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let parse_err = |format: &'static str, message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            format,
            message,
        };

        match ext {
            "toml" => toml::from_str(contents).map_err(|e| parse_err("TOML", e.to_string())),
            "yaml" | "yml" => {
                serde_yaml::from_str(contents).map_err(|e| parse_err("YAML", e.to_string()))
            }
            _ => serde_json::from_str(contents).map_err(|e| parse_err("JSON", e.to_string())),
        }
    }

    /// Directory of the config file, used to resolve relative paths.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path from the config against `base_dir` if it is relative.
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let path = PathBuf::from(path_str);
        if path.is_absolute() {
            path
        } else {
            base_dir.join(path)
        }
    }

    /// Copy the keys that are set onto `settings`.
    pub fn apply_to_settings(&self, settings: &mut Settings, base_dir: &Path) {
        if let Some(ref data_file) = self.data_file {
            settings.data_file = self.resolve_path(data_file, base_dir);
        }
        if let Some(ref bind) = self.bind {
            settings.bind = bind.clone();
        }
        if let Some(secs) = self.cache_ttl_secs {
            settings.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(ref title) = self.site_title {
            settings.site_title = title.clone();
        }
    }
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
    /// Catalog file (`--data` flag), highest precedence.
    pub data: Option<PathBuf>,
}

/// Load settings with explicit options.
pub async fn load_settings_with_options(options: LoadOptions) -> Result<Settings, ConfigError> {
    // An explicit --config must exist; discovered files are best-effort.
    let config = match options.config_path {
        Some(ref path) => Config::load_from_path(path).await?,
        None => Config::load().await,
    };
    if let Some(ref path) = config.source_path {
        tracing::debug!("Using config file: {}", path.display());
    }

    resolve_settings(&config, &options, |key| std::env::var(key).ok())
}

/// Layer config, environment, and flags over the defaults.
fn resolve_settings<F>(
    config: &Config,
    options: &LoadOptions,
    env: F,
) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();

    let base_dir = config
        .base_dir()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    config.apply_to_settings(&mut settings, &base_dir);

    settings.apply_env(env)?;

    if let Some(ref data) = options.data {
        settings.data_file = data.clone();
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_parse_toml() {
        let config = Config::parse(
            "data_file = \"stories.json\"\nbind = \"0.0.0.0:8080\"\ncache_ttl_secs = 60\n",
            Path::new("shadowcipher.toml"),
        )
        .unwrap();
        assert_eq!(config.data_file.as_deref(), Some("stories.json"));
        assert_eq!(config.bind.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(config.cache_ttl_secs, Some(60));
    }

    #[test]
    fn test_parse_yaml_and_json() {
        let yaml = Config::parse("site_title: Night Shelf\n", Path::new("c.yaml")).unwrap();
        assert_eq!(yaml.site_title.as_deref(), Some("Night Shelf"));

        let json = Config::parse(r#"{"bind": "9000"}"#, Path::new("c.json")).unwrap();
        assert_eq!(json.bind.as_deref(), Some("9000"));
    }

    #[test]
    fn test_parse_error_names_format() {
        let err = Config::parse("bind = ", Path::new("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("TOML"));
    }

    #[test]
    fn test_relative_data_file_resolves_against_config_dir() {
        let config = Config {
            data_file: Some("data/stories.json".to_string()),
            source_path: Some(PathBuf::from("/srv/site/shadowcipher.toml")),
            ..Default::default()
        };
        let settings = resolve_settings(&config, &LoadOptions::default(), no_env).unwrap();
        assert_eq!(settings.data_file, PathBuf::from("/srv/site/data/stories.json"));
    }

    #[test]
    fn test_precedence_env_over_file_and_flag_over_env() {
        let config = Config {
            data_file: Some("/from/file.json".to_string()),
            bind: Some("1111".to_string()),
            ..Default::default()
        };
        let env: HashMap<&str, &str> = [
            (ENV_DATA, "/from/env.json"),
            (ENV_BIND, "2222"),
            (ENV_CACHE_TTL, "30"),
        ]
        .into_iter()
        .collect();
        let lookup = |k: &str| env.get(k).map(|v| v.to_string());

        let settings = resolve_settings(&config, &LoadOptions::default(), lookup).unwrap();
        assert_eq!(settings.data_file, PathBuf::from("/from/env.json"));
        assert_eq!(settings.bind, "2222");
        assert_eq!(settings.cache_ttl, Duration::from_secs(30));

        let options = LoadOptions {
            data: Some(PathBuf::from("/from/flag.json")),
            ..Default::default()
        };
        let settings = resolve_settings(&config, &options, lookup).unwrap();
        assert_eq!(settings.data_file, PathBuf::from("/from/flag.json"));
    }

    #[test]
    fn test_invalid_cache_ttl_env() {
        let lookup = |k: &str| (k == ENV_CACHE_TTL).then(|| "soon".to_string());
        let err = resolve_settings(&Config::default(), &LoadOptions::default(), lookup)
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_defaults() {
        let settings = resolve_settings(&Config::default(), &LoadOptions::default(), no_env)
            .unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.bind, DEFAULT_BIND);
        assert_eq!(settings.cache_ttl, Duration::ZERO);
    }

    #[tokio::test]
    async fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shadowcipher.toml");
        std::fs::write(&path, "site_title = \"Vault\"\n").unwrap();

        let config = Config::load_from_path(&path).await.unwrap();
        assert_eq!(config.site_title.as_deref(), Some("Vault"));
        assert_eq!(config.base_dir(), Some(dir.path().to_path_buf()));
    }
}
