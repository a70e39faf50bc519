//! Configuration for the Study Buddy client.

use std::path::PathBuf;

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

use crate::layout::LayoutVariant;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint is resolved against, including the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Where the CLI keeps its persistent and tab-scoped stores.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
}

impl StorageConfig {
    pub fn local_path(&self) -> PathBuf {
        self.dir.join("local_storage.json")
    }

    pub fn session_path(&self) -> PathBuf {
        self.dir.join("session_storage.json")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub variant: LayoutVariant,
    #[serde(default = "default_true")]
    pub show_footer: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            variant: LayoutVariant::default(),
            show_footer: default_true(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default values
fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}
fn default_timeout() -> u64 {
    30
}
fn default_storage_dir() -> PathBuf {
    PathBuf::from(".studybuddy")
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Configuration sources (in order of precedence):
    /// 1. Environment variables (STUDYBUDDY__SECTION__KEY format)
    /// 2. The given file, or `studybuddy.toml` if present
    /// 3. Built-in defaults
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name("studybuddy").required(false),
        };

        let config = ConfigLoader::builder()
            .set_default("api.base_url", default_base_url())?
            .set_default("api.timeout_secs", default_timeout() as i64)?
            .set_default("logging.level", default_log_level())?
            .add_source(file)
            .add_source(
                Environment::with_prefix("STUDYBUDDY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_api_config() {
        let api = ApiConfig::default();
        assert_eq!(api.base_url, "http://localhost:8080/api");
        assert_eq!(api.timeout_secs, 30);
    }

    #[test]
    fn test_storage_paths() {
        let storage = StorageConfig {
            dir: PathBuf::from("/tmp/sb"),
        };
        assert_eq!(storage.local_path(), PathBuf::from("/tmp/sb/local_storage.json"));
        assert_eq!(storage.session_path(), PathBuf::from("/tmp/sb/session_storage.json"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[api]
base_url = "https://studybuddy.example/api"

[layout]
variant = "static"
show_footer = false
"#
        )
        .unwrap();

        let config = Config::load(file.path().to_str()).unwrap();
        assert_eq!(config.api.base_url, "https://studybuddy.example/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.layout.variant, LayoutVariant::Static);
        assert!(!config.layout.show_footer);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(Config::load(Some("/definitely/not/here.toml")).is_err());
    }
}
