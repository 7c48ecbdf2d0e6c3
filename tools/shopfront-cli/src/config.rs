//! CLI configuration.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopfront_commerce::cart::DEFAULT_CART_NAME;
use shopfront_observability::LoggingConfig;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["shopfront.toml", ".shopfront.toml", "shopfront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the product feed comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Where the cart is kept.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log level and format.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Product feed configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON array of products, relative to the working directory.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

fn default_catalog_path() -> String {
    "products.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

/// Cart storage backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per key under `storage.dir`.
    #[default]
    File,
    /// Process memory; the cart is gone when the command exits.
    Memory,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::File => f.write_str("file"),
            StorageBackend::Memory => f.write_str("memory"),
        }
    }
}

/// Cart storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Store directory for the file backend.
    #[serde(default = "default_storage_dir")]
    pub dir: String,

    /// Cart name; stored under `shopfront:<key>`.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_dir() -> String {
    ".shopfront".to_string()
}

fn default_storage_key() -> String {
    DEFAULT_CART_NAME.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            dir: default_storage_dir(),
            key: default_storage_key(),
        }
    }
}

/// Generate a default shopfront.toml config file.
pub fn generate_default_config(catalog_path: &str) -> String {
    format!(
        r#"# Shopfront configuration

[catalog]
# JSON array of products, as served by the product service
path = "{catalog_path}"

[storage]
# "file" keeps the cart between runs, "memory" forgets it on exit
backend = "file"
dir = ".shopfront"
key = "cart"

[logging]
# RUST_LOG overrides this
level = "info"
format = "human"
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_observability::{LogFormat, LogLevel};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.catalog.path, "products.json");
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.storage.key, "cart");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config("feed.json")).unwrap();
        assert_eq!(config.catalog.path, "feed.json");
        assert_eq!(config.storage.dir, ".shopfront");
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_partial_sections() {
        let config: CliConfig = toml::from_str(
            r#"
            [storage]
            backend = "memory"

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.key, "cart");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_json_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopfront.json");
        let mut config = CliConfig::default();
        config.storage.key = "guest".to_string();

        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopfront.toml");
        std::fs::write(&path, "[catalog\npath = 1").unwrap();

        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse TOML config"));
    }
}
