//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_observability::{LogFormat, LogLevel};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub product_page: ProductPageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
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

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "json")
}

/// Where products come from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog JSON document. The built-in demo catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Product page defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPageConfig {
    /// Size preselected when a product offers it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_size: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: LogLevel,

    #[serde(default = "default_format")]
    pub format: LogFormat,
}

fn default_level() -> LogLevel {
    LogLevel::Info
}

fn default_format() -> LogFormat {
    LogFormat::Human
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

/// Rendered page output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for rendered pages when no `--out` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront configuration

[catalog]
# path = "catalog.json"   # built-in demo catalog when unset

[product_page]
default_size = "M"

[logging]
level = "info"     # trace|debug|info|warn|error
format = "human"   # human|json

[output]
# dir = "dist"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: StorefrontConfig = toml::from_str(&generate_default_config()).unwrap();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.product_page.default_size.as_deref(), Some("M"));
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.format, LogFormat::Human);
        assert!(config.output.dir.is_none());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: StorefrontConfig = toml::from_str("").unwrap();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(config.product_page.default_size.is_none());
    }

    #[test]
    fn test_save_and_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");

        let mut config = StorefrontConfig::default();
        config.catalog.path = Some("catalog.json".to_string());
        config.logging.level = LogLevel::Debug;
        config.save(&path).unwrap();

        let loaded = StorefrontConfig::load(&path).unwrap();
        assert_eq!(loaded.catalog.path.as_deref(), Some("catalog.json"));
        assert_eq!(loaded.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.json");
        std::fs::write(
            &path,
            r#"{"logging": {"format": "json"}, "output": {"dir": "dist"}}"#,
        )
        .unwrap();

        let config = StorefrontConfig::load(&path).unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.output.dir.as_deref(), Some("dist"));
    }

    #[test]
    fn test_load_invalid_level_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

        assert!(StorefrontConfig::load(&path).is_err());
    }
}
