use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use crate::core::quote::Side;

pub const DEFAULT_BASE_URL: &str = "https://dolarapi.com/v1";

fn default_market() -> String {
    "oficial".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DolarApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub dolarapi: Option<DolarApiConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            dolarapi: Some(DolarApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Market quoted when the command line does not name one.
    #[serde(default = "default_market")]
    pub market: String,
    /// Quote leg used when the command line does not name one.
    #[serde(default)]
    pub side: Side,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            providers: ProvidersConfig::default(),
            market: default_market(),
            side: Side::default(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the platform config dir, falling back to the
    /// built-in defaults when no file exists. The tool works with zero setup.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("ar", "cambio", "cambio")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        self.providers
            .dolarapi
            .as_ref()
            .map_or(DEFAULT_BASE_URL, |p| &p.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
providers:
  dolarapi:
    base_url: "http://localhost:8000/v1"
market: "blue"
side: "average"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        assert_eq!(config.base_url(), "http://localhost:8000/v1");
        assert_eq!(config.market, "blue");
        assert_eq!(config.side, Side::Average);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.market, "oficial");
        assert_eq!(config.side, Side::Sell);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: AppConfig = serde_yaml::from_str("market: \"cripto\"").unwrap();
        assert_eq!(config.market, "cripto");
        assert_eq!(config.side, Side::Sell);
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let result = AppConfig::load_from_path("/nonexistent/config.yaml");
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
