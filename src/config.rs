//! Configuration for the portfolio generator

use std::path::PathBuf;

use config::{Config, File};
use eyre::Result;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub site: SiteConfig,
    pub build: BuildConfig,
}

/// Site identity shown in the shared header and footer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
}

/// Build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub output_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Amir Goli".to_string(),
            tagline: "PhD Student, Architectural & Building Technology | University of Kansas"
                .to_string(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        // Pages land next to the hand-authored ones by default.
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    /// Supports TOML, YAML, and JSON formats
    pub fn from_file(path: &str) -> Result<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(path))
            .build()?;

        let config = builder.try_deserialize::<AppConfig>()?;
        Ok(config)
    }

    /// Load configuration with optional file override
    /// Falls back to default if file doesn't exist
    pub fn load_or_default(config_path: Option<&str>) -> Result<Self> {
        match config_path {
            Some(path) if std::path::Path::new(path).exists() => Self::from_file(path),
            Some(path) => {
                tracing::warn!("Config file {} not found, using defaults", path);
                Ok(Self::default())
            }
            None => {
                // Try to find config file in common locations
                for path in &["folio.toml", "folio.yaml", "folio.json"] {
                    if std::path::Path::new(path).exists() {
                        return Self::from_file(path);
                    }
                }
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_complete() {
        let config = AppConfig::default();
        assert!(!config.site.title.is_empty());
        assert!(!config.site.tagline.is_empty());
        assert_eq!(config.build.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_missing_explicit_file_falls_back_to_defaults() {
        let config = AppConfig::load_or_default(Some("does-not-exist.toml")).unwrap();
        assert_eq!(config.site.title, AppConfig::default().site.title);
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "[site]\ntitle = \"Jane Doe\"\n").unwrap();

        let config = AppConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.site.title, "Jane Doe");
        assert_eq!(config.site.tagline, AppConfig::default().site.tagline);
        assert_eq!(config.build.output_dir, PathBuf::from("."));
    }
}
