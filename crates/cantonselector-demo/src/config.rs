//! Application configuration.

use std::path::{Path, PathBuf};

use cantonselector_core::{CatalogError, RegionMap, RegionMode, RegionPalette, StyleColor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "CANTONSELECTOR_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: StyleColor,
    /// Canton border color.
    pub outline_color: StyleColor,
    pub region_mode: RegionMode,
    /// Canton SVG to load instead of the bundled map.
    pub asset_path: Option<PathBuf>,
    pub base_color: StyleColor,
    pub hover_color: StyleColor,
    pub select_color: StyleColor,
    /// Outline the dashboard cells.
    pub show_cells: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Canton Selector".to_string(),
            width: 1480,
            height: 760,
            background_color: StyleColor::rgb(250, 250, 250),
            outline_color: StyleColor::WHITE,
            region_mode: RegionMode::default(),
            asset_path: None,
            base_color: StyleColor::DEFAULT_BASE,
            hover_color: StyleColor::DEFAULT_HOVER,
            select_color: StyleColor::DEFAULT_SELECT,
            show_cells: false,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Load from the file named by [`CONFIG_ENV`], falling back to the
    /// defaults when it is unset or unusable.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };
        let path = PathBuf::from(path);
        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Using default config: {}", e);
                Self::default()
            }
        }
    }

    /// Initial region colors.
    pub fn palette(&self) -> RegionPalette {
        RegionPalette {
            base: self.base_color,
            hover: self.hover_color,
            select: self.select_color,
        }
    }

    /// Region map for the configured asset and mode.
    pub fn load_region_map(&self) -> ConfigResult<RegionMap> {
        let map = match &self.asset_path {
            Some(path) => RegionMap::from_file(path, self.region_mode)?,
            None => RegionMap::bundled(self.region_mode)?,
        };
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(
            r##"{ "region_mode": "grouped", "select_color": "#ff0000", "outline_color": "#333" }"##,
        )
        .unwrap();
        assert_eq!(config.region_mode, RegionMode::Grouped);
        assert_eq!(config.select_color, StyleColor::rgb(255, 0, 0));
        assert_eq!(config.outline_color, StyleColor::rgb(51, 51, 51));
        assert_eq!(config.base_color, StyleColor::DEFAULT_BASE);
        assert_eq!(config.title, AppConfig::default().title);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(
            AppConfig::from_json(r#"{ "width": "wide" }"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "hover_color": "sky" }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "title": "Skigebiete", "show_cells": true }}"#).unwrap();
        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.title, "Skigebiete");
        assert!(config.show_cells);

        let missing = file.path().with_extension("missing");
        assert!(matches!(AppConfig::from_file(&missing), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_region_map_from_asset_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.svg");
        std::fs::write(&path, "<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();

        let config = AppConfig {
            asset_path: Some(path),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.load_region_map(),
            Err(ConfigError::Catalog(CatalogError::PathCount { found: 0, .. }))
        ));

        let grouped = AppConfig {
            region_mode: RegionMode::Grouped,
            ..AppConfig::default()
        };
        let map = grouped.load_region_map().unwrap();
        assert_eq!(map.mode(), RegionMode::Grouped);
    }

    #[test]
    fn test_palette_from_colors() {
        let config = AppConfig {
            hover_color: StyleColor::rgb(1, 2, 3),
            ..AppConfig::default()
        };
        assert_eq!(config.palette().hover, StyleColor::rgb(1, 2, 3));
        assert_eq!(config.palette().base, StyleColor::DEFAULT_BASE);
    }
}
