//! Settings loaded from TOML
//!
//! Read from ~/.config/blocktris/settings.toml (or platform equivalent).
//! The file is optional and every field falls back to its default.

use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Display settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub render: RenderSettings,
    pub palette: PaletteSettings,
}

/// Board rendering
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Cell footprint multiplier; values below 1 render as 1
    pub scale: i32,
    /// Glyph for filled cells
    pub block_glyph: char,
    /// Glyph for empty cells
    pub empty_glyph: char,
}

/// Foreground colors as "#rrggbb" strings, one per color tag plus empty cells
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaletteSettings {
    pub cyan: String,
    pub yellow: String,
    pub purple: String,
    pub green: String,
    pub red: String,
    pub blue: String,
    pub orange: String,
    pub empty: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            scale: 1,
            block_glyph: '█',
            empty_glyph: '·',
        }
    }
}

// Kanagawa
impl Default for PaletteSettings {
    fn default() -> Self {
        Self {
            cyan: "#7aa2f7".to_string(),
            yellow: "#e0af68".to_string(),
            purple: "#957fb8".to_string(),
            green: "#76946a".to_string(),
            red: "#e46876".to_string(),
            blue: "#7e9cd8".to_string(),
            orange: "#ffa066".to_string(),
            empty: "#54546d".to_string(),
        }
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "blocktris", "blocktris")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Load settings from the config directory, or fall back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            tracing::debug!("no config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(e) => {
                tracing::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.render.scale, 1);
        assert_eq!(settings.render.block_glyph, '█');
        assert_eq!(settings.render.empty_glyph, '·');
        assert_eq!(settings.palette.cyan, "#7aa2f7");
    }

    #[test]
    fn test_partial_sections() {
        let settings = Settings::from_toml_str(
            r##"
            [render]
            scale = 2

            [palette]
            red = "#ff0000"
            "##,
        )
        .unwrap();
        assert_eq!(settings.render.scale, 2);
        assert_eq!(settings.render.empty_glyph, '·');
        assert_eq!(settings.palette.red, "#ff0000");
        assert_eq!(settings.palette.blue, "#7e9cd8");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(matches!(
            Settings::from_toml_str("[render]\nscale = \"big\""),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let path = std::env::temp_dir().join("blocktris-does-not-exist/settings.toml");
        assert!(matches!(
            Settings::load_from(&path),
            Err(SettingsError::Read { .. })
        ));
    }
}
