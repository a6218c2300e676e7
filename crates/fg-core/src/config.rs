// ABOUTME: User settings for previews and output.
// ABOUTME: Loads and saves settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::Color;

/// Fill colors for the four margin bands drawn around each panel in previews
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandColors {
    pub left: Color,
    pub right: Color,
    pub top: Color,
    pub bottom: Color,
}

impl Default for BandColors {
    fn default() -> Self {
        Self {
            left: Color::rgb(0.945, 0.416, 0.439),   // #f16a70
            right: Color::rgb(0.694, 0.847, 0.467),  // #b1d877
            top: Color::rgb(0.549, 0.863, 0.855),    // #8cdcda
            bottom: Color::rgb(0.302, 0.302, 0.302), // #4d4d4d
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pixels per inch used when writing previews
    pub dpi: f64,

    /// Draw margin bands around every panel
    pub draw_bands: bool,

    /// Opacity of the margin bands (0.0 - 1.0)
    pub band_opacity: f32,

    pub band_colors: BandColors,

    /// Fill of the panel content area
    pub panel_fill: Color,

    /// Outline of the panel content area
    pub panel_stroke: Color,

    pub background: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dpi: 100.0,
            draw_bands: true,
            band_opacity: 0.95,
            band_colors: BandColors::default(),
            panel_fill: Color::WHITE,
            panel_stroke: Color::BLACK,
            background: Color::WHITE,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: f64 },

    #[error("Could not determine config directory")]
    NoConfigDir,
}

impl Settings {
    /// Get the default settings path (~/.config/figgrid/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("figgrid").join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from the default path, falling back to defaults if it is missing or unusable
    pub fn load_or_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from_or_default(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`; a missing file gives defaults, a broken one is logged and ignored
    pub fn load_from_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                tracing::debug!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// DPI must be finite and positive, band opacity within 0..=1
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "dpi",
                value: self.dpi,
            });
        }
        if !(0.0..=1.0).contains(&self.band_opacity) {
            return Err(ConfigError::InvalidValue {
                field: "band_opacity",
                value: f64::from(self.band_opacity),
            });
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;
        self.save(&path)?;
        Ok(path)
    }
}
