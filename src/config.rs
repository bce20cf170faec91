//! Configuration file handling for profile-card.
//!
//! Loads configuration from `config.toml` in the working directory or a custom
//! path. Files ending in `.json` are parsed as JSON.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::age::parse_birth_date;
use crate::ascii::{resolve_ramp, GlyphRamp, RampError};
use crate::card::{default_themes, LayoutParams, ThemeSpec};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Configuration file structure for profile-card.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    pub github_username: String,
    pub profile_data: ProfileData,
    #[serde(default)]
    pub ascii: AsciiConfig,
    #[serde(default)]
    pub card: LayoutParams,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default = "default_themes")]
    pub themes: Vec<ThemeSpec>,
}

/// Biographical data shown on the card. All keys except the extra contacts are required.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProfileData {
    pub username_display: String,
    pub birth_date: String,
    pub location: String,
    pub interests: String,
    pub stack: String,
    pub languages: String,
    pub web_technologies: String,
    pub databases: String,
    pub devops_tools: String,
    pub hobbies: String,
    pub email: String,
    pub linkedin: String,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub discord: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AsciiConfig {
    /// Image used when `PROFILE_IMAGE_BASE64` is unset
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default = "default_width")]
    pub width: u32,
    /// Preset name or literal glyph ramp
    #[serde(default = "default_charset")]
    pub charset: String,
    #[serde(default)]
    pub invert: bool,
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            image: default_image(),
            width: default_width(),
            charset: default_charset(),
            invert: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_readme")]
    pub readme: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            readme: default_readme(),
        }
    }
}

fn default_image() -> String {
    "me.jpg".to_string()
}

fn default_width() -> u32 {
    50
}

fn default_charset() -> String {
    "classic".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_readme() -> PathBuf {
    PathBuf::from("README.md")
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse config file '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid birth_date '{value}' (expected YYYY-MM-DD): {source}")]
    InvalidBirthDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid ascii.charset: {0}")]
    InvalidRamp(#[from] RampError),

    #[error("at least one theme is required")]
    NoThemes,
}

impl Config {
    /// Load and validate configuration from `path`.
    ///
    /// Unlike optional settings files, a missing profile config is an error:
    /// there is nothing to render without it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&content).map_err(|e| ConfigError::Json {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            Self::from_toml_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse TOML without validation.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse JSON without validation.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Check values serde cannot: birth date format, ramp, theme list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.birth_date()?;
        self.ramp()?;
        if self.themes.is_empty() {
            return Err(ConfigError::NoThemes);
        }
        Ok(())
    }

    pub fn birth_date(&self) -> Result<NaiveDate, ConfigError> {
        let value = &self.profile_data.birth_date;
        parse_birth_date(value).map_err(|source| ConfigError::InvalidBirthDate {
            value: value.clone(),
            source,
        })
    }

    pub fn ramp(&self) -> Result<GlyphRamp, ConfigError> {
        Ok(resolve_ramp(&self.ascii.charset)?)
    }
}
