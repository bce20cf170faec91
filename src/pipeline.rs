//! Card generation pipeline.
//!
//! image → ASCII block; profile + statistics → sections; both → one SVG per
//! theme, then the README picture document.

use std::path::PathBuf;

use thiserror::Error;

use crate::age::Age;
use crate::ascii::{image_to_ascii, GlyphRamp, ImageError, ImageSource};
use crate::card::{LayoutParams, ThemeSpec};
use crate::config::{Config, ConfigError, ProfileData};
use crate::output::{write_cards, write_readme, OutputError};
use crate::sections::build_sections;
use crate::stats::{self, GitHubStats};

/// Errors that stop card generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("could not generate ASCII art: {0}")]
    Image(#[from] ImageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Everything needed to render and write the cards.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub image: ImageSource,
    pub ascii_width: u32,
    pub ramp: GlyphRamp,
    pub invert: bool,
    pub layout: LayoutParams,
    pub themes: Vec<ThemeSpec>,
    pub output_dir: PathBuf,
    /// README to regenerate; `None` leaves it untouched
    pub readme: Option<PathBuf>,
}

impl GenerateOptions {
    /// Options from a loaded config. `image` overrides `ascii.image` when set.
    pub fn from_config(config: &Config, image: Option<&str>) -> Result<Self, ConfigError> {
        let raw_image = image.unwrap_or(&config.ascii.image);
        Ok(Self {
            image: ImageSource::detect(raw_image),
            ascii_width: config.ascii.width,
            ramp: config.ramp()?,
            invert: config.ascii.invert,
            layout: config.card.clone(),
            themes: config.themes.clone(),
            output_dir: config.output.dir.clone(),
            readme: Some(config.output.readme.clone()),
        })
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub cards: Vec<PathBuf>,
    pub readme: Option<PathBuf>,
    pub section_count: usize,
}

/// Statistics for the card, or `None` when no credential is available.
///
/// With a token, fetch failures degrade to [`GitHubStats::zero`].
pub fn resolve_stats(username: &str, token: Option<&str>) -> Option<GitHubStats> {
    resolve_stats_from(username, token, stats::GITHUB_GRAPHQL_URL)
}

/// [`resolve_stats`] against a custom GraphQL endpoint.
pub fn resolve_stats_from(
    username: &str,
    token: Option<&str>,
    endpoint: &str,
) -> Option<GitHubStats> {
    match token.filter(|t| !t.trim().is_empty()) {
        Some(token) => Some(stats::fetch_blocking(username, token, endpoint)),
        None => {
            log::warn!(
                "{} not set; the GitHub Stats section will be omitted",
                stats::GITHUB_TOKEN_ENV
            );
            None
        }
    }
}

/// Render and write every card, then the README.
///
/// Only an undecodable image or a failed write stops the run; nothing is
/// written when the image cannot be decoded.
pub fn generate(
    profile: &ProfileData,
    age: &Age,
    stats: Option<&GitHubStats>,
    options: &GenerateOptions,
) -> Result<GenerateReport, GenerateError> {
    log::info!("Generating ASCII art from {}", options.image.describe());
    let ascii = image_to_ascii(&options.image, options.ascii_width, &options.ramp, options.invert)?;

    let sections = build_sections(profile, &age.to_string(), stats);
    let cards = write_cards(
        &options.output_dir,
        &ascii,
        &sections,
        &options.themes,
        &options.layout,
    )?;

    let readme = match &options.readme {
        Some(path) if write_readme(path, &options.themes)? => Some(path.clone()),
        _ => None,
    };

    Ok(GenerateReport {
        cards,
        readme,
        section_count: sections.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_stats_without_token_is_none() {
        assert_eq!(resolve_stats("alice", None), None);
        assert_eq!(resolve_stats("alice", Some("  ")), None);
    }

    #[test]
    fn test_resolve_stats_failed_fetch_keeps_zero_section() {
        // Nothing listens on port 9 (discard) in the test environment
        let stats = resolve_stats_from(
            "alice",
            Some("ghp_test"),
            "http://127.0.0.1:9/graphql",
        );
        assert_eq!(stats, Some(GitHubStats::zero()));

        let sections = build_sections(&sample_profile(), "1 years", stats.as_ref());
        assert_eq!(sections.len(), 5);
    }

    #[test]
    fn test_config_errors_surface_as_generate_error() {
        fn options_for(charset: &str) -> Result<GenerateOptions, GenerateError> {
            let mut config: Config = toml::from_str(&format!(
                "github_username = \"alice\"\n[profile_data]\n{}",
                PROFILE_TOML
            ))
            .unwrap();
            config.ascii.charset = charset.to_string();
            Ok(GenerateOptions::from_config(&config, None)?)
        }

        assert!(options_for("blocks").is_ok());
        let err = options_for("x").unwrap_err();
        assert!(matches!(err, GenerateError::Config(ConfigError::InvalidRamp(_))));
        assert_eq!(
            err.to_string(),
            "invalid ascii.charset: glyph ramp needs at least 2 characters, got 1"
        );
    }

    #[test]
    fn test_generate_missing_image_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let options = GenerateOptions {
            image: ImageSource::Path(dir.path().join("missing.jpg")),
            ascii_width: 10,
            ramp: GlyphRamp::default(),
            invert: false,
            layout: LayoutParams::default(),
            themes: crate::card::default_themes(),
            output_dir: dir.path().to_path_buf(),
            readme: Some(dir.path().join("README.md")),
        };
        let profile = sample_profile();
        let age = Age { years: 1, months: 0, days: 0 };

        let result = generate(&profile, &age, None, &options);
        assert!(matches!(result, Err(GenerateError::Image(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    const PROFILE_TOML: &str = r#"
username_display = "a"
birth_date = "2000-01-01"
location = ""
interests = ""
stack = ""
languages = ""
web_technologies = ""
databases = ""
devops_tools = ""
hobbies = ""
email = ""
linkedin = ""
"#;

    fn sample_profile() -> ProfileData {
        toml::from_str(PROFILE_TOML).unwrap()
    }
}
