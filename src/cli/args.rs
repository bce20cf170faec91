//! CLI argument parsing with clap.

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_CONFIG_FILE};

/// Render a GitHub profile card as SVG, with an ASCII-art portrait
#[derive(Parser, Debug)]
#[command(name = "profile-card")]
#[command(version, about = "Generate light and dark SVG profile cards", long_about = None)]
pub struct Args {
    /// Config file path (TOML, or JSON with a .json extension)
    #[arg(long, short, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Profile image path or base64 payload (overrides PROFILE_IMAGE_BASE64)
    #[arg(long, short)]
    pub image: Option<String>,

    /// ASCII art width in columns
    #[arg(long, short)]
    pub width: Option<u32>,

    /// Glyph ramp preset (classic, standard, blocks, minimal) or literal glyphs
    #[arg(long)]
    pub charset: Option<String>,

    /// Invert brightness
    #[arg(long)]
    pub invert: bool,

    /// Directory for the generated SVG files
    #[arg(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Leave README.md untouched
    #[arg(long)]
    pub no_readme: bool,

    /// Skip the GitHub statistics fetch
    #[arg(long)]
    pub no_stats: bool,

    /// Debug logging
    #[arg(long, short, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Warnings and errors only
    #[arg(long, short)]
    pub quiet: bool,
}

impl Args {
    /// Default log level; `RUST_LOG` still takes precedence.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }

    /// Apply command-line overrides on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(width) = self.width {
            config.ascii.width = width;
        }
        if let Some(charset) = &self.charset {
            config.ascii.charset = charset.clone();
        }
        if self.invert {
            config.ascii.invert = true;
        }
        if let Some(dir) = &self.output_dir {
            config.output.dir = dir.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_CONFIG: &str = r#"
github_username = "alice"

[profile_data]
username_display = "alice"
birth_date = "1990-05-15"
location = "Berlin"
interests = "Rust"
stack = "Rust"
languages = "English"
web_technologies = "Axum"
databases = "Postgres"
devops_tools = "Docker"
hobbies = "Chess"
email = "a@x.io"
linkedin = "alice"
"#;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["profile-card"]);
        assert_eq!(args.config, PathBuf::from("config.toml"));
        assert!(args.image.is_none());
        assert!(args.width.is_none());
        assert!(args.charset.is_none());
        assert!(!args.invert);
        assert!(args.output_dir.is_none());
        assert!(!args.no_readme);
        assert!(!args.no_stats);
        assert_eq!(args.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_args_config_option() {
        let args = Args::parse_from(["profile-card", "--config", "/tmp/card.json"]);
        assert_eq!(args.config, PathBuf::from("/tmp/card.json"));

        let args = Args::parse_from(["profile-card", "-c", "/tmp/card.toml"]);
        assert_eq!(args.config, PathBuf::from("/tmp/card.toml"));
    }

    #[test]
    fn test_args_width_option() {
        let args = Args::parse_from(["profile-card", "--width", "80"]);
        assert_eq!(args.width, Some(80));

        let args = Args::parse_from(["profile-card", "-w", "40"]);
        assert_eq!(args.width, Some(40));
    }

    #[test]
    fn test_args_rejects_non_numeric_width() {
        assert!(Args::try_parse_from(["profile-card", "--width", "wide"]).is_err());
    }

    #[test]
    fn test_args_flags() {
        let args = Args::parse_from(["profile-card", "--invert", "--no-readme", "--no-stats"]);
        assert!(args.invert);
        assert!(args.no_readme);
        assert!(args.no_stats);
    }

    #[test]
    fn test_args_log_level() {
        let args = Args::parse_from(["profile-card", "-v"]);
        assert_eq!(args.log_level(), LevelFilter::Debug);

        let args = Args::parse_from(["profile-card", "--quiet"]);
        assert_eq!(args.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_args_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["profile-card", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::from_toml_str(MINIMAL_CONFIG).unwrap();
        let args = Args::parse_from([
            "profile-card",
            "--width",
            "72",
            "--charset",
            "blocks",
            "--invert",
            "-o",
            "out",
        ]);
        args.apply(&mut config);

        assert_eq!(config.ascii.width, 72);
        assert_eq!(config.ascii.charset, "blocks");
        assert!(config.ascii.invert);
        assert_eq!(config.output.dir, PathBuf::from("out"));
    }

    #[test]
    fn test_apply_without_overrides_keeps_config() {
        let mut config = Config::from_toml_str(MINIMAL_CONFIG).unwrap();
        let before = config.clone();
        Args::parse_from(["profile-card"]).apply(&mut config);
        assert_eq!(config, before);
    }
}
