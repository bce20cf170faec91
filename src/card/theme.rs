//! Color themes. Geometry never depends on the theme.

use serde::Deserialize;

/// Fill for the additions clause of a lines-of-code row.
pub const LOC_ADDED_COLOR: &str = "#3fb950";

/// Fill for the deletions clause of a lines-of-code row.
pub const LOC_REMOVED_COLOR: &str = "#f85149";

/// Card border stroke width in pixels.
pub const BORDER_WIDTH: u32 = 2;

/// Card corner radius in pixels.
pub const BORDER_RADIUS: u32 = 10;

/// Which `prefers-color-scheme` a theme is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Dark,
    Light,
}

/// Palette and output file for one rendering of the card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThemeSpec {
    pub name: String,
    pub appearance: Appearance,
    pub background: String,
    pub text: String,
    pub key: String,
    pub value: String,
    pub border: String,
    pub filename: String,
}

impl ThemeSpec {
    /// GitHub dark palette, written to `dark_mode.svg`.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            appearance: Appearance::Dark,
            background: "#161b22".to_string(),
            text: "#c9d1d9".to_string(),
            key: "#ffa657".to_string(),
            value: "#a5d6ff".to_string(),
            border: "#444c56".to_string(),
            filename: "dark_mode.svg".to_string(),
        }
    }

    /// GitHub light palette, written to `light_mode.svg`.
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            appearance: Appearance::Light,
            background: "#ffffff".to_string(),
            text: "#24292f".to_string(),
            key: "#af5e14".to_string(),
            value: "#0969da".to_string(),
            border: "#d0d7de".to_string(),
            filename: "light_mode.svg".to_string(),
        }
    }
}

/// The built-in theme list: dark, then light.
pub fn default_themes() -> Vec<ThemeSpec> {
    vec![ThemeSpec::dark(), ThemeSpec::light()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_themes() {
        let themes = default_themes();
        assert_eq!(themes.len(), 2);
        assert_eq!(themes[0].appearance, Appearance::Dark);
        assert_eq!(themes[0].filename, "dark_mode.svg");
        assert_eq!(themes[1].appearance, Appearance::Light);
        assert_eq!(themes[1].filename, "light_mode.svg");
        assert_ne!(themes[0].filename, themes[1].filename);
    }

    #[test]
    fn test_appearance_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            appearance: Appearance,
        }
        let w: Wrapper = toml::from_str("appearance = \"dark\"").unwrap();
        assert_eq!(w.appearance, Appearance::Dark);
        assert!(toml::from_str::<Wrapper>("appearance = \"dim\"").is_err());
    }
}
