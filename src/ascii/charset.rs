//! Glyph ramps used to approximate grayscale intensity with text density.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Classic profile-card ramp (11 levels).
/// Ordered from the darkest intensity (`#`) to the lightest (space), so dark
/// photo regions become dense glyphs on a light or dark card alike.
pub const CLASSIC_RAMP: &str = "#W$@%*+=-. ";

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from darkest intensity (space) to brightest (@).
pub const STANDARD_RAMP: &str = " .:-=+*#%@";

/// Block ramp (5 levels) using Unicode block characters.
pub const BLOCKS_RAMP: &str = " ░▒▓█";

/// Minimal ramp (4 levels).
/// Clean, less noisy look.
pub const MINIMAL_RAMP: &str = " .:#";

/// Errors raised when building a custom ramp.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RampError {
    #[error("glyph ramp needs at least 2 characters, got {0}")]
    TooShort(usize),
}

/// Ordered glyph sequence mapping intensity 0 to the first glyph and
/// intensity 255 to the last.
///
/// Always holds at least two glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    /// Build a ramp from a string of glyphs.
    pub fn new(glyphs: &str) -> Result<Self, RampError> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.len() < 2 {
            return Err(RampError::TooShort(glyphs.len()));
        }
        Ok(Self { glyphs })
    }

    /// The glyphs in intensity order.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Number of intensity levels.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false; a ramp has at least two glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph for the lowest intensity.
    pub fn first(&self) -> char {
        self.glyphs[0]
    }

    /// Glyph for the highest intensity.
    pub fn last(&self) -> char {
        self.glyphs[self.glyphs.len() - 1]
    }

    /// Ramp index for an intensity: `floor(intensity / 255 * (len - 1))`.
    #[inline]
    pub fn index_for(&self, intensity: u8) -> usize {
        (intensity as usize * (self.glyphs.len() - 1)) / 255
    }

    /// Glyph for an intensity.
    #[inline]
    pub fn glyph_for(&self, intensity: u8) -> char {
        self.glyphs[self.index_for(intensity)]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        RampPreset::Classic.ramp()
    }
}

impl fmt::Display for GlyphRamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.glyphs {
            write!(f, "{}", glyph)?;
        }
        Ok(())
    }
}

/// Named glyph ramps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RampPreset {
    /// `#W$@%*+=-. ` (11 levels), dark intensities become dense glyphs
    #[default]
    Classic,
    /// Standard ASCII density ramp (10 levels)
    Standard,
    /// Unicode blocks (5 levels)
    Blocks,
    /// 4-level clean look
    Minimal,
}

impl RampPreset {
    /// Get the glyph string for this preset.
    pub fn glyphs(&self) -> &'static str {
        match self {
            RampPreset::Classic => CLASSIC_RAMP,
            RampPreset::Standard => STANDARD_RAMP,
            RampPreset::Blocks => BLOCKS_RAMP,
            RampPreset::Minimal => MINIMAL_RAMP,
        }
    }

    /// Build the ramp for this preset.
    pub fn ramp(&self) -> GlyphRamp {
        GlyphRamp {
            glyphs: self.glyphs().chars().collect(),
        }
    }

    /// Get a human-readable name for the preset.
    pub fn name(&self) -> &'static str {
        match self {
            RampPreset::Classic => "classic",
            RampPreset::Standard => "standard",
            RampPreset::Blocks => "blocks",
            RampPreset::Minimal => "minimal",
        }
    }
}

impl FromStr for RampPreset {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(RampPreset::Classic),
            "standard" => Ok(RampPreset::Standard),
            "blocks" => Ok(RampPreset::Blocks),
            "minimal" => Ok(RampPreset::Minimal),
            _ => Err(()),
        }
    }
}

/// Resolve a ramp setting: a preset name, or else a literal glyph string.
pub fn resolve_ramp(setting: &str) -> Result<GlyphRamp, RampError> {
    match setting.parse::<RampPreset>() {
        Ok(preset) => Ok(preset.ramp()),
        Err(()) => GlyphRamp::new(setting),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_short_ramps() {
        assert_eq!(GlyphRamp::new(""), Err(RampError::TooShort(0)));
        assert_eq!(GlyphRamp::new("#"), Err(RampError::TooShort(1)));
        assert!(GlyphRamp::new("# ").is_ok());
    }

    #[test]
    fn test_default_is_classic() {
        let ramp = GlyphRamp::default();
        assert_eq!(ramp.to_string(), CLASSIC_RAMP);
        assert_eq!(ramp.first(), '#');
        assert_eq!(ramp.last(), ' ');
    }

    #[test]
    fn test_extremes_map_to_ends() {
        for preset in [
            RampPreset::Classic,
            RampPreset::Standard,
            RampPreset::Blocks,
            RampPreset::Minimal,
        ] {
            let ramp = preset.ramp();
            assert_eq!(ramp.glyph_for(0), ramp.first(), "{}", preset.name());
            assert_eq!(ramp.glyph_for(255), ramp.last(), "{}", preset.name());
        }
    }

    #[test]
    fn test_index_is_monotonic() {
        let ramp = GlyphRamp::default();
        let mut previous = 0;
        for intensity in 0..=255u8 {
            let idx = ramp.index_for(intensity);
            assert!(idx >= previous);
            previous = idx;
        }
    }

    #[test]
    fn test_index_floors() {
        // 11 levels: 127 / 255 * 10 = 4.98 -> 4
        let ramp = GlyphRamp::default();
        assert_eq!(ramp.index_for(127), 4);
        assert_eq!(ramp.index_for(128), 5);
    }

    #[test]
    fn test_resolve_ramp_presets_and_custom() {
        assert_eq!(resolve_ramp("blocks").unwrap(), RampPreset::Blocks.ramp());
        assert_eq!(resolve_ramp("MINIMAL").unwrap(), RampPreset::Minimal.ramp());
        assert_eq!(resolve_ramp("@o.").unwrap().glyphs(), &['@', 'o', '.']);
        assert!(resolve_ramp("x").is_err());
    }
}
