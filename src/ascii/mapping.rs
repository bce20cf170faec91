//! Brightness to glyph mapping.

use std::fmt;

use super::charset::GlyphRamp;

/// Row-major grid of luminance samples (0-255).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminanceGrid {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl LuminanceGrid {
    /// Wrap row-major samples.
    ///
    /// Returns `None` when `samples.len() != width * height`.
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Option<Self> {
        if samples.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            samples,
        })
    }

    /// An empty grid with the given width and no rows.
    pub fn empty(width: u32) -> Self {
        Self {
            width,
            height: 0,
            samples: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }
}

/// Rectangular block of text lines produced from a luminance grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AsciiBlock {
    lines: Vec<String>,
}

impl AsciiBlock {
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Split newline-separated text into a block. Empty text is an empty block.
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Length of the longest line in characters, 0 for an empty block.
    pub fn max_width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for AsciiBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

/// Map brightness values to glyphs.
///
/// # Arguments
/// * `brightness` - Brightness values (0-255), one per character cell
/// * `ramp` - Glyph ramp, first glyph for intensity 0
/// * `invert` - If true, invert brightness before mapping
///
/// # Returns
/// A vector of characters, one per input brightness value.
pub fn map_to_chars(brightness: &[u8], ramp: &GlyphRamp, invert: bool) -> Vec<char> {
    brightness
        .iter()
        .map(|&b| {
            let b = if invert { 255 - b } else { b };
            ramp.glyph_for(b)
        })
        .collect()
}

/// Render a luminance grid into an ASCII block of `height` lines of `width` glyphs.
pub fn render_block(grid: &LuminanceGrid, ramp: &GlyphRamp, invert: bool) -> AsciiBlock {
    if grid.width() == 0 || grid.height() == 0 {
        return AsciiBlock::default();
    }

    let chars = map_to_chars(grid.samples(), ramp, invert);
    let lines = chars
        .chunks(grid.width() as usize)
        .map(|row| row.iter().collect::<String>())
        .collect();

    AsciiBlock { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::RampPreset;

    #[test]
    fn test_map_to_chars_classic() {
        let ramp = GlyphRamp::default();
        let chars = map_to_chars(&[0, 127, 255], &ramp, false);
        assert_eq!(chars, vec!['#', '%', ' ']);
    }

    #[test]
    fn test_map_to_chars_inverted() {
        let ramp = GlyphRamp::default();
        let chars = map_to_chars(&[0, 255], &ramp, true);
        assert_eq!(chars, vec![' ', '#']);
    }

    #[test]
    fn test_render_block_shape() {
        let grid = LuminanceGrid::new(3, 2, vec![0, 0, 0, 255, 255, 255]).unwrap();
        let block = render_block(&grid, &RampPreset::Minimal.ramp(), false);
        assert_eq!(block.lines(), &["   ".to_string(), "###".to_string()]);
        assert_eq!(block.max_width(), 3);
        assert_eq!(block.height(), 2);
    }

    #[test]
    fn test_render_empty_grid() {
        let block = render_block(&LuminanceGrid::empty(4), &GlyphRamp::default(), false);
        assert!(block.is_empty());
        assert_eq!(block.max_width(), 0);
    }

    #[test]
    fn test_grid_rejects_mismatched_samples() {
        assert!(LuminanceGrid::new(2, 2, vec![0; 3]).is_none());
    }

    #[test]
    fn test_block_parse_and_display() {
        let block = AsciiBlock::parse("ab\ncde");
        assert_eq!(block.height(), 2);
        assert_eq!(block.max_width(), 3);
        assert_eq!(block.to_string(), "ab\ncde");
        assert!(AsciiBlock::parse("").is_empty());
    }
}
