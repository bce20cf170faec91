//! Card geometry, computed in full before any markup is emitted.

use serde::Deserialize;

use crate::ascii::AsciiBlock;
use crate::sections::Section;

/// Horizontal inset of each panel's text from its left edge.
pub const PANEL_INSET: f64 = 15.0;

/// Characters kept free at the right end of every rule.
pub const RULE_MARGIN_CHARS: usize = 2;

/// Font and panel metrics. The layout approximates glyphs with a fixed
/// average character width instead of real font metrics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub font_size: f64,
    /// Average glyph advance in pixels
    pub char_width: f64,
    /// Line height as a multiple of the font size
    pub line_height: f64,
    /// Fixed width of the info panel in pixels
    pub info_panel_width: f64,
    /// Extra canvas width to the right of the info panel
    pub margin: f64,
    /// Added to the info panel height when sizing the canvas
    pub vertical_padding: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            char_width: 9.6,
            line_height: 1.2,
            info_panel_width: 525.0,
            margin: 30.0,
            vertical_padding: 80.0,
        }
    }
}

impl LayoutParams {
    /// Distance between baselines in pixels.
    pub fn line_px(&self) -> f64 {
        self.font_size * self.line_height
    }
}

/// Derived card dimensions and anchors. Theme-invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct CardGeometry {
    /// Baseline distance in pixels
    pub line_px: f64,
    pub ascii_panel_width: f64,
    pub ascii_panel_height: f64,
    pub info_line_count: usize,
    pub info_panel_height: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// First ASCII baseline
    pub ascii_start_y: f64,
    /// First info-panel baseline
    pub info_start_y: f64,
    /// Left edge of info-panel text
    pub info_x: f64,
    /// Character budget for dashes and dot filler
    pub rule_width: usize,
}

impl CardGeometry {
    pub fn compute(ascii: &AsciiBlock, sections: &[Section], params: &LayoutParams) -> Self {
        let line_px = params.line_px();

        let ascii_panel_width = non_negative(ascii.max_width() as f64 * params.char_width).floor();
        let ascii_panel_height = ascii.height() as f64 * line_px;

        let info_line_count: usize = sections.iter().map(Section::line_count).sum();
        let info_panel_height = info_line_count as f64 * line_px;

        let canvas_height = non_negative(
            ascii_panel_height
                .floor()
                .max(info_panel_height + params.vertical_padding),
        );
        let canvas_width = non_negative(ascii_panel_width + params.info_panel_width + params.margin);

        let ascii_start_y = (canvas_height - ascii_panel_height) / 2.0 + params.font_size;
        let info_start_y = (canvas_height - info_panel_height) / 2.0 + params.font_size;

        Self {
            line_px,
            ascii_panel_width,
            ascii_panel_height,
            info_line_count,
            info_panel_height,
            canvas_width,
            canvas_height,
            ascii_start_y,
            info_start_y,
            info_x: ascii_panel_width + PANEL_INSET,
            rule_width: rule_width(params),
        }
    }

    /// x of an ASCII line, centered within the ASCII panel.
    pub fn ascii_line_x(&self, line_len: usize, char_width: f64) -> f64 {
        PANEL_INSET + (self.ascii_panel_width - line_len as f64 * char_width) / 2.0
    }

    /// Baseline of the `index`-th ASCII line.
    pub fn ascii_line_y(&self, index: usize) -> f64 {
        self.ascii_start_y + index as f64 * self.line_px
    }
}

/// `floor((info_panel_width - inset) / char_width) - 2`, clamped at 0.
pub fn rule_width(params: &LayoutParams) -> usize {
    let columns = ((params.info_panel_width - PANEL_INSET) / params.char_width).floor();
    if !columns.is_finite() || columns <= RULE_MARGIN_CHARS as f64 {
        return 0;
    }
    columns as usize - RULE_MARGIN_CHARS
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
