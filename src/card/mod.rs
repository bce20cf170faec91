//! Card layout engine.
//!
//! Turns an [`AsciiBlock`](crate::ascii::AsciiBlock) and an ordered list of
//! [`Section`](crate::sections::Section)s into SVG markup:
//!
//! 1. **Geometry** - panel sizes, canvas size and independent vertical centering
//! 2. **Rows** - dash rules, dot filler and lines-of-code parsing, in characters
//! 3. **Emission** - `<tspan>` markup through [`SvgBuilder`], one call per theme

mod geometry;
mod render;
mod rows;
mod svg;
mod theme;

pub use geometry::{rule_width, CardGeometry, LayoutParams, PANEL_INSET, RULE_MARGIN_CHARS};
pub use render::{field_spans, render_card, render_with_geometry, FONT_FAMILY};
pub use rows::{
    centered_username, dot_count, full_rule, parse_loc, title_line, username_dashes, DashSplit,
    LocParts,
};
pub use svg::{escape_xml, fmt_px, SvgBuilder, TSpan};
pub use theme::{
    default_themes, Appearance, ThemeSpec, BORDER_RADIUS, BORDER_WIDTH, LOC_ADDED_COLOR,
    LOC_REMOVED_COLOR,
};
