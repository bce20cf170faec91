//! SVG emission for the profile card.

use crate::ascii::AsciiBlock;
use crate::sections::{Field, FieldKind, Heading, Section};

use super::geometry::{CardGeometry, LayoutParams};
use super::rows::{
    centered_username, dot_count, dots, dashes, full_rule, parse_loc, title_line,
};
use super::svg::{SvgBuilder, TSpan};
use super::theme::{ThemeSpec, BORDER_RADIUS, BORDER_WIDTH, LOC_ADDED_COLOR, LOC_REMOVED_COLOR};

/// Font stack declared on the root element.
pub const FONT_FAMILY: &str = "ConsolasFallback,Consolas,monospace";

/// Lines advanced after a heading rule.
const HEADING_ADVANCE: f64 = 1.2;

/// Lines advanced after a section that asks for a trailing blank.
const BLANK_LINE_ADVANCE: f64 = 0.5;

const FONT_FACE: &str = "@font-face {
  src: local('Consolas'), local('Consolas Bold');
  font-family: 'ConsolasFallback';
  font-display: swap;
  -webkit-size-adjust: 109%;
  size-adjust: 109%;
}";

/// Render the card: ASCII art on the left, sections on the right.
///
/// Pure and deterministic: identical inputs give byte-identical output.
pub fn render_card(
    ascii: &AsciiBlock,
    sections: &[Section],
    theme: &ThemeSpec,
    params: &LayoutParams,
) -> String {
    let geometry = CardGeometry::compute(ascii, sections, params);
    log::debug!(
        "Card geometry for theme {}: {}x{} px, {} info lines, rule width {}",
        theme.name,
        geometry.canvas_width,
        geometry.canvas_height,
        geometry.info_line_count,
        geometry.rule_width
    );
    render_with_geometry(&geometry, ascii, sections, theme, params)
}

/// Emit markup for an already computed geometry.
pub fn render_with_geometry(
    geometry: &CardGeometry,
    ascii: &AsciiBlock,
    sections: &[Section],
    theme: &ThemeSpec,
    params: &LayoutParams,
) -> String {
    let mut svg = SvgBuilder::new(
        geometry.canvas_width,
        geometry.canvas_height,
        FONT_FAMILY,
        params.font_size,
    );
    add_styles(&mut svg, theme);
    svg.add_background(&theme.background, &theme.border, BORDER_WIDTH, BORDER_RADIUS);

    svg.open_group("ascii-panel");
    svg.open_text(None, &theme.text);
    for (i, line) in ascii.lines().iter().enumerate() {
        let x = geometry.ascii_line_x(line.chars().count(), params.char_width);
        svg.add_line(&[TSpan::new(line.as_str()).at(x, geometry.ascii_line_y(i))]);
    }
    svg.close_text();
    svg.close_group();

    svg.open_group("info-panel");
    svg.open_text(Some((geometry.info_x, geometry.info_start_y)), &theme.text);
    let x = geometry.info_x;
    let mut y = geometry.info_start_y;
    for section in sections {
        match &section.heading {
            Heading::Username(name) => {
                let line = centered_username(name, geometry.rule_width);
                svg.add_line(&[TSpan::new(line).at(x, y)]);
                y += geometry.line_px;
                svg.add_line(&[TSpan::new(full_rule(geometry.rule_width)).at(x, y)]);
                y += geometry.line_px * HEADING_ADVANCE;
            }
            Heading::Title(title) => {
                let (text, dash_count) = title_line(title, geometry.rule_width);
                let dashes_x = x + text.chars().count() as f64 * params.char_width;
                svg.add_line(&[
                    TSpan::new(text).at(x, y).class("section-title"),
                    TSpan::new(dashes(dash_count)).at(dashes_x, y).fill(&theme.text),
                ]);
                y += geometry.line_px * HEADING_ADVANCE;
            }
            Heading::None => {}
        }

        for field in &section.fields {
            svg.add_line(&field_spans(field, x, y, geometry, theme, params));
            y += geometry.line_px;
        }

        if section.blank_line_after {
            y += geometry.line_px * BLANK_LINE_ADVANCE;
        }
    }
    svg.close_text();
    svg.close_group();

    svg.finish()
}

fn add_styles(svg: &mut SvgBuilder, theme: &ThemeSpec) {
    svg.add_style(FONT_FACE);
    svg.add_style(format!(".key {{fill: {};}}", theme.key));
    svg.add_style(format!(".value {{fill: {};}}", theme.value));
    svg.add_style(format!(
        ".section-title {{fill: {}; font-weight: bold;}}",
        theme.key
    ));
    svg.add_style("text, tspan {white-space: pre;}");
}

/// Spans for one field row, dispatched on the field's kind.
pub fn field_spans(
    field: &Field,
    x: f64,
    y: f64,
    geometry: &CardGeometry,
    theme: &ThemeSpec,
    params: &LayoutParams,
) -> Vec<TSpan> {
    let key_text = field.key_text();
    let value = field.value().to_string();

    match field.kind() {
        FieldKind::FreeText => vec![
            TSpan::new(key_text).at(x, y).class("key"),
            TSpan::new(value).class("value"),
        ],
        FieldKind::LinesOfCode => {
            let loc = parse_loc(&value);
            let mut spans = vec![
                TSpan::new(key_text).at(x, y).class("key"),
                TSpan::new(loc.net).class("value"),
            ];
            if loc.has_detail {
                spans.push(TSpan::new(" (").class("value"));
                let both = loc.added.is_some() && loc.removed.is_some();
                if let Some(added) = loc.added {
                    spans.push(TSpan::new(added).fill(LOC_ADDED_COLOR));
                }
                if both {
                    spans.push(TSpan::new(",").class("value"));
                    spans.push(TSpan::new(" "));
                }
                if let Some(removed) = loc.removed {
                    spans.push(TSpan::new(removed).fill(LOC_REMOVED_COLOR));
                }
                spans.push(TSpan::new(")").class("value"));
            }
            spans
        }
        FieldKind::Dotted => {
            let key_len = key_text.chars().count();
            let count = dot_count(key_len, value.chars().count(), geometry.rule_width);
            let dots_x = x + key_len as f64 * params.char_width;
            let value_x = dots_x + count as f64 * params.char_width + params.char_width;
            vec![
                TSpan::new(key_text).at(x, y).class("key"),
                TSpan::new(dots(count)).at(dots_x, y).fill(&theme.text),
                TSpan::new(value).at(value_x, y).class("value"),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::ThemeSpec;

    fn fixture_geometry() -> CardGeometry {
        CardGeometry {
            line_px: 19.2,
            ascii_panel_width: 0.0,
            ascii_panel_height: 0.0,
            info_line_count: 1,
            info_panel_height: 19.2,
            canvas_width: 555.0,
            canvas_height: 99.2,
            ascii_start_y: 65.6,
            info_start_y: 56.0,
            info_x: 15.0,
            rule_width: 20,
        }
    }

    #[test]
    fn test_dotted_spans_against_fixture() {
        let field = Field::new("Stars", 7u64);
        let spans = field_spans(
            &field,
            15.0,
            56.0,
            &fixture_geometry(),
            &ThemeSpec::dark(),
            &LayoutParams::default(),
        );
        assert_eq!(spans.len(), 3);
        // "⭐ Stars: " is 9 chars, value 1 char: 20 - 9 - 1 - 1 = 9 dots
        assert_eq!(spans[0].text(), "⭐ Stars: ");
        assert_eq!(spans[1].text(), ".........");
        assert_eq!(spans[2].text(), "7");
        let (dots_x, _) = spans[1].position().unwrap();
        assert!((dots_x - (15.0 + 9.0 * 9.6)).abs() < 1e-9);
        let (value_x, _) = spans[2].position().unwrap();
        assert!((value_x - (dots_x + 10.0 * 9.6)).abs() < 1e-9);
    }

    #[test]
    fn test_free_text_spans_have_no_filler() {
        let field = Field::new("Email", "alice@example.com");
        let spans = field_spans(
            &field,
            15.0,
            56.0,
            &fixture_geometry(),
            &ThemeSpec::dark(),
            &LayoutParams::default(),
        );
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text(), "📧 Email: ");
        assert_eq!(spans[1].text(), "alice@example.com");
        assert!(spans[1].position().is_none());
    }

    #[test]
    fn test_loc_spans_single_clause_has_no_separator() {
        let field = Field::new("Lines of Code", "500 (+500)");
        let spans = field_spans(
            &field,
            15.0,
            56.0,
            &fixture_geometry(),
            &ThemeSpec::dark(),
            &LayoutParams::default(),
        );
        let texts: Vec<&str> = spans.iter().map(TSpan::text).collect();
        assert_eq!(texts, vec!["📈 Lines of Code: ", "500", " (", "+500", ")"]);
    }

    #[test]
    fn test_loc_spans_plain_value() {
        let field = Field::new("Lines of Code", "0");
        let spans = field_spans(
            &field,
            15.0,
            56.0,
            &fixture_geometry(),
            &ThemeSpec::dark(),
            &LayoutParams::default(),
        );
        let texts: Vec<&str> = spans.iter().map(TSpan::text).collect();
        assert_eq!(texts, vec!["📈 Lines of Code: ", "0"]);
    }
}
