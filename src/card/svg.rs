//! Minimal SVG document builder for text-heavy cards.

use std::fmt::Write as _;

/// Format a pixel coordinate with at most two decimals and no trailing zeros.
pub fn fmt_px(value: f64) -> String {
    let mut s = format!("{:.2}", value);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Escape text for element content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// One `<tspan>`, optionally positioned, classed or filled.
#[derive(Debug, Clone, PartialEq)]
pub struct TSpan {
    text: String,
    position: Option<(f64, f64)>,
    class: Option<&'static str>,
    fill: Option<String>,
}

impl TSpan {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            position: None,
            class: None,
            fill: None,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some((x, y));
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn fill(mut self, color: &str) -> Self {
        self.fill = Some(color.to_string());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Option<(f64, f64)> {
        self.position
    }

    fn write_to(&self, out: &mut String) {
        out.push_str("<tspan");
        if let Some((x, y)) = self.position {
            let _ = write!(out, r#" x="{}" y="{}""#, fmt_px(x), fmt_px(y));
        }
        if let Some(class) = self.class {
            let _ = write!(out, r#" class="{}""#, class);
        }
        if let Some(fill) = &self.fill {
            let _ = write!(out, r#" fill="{}""#, escape_xml(fill));
        }
        out.push('>');
        out.push_str(&escape_xml(&self.text));
        out.push_str("</tspan>");
    }
}

/// Build an SVG document line by line.
///
/// Owned by a single render call and consumed by [`SvgBuilder::finish`].
pub struct SvgBuilder {
    header: String,
    styles: Vec<String>,
    body: Vec<String>,
}

impl SvgBuilder {
    /// Start a document of the given pixel size.
    pub fn new(width: f64, height: f64, font_family: &str, font_size: f64) -> Self {
        let header = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" font-family="{}" width="{}px" height="{}px" font-size="{}px">"#,
            escape_xml(font_family),
            fmt_px(width),
            fmt_px(height),
            fmt_px(font_size)
        );
        Self {
            header,
            styles: vec![],
            body: vec![],
        }
    }

    /// Append raw CSS to the `<style>` block.
    pub fn add_style(&mut self, css: impl Into<String>) {
        self.styles.push(css.into());
    }

    /// Add a rectangle covering the whole canvas.
    pub fn add_background(
        &mut self,
        fill: &str,
        stroke: &str,
        stroke_width: u32,
        radius: u32,
    ) {
        self.body.push(format!(
            r#"<rect width="100%" height="100%" fill="{}" stroke="{}" stroke-width="{}" rx="{}" ry="{}"/>"#,
            escape_xml(fill),
            escape_xml(stroke),
            stroke_width,
            radius,
            radius
        ));
    }

    pub fn open_group(&mut self, id: &str) {
        self.body.push(format!(r#"<g id="{}">"#, escape_xml(id)));
    }

    pub fn close_group(&mut self) {
        self.body.push("</g>".to_string());
    }

    /// Open a `<text>` element, optionally anchored at a position.
    pub fn open_text(&mut self, position: Option<(f64, f64)>, fill: &str) {
        let anchor = position
            .map(|(x, y)| format!(r#" x="{}" y="{}""#, fmt_px(x), fmt_px(y)))
            .unwrap_or_default();
        self.body
            .push(format!(r#"<text{} fill="{}">"#, anchor, escape_xml(fill)));
    }

    pub fn close_text(&mut self) {
        self.body.push("</text>".to_string());
    }

    /// Emit spans on one output line.
    pub fn add_line(&mut self, spans: &[TSpan]) {
        let mut line = String::new();
        for span in spans {
            span.write_to(&mut line);
        }
        self.body.push(line);
    }

    /// Serialize the document.
    pub fn finish(self) -> String {
        let mut out = String::from("<?xml version='1.0' encoding='UTF-8'?>\n");
        out.push_str(&self.header);
        out.push('\n');
        out.push_str("<style>\n");
        for css in &self.styles {
            out.push_str(css);
            out.push('\n');
        }
        out.push_str("</style>\n");
        for line in &self.body {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}
