//! Text computations for info-panel rows: dash rules, dot filler and
//! lines-of-code parsing. All lengths are in characters.

/// Rule character for headings.
pub const DASH: char = '-';

/// Filler character for dotted rows.
pub const DOT: char = '.';

/// Dashes on each side of a centered username.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashSplit {
    pub left: usize,
    pub right: usize,
}

/// Split the space left around a username of `name_len` characters.
///
/// `left = floor(remaining / 2)`, `right = remaining - left`; both 0 when the
/// name does not fit.
pub fn username_dashes(name_len: usize, rule_width: usize) -> DashSplit {
    let remaining = rule_width.saturating_sub(name_len);
    let left = remaining / 2;
    DashSplit {
        left,
        right: remaining - left,
    }
}

/// `"----name----"` exactly `rule_width` characters wide, truncated when the
/// name is longer than the rule.
pub fn centered_username(name: &str, rule_width: usize) -> String {
    let split = username_dashes(name.chars().count(), rule_width);
    let line: String = std::iter::repeat(DASH)
        .take(split.left)
        .chain(name.chars())
        .chain(std::iter::repeat(DASH).take(split.right))
        .collect();
    line.chars().take(rule_width).collect()
}

/// A full-width dash rule.
pub fn full_rule(rule_width: usize) -> String {
    dashes(rule_width)
}

pub fn dashes(count: usize) -> String {
    std::iter::repeat(DASH).take(count).collect()
}

/// `"- <title>"` and the number of dashes that follow it (0 when the title
/// alone fills the rule; titles are never wrapped or truncated).
pub fn title_line(title: &str, rule_width: usize) -> (String, usize) {
    let text = format!("{} {}", DASH, title);
    let count = rule_width.saturating_sub(text.chars().count());
    (text, count)
}

/// `max(0, rule_width - key_len - value_len - 1)`.
pub fn dot_count(key_len: usize, value_len: usize, rule_width: usize) -> usize {
    rule_width
        .saturating_sub(key_len)
        .saturating_sub(value_len)
        .saturating_sub(1)
}

pub fn dots(count: usize) -> String {
    std::iter::repeat(DOT).take(count).collect()
}

/// Parsed `"<net> (+<adds>, -<dels>)"` value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocParts {
    pub net: String,
    /// The `+...` clause, sign included
    pub added: Option<String>,
    /// The `-...` clause, sign included
    pub removed: Option<String>,
    /// Whether a parenthesized detail followed the net count
    pub has_detail: bool,
}

/// Parse a lines-of-code value.
///
/// The net count is everything before the first space. The detail is stripped
/// of parentheses, split on commas and classified by leading sign; pieces
/// without a sign continue the previous clause, so digit grouping such as
/// `+2,000` survives the split.
pub fn parse_loc(value: &str) -> LocParts {
    let (net, detail) = match value.split_once(' ') {
        Some((net, detail)) => (net, detail),
        None => (value, ""),
    };

    let mut parts = LocParts {
        net: net.to_string(),
        has_detail: !detail.is_empty(),
        ..LocParts::default()
    };

    let stripped: String = detail.chars().filter(|&c| c != '(' && c != ')').collect();

    let mut clauses: Vec<String> = Vec::new();
    for piece in stripped.split(',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        match clauses.last_mut() {
            Some(last) if !piece.starts_with(['+', '-']) => {
                last.push(',');
                last.push_str(piece);
            }
            _ => clauses.push(piece.to_string()),
        }
    }

    for clause in clauses {
        if clause.starts_with('+') {
            parts.added = Some(clause);
        } else if clause.starts_with('-') {
            parts.removed = Some(clause);
        }
    }

    parts
}
