//! Section model: the ordered, labeled data shown in the info panel.
//!
//! Every field is classified once, when it is constructed, through the
//! static [`FieldKey`] table. The card renderer only reads the resolved
//! [`FieldKind`] and icon.

use std::fmt;

use crate::config::ProfileData;
use crate::stats::GitHubStats;

/// How a field row is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Short key/value pair, padded with dots so the value sits near the right edge
    Dotted,
    /// Long or list-like value emitted right after the key, no filler
    FreeText,
    /// `"<net> (+<adds>, -<dels>)"` with colored sub-spans
    LinesOfCode,
}

/// Every key the card knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Age,
    Location,
    Interests,
    Stack,
    Languages,
    WebTechnologies,
    Databases,
    DevOpsTools,
    Hobbies,
    Email,
    LinkedIn,
    Twitter,
    Discord,
    Repositories,
    Stars,
    Forks,
    Commits,
    Followers,
    LinesOfCode,
}

impl FieldKey {
    pub const ALL: [FieldKey; 19] = [
        FieldKey::Age,
        FieldKey::Location,
        FieldKey::Interests,
        FieldKey::Stack,
        FieldKey::Languages,
        FieldKey::WebTechnologies,
        FieldKey::Databases,
        FieldKey::DevOpsTools,
        FieldKey::Hobbies,
        FieldKey::Email,
        FieldKey::LinkedIn,
        FieldKey::Twitter,
        FieldKey::Discord,
        FieldKey::Repositories,
        FieldKey::Stars,
        FieldKey::Forks,
        FieldKey::Commits,
        FieldKey::Followers,
        FieldKey::LinesOfCode,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::Age => "Age",
            FieldKey::Location => "Location",
            FieldKey::Interests => "Interests",
            FieldKey::Stack => "Stack",
            FieldKey::Languages => "Languages",
            FieldKey::WebTechnologies => "Web Technologies",
            FieldKey::Databases => "Databases",
            FieldKey::DevOpsTools => "DevOps Tools",
            FieldKey::Hobbies => "Hobbies",
            FieldKey::Email => "Email",
            FieldKey::LinkedIn => "LinkedIn",
            FieldKey::Twitter => "Twitter",
            FieldKey::Discord => "Discord",
            FieldKey::Repositories => "Repositories",
            FieldKey::Stars => "Stars",
            FieldKey::Forks => "Forks",
            FieldKey::Commits => "Commits",
            FieldKey::Followers => "Followers",
            FieldKey::LinesOfCode => "Lines of Code",
        }
    }

    pub fn icon(&self) -> Option<&'static str> {
        match self {
            FieldKey::Age => Some("🎂"),
            FieldKey::Location => Some("📍"),
            FieldKey::Interests => Some("💡"),
            FieldKey::Stack => Some("💻"),
            FieldKey::Languages => Some("🧠"),
            FieldKey::WebTechnologies => Some("🌐"),
            FieldKey::Databases => Some("💾"),
            FieldKey::DevOpsTools => Some("🛠️"),
            FieldKey::Hobbies => Some("🎮"),
            FieldKey::Email => Some("📧"),
            FieldKey::LinkedIn => Some("🔗"),
            FieldKey::Twitter | FieldKey::Discord => None,
            FieldKey::Repositories => Some("📦"),
            FieldKey::Stars => Some("⭐"),
            FieldKey::Forks => Some("🍴"),
            FieldKey::Commits => Some("⚡"),
            FieldKey::Followers => Some("👥"),
            FieldKey::LinesOfCode => Some("📈"),
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldKey::Stack
            | FieldKey::Languages
            | FieldKey::WebTechnologies
            | FieldKey::Databases
            | FieldKey::DevOpsTools
            | FieldKey::Hobbies
            | FieldKey::Email
            | FieldKey::LinkedIn
            | FieldKey::Twitter
            | FieldKey::Discord => FieldKind::FreeText,
            FieldKey::LinesOfCode => FieldKind::LinesOfCode,
            _ => FieldKind::Dotted,
        }
    }

    /// Look a key up by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.label() == label)
    }
}

/// A field value: free text or a count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Count(u64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{}", text),
            FieldValue::Count(count) => write!(f, "{}", count),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::Count(value)
    }
}

/// One key/value row, classified at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    label: String,
    value: FieldValue,
    kind: FieldKind,
    icon: Option<&'static str>,
}

impl Field {
    /// Build a field from a label; unknown labels are dotted rows without an icon.
    pub fn new(label: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let label = label.into();
        let (kind, icon) = match FieldKey::from_label(&label) {
            Some(key) => (key.kind(), key.icon()),
            None => (FieldKind::Dotted, None),
        };
        Self {
            label,
            value: value.into(),
            kind,
            icon,
        }
    }

    /// Build a field for a known key.
    pub fn keyed(key: FieldKey, value: impl Into<FieldValue>) -> Self {
        Self {
            label: key.label().to_string(),
            value: value.into(),
            kind: key.kind(),
            icon: key.icon(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn icon(&self) -> Option<&'static str> {
        self.icon
    }

    /// `"<icon> <label>: "`, or `"<label>: "` without an icon.
    pub fn key_text(&self) -> String {
        match self.icon {
            Some(icon) => format!("{} {}: ", icon, self.label),
            None => format!("{}: ", self.label),
        }
    }
}

/// What sits above a section's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Heading {
    /// Display name centered in a dash rule, followed by a full rule (two lines)
    Username(String),
    /// `"- <title> ----"` (one line)
    Title(String),
    /// No heading line
    None,
}

impl Heading {
    /// Lines this heading occupies in the info panel.
    pub fn line_count(&self) -> usize {
        match self {
            Heading::Username(_) => 2,
            Heading::Title(_) => 1,
            Heading::None => 0,
        }
    }
}

/// A named group of fields, rendered top to bottom in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: Heading,
    pub fields: Vec<Field>,
    /// Leave a blank half-line after the section
    pub blank_line_after: bool,
}

impl Section {
    pub fn new(heading: Heading, fields: Vec<Field>, blank_line_after: bool) -> Self {
        Self {
            heading,
            fields,
            blank_line_after,
        }
    }

    /// Lines counted for panel sizing: heading + fields + trailing blank.
    pub fn line_count(&self) -> usize {
        self.heading.line_count() + self.fields.len() + usize::from(self.blank_line_after)
    }
}

/// Build the card's sections.
///
/// Header, Stack, Hobbies and Contact always; GitHub Stats only when `stats`
/// is provided, which callers do exactly when a credential was available.
pub fn build_sections(profile: &ProfileData, age: &str, stats: Option<&GitHubStats>) -> Vec<Section> {
    let mut contact = vec![
        Field::keyed(FieldKey::Email, profile.email.as_str()),
        Field::keyed(FieldKey::LinkedIn, profile.linkedin.as_str()),
    ];
    if let Some(twitter) = &profile.twitter {
        contact.push(Field::keyed(FieldKey::Twitter, twitter.as_str()));
    }
    if let Some(discord) = &profile.discord {
        contact.push(Field::keyed(FieldKey::Discord, discord.as_str()));
    }

    let mut sections = vec![
        Section::new(
            Heading::Username(profile.username_display.clone()),
            vec![
                Field::keyed(FieldKey::Age, age),
                Field::keyed(FieldKey::Location, profile.location.as_str()),
                Field::keyed(FieldKey::Interests, profile.interests.as_str()),
            ],
            true,
        ),
        Section::new(
            Heading::Title("Stack".to_string()),
            vec![
                Field::keyed(FieldKey::Stack, profile.stack.as_str()),
                Field::keyed(FieldKey::Languages, profile.languages.as_str()),
                Field::keyed(FieldKey::WebTechnologies, profile.web_technologies.as_str()),
                Field::keyed(FieldKey::Databases, profile.databases.as_str()),
                Field::keyed(FieldKey::DevOpsTools, profile.devops_tools.as_str()),
            ],
            true,
        ),
        Section::new(
            Heading::Title("Hobbies".to_string()),
            vec![Field::keyed(FieldKey::Hobbies, profile.hobbies.as_str())],
            true,
        ),
        Section::new(Heading::Title("Contact".to_string()), contact, true),
    ];

    if let Some(stats) = stats {
        sections.push(Section::new(
            Heading::Title("GitHub Stats".to_string()),
            vec![
                Field::keyed(FieldKey::Repositories, stats.repos),
                Field::keyed(FieldKey::Stars, stats.stars),
                Field::keyed(FieldKey::Forks, stats.forks),
                Field::keyed(FieldKey::Commits, stats.commits),
                Field::keyed(FieldKey::Followers, stats.followers),
                Field::keyed(FieldKey::LinesOfCode, stats.loc.as_str()),
            ],
            false,
        ));
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> ProfileData {
        ProfileData {
            username_display: "alice@github".to_string(),
            birth_date: "1995-04-12".to_string(),
            location: "Lisbon".to_string(),
            interests: "Compilers".to_string(),
            stack: "Backend".to_string(),
            languages: "Rust, Go".to_string(),
            web_technologies: "Axum".to_string(),
            databases: "Postgres".to_string(),
            devops_tools: "Nix".to_string(),
            hobbies: "Climbing".to_string(),
            email: "alice@example.com".to_string(),
            linkedin: "in/alice".to_string(),
            twitter: None,
            discord: None,
        }
    }

    #[test]
    fn test_classification_table() {
        assert_eq!(FieldKey::Age.kind(), FieldKind::Dotted);
        assert_eq!(FieldKey::Stars.kind(), FieldKind::Dotted);
        assert_eq!(FieldKey::Stack.kind(), FieldKind::FreeText);
        assert_eq!(FieldKey::Email.kind(), FieldKind::FreeText);
        assert_eq!(FieldKey::Discord.kind(), FieldKind::FreeText);
        assert_eq!(FieldKey::LinesOfCode.kind(), FieldKind::LinesOfCode);
    }

    #[test]
    fn test_labels_round_trip_through_lookup() {
        for key in FieldKey::ALL {
            assert_eq!(FieldKey::from_label(key.label()), Some(key));
        }
        assert_eq!(FieldKey::from_label("age"), None);
    }

    #[test]
    fn test_unknown_label_is_dotted_without_icon() {
        let field = Field::new("Favourite Editor", "helix");
        assert_eq!(field.kind(), FieldKind::Dotted);
        assert_eq!(field.icon(), None);
        assert_eq!(field.key_text(), "Favourite Editor: ");
    }

    #[test]
    fn test_known_label_resolves_kind_and_icon() {
        let field = Field::new("Lines of Code", "0");
        assert_eq!(field.kind(), FieldKind::LinesOfCode);
        assert_eq!(field.key_text(), "📈 Lines of Code: ");
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Count(42).to_string(), "42");
        assert_eq!(FieldValue::from("x").to_string(), "x");
    }

    #[test]
    fn test_section_line_count() {
        let header = Section::new(Heading::Username("a".into()), vec![Field::new("k", "v")], true);
        assert_eq!(header.line_count(), 4);
        let titled = Section::new(Heading::Title("t".into()), vec![], false);
        assert_eq!(titled.line_count(), 1);
        let bare = Section::new(Heading::None, vec![Field::new("k", "v")], false);
        assert_eq!(bare.line_count(), 1);
    }

    #[test]
    fn test_build_without_stats_has_four_sections() {
        let sections = build_sections(&sample_profile(), "30 years, 0 months, 0 days", None);
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0].heading, Heading::Username("alice@github".to_string()));
        assert!(sections.iter().all(|s| s.blank_line_after));
        assert!(sections
            .iter()
            .all(|s| s.heading != Heading::Title("GitHub Stats".to_string())));
    }

    #[test]
    fn test_build_with_stats_appends_stats_section() {
        let stats = GitHubStats::zero();
        let sections = build_sections(&sample_profile(), "1 years, 0 months, 0 days", Some(&stats));
        assert_eq!(sections.len(), 5);
        let last = &sections[4];
        assert_eq!(last.heading, Heading::Title("GitHub Stats".to_string()));
        assert!(!last.blank_line_after);
        assert_eq!(last.fields.len(), 6);
        assert_eq!(last.fields[0].value(), &FieldValue::Count(0));
        assert_eq!(last.fields[5].kind(), FieldKind::LinesOfCode);
    }

    #[test]
    fn test_optional_contacts_appended() {
        let mut profile = sample_profile();
        profile.discord = Some("alice#0001".to_string());
        let sections = build_sections(&profile, "", None);
        let contact = &sections[3];
        assert_eq!(contact.fields.len(), 3);
        assert_eq!(contact.fields[2].label(), "Discord");
    }
}
