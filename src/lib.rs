//! profile-card library crate.
//!
//! Renders a GitHub profile card: an ASCII-art portrait beside a panel of
//! biography and statistics rows, written as one SVG per theme.

pub mod age;
pub mod ascii;
pub mod card;
pub mod cli;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod sections;
pub mod stats;
