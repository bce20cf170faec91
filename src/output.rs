//! Writing rendered cards and the README picture document.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ascii::AsciiBlock;
use crate::card::{render_card, Appearance, LayoutParams, ThemeSpec};
use crate::sections::Section;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn write_file(path: &Path, content: &str) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Render one card per theme into `dir`, returning the written paths in theme order.
pub fn write_cards(
    dir: &Path,
    ascii: &AsciiBlock,
    sections: &[Section],
    themes: &[ThemeSpec],
    params: &LayoutParams,
) -> Result<Vec<PathBuf>, OutputError> {
    let mut written = Vec::with_capacity(themes.len());
    for theme in themes {
        let path = dir.join(&theme.filename);
        log::info!("Generating SVG for theme {} ({})", theme.name, path.display());
        let svg = render_card(ascii, sections, theme, params);
        write_file(&path, &svg)?;
        written.push(path);
    }
    Ok(written)
}

/// Markup selecting the dark or light card by `prefers-color-scheme`.
///
/// Uses the first theme of each appearance, falling back to the first theme.
/// Returns `None` for an empty theme list.
pub fn readme_document(themes: &[ThemeSpec]) -> Option<String> {
    let first = themes.first()?;
    let pick = |appearance: Appearance| {
        themes
            .iter()
            .find(|t| t.appearance == appearance)
            .unwrap_or(first)
    };
    let dark = pick(Appearance::Dark);
    let light = pick(Appearance::Light);

    Some(format!(
        r#"<div align="center">
  <picture>
    <source media="(prefers-color-scheme: dark)" srcset="./{}">
    <img alt="GitHub Profile README" src="./{}">
  </picture>
</div>
"#,
        dark.filename, light.filename
    ))
}

/// Overwrite `path` with the README picture document.
pub fn write_readme(path: &Path, themes: &[ThemeSpec]) -> Result<bool, OutputError> {
    match readme_document(themes) {
        Some(doc) => {
            write_file(path, &doc)?;
            log::info!("Updated {} with light/dark theme support", path.display());
            Ok(true)
        }
        None => Ok(false),
    }
}
