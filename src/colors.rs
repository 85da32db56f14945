use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCheck {
    Present,
    Missing,
    NoColorsFile,
}

/// Whether `contents` declares a resource whose `name` attribute is `color_name`.
/// Whitespace around `=` and either quote style are accepted.
pub fn declares_color(contents: &str, color_name: &str) -> bool {
    name_attributes(contents).any(|name| name == color_name)
}

/// Values of every `name=...` attribute in `contents`
fn name_attributes(contents: &str) -> impl Iterator<Item = &str> {
    contents.match_indices("name").filter_map(move |(start, _)| {
        let before = contents[..start].chars().next_back()?;
        if !before.is_whitespace() {
            return None;
        }

        let rest = contents[start + "name".len()..].trim_start();
        let rest = rest.strip_prefix('=')?.trim_start();
        let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
        let value = &rest[1..];
        let end = value.find(quote)?;
        Some(&value[..end])
    })
}

/// Look for `color_name` in a colors resource file. Read only.
pub fn check_color(colors_file: &Path, color_name: &str) -> Result<ColorCheck> {
    if !colors_file.exists() {
        return Ok(ColorCheck::NoColorsFile);
    }

    let contents = fs::read_to_string(colors_file)
        .with_context(|| format!("Failed to read {}", colors_file.display()))?;

    if declares_color(&contents, color_name) {
        Ok(ColorCheck::Present)
    } else {
        Ok(ColorCheck::Missing)
    }
}
