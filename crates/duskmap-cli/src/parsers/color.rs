//! Color argument parsing.

use duskmap_core::color::{parse_color, Rgba};

/// Parse a CSS color given on the command line
///
/// Accepts anything `duskmap_core::parse_color` does: hex, `rgb()`/`rgba()`,
/// `hsl()`/`hsla()` and the basic named colors.
pub fn parse_color_arg(color_str: &str) -> Result<Rgba, String> {
    parse_color(color_str).map_err(|e| format!("Invalid color '{}': {}", color_str.trim(), e))
}

/// Split a color list into entries, one color per line
///
/// Blank lines and lines starting with `//` are skipped. Surrounding
/// whitespace and a trailing `;` are trimmed.
pub fn parse_color_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.trim().trim_end_matches(';').trim())
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
        .map(str::to_string)
        .collect()
}
