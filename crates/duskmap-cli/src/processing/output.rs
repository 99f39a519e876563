//! Plain text and JSON rendering of command results.

use crate::types::{ModifiedColor, PaletteEntry};

/// Render modified colors, one output per line or as a JSON array
///
/// Plain text prints only the output when there is a single input, and
/// `input -> output` lines otherwise.
pub fn render_modified(results: &[ModifiedColor], json: bool) -> Result<String, String> {
    if json {
        return serde_json::to_string_pretty(results)
            .map_err(|e| format!("Failed to serialize results: {}", e));
    }

    if let [single] = results {
        return Ok(single.output.clone());
    }

    let width = results.iter().map(|r| r.input.len()).max().unwrap_or(0);
    Ok(results
        .iter()
        .map(|r| format!("{:<width$}  ->  {}", r.input, r.output, width = width))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Render a palette as an aligned table or a JSON array
pub fn render_palette(color: &str, entries: &[PaletteEntry], json: bool) -> Result<String, String> {
    if json {
        return serde_json::to_string_pretty(entries)
            .map_err(|e| format!("Failed to serialize palette: {}", e));
    }

    let mut lines = vec![format!("Palette for {}:", color.trim())];
    for entry in entries {
        lines.push(format!("  {:<12}{}", entry.role.as_str(), entry.output));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use duskmap_core::models::ColorRole;

    fn modified(input: &str, output: &str) -> ModifiedColor {
        ModifiedColor {
            input: input.to_string(),
            role: ColorRole::Background,
            output: output.to_string(),
        }
    }

    #[test]
    fn test_single_result_prints_output_only() {
        let text = render_modified(&[modified("#fff", "#17181c")], false).unwrap();
        assert_eq!(text, "#17181c");
    }

    #[test]
    fn test_multiple_results_are_aligned() {
        let text = render_modified(
            &[modified("#fff", "#17181c"), modified("black", "#000000")],
            false,
        )
        .unwrap();
        assert_eq!(text, "#fff   ->  #17181c\nblack  ->  #000000");
    }

    #[test]
    fn test_json_output() {
        let text = render_modified(&[modified("#fff", "#17181c")], true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["input"], "#fff");
        assert_eq!(value[0]["role"], "background");
        assert_eq!(value[0]["output"], "#17181c");
    }

    #[test]
    fn test_palette_table() {
        let entries = vec![
            PaletteEntry {
                role: ColorRole::Background,
                output: "#17181c".to_string(),
            },
            PaletteEntry {
                role: ColorRole::Foreground,
                output: "#ffffff".to_string(),
            },
        ];
        let text = render_palette("white", &entries, false).unwrap();
        assert_eq!(
            text,
            "Palette for white:\n  background  #17181c\n  foreground  #ffffff"
        );
    }
}
