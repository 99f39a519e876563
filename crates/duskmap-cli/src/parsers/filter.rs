//! Role and mode argument parsing.

use duskmap_core::models::{ColorRole, FilterMode};

/// Parse a color role ("background", "foreground", "border", "shadow",
/// "gradient", or the short forms "bg", "fg", "text")
pub fn parse_role(role_str: &str) -> Result<ColorRole, String> {
    role_str.trim().parse::<ColorRole>().map_err(|e| {
        format!(
            "{}. Valid roles: background, foreground, border, shadow, gradient",
            e
        )
    })
}

/// Parse a filter mode ("light" or "dark")
pub fn parse_mode(mode_str: &str) -> Result<FilterMode, String> {
    mode_str.trim().parse::<FilterMode>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role() {
        assert_eq!(parse_role("background").unwrap(), ColorRole::Background);
        assert_eq!(parse_role("FG").unwrap(), ColorRole::Foreground);
        assert_eq!(parse_role(" text ").unwrap(), ColorRole::Foreground);
        assert_eq!(parse_role("gradient").unwrap(), ColorRole::Gradient);
        assert!(parse_role("outline").unwrap_err().contains("Valid roles"));
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("light").unwrap(), FilterMode::Light);
        assert_eq!(parse_mode("Dark").unwrap(), FilterMode::Dark);
        assert_eq!(parse_mode("0").unwrap(), FilterMode::Light);
        assert!(parse_mode("dusk").is_err());
    }
}
