//! CSS color string formatting

use super::Rgba;
use crate::math::round_half_up;

/// Format as a lowercase hex color
///
/// Opaque colors produce `#rrggbb`; translucent ones append the alpha byte
/// (`#rrggbbaa`).
pub fn rgb_to_hex_string(rgb: Rgba) -> String {
    let Rgba { r, g, b, a } = rgb;
    if a < 1.0 {
        let alpha = round_half_up(a * 255.0) as u8;
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, alpha)
    } else {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Format as `rgb(r, g, b)`, or `rgba(r, g, b, a)` when translucent
///
/// Alpha is written with at most two decimals and trailing zeros trimmed.
pub fn rgb_to_string(rgb: Rgba) -> String {
    let Rgba { r, g, b, a } = rgb;
    if a < 1.0 {
        format!("rgba({}, {}, {}, {})", r, g, b, to_fixed_trimmed(a, 2))
    } else {
        format!("rgb({}, {}, {})", r, g, b)
    }
}

/// Fixed-point formatting without trailing zeros (`0.50` -> `0.5`, `1.00` -> `1`)
fn to_fixed_trimmed(value: f64, digits: usize) -> String {
    let fixed = format!("{:.*}", digits, value);
    if !fixed.contains('.') {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_string_opaque() {
        assert_eq!(rgb_to_hex_string(Rgba::rgb(255, 255, 255)), "#ffffff");
        assert_eq!(rgb_to_hex_string(Rgba::rgb(0, 10, 255)), "#000aff");
    }

    #[test]
    fn test_hex_string_translucent_appends_alpha() {
        assert_eq!(rgb_to_hex_string(Rgba::new(255, 0, 0, 0.5)), "#ff000080");
    }

    #[test]
    fn test_rgb_string() {
        assert_eq!(rgb_to_string(Rgba::rgb(1, 2, 3)), "rgb(1, 2, 3)");
        assert_eq!(rgb_to_string(Rgba::new(1, 2, 3, 0.5)), "rgba(1, 2, 3, 0.5)");
        assert_eq!(rgb_to_string(Rgba::new(1, 2, 3, 0.0)), "rgba(1, 2, 3, 0)");
        assert_eq!(rgb_to_string(Rgba::new(1, 2, 3, 0.75)), "rgba(1, 2, 3, 0.75)");
        // a > 1 is not translucent
        assert_eq!(rgb_to_string(Rgba::new(1, 2, 3, 1.5)), "rgb(1, 2, 3)");
    }

    #[test]
    fn test_to_fixed_trimmed() {
        assert_eq!(to_fixed_trimmed(0.5, 2), "0.5");
        assert_eq!(to_fixed_trimmed(0.25, 2), "0.25");
        assert_eq!(to_fixed_trimmed(0.0, 2), "0");
        assert_eq!(to_fixed_trimmed(0.999, 2), "1");
        assert_eq!(to_fixed_trimmed(12.0, 0), "12");
    }
}
