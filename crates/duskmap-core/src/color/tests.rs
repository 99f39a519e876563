//! Tests for color conversion and string handling

use super::*;

#[test]
fn test_rgb_hsl_roundtrip() {
    let test_cases = [
        Rgba::rgb(255, 0, 0),     // Red
        Rgba::rgb(0, 255, 0),     // Green
        Rgba::rgb(0, 0, 255),     // Blue
        Rgba::rgb(255, 255, 255), // White
        Rgba::rgb(0, 0, 0),       // Black
        Rgba::rgb(128, 128, 128), // Gray
        Rgba::rgb(255, 128, 0),   // Orange
        Rgba::rgb(128, 0, 128),   // Purple
        Rgba::rgb(24, 26, 27),    // Near-black page background
        Rgba::rgb(51, 102, 204),  // Link blue
    ];

    for rgb in test_cases {
        let hsl = rgb_to_hsl(rgb);
        let back = hsl_to_rgb(hsl);
        assert_eq!(back, rgb, "Roundtrip mismatch for {:?} via {:?}", rgb, hsl);
    }
}

#[test]
fn test_hsl_values() {
    // Red should be H=0, S=1, L=0.5
    let hsl = rgb_to_hsl(Rgba::rgb(255, 0, 0));
    assert!((hsl.h - 0.0).abs() < 1e-9);
    assert!((hsl.s - 1.0).abs() < 1e-9);
    assert!((hsl.l - 0.5).abs() < 1e-9);

    // Green should be H=120, S=1, L=0.5
    let hsl = rgb_to_hsl(Rgba::rgb(0, 255, 0));
    assert!((hsl.h - 120.0).abs() < 1e-9);
    assert!((hsl.s - 1.0).abs() < 1e-9);

    // Blue should be H=240, S=1, L=0.5
    let hsl = rgb_to_hsl(Rgba::rgb(0, 0, 255));
    assert!((hsl.h - 240.0).abs() < 1e-9);
    assert!((hsl.s - 1.0).abs() < 1e-9);

    // Magenta-ish red wraps into the upper hue range instead of going negative
    let hsl = rgb_to_hsl(Rgba::rgb(255, 0, 128));
    assert!(hsl.h > 300.0 && hsl.h < 360.0, "got hue {}", hsl.h);
}

#[test]
fn test_achromatic_has_zero_hue_and_saturation() {
    for v in [0u8, 64, 128, 200, 255] {
        let hsl = rgb_to_hsl(Rgba::rgb(v, v, v));
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
        assert!((hsl.l - v as f64 / 255.0).abs() < 1e-12);
    }
}

#[test]
fn test_alpha_is_carried_through() {
    let hsl = rgb_to_hsl(Rgba::new(10, 20, 30, 0.25));
    assert_eq!(hsl.a, 0.25);
    assert_eq!(hsl_to_rgb(hsl).a, 0.25);
}

#[test]
fn test_hsl_to_rgb_saturates_out_of_range() {
    let rgb = hsl_to_rgb(Hsla::new(0.0, 0.0, 1.4, 1.0));
    assert_eq!(rgb.channels(), [255, 255, 255]);
    let rgb = hsl_to_rgb(Hsla::new(0.0, 0.0, -0.2, 1.0));
    assert_eq!(rgb.channels(), [0, 0, 0]);
}

// ========================================================================
// Parsing
// ========================================================================

#[test]
fn test_parse_hex_forms() {
    assert_eq!(parse_color("#fff").unwrap(), Rgba::WHITE);
    assert_eq!(parse_color("#FF8000").unwrap(), Rgba::rgb(255, 128, 0));
    assert_eq!(parse_color("  #000000 ").unwrap(), Rgba::BLACK);

    let translucent = parse_color("#ff000080").unwrap();
    assert_eq!(translucent.channels(), [255, 0, 0]);
    assert!((translucent.a - 128.0 / 255.0).abs() < 1e-12);

    let short = parse_color("#f008").unwrap();
    assert_eq!(short.channels(), [255, 0, 0]);
    assert!((short.a - 136.0 / 255.0).abs() < 1e-12);
}

#[test]
fn test_parse_rgb_functions() {
    assert_eq!(
        parse_color("rgb(12, 34, 56)").unwrap(),
        Rgba::rgb(12, 34, 56)
    );
    assert_eq!(
        parse_color("rgba(12, 34, 56, 0.5)").unwrap(),
        Rgba::new(12, 34, 56, 0.5)
    );
    assert_eq!(
        parse_color("rgb(12 34 56 / 50%)").unwrap(),
        Rgba::new(12, 34, 56, 0.5)
    );
    assert_eq!(
        parse_color("rgb(100%, 0%, 50%)").unwrap(),
        Rgba::rgb(255, 0, 128)
    );
}

#[test]
fn test_parse_hsl_functions() {
    assert_eq!(parse_color("hsl(0, 100%, 50%)").unwrap(), Rgba::rgb(255, 0, 0));
    assert_eq!(
        parse_color("hsl(240deg 100% 50%)").unwrap(),
        Rgba::rgb(0, 0, 255)
    );
    assert_eq!(
        parse_color("hsla(480, 100%, 50%, 0.3)").unwrap(),
        Rgba::new(0, 255, 0, 0.3)
    );
}

#[test]
fn test_parse_keywords() {
    assert_eq!(parse_color("transparent").unwrap(), Rgba::TRANSPARENT);
    assert_eq!(parse_color("White").unwrap(), Rgba::WHITE);
    assert_eq!(parse_color("navy").unwrap(), Rgba::rgb(0, 0, 128));
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse_color("   "), Err(ParseColorError::Empty));
    assert!(matches!(
        parse_color("#12345"),
        Err(ParseColorError::InvalidHex(_))
    ));
    assert!(matches!(
        parse_color("#gggggg"),
        Err(ParseColorError::InvalidHex(_))
    ));
    assert!(matches!(
        parse_color("rgb(1, 2)"),
        Err(ParseColorError::InvalidFunction { found: 2, .. })
    ));
    assert!(matches!(
        parse_color("rgb(1, x, 2)"),
        Err(ParseColorError::InvalidComponent(_))
    ));
    assert!(matches!(
        parse_color("lab(50 20 30)"),
        Err(ParseColorError::UnknownFormat(_))
    ));
    assert!(matches!(
        parse_color("rebeccapurple"),
        Err(ParseColorError::UnknownFormat(_))
    ));
}

#[test]
fn test_display_uses_css_format() {
    assert_eq!(Rgba::rgb(1, 2, 3).to_string(), "rgb(1, 2, 3)");
    assert_eq!(Rgba::new(1, 2, 3, 0.5).to_string(), "rgba(1, 2, 3, 0.5)");
}
