//! CSS color string parsing
//!
//! Accepts the forms that show up in page styles: hex (`#rgb`, `#rgba`,
//! `#rrggbb`, `#rrggbbaa`), `rgb()`/`rgba()`, `hsl()`/`hsla()`, the
//! `transparent` keyword and the CSS basic named colors.

use thiserror::Error;

use super::{hsl_to_rgb, Hsla, Rgba};
use crate::math::clamp;

/// Reasons a color string could not be understood
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
    #[error("{name}() expects {expected} components, got {found}")]
    InvalidFunction {
        name: String,
        expected: &'static str,
        found: usize,
    },
    #[error("invalid color component: {0}")]
    InvalidComponent(String),
    #[error("unknown color format: {0}")]
    UnknownFormat(String),
}

/// CSS level 1 basic colors
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("silver", [192, 192, 192]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("white", [255, 255, 255]),
    ("maroon", [128, 0, 0]),
    ("red", [255, 0, 0]),
    ("purple", [128, 0, 128]),
    ("fuchsia", [255, 0, 255]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("olive", [128, 128, 0]),
    ("yellow", [255, 255, 0]),
    ("navy", [0, 0, 128]),
    ("blue", [0, 0, 255]),
    ("teal", [0, 128, 128]),
    ("aqua", [0, 255, 255]),
    ("orange", [255, 165, 0]),
];

/// Parse a CSS color string into [`Rgba`]
pub fn parse_color(input: &str) -> Result<Rgba, ParseColorError> {
    let value = input.trim().to_ascii_lowercase();
    if value.is_empty() {
        return Err(ParseColorError::Empty);
    }

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    if let Some((name, args)) = split_function(&value) {
        return match name {
            "rgb" | "rgba" => parse_rgb_function(name, args),
            "hsl" | "hsla" => parse_hsl_function(name, args),
            _ => Err(ParseColorError::UnknownFormat(input.to_string())),
        };
    }

    if value == "transparent" {
        return Ok(Rgba::TRANSPARENT);
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, rgb)| Rgba::from(*rgb))
        .ok_or_else(|| ParseColorError::UnknownFormat(input.to_string()))
}

/// Split `name(args)` into its parts
fn split_function(value: &str) -> Option<(&str, &str)> {
    let open = value.find('(')?;
    let inner = value[open + 1..].strip_suffix(')')?;
    Some((value[..open].trim(), inner))
}

fn parse_hex(hex: &str) -> Result<Rgba, ParseColorError> {
    let invalid = || ParseColorError::InvalidHex(format!("#{}", hex));
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let digits: Vec<u8> = match hex.len() {
        // Short forms double each nibble
        3 | 4 => hex
            .chars()
            .map(|c| {
                let v = c.to_digit(16).unwrap_or(0) as u8;
                v * 16 + v
            })
            .collect(),
        6 | 8 => (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
            .collect::<Result<_, _>>()
            .map_err(|_| invalid())?,
        _ => return Err(invalid()),
    };

    let a = digits.get(3).map_or(1.0, |&a| a as f64 / 255.0);
    Ok(Rgba::new(digits[0], digits[1], digits[2], a))
}

/// Split function arguments on commas, whitespace and the `/` alpha separator
fn split_args(args: &str) -> Vec<&str> {
    args.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect()
}

fn check_arity<'a>(name: &str, args: &'a str) -> Result<Vec<&'a str>, ParseColorError> {
    let parts = split_args(args);
    if parts.len() == 3 || parts.len() == 4 {
        Ok(parts)
    } else {
        Err(ParseColorError::InvalidFunction {
            name: name.to_string(),
            expected: "3 or 4",
            found: parts.len(),
        })
    }
}

fn parse_rgb_function(name: &str, args: &str) -> Result<Rgba, ParseColorError> {
    let parts = check_arity(name, args)?;

    let mut channels = [0u8; 3];
    for (channel, part) in channels.iter_mut().zip(&parts) {
        let value = parse_number_or_percent(part, 255.0)?;
        *channel = clamp(value, 0.0, 255.0).round() as u8;
    }
    let a = parse_alpha(parts.get(3).copied())?;

    Ok(Rgba::new(channels[0], channels[1], channels[2], a))
}

fn parse_hsl_function(name: &str, args: &str) -> Result<Rgba, ParseColorError> {
    let parts = check_arity(name, args)?;

    let h = parse_hue(parts[0])?;
    let s = clamp(parse_number_or_percent(parts[1], 1.0)?, 0.0, 1.0);
    let l = clamp(parse_number_or_percent(parts[2], 1.0)?, 0.0, 1.0);
    let a = parse_alpha(parts.get(3).copied())?;

    Ok(hsl_to_rgb(Hsla::new(h, s, l, a)))
}

/// Parse a plain number, or a percentage of `full`
fn parse_number_or_percent(part: &str, full: f64) -> Result<f64, ParseColorError> {
    let invalid = || ParseColorError::InvalidComponent(part.to_string());
    match part.strip_suffix('%') {
        Some(percent) => percent
            .parse::<f64>()
            .map(|v| v / 100.0 * full)
            .map_err(|_| invalid()),
        None => part.parse::<f64>().map_err(|_| invalid()),
    }
}

/// Hue in degrees, wrapped into `[0, 360)`
fn parse_hue(part: &str) -> Result<f64, ParseColorError> {
    let degrees = part
        .strip_suffix("deg")
        .unwrap_or(part)
        .parse::<f64>()
        .map_err(|_| ParseColorError::InvalidComponent(part.to_string()))?;
    Ok(degrees.rem_euclid(360.0))
}

fn parse_alpha(part: Option<&str>) -> Result<f64, ParseColorError> {
    match part {
        Some(part) => Ok(clamp(parse_number_or_percent(part, 1.0)?, 0.0, 1.0)),
        None => Ok(1.0),
    }
}
