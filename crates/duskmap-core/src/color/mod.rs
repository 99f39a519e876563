//! Color values, conversions and CSS string handling
//!
//! Provides the 8-bit [`Rgba`] and floating point [`Hsla`] representations,
//! RGB <-> HSL conversion, and formatting/parsing of CSS color strings.

mod format;
mod hsl;
mod parse;
mod rgb;

#[cfg(test)]
mod tests;

// Re-export primary types
pub use hsl::Hsla;
pub use rgb::Rgba;

// Re-export HSL functions
pub use hsl::{hsl_to_rgb, rgb_to_hsl};

// Re-export string handling
pub use format::{rgb_to_hex_string, rgb_to_string};
pub use parse::{parse_color, ParseColorError};
