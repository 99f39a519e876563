//! HSL (Hue-Saturation-Lightness) color space conversions

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Rgba;
use crate::math::round_half_up;

/// HSL color representation with opacity
/// - H (hue): 0.0-360.0 degrees
/// - S (saturation): 0.0-1.0
/// - L (lightness): 0.0-1.0
/// - A (opacity): 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.1}, {:.1}%, {:.1}%, {})",
            self.h,
            self.s * 100.0,
            self.l * 100.0,
            self.a
        )
    }
}

/// Convert an 8-bit RGB color to HSL
///
/// Output: H is 0.0-360.0, S and L are 0.0-1.0, alpha is carried through.
/// Achromatic colors report a hue of 0.
#[inline]
pub fn rgb_to_hsl(rgb: Rgba) -> Hsla {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let chroma = max - min;

    let l = (max + min) / 2.0;

    if chroma == 0.0 {
        return Hsla::new(0.0, 0.0, l, rgb.a);
    }

    // `%` keeps the sign of the dividend, so the red sector can go negative
    let sector = if max == r {
        ((g - b) / chroma) % 6.0
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };
    let mut h = sector * 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    let s = chroma / (1.0 - (2.0 * l - 1.0).abs());

    Hsla::new(h, s, l, rgb.a)
}

/// Convert HSL back to an 8-bit RGB color
///
/// Channels are rounded to the nearest integer and saturate at 0 and 255,
/// so out-of-range lightness or saturation never wraps.
#[inline]
pub fn hsl_to_rgb(hsl: Hsla) -> Rgba {
    let Hsla { h, s, l, a } = hsl;

    if s == 0.0 {
        let v = to_channel(l);
        return Rgba::new(v, v, v, a);
    }

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgba::new(to_channel(r + m), to_channel(g + m), to_channel(b + m), a)
}

/// Scale a unit value to an 8-bit channel, rounding half up
#[inline]
fn to_channel(v: f64) -> u8 {
    // `as` saturates for floats, NaN becomes 0
    round_half_up(v * 255.0) as u8
}
