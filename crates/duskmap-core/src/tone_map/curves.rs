//! Role-specific HSL tone curves
//!
//! Each curve remaps lightness into the range suited to its role and decides
//! whether the input is close enough to gray to be "neutral". Neutral colors
//! get a synthetic hue/saturation so grays come out as a soft tint instead of
//! a flat gray.

use crate::color::Hsla;
use crate::math::{clamp, scale};

/// Output of a tone curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneMapped {
    pub hsla: Hsla,
    /// True when the curve substituted its own hue/saturation (or, for
    /// borders, always)
    pub is_neutral: bool,
}

impl ToneMapped {
    fn new(h: f64, s: f64, l: f64, a: f64, is_neutral: bool) -> Self {
        Self {
            hsla: Hsla::new(h, s, l, a),
            is_neutral,
        }
    }
}

/// Light mode curve, shared by every role
///
/// Compresses lightness into `[0, 0.9]`. Neutral colors get a cool tint in
/// the shadows and a warm one in the highlights, strongest at the extremes.
pub fn modify_light_mode_hsl(hsl: Hsla) -> ToneMapped {
    const L_MIN: f64 = 0.0;
    const L_MID: f64 = 0.4;
    const L_MAX: f64 = 0.9;
    const S_NEUTRAL_LIM: f64 = 0.36;
    const S_COLORED: f64 = 0.16;
    const H_COLORED_L0: f64 = 220.0;
    const H_COLORED_L1: f64 = 40.0;

    let Hsla { h, s, l, a } = hsl;

    let lx = scale(l, 0.0, 1.0, L_MIN, L_MAX);

    let is_neutral = s < S_NEUTRAL_LIM;
    let (hx, sx) = if is_neutral {
        if l < L_MID {
            (H_COLORED_L0, scale(l, 0.0, L_MID, S_COLORED, 0.0))
        } else {
            (H_COLORED_L1, scale(l, L_MID, 1.0, 0.0, S_COLORED))
        }
    } else {
        (h, s)
    };

    ToneMapped::new(hx, sx, lx, a, is_neutral)
}

/// Dark mode background curve
///
/// Dark inputs keep their lightness up to a ceiling that rises with
/// saturation; mid tones sit on the ceiling and light inputs fold back down
/// towards `L_MIN`.
pub fn modify_bg_hsl(hsl: Hsla) -> ToneMapped {
    const L_MIN: f64 = 0.1;
    const L_MAX_S0: f64 = 0.25;
    const L_MAX_S1: f64 = 0.4;
    const S_NEUTRAL_LIM_L0: f64 = 0.24;
    const S_NEUTRAL_LIM_L1: f64 = 0.12;
    const S_COLORED_L0: f64 = 0.08;
    const S_COLORED_L1: f64 = 0.24;
    const H_COLORED_L0: f64 = 225.0;
    const H_COLORED_L1: f64 = 215.0;

    let Hsla { h, s, l, a } = hsl;

    let l_max = scale(s, 0.0, 1.0, L_MAX_S0, L_MAX_S1);
    let lx = if l < l_max {
        l
    } else if l < 0.5 {
        l_max
    } else {
        scale(l, 0.5, 1.0, l_max, L_MIN)
    };

    let lc = clamp(lx, L_MIN, l_max);
    let s_neutral_lim = scale(lc, L_MIN, l_max, S_NEUTRAL_LIM_L0, S_NEUTRAL_LIM_L1);
    let is_neutral = s < s_neutral_lim;
    let (hx, sx) = if is_neutral {
        (
            scale(lc, L_MIN, l_max, H_COLORED_L0, H_COLORED_L1),
            scale(lc, L_MIN, l_max, S_COLORED_L0, S_COLORED_L1),
        )
    } else {
        (h, s)
    };

    ToneMapped::new(hx, sx, lx, a, is_neutral)
}

/// Dark mode foreground (text) curve
///
/// Dark inputs are lifted into `[l_min, 0.9]`, lighter ones are floored at
/// `l_min`. Hues in the blue band `(205, 245]` are pulled towards 220.
pub fn modify_fg_hsl(hsl: Hsla) -> ToneMapped {
    const L_MAX: f64 = 0.9;
    const L_MIN_S0: f64 = 0.7;
    const L_MIN_S1: f64 = 0.6;
    const S_NEUTRAL_LIM_L0: f64 = 0.12;
    const S_NEUTRAL_LIM_L1: f64 = 0.36;
    const S_COLORED: f64 = 0.08;
    const H_COLORED_L0: f64 = 35.0;
    const H_COLORED_L1: f64 = 45.0;
    const H_BLUE0: f64 = 205.0;
    const H_BLUE1: f64 = 245.0;
    const H_BLUE_MAX: f64 = 220.0;
    const L_BLUE_MIN: f64 = 0.7;

    let Hsla { h, s, l, a } = hsl;

    let is_blue = h > H_BLUE0 && h <= H_BLUE1;

    let l_min_s0 = if is_blue {
        scale(h, H_BLUE0, H_BLUE1, L_MIN_S0, L_BLUE_MIN)
    } else {
        L_MIN_S0
    };
    let l_min = scale(s, 0.0, 1.0, l_min_s0, L_MIN_S1);
    let lx = if l < 0.5 {
        scale(l, 0.0, 0.5, L_MAX, l_min)
    } else if l < l_min {
        l_min
    } else {
        l
    };

    let mut hx = h;
    let mut sx = s;
    if is_blue {
        hx = scale(hx, H_BLUE0, H_BLUE1, H_BLUE0, H_BLUE_MAX);
    }

    let lc = clamp(lx, l_min, L_MAX);
    let s_neutral_lim = scale(lc, l_min, L_MAX, S_NEUTRAL_LIM_L0, S_NEUTRAL_LIM_L1);
    let is_neutral = s < s_neutral_lim;
    if is_neutral {
        sx = S_COLORED;
        hx = scale(lc, l_min, L_MAX, H_COLORED_L0, H_COLORED_L1);
    }

    ToneMapped::new(hx, sx, lx, a, is_neutral)
}

/// Dark mode border curve
///
/// Inverts lightness into a narrow band whose bounds rise with saturation.
/// Hue and saturation pass through; the result always counts as neutral.
pub fn modify_border_hsl(hsl: Hsla) -> ToneMapped {
    const L_MIN_S0: f64 = 0.2;
    const L_MIN_S1: f64 = 0.3;
    const L_MAX_S0: f64 = 0.4;
    const L_MAX_S1: f64 = 0.5;

    let Hsla { h, s, l, a } = hsl;

    let l_min = scale(s, 0.0, 1.0, L_MIN_S0, L_MIN_S1);
    let l_max = scale(s, 0.0, 1.0, L_MAX_S0, L_MAX_S1);
    let lx = scale(l, 0.0, 1.0, l_max, l_min);

    ToneMapped::new(h, s, lx, a, true)
}
