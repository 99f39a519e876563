//! Color matrix filters
//!
//! 5x5 matrices operating on `[r, g, b, a, 1]` column vectors, composed from
//! the global filter knobs (sepia, grayscale, contrast, brightness and the
//! dark-mode inversion).

use crate::math::{clamp, round_half_up};
use crate::models::{FilterConfig, FilterMode};

/// Row-major 5x5 color matrix
pub type Matrix5 = [[f64; 5]; 5];

pub fn identity() -> Matrix5 {
    [
        [1.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ]
}

/// Invert lightness while keeping hue
pub fn invert_n_hue() -> Matrix5 {
    [
        [0.333, -0.667, -0.667, 0.0, 1.0],
        [-0.667, 0.333, -0.667, 0.0, 1.0],
        [-0.667, -0.667, 0.333, 0.0, 1.0],
        [0.0, 0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ]
}

/// Multiply every channel by `v` (1.0 = unchanged)
pub fn brightness(v: f64) -> Matrix5 {
    [
        [v, 0.0, 0.0, 0.0, 0.0],
        [0.0, v, 0.0, 0.0, 0.0],
        [0.0, 0.0, v, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ]
}

/// Scale channels around mid gray (1.0 = unchanged)
pub fn contrast(v: f64) -> Matrix5 {
    let t = (1.0 - v) / 2.0;
    [
        [v, 0.0, 0.0, 0.0, t],
        [0.0, v, 0.0, 0.0, t],
        [0.0, 0.0, v, 0.0, t],
        [0.0, 0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ]
}

/// Blend towards the classic sepia tone (0.0 = none, 1.0 = full)
pub fn sepia(v: f64) -> Matrix5 {
    let k = 1.0 - v;
    [
        [0.393 + 0.607 * k, 0.769 - 0.769 * k, 0.189 - 0.189 * k, 0.0, 0.0],
        [0.349 - 0.349 * k, 0.686 + 0.314 * k, 0.168 - 0.168 * k, 0.0, 0.0],
        [0.272 - 0.272 * k, 0.534 - 0.534 * k, 0.131 + 0.869 * k, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ]
}

/// Blend towards Rec.709 luma (0.0 = none, 1.0 = full)
pub fn grayscale(v: f64) -> Matrix5 {
    let k = 1.0 - v;
    [
        [0.2126 + 0.7874 * k, 0.7152 - 0.7152 * k, 0.0722 - 0.0722 * k, 0.0, 0.0],
        [0.2126 - 0.2126 * k, 0.7152 + 0.2848 * k, 0.0722 - 0.0722 * k, 0.0, 0.0],
        [0.2126 - 0.2126 * k, 0.7152 - 0.7152 * k, 0.0722 + 0.9278 * k, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 0.0, 1.0],
    ]
}

pub fn multiply(a: &Matrix5, b: &Matrix5) -> Matrix5 {
    let mut out = [[0.0; 5]; 5];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = (0..5).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    out
}

/// Compose the filter matrix for a configuration
///
/// Order: sepia, grayscale, contrast, brightness, then inversion for dark
/// mode. Knobs at their neutral value are skipped.
pub fn create_filter_matrix(config: &FilterConfig) -> Matrix5 {
    let mut m = identity();
    if config.sepia != 0.0 {
        m = multiply(&m, &sepia(config.sepia / 100.0));
    }
    if config.grayscale != 0.0 {
        m = multiply(&m, &grayscale(config.grayscale / 100.0));
    }
    if config.contrast != 100.0 {
        m = multiply(&m, &contrast(config.contrast / 100.0));
    }
    if config.brightness != 100.0 {
        m = multiply(&m, &brightness(config.brightness / 100.0));
    }
    if config.mode == FilterMode::Dark {
        m = multiply(&m, &invert_n_hue());
    }
    m
}

/// Apply a color matrix to an 8-bit RGB triple
///
/// Results are rounded and clamped back into 0-255.
pub fn apply_color_matrix([r, g, b]: [u8; 3], matrix: &Matrix5) -> [u8; 3] {
    let input = [r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, 1.0, 1.0];
    let mut out = [0u8; 3];
    for (channel, row) in out.iter_mut().zip(matrix.iter()) {
        let value: f64 = row.iter().zip(input.iter()).map(|(m, v)| m * v).sum();
        *channel = clamp(round_half_up(value * 255.0), 0.0, 255.0) as u8;
    }
    out
}
