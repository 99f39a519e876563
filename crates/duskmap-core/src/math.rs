//! Scalar helpers shared by the color conversions and tone-map curves.

/// Linearly remap `x` from `[in_low, in_high]` onto `[out_low, out_high]`.
///
/// Values outside the input range extrapolate along the same line; pair
/// with [`clamp`] when a bounded result is needed. Reversed output ranges
/// are allowed and produce a falling segment.
#[inline]
pub fn scale(x: f64, in_low: f64, in_high: f64, out_low: f64, out_high: f64) -> f64 {
    (x - in_low) * (out_high - out_low) / (in_high - in_low) + out_low
}

/// Clamp `x` into `[min, max]`.
///
/// Unlike `f64::clamp` this never panics when `min > max`; the upper bound
/// wins in that case.
#[inline]
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    max.min(min.max(x))
}

/// Round with ties going towards positive infinity
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_maps_endpoints() {
        assert!((scale(0.0, 0.0, 1.0, 0.25, 0.4) - 0.25).abs() < 1e-12);
        assert!((scale(1.0, 0.0, 1.0, 0.25, 0.4) - 0.4).abs() < 1e-12);
        assert!((scale(0.5, 0.0, 1.0, 0.25, 0.4) - 0.325).abs() < 1e-12);
    }

    #[test]
    fn test_scale_reversed_range_falls() {
        let hi = scale(0.2, 0.0, 1.0, 0.4, 0.2);
        let lo = scale(0.8, 0.0, 1.0, 0.4, 0.2);
        assert!(hi > lo, "Reversed range should fall: {} vs {}", hi, lo);
    }

    #[test]
    fn test_scale_extrapolates() {
        // No clamping outside the input domain
        let value = scale(2.0, 0.0, 1.0, 0.0, 10.0);
        assert!((value - 20.0).abs() < 1e-12, "got {}", value);
        let value = scale(-1.0, 0.0, 1.0, 0.0, 10.0);
        assert!((value + 10.0).abs() < 1e-12, "got {}", value);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(0.05, 0.1, 0.25), 0.1);
        assert_eq!(clamp(0.3, 0.1, 0.25), 0.25);
        assert_eq!(clamp(0.2, 0.1, 0.25), 0.2);
        // Degenerate range: upper bound wins
        assert_eq!(clamp(0.5, 0.4, 0.3), 0.3);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(233.58), 234.0);
    }
}
