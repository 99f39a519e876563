//! FilterConfig builder functions.

use duskmap_core::models::FilterConfig;

use crate::config::FilterDefaults;
use crate::parsers::parse_mode;
use crate::types::FilterOverrides;

/// Build a FilterConfig from config defaults and command-line overrides
///
/// Overrides win over defaults. Values are passed through as given apart
/// from rejecting non-finite numbers.
pub fn build_filter_config(
    defaults: &FilterDefaults,
    overrides: &FilterOverrides,
) -> Result<FilterConfig, String> {
    let mut filter = defaults.to_filter_config();

    if let Some(mode) = &overrides.mode {
        filter.mode = parse_mode(mode)?;
    }

    for (name, value, target) in [
        ("brightness", overrides.brightness, &mut filter.brightness),
        ("contrast", overrides.contrast, &mut filter.contrast),
        ("grayscale", overrides.grayscale, &mut filter.grayscale),
        ("sepia", overrides.sepia, &mut filter.sepia),
    ] {
        if let Some(value) = value {
            if !value.is_finite() {
                return Err(format!("Invalid {} value: {}", name, value));
            }
            *target = value;
        }
    }

    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use duskmap_core::models::FilterMode;

    #[test]
    fn test_defaults_without_overrides() {
        let defaults = FilterDefaults {
            sepia: 15.0,
            ..FilterDefaults::default()
        };
        let filter = build_filter_config(&defaults, &FilterOverrides::default()).unwrap();
        assert_eq!(filter, defaults.to_filter_config());
    }

    #[test]
    fn test_overrides_win() {
        let defaults = FilterDefaults {
            sepia: 15.0,
            brightness: 120.0,
            ..FilterDefaults::default()
        };
        let overrides = FilterOverrides {
            mode: Some("light".to_string()),
            sepia: Some(0.0),
            contrast: Some(80.0),
            ..FilterOverrides::default()
        };
        let filter = build_filter_config(&defaults, &overrides).unwrap();
        assert_eq!(filter.mode, FilterMode::Light);
        assert_eq!(filter.sepia, 0.0);
        assert_eq!(filter.contrast, 80.0);
        assert_eq!(filter.brightness, 120.0, "untouched knobs keep the default");
    }

    #[test]
    fn test_invalid_overrides() {
        let defaults = FilterDefaults::default();
        let bad_mode = FilterOverrides {
            mode: Some("dusk".to_string()),
            ..FilterOverrides::default()
        };
        assert!(build_filter_config(&defaults, &bad_mode).is_err());

        let bad_value = FilterOverrides {
            grayscale: Some(f64::INFINITY),
            ..FilterOverrides::default()
        };
        let err = build_filter_config(&defaults, &bad_value).unwrap_err();
        assert!(err.contains("grayscale"));
    }
}
