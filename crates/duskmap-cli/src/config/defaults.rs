//! Default filter values loaded from the config file.

use duskmap_core::models::{FilterConfig, FilterMode};
use serde::{Deserialize, Serialize};

/// Filter values used when a command-line flag is not given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterDefaults {
    pub mode: FilterMode,
    pub brightness: f64,
    pub contrast: f64,
    pub grayscale: f64,
    pub sepia: f64,
}

impl FilterDefaults {
    /// Clamp every knob into the range the theme editor allows.
    pub(crate) fn sanitize(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();
        for (name, value, min, max) in [
            ("brightness", &mut self.brightness, 0.0, 200.0),
            ("contrast", &mut self.contrast, 0.0, 200.0),
            ("grayscale", &mut self.grayscale, 0.0, 100.0),
            ("sepia", &mut self.sepia, 0.0, 100.0),
        ] {
            if !value.is_finite() {
                warnings.push(format!("{} is not a number; using default", name));
                *value = match name {
                    "brightness" | "contrast" => 100.0,
                    _ => 0.0,
                };
            } else if *value < min || *value > max {
                let clamped = value.clamp(min, max);
                warnings.push(format!(
                    "{} {} out of range [{}, {}]; clamped to {}",
                    name, value, min, max, clamped
                ));
                *value = clamped;
            }
        }
        warnings
    }

    /// Filter configuration with these defaults applied
    pub fn to_filter_config(&self) -> FilterConfig {
        FilterConfig {
            mode: self.mode,
            brightness: self.brightness,
            contrast: self.contrast,
            grayscale: self.grayscale,
            sepia: self.sepia,
            ..FilterConfig::default()
        }
    }
}

impl Default for FilterDefaults {
    fn default() -> Self {
        Self {
            mode: FilterMode::Dark,
            brightness: 100.0,
            contrast: 100.0,
            grayscale: 0.0,
            sepia: 0.0,
        }
    }
}
