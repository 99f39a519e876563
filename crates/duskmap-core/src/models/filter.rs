//! Filter configuration shared by every color modification call.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Rendering mode selected by the user
///
/// Serializes as `"light"`/`"dark"`; deserializes from those names or from
/// the numeric form (`0`/`1`) theme objects carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Light rendering, colors keep their original polarity
    Light,

    /// Dark rendering, page colors are remapped onto a dark palette
    #[default]
    Dark,
}

impl FilterMode {
    /// Numeric form used in cache keys (light = 0, dark = 1)
    pub fn as_number(&self) -> u8 {
        match self {
            Self::Light => 0,
            Self::Dark => 1,
        }
    }
}

impl std::str::FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "0" | "light" => Ok(Self::Light),
            "1" | "dark" => Ok(Self::Dark),
            _ => Err(format!("Unknown filter mode: {} (expected light or dark)", s)),
        }
    }
}

impl<'de> Deserialize<'de> for FilterMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ModeVisitor;

        impl<'de> Visitor<'de> for ModeVisitor {
            type Value = FilterMode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("0, 1, \"light\" or \"dark\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<FilterMode, E> {
                match v {
                    0 => Ok(FilterMode::Light),
                    1 => Ok(FilterMode::Dark),
                    _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
                }
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<FilterMode, E> {
                match u64::try_from(v) {
                    Ok(v) => self.visit_u64(v),
                    Err(_) => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
                }
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<FilterMode, E> {
                if v == 0.0 {
                    Ok(FilterMode::Light)
                } else if v == 1.0 {
                    Ok(FilterMode::Dark)
                } else {
                    Err(E::invalid_value(de::Unexpected::Float(v), &self))
                }
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<FilterMode, E> {
                match v {
                    "light" => Ok(FilterMode::Light),
                    "dark" => Ok(FilterMode::Dark),
                    _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
                }
            }
        }

        deserializer.deserialize_any(ModeVisitor)
    }
}

/// Theme generation engine chosen for a site
///
/// Carried on the filter so callers can pass the whole theme object through;
/// it never affects color modification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ThemeEngine {
    CssFilter,
    SvgFilter,
    StaticTheme,
    #[default]
    DynamicTheme,
}

/// Global filter settings
///
/// Only `mode`, `brightness`, `contrast`, `grayscale` and `sepia` take part
/// in color modification; brightness and contrast are percentages where 100
/// is neutral, grayscale and sepia are percentages where 0 is neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
    pub mode: FilterMode,
    pub brightness: f64,
    pub contrast: f64,
    pub grayscale: f64,
    pub sepia: f64,
    pub use_font: bool,
    pub font_family: String,
    pub text_stroke: f64,
    pub engine: ThemeEngine,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            mode: FilterMode::Dark,
            brightness: 100.0,
            contrast: 100.0,
            grayscale: 0.0,
            sepia: 0.0,
            use_font: false,
            font_family: String::new(),
            text_stroke: 0.0,
            engine: ThemeEngine::DynamicTheme,
        }
    }
}

impl FilterConfig {
    /// Dark mode with neutral brightness/contrast and no sepia or grayscale
    pub fn dark() -> Self {
        Self::default()
    }

    /// Light mode with neutral brightness/contrast and no sepia or grayscale
    pub fn light() -> Self {
        Self {
            mode: FilterMode::Light,
            ..Self::default()
        }
    }

    pub fn is_dark(&self) -> bool {
        self.mode == FilterMode::Dark
    }
}
