//! Tone curve selection
//!
//! Maps a color role and filter mode onto the curve that handles it. The
//! [`ToneMap`] tag doubles as the outer cache key, so every curve owns a
//! separate slice of the cache.

use crate::color::Hsla;
use crate::models::{ColorRole, FilterMode};

use super::curves::{
    modify_bg_hsl, modify_border_hsl, modify_fg_hsl, modify_light_mode_hsl, ToneMapped,
};

/// Identifies one tone curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToneMap {
    /// Light mode curve, used for every role when the filter is in light mode
    LightMode,

    /// Dark backgrounds, shadows and gradients
    Background,

    /// Dark mode text
    Foreground,

    /// Dark mode borders
    Border,
}

impl ToneMap {
    pub const ALL: [ToneMap; 4] = [
        Self::LightMode,
        Self::Background,
        Self::Foreground,
        Self::Border,
    ];

    /// Select the curve for a role
    ///
    /// Light mode overrides the role: every role uses [`ToneMap::LightMode`].
    /// Shadows and gradients share the background curve.
    pub fn for_role(role: ColorRole, mode: FilterMode) -> Self {
        if mode == FilterMode::Light {
            return Self::LightMode;
        }
        match role {
            ColorRole::Background | ColorRole::Shadow | ColorRole::Gradient => Self::Background,
            ColorRole::Foreground => Self::Foreground,
            ColorRole::Border => Self::Border,
        }
    }

    /// Run the curve on a color
    pub fn apply(self, hsl: Hsla) -> ToneMapped {
        match self {
            Self::LightMode => modify_light_mode_hsl(hsl),
            Self::Background => modify_bg_hsl(hsl),
            Self::Foreground => modify_fg_hsl(hsl),
            Self::Border => modify_border_hsl(hsl),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LightMode => "light-mode",
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Border => "border",
        }
    }
}

impl std::fmt::Display for ToneMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
