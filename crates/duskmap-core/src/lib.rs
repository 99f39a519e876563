//! Duskmap Core Library
//!
//! Dark-mode color transformation: role-aware tone curves, a global color
//! matrix filter and a memoization cache for the formatted results.

pub mod color;
pub mod math;
pub mod matrix;
pub mod models;
pub mod tone_map;

// Re-export commonly used types
pub use color::{parse_color, Hsla, ParseColorError, Rgba};
pub use models::{ColorRole, FilterConfig, FilterMode, ThemeEngine};
pub use tone_map::{
    clear_color_modification_cache, color_modification_stats, modify_background_color,
    modify_border_color, modify_color, modify_foreground_color, modify_gradient_color,
    modify_shadow_color, CacheStats, ColorModifier, ToneMap,
};
