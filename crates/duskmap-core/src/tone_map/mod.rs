//! Role-aware tone mapping with memoization
//!
//! Colors are converted to HSL, pushed through the tone curve for their role,
//! filtered through the global color matrix and formatted back into a CSS
//! string. Results are cached per curve, so repeated colors
//! on a page cost one hash lookup.

mod apply;
mod cache;
mod curves;
mod modify;


// Re-export public API
pub use apply::ToneMap;
pub use cache::{CacheStats, ModificationCache};
pub use curves::{
    modify_bg_hsl, modify_border_hsl, modify_fg_hsl, modify_light_mode_hsl, ToneMapped,
};
pub use modify::{
    cache_key, clear_color_modification_cache, color_modification_stats, default_modifier,
    modify_background_color, modify_border_color, modify_color, modify_color_with_cache,
    modify_foreground_color, modify_gradient_color, modify_shadow_color, ColorModifier,
};
