//! Color modification pipeline
//!
//! `rgb -> hsl -> tone curve -> rgb -> filter matrix -> css string`, memoized
//! per curve in a [`ModificationCache`].

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;

use crate::color::{hsl_to_rgb, rgb_to_hex_string, rgb_to_hsl, rgb_to_string, Hsla, Rgba};
use crate::matrix::{apply_color_matrix, create_filter_matrix};
use crate::models::{ColorRole, FilterConfig, FilterMode};

use super::cache::{CacheStats, ModificationCache};
use super::curves::ToneMapped;
use super::ToneMap;

/// Build the cache key for a color under a filter
///
/// Only the color channels and the filter fields that change the maths take
/// part, in a fixed order.
pub fn cache_key(rgb: &Rgba, filter: &FilterConfig) -> String {
    format!(
        "r:{};g:{};b:{};a:{};mode:{};brightness:{};contrast:{};grayscale:{};sepia:{}",
        rgb.r,
        rgb.g,
        rgb.b,
        rgb.a,
        filter.mode.as_number(),
        filter.brightness,
        filter.contrast,
        filter.grayscale,
        filter.sepia,
    )
}

/// Run the uncached pipeline with an arbitrary tone curve
fn modify_color_uncached<F>(rgb: Rgba, filter: &FilterConfig, modify_hsl: F) -> String
where
    F: FnOnce(Hsla) -> ToneMapped,
{
    let hsl = rgb_to_hsl(rgb);
    let modified = modify_hsl(hsl);
    let Rgba { r, g, b, a } = hsl_to_rgb(modified.hsla);

    // The curve already handled the dark-mode remap, so the matrix never inverts.
    // Colors that kept their own hue only get a third of the sepia/grayscale.
    let mut matrix_config = FilterConfig {
        mode: FilterMode::Light,
        ..filter.clone()
    };
    if !modified.is_neutral {
        matrix_config.sepia = filter.sepia / 3.0;
        matrix_config.grayscale = filter.grayscale / 3.0;
    }
    let matrix = create_filter_matrix(&matrix_config);
    let [rf, gf, bf] = apply_color_matrix([r, g, b], &matrix);

    if a == 1.0 {
        rgb_to_hex_string(Rgba::rgb(rf, gf, bf))
    } else {
        rgb_to_string(Rgba::new(rf, gf, bf, a))
    }
}

/// Owns a modification cache and exposes the per-role entry points
///
/// Safe to share across threads. Hits only take the read lock, so they run
/// in parallel. A miss is rechecked, computed and stored under the write
/// lock, so a key is never computed twice.
#[derive(Debug, Default)]
pub struct ColorModifier {
    cache: RwLock<ModificationCache>,
}

impl ColorModifier {
    pub fn new() -> Self {
        Self::default()
    }

    // Entries are plain strings, so a poisoned lock is still usable
    fn read(&self) -> RwLockReadGuard<'_, ModificationCache> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ModificationCache> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Modify a color through the curve selected by `tone_map`
    pub fn modify_color_with_cache(
        &self,
        rgb: Rgba,
        filter: &FilterConfig,
        tone_map: ToneMap,
    ) -> String {
        self.modify_with(rgb, filter, tone_map, |hsl| tone_map.apply(hsl))
    }

    /// Cached pipeline with an explicit curve function stored under `tone_map`
    pub(crate) fn modify_with<F>(
        &self,
        rgb: Rgba,
        filter: &FilterConfig,
        tone_map: ToneMap,
        modify_hsl: F,
    ) -> String
    where
        F: FnOnce(Hsla) -> ToneMapped,
    {
        let key = cache_key(&rgb, filter);
        if let Some(color) = self.read().lookup_hit(tone_map, &key) {
            return color;
        }

        let mut cache = self.write();
        // Another caller may have filled the entry while we waited
        if let Some(color) = cache.lookup(tone_map, &key) {
            return color;
        }

        log::trace!("color cache miss [{}] {}", tone_map, key);
        let color = modify_color_uncached(rgb, filter, modify_hsl);
        cache.store(tone_map, key, color.clone());
        color
    }

    /// Modify a color for any role
    pub fn modify_color(&self, rgb: Rgba, filter: &FilterConfig, role: ColorRole) -> String {
        self.modify_color_with_cache(rgb, filter, ToneMap::for_role(role, filter.mode))
    }

    pub fn modify_background_color(&self, rgb: Rgba, filter: &FilterConfig) -> String {
        self.modify_color(rgb, filter, ColorRole::Background)
    }

    pub fn modify_foreground_color(&self, rgb: Rgba, filter: &FilterConfig) -> String {
        self.modify_color(rgb, filter, ColorRole::Foreground)
    }

    pub fn modify_border_color(&self, rgb: Rgba, filter: &FilterConfig) -> String {
        self.modify_color(rgb, filter, ColorRole::Border)
    }

    pub fn modify_shadow_color(&self, rgb: Rgba, filter: &FilterConfig) -> String {
        self.modify_background_color(rgb, filter)
    }

    pub fn modify_gradient_color(&self, rgb: Rgba, filter: &FilterConfig) -> String {
        self.modify_background_color(rgb, filter)
    }

    /// Forget every cached color
    pub fn clear(&self) {
        let mut cache = self.write();
        log::debug!("clearing color modification cache ({} entries)", cache.len());
        cache.clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.read().stats()
    }

    /// Number of cached colors for one curve
    pub fn cached_len(&self, tone_map: ToneMap) -> usize {
        self.read().len_for(tone_map)
    }
}

static DEFAULT_MODIFIER: Lazy<ColorModifier> = Lazy::new(ColorModifier::new);

/// Process-wide modifier backing the free functions below
pub fn default_modifier() -> &'static ColorModifier {
    &DEFAULT_MODIFIER
}

pub fn modify_color_with_cache(rgb: Rgba, filter: &FilterConfig, tone_map: ToneMap) -> String {
    DEFAULT_MODIFIER.modify_color_with_cache(rgb, filter, tone_map)
}

pub fn modify_color(rgb: Rgba, filter: &FilterConfig, role: ColorRole) -> String {
    DEFAULT_MODIFIER.modify_color(rgb, filter, role)
}

pub fn modify_background_color(rgb: Rgba, filter: &FilterConfig) -> String {
    DEFAULT_MODIFIER.modify_background_color(rgb, filter)
}

pub fn modify_foreground_color(rgb: Rgba, filter: &FilterConfig) -> String {
    DEFAULT_MODIFIER.modify_foreground_color(rgb, filter)
}

pub fn modify_border_color(rgb: Rgba, filter: &FilterConfig) -> String {
    DEFAULT_MODIFIER.modify_border_color(rgb, filter)
}

pub fn modify_shadow_color(rgb: Rgba, filter: &FilterConfig) -> String {
    DEFAULT_MODIFIER.modify_shadow_color(rgb, filter)
}

pub fn modify_gradient_color(rgb: Rgba, filter: &FilterConfig) -> String {
    DEFAULT_MODIFIER.modify_gradient_color(rgb, filter)
}

/// Clear the process-wide cache
pub fn clear_color_modification_cache() {
    DEFAULT_MODIFIER.clear();
}

/// Usage counters of the process-wide cache
pub fn color_modification_stats() -> CacheStats {
    DEFAULT_MODIFIER.stats()
}
