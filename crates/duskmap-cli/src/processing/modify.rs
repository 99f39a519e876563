//! Color modification over lists of inputs.

use rayon::prelude::*;

use duskmap_core::models::{ColorRole, FilterConfig};
use duskmap_core::ColorModifier;

use crate::parsers::parse_color_arg;
use crate::types::{ModifiedColor, PaletteEntry};
use crate::verbose_println;

/// Modify every color for one role, in parallel
///
/// Results keep the input order. Colors that fail to parse yield an error
/// entry instead of aborting the whole list.
pub fn modify_colors(
    modifier: &ColorModifier,
    colors: &[String],
    filter: &FilterConfig,
    role: ColorRole,
) -> Vec<Result<ModifiedColor, String>> {
    colors
        .par_iter()
        .map(|input| {
            let rgb = parse_color_arg(input)?;
            let output = modifier.modify_color(rgb, filter, role);
            verbose_println!("[duskmap] {} {} -> {}", role, input, output);
            Ok(ModifiedColor {
                input: input.clone(),
                role,
                output,
            })
        })
        .collect()
}

/// Modify one color for every role
pub fn modify_palette(
    modifier: &ColorModifier,
    color: &str,
    filter: &FilterConfig,
) -> Result<Vec<PaletteEntry>, String> {
    let rgb = parse_color_arg(color)?;
    Ok(ColorRole::ALL
        .iter()
        .map(|&role| PaletteEntry {
            role,
            output: modifier.modify_color(rgb, filter, role),
        })
        .collect())
}
