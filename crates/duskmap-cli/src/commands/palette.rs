use duskmap_core::tone_map::default_modifier;

use crate::builders::build_filter_config;
use crate::config::{config_handle, log_config_usage};
use crate::processing::{modify_palette, render_palette};
use crate::types::FilterOverrides;

/// Print one color as it comes out for every role.
pub fn cmd_palette(color: String, overrides: FilterOverrides, json: bool) -> Result<(), String> {
    log_config_usage();

    let filter = build_filter_config(&config_handle().config.defaults, &overrides)?;
    let entries = modify_palette(default_modifier(), &color, &filter)?;

    println!("{}", render_palette(&color, &entries, json)?);
    Ok(())
}
