use duskmap_core::tone_map::default_modifier;

use crate::builders::build_filter_config;
use crate::config::{config_handle, log_config_usage};
use crate::parsers::parse_role;
use crate::processing::{modify_colors, render_modified};
use crate::types::FilterOverrides;
use crate::verbose_println;

/// Modify one or more colors given on the command line and print the results.
///
/// Stops at the first color that fails to parse.
pub fn cmd_modify(
    colors: Vec<String>,
    role: String,
    overrides: FilterOverrides,
    json: bool,
) -> Result<(), String> {
    log_config_usage();

    if colors.is_empty() {
        return Err("No colors specified".to_string());
    }

    let role = parse_role(&role)?;
    let filter = build_filter_config(&config_handle().config.defaults, &overrides)?;
    if !overrides.is_empty() {
        verbose_println!("[duskmap] Filter: {:?}", filter);
    }

    let results = modify_colors(default_modifier(), &colors, &filter, role)
        .into_iter()
        .collect::<Result<Vec<_>, String>>()?;

    println!("{}", render_modified(&results, json)?);
    Ok(())
}
