use std::path::PathBuf;
use std::time::Instant;

use duskmap_core::tone_map::{color_modification_stats, default_modifier};

use crate::builders::build_filter_config;
use crate::config::{config_handle, is_verbose, log_config_usage};
use crate::parsers::parse_role;
use crate::processing::{modify_colors, read_color_list, render_modified};
use crate::types::{FilterOverrides, ModifiedColor};

/// Modify every color listed in a file (one per line) in parallel.
///
/// Results are printed in input order. Colors that fail to parse are
/// reported on stderr and the command fails after printing the rest.
pub fn cmd_batch(
    input: PathBuf,
    role: String,
    overrides: FilterOverrides,
    json: bool,
    threads: Option<usize>,
) -> Result<(), String> {
    let batch_start = Instant::now();
    log_config_usage();

    let role = parse_role(&role)?;
    let filter = build_filter_config(&config_handle().config.defaults, &overrides)?;

    let colors = read_color_list(&input)?;
    if colors.is_empty() {
        return Err(format!("No colors found in {}", input.display()));
    }

    // Configure thread pool if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
    }

    let results = modify_colors(default_modifier(), &colors, &filter, role);

    let mut modified: Vec<ModifiedColor> = Vec::with_capacity(results.len());
    let mut errors: Vec<String> = Vec::new();
    for result in results {
        match result {
            Ok(color) => modified.push(color),
            Err(e) => errors.push(e),
        }
    }

    if !modified.is_empty() {
        println!("{}", render_modified(&modified, json)?);
    }

    if is_verbose() {
        let stats = color_modification_stats();
        eprintln!();
        eprintln!("========================================");
        eprintln!("BATCH COMPLETE");
        eprintln!("========================================");
        eprintln!("  Modified:     {}", modified.len());
        eprintln!("  Failed:       {}", errors.len());
        eprintln!("  Cache hits:   {}", stats.hits);
        eprintln!("  Cache misses: {}", stats.misses);
        eprintln!("  Cached:       {}", stats.entries);
        eprintln!("  Total time:   {:.3}s", batch_start.elapsed().as_secs_f64());
    }

    if !errors.is_empty() {
        for error in &errors {
            eprintln!("  {}", error);
        }
        return Err(format!("{} of {} colors failed", errors.len(), colors.len()));
    }

    Ok(())
}
