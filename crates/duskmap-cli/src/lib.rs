//! Shared utilities for duskmap-cli
//!
//! Configuration loading, argument parsing and the command implementations
//! used by the `duskmap` binary.

pub mod builders;
pub mod commands;
pub mod config;
pub mod parsers;
pub mod processing;
pub mod types;

// Re-export commonly used items at the crate root for convenience
pub use builders::build_filter_config;
pub use parsers::{parse_color_arg, parse_mode, parse_role};
pub use processing::{modify_colors, modify_palette, read_color_list};
pub use types::{FilterOverrides, ModifiedColor, PaletteEntry};
