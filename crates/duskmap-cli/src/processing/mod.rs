//! Color processing utilities for CLI commands.

mod input;
mod modify;
mod output;

pub use input::read_color_list;
pub use modify::{modify_colors, modify_palette};
pub use output::{render_modified, render_palette};
