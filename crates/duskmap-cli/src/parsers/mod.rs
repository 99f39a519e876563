//! Parsing functions for CLI arguments.

mod color;
mod filter;

pub use color::{parse_color_arg, parse_color_lines};
pub use filter::{parse_mode, parse_role};
