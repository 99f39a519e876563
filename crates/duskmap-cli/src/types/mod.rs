//! Type definitions for CLI.

mod overrides;
mod result;

pub use overrides::FilterOverrides;
pub use result::{ModifiedColor, PaletteEntry};
