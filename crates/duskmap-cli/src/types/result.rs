//! Output records printed by the commands.

use duskmap_core::models::ColorRole;
use serde::Serialize;

/// One modified color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModifiedColor {
    pub input: String,
    pub role: ColorRole,
    pub output: String,
}

/// One row of `duskmap palette`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
    pub role: ColorRole,
    pub output: String,
}
