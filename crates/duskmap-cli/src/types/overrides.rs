//! Filter flags shared by the modify, batch and palette commands.

/// Filter values given on the command line.
/// `None` falls back to the config defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOverrides {
    pub mode: Option<String>,
    pub brightness: Option<f64>,
    pub contrast: Option<f64>,
    pub grayscale: Option<f64>,
    pub sepia: Option<f64>,
}

impl FilterOverrides {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
