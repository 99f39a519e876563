//! Semantic role of a color on the page.

use serde::{Deserialize, Serialize};

/// Where a color is used, decided upstream by whoever walks the page styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    /// Page and element backgrounds
    Background,

    /// Text and other foreground ink
    Foreground,

    /// Borders and outlines
    Border,

    /// Box and text shadows (tone mapped like backgrounds)
    Shadow,

    /// Gradient stops (tone mapped like backgrounds)
    Gradient,
}

impl ColorRole {
    pub const ALL: [ColorRole; 5] = [
        Self::Background,
        Self::Foreground,
        Self::Border,
        Self::Shadow,
        Self::Gradient,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Border => "border",
            Self::Shadow => "shadow",
            Self::Gradient => "gradient",
        }
    }
}

impl std::fmt::Display for ColorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ColorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "background" | "bg" => Ok(Self::Background),
            "foreground" | "fg" | "text" => Ok(Self::Foreground),
            "border" => Ok(Self::Border),
            "shadow" => Ok(Self::Shadow),
            "gradient" => Ok(Self::Gradient),
            _ => Err(format!("Unknown color role: {}", s)),
        }
    }
}
