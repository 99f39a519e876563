//! Data models for duskmap
//!
//! Filter configuration and color role types passed into every modification.

mod filter;
mod role;


pub use filter::{FilterConfig, FilterMode, ThemeEngine};
pub use role::ColorRole;
