//! Command implementations for the duskmap CLI.

mod batch;
mod init;
mod modify;
mod palette;

// Re-export all command functions
pub use batch::cmd_batch;
pub use init::{cmd_init, CONFIG_TEMPLATE};
pub use modify::cmd_modify;
pub use palette::cmd_palette;
