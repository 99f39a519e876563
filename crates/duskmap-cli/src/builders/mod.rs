//! Builder functions for core types.

mod filter;

pub use filter::build_filter_config;
