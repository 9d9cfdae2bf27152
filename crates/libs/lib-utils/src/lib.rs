//! # Utilities Library
//!
//! Shared utility functions for environment variables and token unit formatting.

pub mod envs;
pub mod units;

// Re-export commonly used functions
pub use envs::{get_env, get_env_opt, get_env_parse, get_env_parse_or};
pub use units::{format_units, parse_quantity};
