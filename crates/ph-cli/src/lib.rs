//! Phosphor Astro CLI library.
//!
//! Exposes the build command and configuration loading so they can be
//! exercised from tests without spawning the binary.

pub mod commands;

pub use commands::build::run;
pub use commands::config::{CONFIG_FILE, load_config};
