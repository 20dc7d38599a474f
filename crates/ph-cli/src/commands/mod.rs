//! Command implementations.
//!
//! - `build` - Generates every component and both index files
//! - `config` - Loads `phosphor-astro.toml`

pub mod build;
pub mod config;
