//! Build configuration.
//!
//! The generator runs with zero arguments; everything it needs to know
//! about paths comes from these settings, optionally overridden by a
//! `phosphor-astro.toml` in the working directory.
//!
//! # Examples
//!
//! ```
//! use ph_core::BuildConfig;
//! use std::path::PathBuf;
//!
//! let config = BuildConfig::default();
//! assert_eq!(config.out_dir, PathBuf::from("dist"));
//! assert!(config.validate().is_ok());
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log levels accepted by `log_level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Settings for one generator run.
///
/// # Examples
///
/// ```
/// use ph_core::BuildConfig;
///
/// let config = BuildConfig {
///     out_dir: "build".into(),
///     ..Default::default()
/// };
/// assert_eq!(config.log_level, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Root of the per-weight SVG asset tree.
    ///
    /// Default: `node_modules/@phosphor-icons/core/assets`
    pub assets_dir: PathBuf,

    /// JSON manifest listing every icon entry, in output order.
    ///
    /// Default: `icons.json`
    pub catalog: PathBuf,

    /// Directory receiving `components/`, `index.d.ts` and `index.js`.
    ///
    /// Default: `dist`
    pub out_dir: PathBuf,

    /// Diagnostic log level (trace, debug, info, warn, error).
    ///
    /// Default: `info`
    pub log_level: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("node_modules/@phosphor-icons/core/assets"),
            catalog: PathBuf::from("icons.json"),
            out_dir: PathBuf::from("dist"),
            log_level: "info".to_string(),
        }
    }
}

impl BuildConfig {
    /// Checks that every path is set and the log level is known.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] describing the first invalid field.
    ///
    /// # Examples
    ///
    /// ```
    /// use ph_core::BuildConfig;
    ///
    /// let config = BuildConfig {
    ///     log_level: "loud".to_string(),
    ///     ..Default::default()
    /// };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        for (field, path) in [
            ("assets_dir", &self.assets_dir),
            ("catalog", &self.catalog),
            ("out_dir", &self.out_dir),
        ] {
            if path.as_os_str().is_empty() {
                return Err(Error::ConfigError {
                    message: format!("{field} must not be empty"),
                });
            }
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::ConfigError {
                message: format!(
                    "invalid log_level '{}', expected one of: {}",
                    self.log_level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        Ok(())
    }
}
