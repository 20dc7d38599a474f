//! Error types for the icon generator.
//!
//! Every failure in the pipeline is fatal for the whole run, so the
//! variants carry enough context (icon, weight, path) to tell the user
//! exactly which asset or output broke the build.
//!
//! # Examples
//!
//! ```
//! use ph_core::{Error, Result, Weight};
//!
//! fn extract(icon: &str, svg: &str) -> Result<String> {
//!     if svg.is_empty() {
//!         return Err(Error::ExtractionFailure {
//!             icon: icon.to_string(),
//!             weight: Weight::Bold,
//!         });
//!     }
//!     Ok(svg.to_string())
//! }
//!
//! let err = extract("acorn", "").unwrap_err();
//! assert!(err.is_extraction_failure());
//! ```

use crate::types::Weight;
use thiserror::Error;

/// Main error type for the icon generator.
///
/// All library crates in the workspace return this type, so the driver
/// can propagate failures with `?` and the binary only has to map them to
/// an exit code once.
#[derive(Error, Debug)]
pub enum Error {
    /// The inner markup of an SVG asset could not be extracted.
    ///
    /// Raised when the asset has no `<svg>...</svg>` element or the
    /// element is empty.
    #[error("Unable to extract SVG inner nodes for {icon}-{weight}")]
    ExtractionFailure {
        /// Icon name (kebab-case catalog identifier)
        icon: String,
        /// Weight whose asset failed
        weight: Weight,
    },

    /// Writing a generated file failed.
    #[error("Failed to write {path}")]
    WriteFailure {
        /// Output path relative to the output directory
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An SVG asset could not be read from the catalog.
    #[error("Failed to read asset for {icon}-{weight} at {path}")]
    AssetRead {
        /// Icon name
        icon: String,
        /// Weight whose asset could not be read
        weight: Weight,
        /// Path that was attempted
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The icon catalog could not be loaded or is inconsistent.
    #[error("Catalog error: {message}")]
    CatalogError {
        /// Description of the catalog problem
        message: String,
        /// Optional underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A weight map was built without content for every weight.
    #[error("Incomplete weight map for {icon}: no content for {weight}")]
    IncompleteWeightMap {
        /// Icon name
        icon: String,
        /// First weight found missing or empty
        weight: Weight,
    },

    /// Template registration or rendering failed.
    #[error("Template error: {message}")]
    RenderError {
        /// Description of the template failure
        message: String,
    },

    /// An output path was rejected before writing.
    #[error("Invalid output path '{path}': {reason}")]
    InvalidPath {
        /// The rejected path
        path: String,
        /// Why it was rejected
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },
}

impl Error {
    /// Returns `true` if this is an extraction failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use ph_core::{Error, Weight};
    ///
    /// let err = Error::ExtractionFailure {
    ///     icon: "acorn".to_string(),
    ///     weight: Weight::Fill,
    /// };
    /// assert!(err.is_extraction_failure());
    /// ```
    #[must_use]
    pub const fn is_extraction_failure(&self) -> bool {
        matches!(self, Self::ExtractionFailure { .. })
    }

    /// Returns `true` if this is a write failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use ph_core::Error;
    ///
    /// let err = Error::WriteFailure {
    ///     path: "index.js".to_string(),
    ///     source: std::io::Error::other("disk full"),
    /// };
    /// assert!(err.is_write_failure());
    /// ```
    #[must_use]
    pub const fn is_write_failure(&self) -> bool {
        matches!(self, Self::WriteFailure { .. })
    }

    /// Returns `true` if this is an asset read error.
    #[must_use]
    pub const fn is_asset_read_error(&self) -> bool {
        matches!(self, Self::AssetRead { .. })
    }

    /// Returns `true` if this is a catalog error.
    #[must_use]
    pub const fn is_catalog_error(&self) -> bool {
        matches!(self, Self::CatalogError { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns the icon this error is attached to, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ph_core::{Error, Weight};
    ///
    /// let err = Error::ExtractionFailure {
    ///     icon: "acorn".to_string(),
    ///     weight: Weight::Bold,
    /// };
    /// assert_eq!(err.icon(), Some("acorn"));
    ///
    /// let err = Error::ConfigError { message: "bad".to_string() };
    /// assert_eq!(err.icon(), None);
    /// ```
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        match self {
            Self::ExtractionFailure { icon, .. }
            | Self::AssetRead { icon, .. }
            | Self::IncompleteWeightMap { icon, .. } => Some(icon),
            _ => None,
        }
    }
}

/// Result type alias used throughout the workspace.
///
/// # Examples
///
/// ```
/// use ph_core::{Result, Error};
///
/// fn validate_dir(value: &str) -> Result<&str> {
///     if value.is_empty() {
///         return Err(Error::ConfigError {
///             message: "out_dir must not be empty".to_string(),
///         });
///     }
///     Ok(value)
/// }
///
/// assert!(validate_dir("dist").is_ok());
/// assert!(validate_dir("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
