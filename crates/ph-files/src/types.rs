//! Path type shared by all writers.
//!
//! # Examples
//!
//! ```
//! use ph_files::FilePath;
//!
//! let path = FilePath::new("components/PhAcorn.astro").unwrap();
//! assert_eq!(path.as_str(), "components/PhAcorn.astro");
//! assert_eq!(path.parent().unwrap().as_str(), "components");
//! ```

use ph_core::{Error, Result};
use std::fmt;
use std::path::Path;

/// Validated output path, relative to a writer's root.
///
/// Paths use `/` separators on every platform. Absolute paths, `..`
/// components and empty segments are rejected so nothing can be written
/// outside the output directory.
///
/// # Examples
///
/// ```
/// use ph_files::FilePath;
///
/// assert!(FilePath::new("index.d.ts").is_ok());
/// assert!(FilePath::new("/etc/passwd").is_err());
/// assert!(FilePath::new("../index.js").is_err());
/// assert!(FilePath::new("components//PhAcorn.astro").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilePath(String);

impl FilePath {
    /// Validates and normalizes `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path is empty, absolute, not
    /// valid UTF-8, or contains `.`/`..`/empty segments.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
            path: path.display().to_string(),
            reason: "path is not valid UTF-8".to_string(),
        })?;

        // Normalize separators so Windows callers get the same keys
        let normalized = if cfg!(target_os = "windows") {
            path_str.replace(std::path::MAIN_SEPARATOR, "/")
        } else {
            path_str.to_string()
        };

        let invalid = |reason: &str| Error::InvalidPath {
            path: normalized.clone(),
            reason: reason.to_string(),
        };

        if normalized.is_empty() {
            return Err(invalid("path is empty"));
        }

        if normalized.starts_with('/') || path.is_absolute() {
            return Err(invalid("path must be relative to the output directory"));
        }

        if normalized
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..")
        {
            return Err(invalid("path contains empty, '.' or '..' segments"));
        }

        Ok(Self(normalized))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the path as a [`Path`].
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Returns the parent directory, or `None` for top-level files.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0.rfind('/').map(|pos| Self(self.0[..pos].to_string()))
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for FilePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_nested_path() {
        let path = FilePath::new("components/PhTestIcon.astro").unwrap();
        assert_eq!(path.to_string(), "components/PhTestIcon.astro");
    }

    #[test]
    fn test_top_level_has_no_parent() {
        let path = FilePath::new("index.js").unwrap();
        assert!(path.parent().is_none());
    }

    #[test]
    fn test_empty_rejected() {
        let err = FilePath::new("").unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }

    #[test]
    fn test_absolute_rejected() {
        assert!(FilePath::new("/dist/index.js").is_err());
    }

    #[test]
    fn test_traversal_rejected() {
        assert!(FilePath::new("components/../../index.js").is_err());
        assert!(FilePath::new("./index.js").is_err());
    }

    #[test]
    fn test_dots_inside_names_allowed() {
        assert!(FilePath::new("index.d.ts").is_ok());
        assert!(FilePath::new("a..b/file.js").is_ok());
    }
}
