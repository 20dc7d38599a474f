//! In-memory filesystem.
//!
//! Holds emitted files in a sorted map, so listing order is stable and
//! two builds can be compared file by file.
//!
//! # Examples
//!
//! ```
//! use ph_files::FileSystem;
//!
//! let mut fs = FileSystem::new();
//! fs.add_file("index.js", "export {};\n").unwrap();
//!
//! assert_eq!(fs.read_file("index.js").unwrap(), "export {};\n");
//! assert!(fs.read_file("index.d.ts").is_err());
//! ```

use crate::types::FilePath;
use async_trait::async_trait;
use ph_core::traits::Emitter;
use ph_core::{Error, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// In-memory collection of generated files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSystem {
    files: BTreeMap<FilePath, String>,
    writes: usize,
}

impl FileSystem {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path is not a valid relative
    /// output path.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Result<()> {
        let path = FilePath::new(path)?;
        self.files.insert(path, content.into());
        self.writes += 1;
        Ok(())
    }

    /// Returns the content of a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path is invalid or no file
    /// exists at it.
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<&str> {
        let path = FilePath::new(path)?;
        self.files
            .get(&path)
            .map(String::as_str)
            .ok_or_else(|| Error::InvalidPath {
                path: path.to_string(),
                reason: "file not found".to_string(),
            })
    }

    /// Returns `true` if a file exists at `path`.
    #[must_use]
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        FilePath::new(path).is_ok_and(|p| self.files.contains_key(&p))
    }

    /// Number of distinct files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Number of writes performed, counting overwrites.
    #[must_use]
    pub const fn write_count(&self) -> usize {
        self.writes
    }

    /// All file paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &FilePath> {
        self.files.keys()
    }

    /// Files directly inside `dir` (not recursive), sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ph_files::FileSystem;
    ///
    /// let mut fs = FileSystem::new();
    /// fs.add_file("components/PhA.astro", "").unwrap();
    /// fs.add_file("components/PhB.astro", "").unwrap();
    /// fs.add_file("index.js", "").unwrap();
    ///
    /// assert_eq!(fs.list_dir("components").len(), 2);
    /// ```
    #[must_use]
    pub fn list_dir(&self, dir: &str) -> Vec<&FilePath> {
        let dir = dir.trim_end_matches('/');
        self.files
            .keys()
            .filter(|path| path.parent().is_some_and(|parent| parent.as_str() == dir))
            .collect()
    }
}

#[async_trait]
impl Emitter for FileSystem {
    async fn emit(&mut self, path: &str, content: &str) -> Result<()> {
        self.add_file(path, content)?;
        tracing::debug!("Staged {path} ({} bytes)", content.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let fs = FileSystem::new();
        assert_eq!(fs.file_count(), 0);
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn test_overwrite_replaces_content() {
        let mut fs = FileSystem::new();
        fs.add_file("index.js", "a").unwrap();
        fs.add_file("index.js", "b").unwrap();

        assert_eq!(fs.file_count(), 1);
        assert_eq!(fs.write_count(), 2);
        assert_eq!(fs.read_file("index.js").unwrap(), "b");
    }

    #[test]
    fn test_invalid_path_not_stored() {
        let mut fs = FileSystem::new();
        assert!(fs.add_file("../escape.js", "").is_err());
        assert_eq!(fs.write_count(), 0);
    }

    #[test]
    fn test_paths_sorted() {
        let mut fs = FileSystem::new();
        fs.add_file("index.js", "").unwrap();
        fs.add_file("components/PhB.astro", "").unwrap();
        fs.add_file("components/PhA.astro", "").unwrap();

        let paths: Vec<_> = fs.paths().map(FilePath::as_str).collect();
        assert_eq!(
            paths,
            ["components/PhA.astro", "components/PhB.astro", "index.js"]
        );
    }

    #[test]
    fn test_list_dir_top_level() {
        let mut fs = FileSystem::new();
        fs.add_file("components/PhA.astro", "").unwrap();
        fs.add_file("index.js", "").unwrap();
        // Top-level files have no parent, so listing "" finds nothing
        assert!(fs.list_dir("").is_empty());
        assert_eq!(fs.list_dir("components/").len(), 1);
    }

    #[tokio::test]
    async fn test_emit_through_trait() {
        let mut fs = FileSystem::new();
        let emitter: &mut dyn Emitter = &mut fs;
        emitter.emit("index.d.ts", "export {};").await.unwrap();
        assert!(fs.exists("index.d.ts"));
    }
}
