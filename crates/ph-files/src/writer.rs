//! On-disk writer.
//!
//! Every file is written to a sibling temp file and renamed into place,
//! so an interrupted build never leaves a half-written component behind.
//!
//! # Examples
//!
//! ```
//! use ph_files::DiskWriter;
//! use ph_core::traits::Emitter;
//! # use tempfile::TempDir;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> ph_core::Result<()> {
//! # let temp = TempDir::new().unwrap();
//! let mut writer = DiskWriter::new(temp.path().join("dist"));
//! writer.emit("components/PhAcorn.astro", "<svg />").await?;
//!
//! assert!(temp.path().join("dist/components/PhAcorn.astro").exists());
//! # Ok(())
//! # }
//! ```

use crate::types::FilePath;
use async_trait::async_trait;
use ph_core::traits::Emitter;
use ph_core::{Error, Result};
use std::path::{Path, PathBuf};

/// Writes generated files under a root directory.
#[derive(Debug, Clone)]
pub struct DiskWriter {
    root: PathBuf,
    atomic: bool,
}

impl DiskWriter {
    /// Creates a writer rooted at `root` with atomic writes enabled.
    ///
    /// The root itself is created on the first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            atomic: true,
        }
    }

    /// Sets whether to write through a temp file and rename.
    #[must_use]
    pub const fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Output root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Disk location of a relative output path.
    #[must_use]
    pub fn disk_path(&self, path: &FilePath) -> PathBuf {
        self.root.join(path.as_path())
    }

    async fn write(&self, path: &FilePath, content: &str) -> std::io::Result<()> {
        let disk_path = self.disk_path(path);

        if let Some(parent) = disk_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        if self.atomic {
            let mut temp_name = disk_path.as_os_str().to_owned();
            temp_name.push(".tmp");
            let temp_path = PathBuf::from(temp_name);

            tokio::fs::write(&temp_path, content).await?;
            tokio::fs::rename(&temp_path, &disk_path).await
        } else {
            tokio::fs::write(&disk_path, content).await
        }
    }
}

#[async_trait]
impl Emitter for DiskWriter {
    async fn emit(&mut self, path: &str, content: &str) -> Result<()> {
        let file_path = FilePath::new(path)?;

        self.write(&file_path, content)
            .await
            .map_err(|source| Error::WriteFailure {
                path: self.disk_path(&file_path).display().to_string(),
                source,
            })?;

        tracing::debug!("Wrote {} ({} bytes)", file_path, content.len());
        Ok(())
    }
}
