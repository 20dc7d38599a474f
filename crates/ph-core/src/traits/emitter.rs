//! Output writer trait.

use crate::Result;
use async_trait::async_trait;

/// Destination for generated files.
///
/// Paths are relative to the emitter's root and always use `/`
/// separators. Emitting the same path twice overwrites the first file, so
/// repeated builds with identical input produce identical output.
#[async_trait]
pub trait Emitter: Send {
    /// Writes `content` to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::WriteFailure`] if the write fails, or
    /// [`crate::Error::InvalidPath`] if `path` escapes the root.
    async fn emit(&mut self, path: &str, content: &str) -> Result<()>;
}
