//! Output writers for generated files.
//!
//! Two [`Emitter`](ph_core::traits::Emitter) implementations share one
//! path model:
//!
//! - [`DiskWriter`]: writes under an output directory, creating parent
//!   directories and replacing files atomically (temp file + rename)
//! - [`FileSystem`]: keeps every emitted file in memory, for staging
//!   output and for asserting on it in tests
//!
//! # Examples
//!
//! ```
//! use ph_files::FileSystem;
//! use ph_core::traits::Emitter;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> ph_core::Result<()> {
//! let mut fs = FileSystem::new();
//! fs.emit("components/PhAcorn.astro", "---\n---\n<svg />").await?;
//!
//! assert!(fs.exists("components/PhAcorn.astro"));
//! assert_eq!(fs.file_count(), 1);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod filesystem;
pub mod types;
pub mod writer;

pub use filesystem::FileSystem;
pub use types::FilePath;
pub use writer::DiskWriter;
