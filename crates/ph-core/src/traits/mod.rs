//! Seams between the generator and its collaborators.
//!
//! # Module Structure
//!
//! - `catalog` - Source of icon entries and their SVG assets
//! - `emitter` - Destination for generated files
//!
//! # Examples
//!
//! ```
//! use ph_core::traits::Emitter;
//! use ph_core::Result;
//! # use async_trait::async_trait;
//!
//! // An emitter that only counts writes
//! #[derive(Debug, Default)]
//! struct CountingEmitter {
//!     writes: usize,
//! }
//!
//! #[async_trait]
//! impl Emitter for CountingEmitter {
//!     async fn emit(&mut self, _path: &str, _content: &str) -> Result<()> {
//!         self.writes += 1;
//!         Ok(())
//!     }
//! }
//! ```

mod catalog;
mod emitter;

pub use catalog::IconCatalog;
pub use emitter::Emitter;
