//! Filesystem-backed icon catalog.
//!
//! Loads the ordered list of icon entries from a JSON manifest and reads
//! each weight's SVG asset from the upstream asset tree:
//!
//! ```text
//! assets/
//! ├── regular/
//! │   └── acorn.svg           # regular weight has no suffix
//! ├── bold/
//! │   └── acorn-bold.svg
//! └── duotone/
//!     └── acorn-duotone.svg
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use ph_catalog::FsCatalog;
//! use ph_core::traits::IconCatalog;
//!
//! # async fn example() -> ph_core::Result<()> {
//! let catalog = FsCatalog::load(
//!     "icons.json",
//!     "node_modules/@phosphor-icons/core/assets",
//! )
//! .await?;
//! println!("{} icons", catalog.entries().len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod catalog;

pub use catalog::{FsCatalog, asset_file_name};
