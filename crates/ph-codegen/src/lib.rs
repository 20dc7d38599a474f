//! Code generation for Phosphor icon components.
//!
//! Turns every icon of the catalog into an Astro component embedding all
//! six weights, and aggregates one `index.d.ts` with a documented
//! declaration per icon plus one `index.js` re-exporting every component.
//!
//! # Output Structure
//!
//! ```text
//! dist/
//! ├── index.d.ts                  # Props type + one declaration per icon
//! ├── index.js                    # One re-export per icon
//! └── components/
//!     ├── PhAcorn.astro           # All six weights of "acorn"
//!     └── PhAddressBook.astro
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use ph_codegen::IconBuilder;
//! use ph_catalog::FsCatalog;
//! use ph_files::DiskWriter;
//!
//! # async fn example() -> ph_core::Result<()> {
//! let catalog = FsCatalog::load("icons.json", "assets").await?;
//! let mut writer = DiskWriter::new("dist");
//!
//! let builder = IconBuilder::new()?;
//! let report = builder.build(&catalog, &mut writer).await?;
//! println!("Generated {} icons", report.icon_count);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod builder;
pub mod extract;
pub mod outputs;
pub mod render;
pub mod template_engine;
pub mod types;

pub use builder::{BuildEvent, IconBuilder};
pub use extract::{extract_inner_svg, extract_weight};
pub use outputs::{BuildOutputs, BuildReport};
pub use render::Renderer;
