//! Build driver.
//!
//! Walks the catalog in order, strictly sequentially. For each icon, all
//! six assets are read and extracted before anything is rendered or
//! written, so an icon with a bad asset produces no file at all. The two
//! aggregate files are written last, only after every component has been
//! written. The first error aborts the run unchanged.
//!
//! # Examples
//!
//! ```no_run
//! use ph_codegen::{BuildEvent, IconBuilder};
//! use ph_catalog::FsCatalog;
//! use ph_files::DiskWriter;
//!
//! # async fn example() -> ph_core::Result<()> {
//! let catalog = FsCatalog::load("icons.json", "assets").await?;
//! let mut writer = DiskWriter::new("dist");
//!
//! let builder = IconBuilder::new()?;
//! builder
//!     .build_with_progress(&catalog, &mut writer, |event| {
//!         if let BuildEvent::IconGenerated { output_name, .. } = event {
//!             println!("built {output_name}");
//!         }
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use crate::extract::extract_weight;
use crate::outputs::{BuildOutputs, BuildReport, DECLARATIONS_PATH, MODULE_INDEX_PATH};
use crate::render::{Renderer, component_path};
use ph_core::traits::{Emitter, IconCatalog};
use ph_core::{Error, IconEntry, Result, Weight, WeightMap, WeightMapBuilder};
use std::collections::HashSet;

/// Progress notification emitted during a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    /// A component file was written.
    IconGenerated {
        /// Generated component name, e.g. `PhAcorn`
        output_name: String,
        /// Relative path of the component
        path: String,
    },
    /// An aggregate file was written.
    AggregateWritten {
        /// Relative path of the aggregate file
        path: String,
    },
}

/// Generates every component and both aggregate files.
///
/// # Examples
///
/// ```
/// use ph_codegen::IconBuilder;
///
/// let builder = IconBuilder::new().unwrap();
/// assert!(builder.renderer().props_type().starts_with("Partial<{"));
/// ```
#[derive(Debug)]
pub struct IconBuilder<'a> {
    renderer: Renderer<'a>,
}

impl<'a> IconBuilder<'a> {
    /// Creates a builder with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails.
    pub fn new() -> Result<Self> {
        Ok(Self {
            renderer: Renderer::new()?,
        })
    }

    /// Returns the renderer used for every artifact.
    #[must_use]
    pub const fn renderer(&self) -> &Renderer<'a> {
        &self.renderer
    }

    /// Runs the build without progress reporting.
    ///
    /// # Errors
    ///
    /// See [`IconBuilder::build_with_progress`].
    pub async fn build(
        &self,
        catalog: &dyn IconCatalog,
        emitter: &mut dyn Emitter,
    ) -> Result<BuildReport> {
        self.build_with_progress(catalog, emitter, |_| {}).await
    }

    /// Runs the build, calling `on_event` after every successful write.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered:
    /// - [`Error::CatalogError`] if two entries share an output name
    /// - [`Error::AssetRead`] if an asset cannot be read
    /// - [`Error::ExtractionFailure`] if an asset has no inner markup
    /// - [`Error::WriteFailure`] if the emitter fails
    pub async fn build_with_progress<F>(
        &self,
        catalog: &dyn IconCatalog,
        emitter: &mut dyn Emitter,
        mut on_event: F,
    ) -> Result<BuildReport>
    where
        F: FnMut(&BuildEvent) + Send,
    {
        let entries = catalog.entries();
        check_unique_output_names(entries)?;

        tracing::info!("Generating {} icon components", entries.len());

        let mut outputs = BuildOutputs::new(self.renderer.preamble()?);
        let mut files = Vec::with_capacity(entries.len() + 2);

        for entry in entries {
            let weights = read_weights(catalog, entry).await?;

            let component = self.renderer.component(&weights)?;
            let declaration = self.renderer.declaration(entry)?;
            let export = self.renderer.export_line(entry)?;

            let path = component_path(entry);
            emitter.emit(&path, &component).await?;
            tracing::debug!("Generated component: {path}");

            let output_name = entry.output_name();
            outputs.push_icon(output_name.clone(), &declaration, &export);
            on_event(&BuildEvent::IconGenerated {
                output_name,
                path: path.clone(),
            });
            files.push(path);
        }

        for (path, content) in [
            (DECLARATIONS_PATH, outputs.declarations()),
            (MODULE_INDEX_PATH, outputs.modules()),
        ] {
            emitter.emit(path, content).await?;
            tracing::debug!("Generated {path}");

            on_event(&BuildEvent::AggregateWritten {
                path: path.to_string(),
            });
            files.push(path.to_string());
        }

        tracing::info!(
            "Successfully generated {} components and {} files",
            outputs.icon_count(),
            files.len()
        );

        Ok(BuildReport {
            icon_count: outputs.icon_count(),
            files,
        })
    }
}

/// Reads and extracts all six weights of `entry`, in enumeration order.
async fn read_weights(catalog: &dyn IconCatalog, entry: &IconEntry) -> Result<WeightMap> {
    let mut builder = WeightMapBuilder::new(&entry.name);

    for weight in Weight::ALL {
        let svg = catalog.read_asset(entry, weight).await?;
        builder.insert(weight, extract_weight(&entry.name, weight, &svg)?);
    }

    builder.build()
}

fn check_unique_output_names(entries: &[IconEntry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());

    for entry in entries {
        let output_name = entry.output_name();
        if !seen.insert(output_name.clone()) {
            return Err(Error::CatalogError {
                message: format!(
                    "Icons map to the same component {output_name} (second: {})",
                    entry.name
                ),
                source: None,
            });
        }
    }

    Ok(())
}
