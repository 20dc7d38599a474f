//! Icon catalog trait.

use crate::{IconEntry, Result, Weight};
use async_trait::async_trait;

/// Read-only source of icon metadata and per-weight SVG assets.
///
/// Entries are returned in the order the generated files list them.
///
/// # Examples
///
/// ```
/// use ph_core::traits::IconCatalog;
/// use ph_core::{IconEntry, Result, Weight};
/// use async_trait::async_trait;
///
/// struct SingleIcon {
///     entries: Vec<IconEntry>,
/// }
///
/// #[async_trait]
/// impl IconCatalog for SingleIcon {
///     fn entries(&self) -> &[IconEntry] {
///         &self.entries
///     }
///
///     async fn read_asset(&self, entry: &IconEntry, weight: Weight) -> Result<String> {
///         Ok(format!("<svg><path id=\"{}-{weight}\"/></svg>", entry.name))
///     }
/// }
/// ```
#[async_trait]
pub trait IconCatalog: Send + Sync {
    /// Returns every icon entry in catalog order.
    fn entries(&self) -> &[IconEntry];

    /// Reads the raw SVG text of `entry` in `weight`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::AssetRead`] if the asset cannot be read.
    async fn read_asset(&self, entry: &IconEntry, weight: Weight) -> Result<String>;
}
