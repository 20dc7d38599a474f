use async_trait::async_trait;
use ph_core::traits::IconCatalog;
use ph_core::{Error, IconEntry, Result, Weight};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// File name of an icon's asset in `weight`.
///
/// The regular weight is stored without a suffix; every other weight is
/// suffixed with its name.
///
/// # Examples
///
/// ```
/// use ph_catalog::asset_file_name;
/// use ph_core::Weight;
///
/// assert_eq!(asset_file_name("acorn", Weight::Regular), "acorn.svg");
/// assert_eq!(asset_file_name("acorn", Weight::Thin), "acorn-thin.svg");
/// ```
#[must_use]
pub fn asset_file_name(icon: &str, weight: Weight) -> String {
    match weight {
        Weight::Regular => format!("{icon}.svg"),
        _ => format!("{icon}-{weight}.svg"),
    }
}

/// Icon catalog read from a JSON manifest and an SVG asset tree.
///
/// # Examples
///
/// ```
/// use ph_catalog::FsCatalog;
/// use ph_core::{IconEntry, Weight};
/// use ph_core::traits::IconCatalog;
/// use std::path::Path;
///
/// let catalog = FsCatalog::new(
///     "assets",
///     vec![IconEntry::new("acorn", "Acorn", vec![], "2.0")],
/// )
/// .unwrap();
///
/// let entry = &catalog.entries()[0];
/// assert_eq!(
///     catalog.asset_path(entry, Weight::Fill),
///     Path::new("assets/fill/acorn-fill.svg")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct FsCatalog {
    assets_dir: PathBuf,
    entries: Vec<IconEntry>,
}

impl FsCatalog {
    /// Creates a catalog from already-loaded entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CatalogError`] if an entry has an empty name or if
    /// two entries would generate the same component name.
    pub fn new(assets_dir: impl Into<PathBuf>, entries: Vec<IconEntry>) -> Result<Self> {
        validate_entries(&entries)?;
        Ok(Self {
            assets_dir: assets_dir.into(),
            entries,
        })
    }

    /// Parses a JSON array of icon entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CatalogError`] if the JSON is malformed or the
    /// entries fail validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use ph_catalog::FsCatalog;
    /// use ph_core::traits::IconCatalog;
    ///
    /// let catalog = FsCatalog::from_json(
    ///     r#"[{"name": "acorn", "pascal_name": "Acorn",
    ///          "categories": ["nature"], "published_in": "2.0"}]"#,
    ///     "assets",
    /// )
    /// .unwrap();
    /// assert_eq!(catalog.entries()[0].output_name(), "PhAcorn");
    /// ```
    pub fn from_json(json: &str, assets_dir: impl Into<PathBuf>) -> Result<Self> {
        let entries: Vec<IconEntry> =
            serde_json::from_str(json).map_err(|e| Error::CatalogError {
                message: "failed to parse icon manifest".to_string(),
                source: Some(Box::new(e)),
            })?;

        Self::new(assets_dir, entries)
    }

    /// Loads the manifest at `manifest` and binds it to `assets_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CatalogError`] if the manifest cannot be read,
    /// parsed or validated.
    pub async fn load(manifest: impl AsRef<Path>, assets_dir: impl Into<PathBuf>) -> Result<Self> {
        let manifest = manifest.as_ref();

        let json = tokio::fs::read_to_string(manifest)
            .await
            .map_err(|e| Error::CatalogError {
                message: format!("failed to read icon manifest {}", manifest.display()),
                source: Some(Box::new(e)),
            })?;

        let catalog = Self::from_json(&json, assets_dir)?;

        tracing::info!(
            "Loaded {} icons from {}",
            catalog.entries.len(),
            manifest.display()
        );

        Ok(catalog)
    }

    /// Path of the SVG asset for `entry` in `weight`.
    #[must_use]
    pub fn asset_path(&self, entry: &IconEntry, weight: Weight) -> PathBuf {
        self.assets_dir
            .join(weight.as_str())
            .join(asset_file_name(&entry.name, weight))
    }

    /// Root of the asset tree.
    #[must_use]
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }
}

#[async_trait]
impl IconCatalog for FsCatalog {
    fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    async fn read_asset(&self, entry: &IconEntry, weight: Weight) -> Result<String> {
        let path = self.asset_path(entry, weight);

        tracing::debug!("Reading {}", path.display());

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| Error::AssetRead {
                icon: entry.name.clone(),
                weight,
                path: path.display().to_string(),
                source,
            })
    }
}

fn validate_entries(entries: &[IconEntry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());

    for entry in entries {
        if entry.name.is_empty() || entry.pascal_name.is_empty() {
            return Err(Error::CatalogError {
                message: format!(
                    "icon entry has an empty name (name: '{}', pascal_name: '{}')",
                    entry.name, entry.pascal_name
                ),
                source: None,
            });
        }

        let output_name = entry.output_name();
        if !seen.insert(output_name.clone()) {
            return Err(Error::CatalogError {
                message: format!("duplicate component name {output_name} (icon '{}')", entry.name),
                source: None,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, pascal: &str) -> IconEntry {
        IconEntry::new(name, pascal, vec!["test".to_string()], "1.0")
    }

    #[test]
    fn test_asset_file_names_for_every_weight() {
        let names: Vec<_> = Weight::ALL
            .iter()
            .map(|&weight| asset_file_name("test-icon", weight))
            .collect();

        assert_eq!(
            names,
            [
                "test-icon-thin.svg",
                "test-icon-light.svg",
                "test-icon.svg",
                "test-icon-bold.svg",
                "test-icon-fill.svg",
                "test-icon-duotone.svg",
            ]
        );
    }

    #[test]
    fn test_asset_path_includes_weight_directory() {
        let catalog = FsCatalog::new("/assets", vec![entry("acorn", "Acorn")]).unwrap();
        let path = catalog.asset_path(&catalog.entries()[0], Weight::Regular);
        assert_eq!(path, PathBuf::from("/assets/regular/acorn.svg"));
    }

    #[test]
    fn test_duplicate_output_names_rejected() {
        let result = FsCatalog::new(
            "assets",
            vec![entry("acorn", "Acorn"), entry("acorn-alt", "Acorn")],
        );

        let err = result.unwrap_err();
        assert!(err.is_catalog_error());
        assert!(err.to_string().contains("PhAcorn"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = FsCatalog::new("assets", vec![entry("", "Acorn")]);
        assert!(result.unwrap_err().is_catalog_error());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = FsCatalog::from_json("{not json", "assets").unwrap_err();
        assert!(err.is_catalog_error());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_entries_keep_manifest_order() {
        let catalog = FsCatalog::from_json(
            r#"[
                {"name": "zebra", "pascal_name": "Zebra", "published_in": "1.0"},
                {"name": "acorn", "pascal_name": "Acorn", "published_in": "1.0"}
            ]"#,
            "assets",
        )
        .unwrap();

        let names: Vec<_> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["zebra", "acorn"]);
    }
}
