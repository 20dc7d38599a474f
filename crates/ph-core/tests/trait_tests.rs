//! Tests for the catalog and emitter seams through trait objects.

use async_trait::async_trait;
use ph_core::traits::{Emitter, IconCatalog};
use ph_core::{Error, IconEntry, Result, Weight, WeightMapBuilder};
use std::collections::BTreeMap;

struct FixtureCatalog {
    entries: Vec<IconEntry>,
    broken: Option<Weight>,
}

#[async_trait]
impl IconCatalog for FixtureCatalog {
    fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    async fn read_asset(&self, entry: &IconEntry, weight: Weight) -> Result<String> {
        if self.broken == Some(weight) {
            return Err(Error::AssetRead {
                icon: entry.name.clone(),
                weight,
                path: format!("{weight}/{}-{weight}.svg", entry.name),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        Ok(format!("<svg><g id=\"{weight}\"/></svg>"))
    }
}

#[derive(Default)]
struct MapEmitter {
    files: BTreeMap<String, String>,
}

#[async_trait]
impl Emitter for MapEmitter {
    async fn emit(&mut self, path: &str, content: &str) -> Result<()> {
        self.files.insert(path.to_string(), content.to_string());
        Ok(())
    }
}

fn catalog(broken: Option<Weight>) -> FixtureCatalog {
    FixtureCatalog {
        entries: vec![IconEntry::new("acorn", "Acorn", vec!["nature".into()], "2.0")],
        broken,
    }
}

#[tokio::test]
async fn test_catalog_through_trait_object() {
    let catalog: Box<dyn IconCatalog> = Box::new(catalog(None));
    let entry = catalog.entries()[0].clone();

    let mut builder = WeightMapBuilder::new(&entry.name);
    for weight in Weight::ALL {
        builder.insert(weight, catalog.read_asset(&entry, weight).await.unwrap());
    }

    let map = builder.build().unwrap();
    assert_eq!(map.get(Weight::Fill), "<svg><g id=\"fill\"/></svg>");
}

#[tokio::test]
async fn test_catalog_read_error_carries_context() {
    let catalog = catalog(Some(Weight::Bold));
    let entry = catalog.entries()[0].clone();

    let err = catalog.read_asset(&entry, Weight::Bold).await.unwrap_err();
    assert!(err.is_asset_read_error());
    assert!(err.to_string().contains("acorn-bold"));
}

#[tokio::test]
async fn test_emitter_overwrites_same_path() {
    let mut emitter = MapEmitter::default();
    emitter.emit("index.js", "first").await.unwrap();
    emitter.emit("index.js", "second").await.unwrap();

    assert_eq!(emitter.files.len(), 1);
    assert_eq!(emitter.files["index.js"], "second");
}
