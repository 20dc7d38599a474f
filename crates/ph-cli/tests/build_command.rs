//! Integration tests for the build command against a fixture project.

use ph_catalog::asset_file_name;
use ph_cli::{CONFIG_FILE, load_config, run};
use ph_core::Weight;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MANIFEST: &str = r#"[
  {"name": "test-icon", "pascal_name": "TestIcon", "categories": ["design"], "published_in": "1.0"}
]"#;

fn write_project(root: &Path, broken: Option<Weight>) {
    fs::write(
        root.join(CONFIG_FILE),
        "assets_dir = \"assets\"\ncatalog = \"icons.json\"\nout_dir = \"dist\"\nlog_level = \"warn\"\n",
    )
    .unwrap();
    fs::write(root.join("icons.json"), MANIFEST).unwrap();

    for weight in Weight::ALL {
        let dir = root.join("assets").join(weight.as_str());
        fs::create_dir_all(&dir).unwrap();
        let svg = if broken == Some(weight) {
            "<svg viewBox=\"0 0 256 256\"></svg>".to_string()
        } else {
            format!("<svg viewBox=\"0 0 256 256\"><path id=\"{weight}\"/></svg>")
        };
        fs::write(dir.join(asset_file_name("test-icon", weight)), svg).unwrap();
    }
}

#[tokio::test]
async fn test_build_fixture_project() {
    let dir = TempDir::new().unwrap();
    write_project(dir.path(), None);

    let config = load_config(dir.path()).unwrap();
    let report = run(&config).await.unwrap();

    assert_eq!(report.icon_count, 1);
    assert_eq!(
        report.files,
        ["components/PhTestIcon.astro", "index.d.ts", "index.js"]
    );

    let dist = dir.path().join("dist");
    assert!(dist.join("components/PhTestIcon.astro").is_file());
    assert_eq!(
        fs::read_to_string(dist.join("index.js")).unwrap(),
        "export { default as PhTestIcon } from \"./components/PhTestIcon.astro\";\n"
    );
}

#[tokio::test]
async fn test_unextractable_weight_fails_without_output() {
    let dir = TempDir::new().unwrap();
    write_project(dir.path(), Some(Weight::Bold));

    let config = load_config(dir.path()).unwrap();
    let err = run(&config).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Unable to extract SVG inner nodes for test-icon-bold"
    );
    assert!(!dir.path().join("dist").exists());
}

#[tokio::test]
async fn test_missing_catalog_fails() {
    let dir = TempDir::new().unwrap();

    let config = load_config(dir.path()).unwrap();
    let err = run(&config).await.unwrap_err();

    assert!(err.to_string().contains("failed to load icon catalog"));
}
