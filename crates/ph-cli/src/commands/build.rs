//! Build command implementation.
//!
//! Loads the catalog, generates every component into `out_dir` and
//! prints one line per component plus one per index file.

use anyhow::{Context, Result};
use colored::Colorize;
use ph_catalog::FsCatalog;
use ph_codegen::{BuildEvent, BuildReport, IconBuilder};
use ph_core::BuildConfig;
use ph_files::DiskWriter;
use tracing::info;

/// Runs a full build with `config`.
///
/// Errors from the generator are returned unchanged, so the caller sees
/// which icon and weight (or which output path) failed.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, an asset cannot be
/// read or extracted, or an output file cannot be written.
pub async fn run(config: &BuildConfig) -> Result<BuildReport> {
    info!(
        "Building icons from {} into {}",
        config.catalog.display(),
        config.out_dir.display()
    );

    let catalog = FsCatalog::load(&config.catalog, &config.assets_dir)
        .await
        .context("failed to load icon catalog")?;

    let builder = IconBuilder::new()?;
    let mut writer = DiskWriter::new(&config.out_dir);
    let out_dir = config.out_dir.display().to_string();

    let report = builder
        .build_with_progress(&catalog, &mut writer, |event| {
            println!("{}", progress_line(event, &out_dir));
        })
        .await?;

    info!("Generated {} icon components", report.icon_count);

    Ok(report)
}

fn progress_line(event: &BuildEvent, out_dir: &str) -> String {
    match event {
        BuildEvent::IconGenerated { output_name, .. } => format!("✨ {}", output_name.green()),
        BuildEvent::AggregateWritten { path } => {
            format!("📦 {} built!", format!("{out_dir}/{path}").cyan().bold())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_lines() {
        colored::control::set_override(false);

        let icon = BuildEvent::IconGenerated {
            output_name: "PhAcorn".to_string(),
            path: "components/PhAcorn.astro".to_string(),
        };
        assert_eq!(progress_line(&icon, "dist"), "✨ PhAcorn");

        let index = BuildEvent::AggregateWritten {
            path: "index.d.ts".to_string(),
        };
        assert_eq!(progress_line(&index, "dist"), "📦 dist/index.d.ts built!");
    }
}
