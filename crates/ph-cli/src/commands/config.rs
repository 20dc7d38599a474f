//! Configuration loading.
//!
//! The build takes no arguments. Settings come from an optional
//! `phosphor-astro.toml` in the working directory:
//!
//! ```toml
//! assets_dir = "node_modules/@phosphor-icons/core/assets"
//! catalog = "icons.json"
//! out_dir = "dist"
//! log_level = "info"
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use anyhow::{Context, Result};
use ph_core::BuildConfig;
use std::fs;
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "phosphor-astro.toml";

/// Loads the configuration for a build rooted at `dir`.
///
/// Falls back to defaults when `dir` has no [`CONFIG_FILE`].
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, has
/// unknown keys, or fails validation.
pub fn load_config(dir: &Path) -> Result<BuildConfig> {
    let config_path = dir.join(CONFIG_FILE);

    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        toml::from_str::<BuildConfig>(&content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?
    } else {
        BuildConfig::default()
    };

    config.validate()?;

    Ok(resolve_paths(config, dir))
}

fn resolve_paths(config: BuildConfig, dir: &Path) -> BuildConfig {
    BuildConfig {
        assets_dir: dir.join(config.assets_dir),
        catalog: dir.join(config.catalog),
        out_dir: dir.join(config.out_dir),
        log_level: config.log_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path()).unwrap();

        assert_eq!(config.out_dir, dir.path().join("dist"));
        assert_eq!(config.catalog, dir.path().join("icons.json"));
        assert_eq!(
            config.assets_dir,
            dir.path().join("node_modules/@phosphor-icons/core/assets")
        );
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "out_dir = \"build\"\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.out_dir, dir.path().join("build"));
        assert_eq!(config.catalog, dir.path().join("icons.json"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let dir = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            format!("out_dir = {:?}\n", out.path().display().to_string()),
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.out_dir, out.path());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "outdir = \"build\"\n").unwrap();

        let err = load_config(dir.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "log_level = \"loud\"\n").unwrap();

        let err = load_config(dir.path()).unwrap_err();
        let core = err.downcast_ref::<ph_core::Error>().unwrap();
        assert!(core.is_config_error());
    }
}
