//! Phosphor Astro build CLI.
//!
//! Generates one Astro component per Phosphor icon plus `index.d.ts` and
//! `index.js`. Takes no arguments; paths and the log level come from an
//! optional `phosphor-astro.toml` in the working directory.
//!
//! # Examples
//!
//! ```bash
//! phosphor-astro
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use ph_cli::{load_config, run};
use ph_core::cli::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Generate Astro components and type declarations for Phosphor icons.
#[derive(Parser, Debug)]
#[command(name = "phosphor-astro")]
#[command(version, about, long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() {
    let _cli = Cli::parse();

    let exit_code = match execute().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Build failed: {err:#}");
            eprintln!("{err:?}");
            ExitCode::ERROR
        }
    };

    std::process::exit(exit_code.as_i32());
}

async fn execute() -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let config = load_config(&cwd)?;

    init_logging(&config.log_level)?;

    run(&config).await?;
    Ok(())
}

/// Installs the stderr log subscriber at `level`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
fn init_logging(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}
