//! Build command implementation
//!
//! Implements `jsbuild build`: loads the manifest, checks environment
//! preconditions and hands the resolved configuration to the build driver.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::output::{self, status};
use crate::config::{defaults, BuildConfig, Manifest};
use crate::core::driver;
use crate::infra::environment;

/// Build options
pub struct BuildOptions {
    /// Also build debug-only targets
    pub debug: bool,
    /// Disable build caching
    pub no_cache: bool,
    /// Number of parallel jobs
    pub jobs: Option<usize>,
    /// Manifest path override
    pub manifest: Option<std::path::PathBuf>,
    /// Suppress the progress spinner
    pub quiet: bool,
}

/// Execute the build command
pub async fn execute(project_dir: &Path, options: BuildOptions) -> Result<()> {
    let manifest_path = options
        .manifest
        .clone()
        .unwrap_or_else(|| project_dir.join(defaults::MANIFEST_FILE));
    let manifest = Manifest::load(&manifest_path)?;

    tracing::info!("Building project: {}", manifest.project.name);
    if options.debug {
        tracing::info!("Build configuration: Debug + Release");
    }
    if options.no_cache {
        tracing::info!("Build caching disabled");
    }

    let config = BuildConfig {
        project_dir: project_dir.to_path_buf(),
        debug: options.debug,
        no_cache: options.no_cache,
        jobs: options.jobs.unwrap_or_else(num_cpus::get),
        minifier: manifest.minifier(),
    };

    // Precondition: the minifier must be present before any target runs
    environment::ensure_minifier(
        project_dir,
        &config.minifier,
        manifest.uses_minifier(config.debug),
    )?;

    let spinner = (!options.quiet).then(|| output::create_spinner("Building targets..."));
    let result = driver::execute(&manifest, &config).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let report = result.context("Build process failed")?;

    println!(
        "{} Build completed successfully in {}",
        status::SUCCESS,
        output::format_duration(report.duration)
    );
    println!("  Targets built: {}", report.built);
    println!("  Targets up to date: {}", report.skipped);

    Ok(())
}
