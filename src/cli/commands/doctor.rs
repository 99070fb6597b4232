//! Doctor command implementation
//!
//! Reports manifest health and external tooling availability without
//! running a build. Exits non-zero when a check a build would depend on
//! fails.

use std::path::Path;

use anyhow::{bail, Result};

use crate::cli::output::status;
use crate::config::{defaults, Manifest};
use crate::infra::environment;

/// Execute the doctor command
pub fn execute(project_dir: &Path, manifest_path: Option<&Path>) -> Result<()> {
    let manifest_path = manifest_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| project_dir.join(defaults::MANIFEST_FILE));

    let manifest = match Manifest::load(&manifest_path) {
        Ok(manifest) => {
            println!(
                "{} Manifest: {} ({} targets)",
                status::SUCCESS,
                manifest_path.display(),
                manifest.targets.len()
            );
            manifest
        }
        Err(e) => {
            println!("{} Manifest: {e}", status::ERROR);
            bail!("Manifest check failed");
        }
    };

    let mut healthy = true;
    let minifier = manifest.minifier();
    let check = environment::check_minifier(project_dir, &minifier);
    let required = manifest.uses_minifier(true);
    match (&check.resolved, required) {
        (Some(path), _) => {
            println!("{} Minifier: {} ({})", status::SUCCESS, check.tool, path.display());
        }
        (None, true) => {
            println!(
                "{} Minifier: {} not found. {}",
                status::ERROR,
                check.tool,
                check.hint
            );
            healthy = false;
        }
        (None, false) => {
            println!(
                "{} Minifier: {} not found (no target needs it)",
                status::WARNING,
                check.tool
            );
        }
    }

    let cache_path = project_dir.join(defaults::CACHE_FILE);
    if cache_path.exists() {
        println!("{} Build cache: {}", status::INFO, cache_path.display());
    } else {
        println!("{} Build cache: not created yet", status::INFO);
    }

    if healthy {
        Ok(())
    } else {
        bail!("Some required checks failed")
    }
}
