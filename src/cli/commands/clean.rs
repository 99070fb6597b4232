//! Clean command implementation
//!
//! Removes every artifact the manifest declares, leftover temporary files
//! from interrupted builds, and the persisted cache.

use std::path::Path;

use anyhow::Result;

use crate::cli::output::status;
use crate::config::{defaults, Manifest};

/// Execute the clean command
pub fn execute(project_dir: &Path, manifest_path: Option<&Path>) -> Result<()> {
    let manifest_path = manifest_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| project_dir.join(defaults::MANIFEST_FILE));
    let manifest = Manifest::load(&manifest_path)?;

    let mut removed = 0usize;
    for target in &manifest.targets {
        removed += remove_if_present(&project_dir.join(&target.output))?;
        let tmp = format!("{}{}", target.output, defaults::TMP_SUFFIX);
        removed += remove_if_present(&project_dir.join(tmp))?;
    }
    removed += remove_if_present(&project_dir.join(defaults::CACHE_FILE))?;

    println!("{} Removed {removed} files", status::SUCCESS);
    Ok(())
}

fn remove_if_present(path: &Path) -> Result<usize> {
    if path.exists() {
        std::fs::remove_file(path)?;
        tracing::debug!("Removed {}", path.display());
        Ok(1)
    } else {
        Ok(0)
    }
}
