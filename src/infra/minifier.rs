//! External minifier invocation
//!
//! The minifier is an opaque command (by default `bun run terser`) that
//! consumes an explicit ordered list of input files and an output path.
//! It runs with the project directory as working directory so the
//! manifest's relative paths resolve unchanged.

use std::path::Path;
use std::process::Command;

use crate::error::BuildError;

/// Run the minifier over `sources`, writing `output_path`.
///
/// Invoked as `<command...> <sources...> --output <output_path>`. A launch
/// failure or non-zero exit status surfaces as a [`BuildError`] carrying
/// the captured stderr; the caller decides what to do with any partial
/// output file.
pub fn minify(
    project_dir: &Path,
    command: &[String],
    target_name: &str,
    sources: &[String],
    output_path: &str,
) -> Result<(), BuildError> {
    let (program, args) = command.split_first().ok_or_else(|| BuildError::MinifierLaunch {
        target: target_name.to_string(),
        program: String::new(),
        error: "empty minifier command".to_string(),
    })?;

    let output = Command::new(program)
        .args(args)
        .args(sources)
        .arg("--output")
        .arg(output_path)
        .current_dir(project_dir)
        .output()
        .map_err(|e| BuildError::MinifierLaunch {
            target: target_name.to_string(),
            program: program.clone(),
            error: e.to_string(),
        })?;

    if output.status.success() {
        Ok(())
    } else {
        Err(BuildError::MinifierFailed {
            target: target_name.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}
