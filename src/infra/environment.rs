//! Environment precondition checks
//!
//! Verifies external tooling before any target is scheduled. A missing
//! required tool is fatal for `build`; `doctor` reports the same checks
//! without aborting.

use std::path::Path;

use crate::error::EnvError;

/// Result of a single tool availability check
#[derive(Debug, Clone)]
pub struct ToolCheck {
    /// Program that was looked up
    pub tool: String,
    /// Resolved path when found
    pub resolved: Option<std::path::PathBuf>,
    /// Install hint shown when missing
    pub hint: String,
}

impl ToolCheck {
    /// Whether the tool resolved
    pub fn found(&self) -> bool {
        self.resolved.is_some()
    }
}

/// Look up the minifier's program.
///
/// A program containing a path separator is resolved against the project
/// directory (the minifier runs with that working directory); a bare name
/// goes through `PATH`.
pub fn check_minifier(project_dir: &Path, command: &[String]) -> ToolCheck {
    let program = command.first().cloned().unwrap_or_default();
    let resolved = if program.contains('/') {
        let candidate = project_dir.join(&program);
        candidate.is_file().then_some(candidate)
    } else {
        which::which(&program).ok()
    };
    ToolCheck {
        tool: program,
        resolved,
        hint: "Install it or set [build] minifier in jsbuild.toml".to_string(),
    }
}

/// Fatal precondition check used by `build`: when `required` (some
/// applicable target minifies), the minifier program must resolve.
pub fn ensure_minifier(
    project_dir: &Path,
    command: &[String],
    required: bool,
) -> Result<(), EnvError> {
    if !required {
        return Ok(());
    }
    let check = check_minifier(project_dir, command);
    if check.found() {
        Ok(())
    } else {
        Err(EnvError::ToolNotFound {
            tool: check.tool,
            hint: check.hint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_not_required_always_passes() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let cmd = vec!["jsbuild-no-such-tool".to_string()];
        assert!(ensure_minifier(dir.path(), &cmd, false).is_ok());
    }

    #[test]
    fn test_missing_tool_fails_when_required() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let cmd = vec!["jsbuild-no-such-tool".to_string()];
        assert!(matches!(
            ensure_minifier(dir.path(), &cmd, true),
            Err(EnvError::ToolNotFound { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_path_tool_resolves_in_path() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let cmd = vec!["sh".to_string()];
        assert!(ensure_minifier(dir.path(), &cmd, true).is_ok());
    }

    #[test]
    fn test_relative_program_resolves_against_project_dir() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        std::fs::create_dir_all(dir.path().join("tools")).expect("Failed to create directory");
        std::fs::write(dir.path().join("tools/minify.sh"), "#!/bin/sh\n")
            .expect("Failed to write file");

        let cmd = vec!["./tools/minify.sh".to_string()];
        let check = check_minifier(dir.path(), &cmd);
        assert!(check.found());

        let missing = vec!["./tools/other.sh".to_string()];
        assert!(!check_minifier(dir.path(), &missing).found());
    }
}
