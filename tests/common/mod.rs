//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, UNIX_EPOCH};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory for test projects and provides
/// utilities for setting up build scenarios.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Pin a file's modification time to a fixed seconds-since-epoch value
    pub fn set_mtime(&self, name: &str, secs: u64) {
        File::options()
            .write(true)
            .open(self.dir.path().join(name))
            .expect("Failed to open file")
            .set_modified(UNIX_EPOCH + Duration::from_secs(secs))
            .expect("Failed to set mtime");
    }

    /// Install an executable fake minifier script that concatenates its
    /// inputs into the `--output` path
    #[cfg(unix)]
    pub fn install_fake_minifier(&self, name: &str) {
        use std::os::unix::fs::PermissionsExt;

        let script = r#"#!/bin/sh
out=""
files=""
while [ $# -gt 0 ]; do
    case "$1" in
        --output) out="$2"; shift 2 ;;
        *) files="$files $1"; shift ;;
    esac
done
cat $files > "$out"
"#;
        self.create_file(name, script);
        let path = self.dir.path().join(name);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark script executable");
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the jsbuild binary with the given arguments inside `project_dir`
pub fn run_jsbuild(project_dir: &Path, args: &[&str]) -> std::process::Output {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_jsbuild"));
    cmd.current_dir(project_dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute jsbuild")
}
