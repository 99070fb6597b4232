//! Source file enumeration
//!
//! Recursively collects `.js` files under a manifest-declared directory.
//! Paths come back relative to the project directory with forward slashes,
//! sorted for a stable concatenation order across platforms and runs.

use std::path::Path;

/// All `.js` files under `project_dir/dir`, sorted.
///
/// A missing or unreadable directory yields an empty list; enumeration is
/// a data source for target resolution and never fails the build.
pub fn scan_js_files(project_dir: &Path, dir: &str) -> Vec<String> {
    let root = project_dir.join(dir);
    let mut files: Vec<String> = walkdir::WalkDir::new(&root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().and_then(|ext| ext.to_str()) == Some("js"))
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(project_dir)
                .ok()
                .map(|rel| rel.components().map(|c| c.as_os_str().to_string_lossy()))
                .map(|parts| parts.collect::<Vec<_>>().join("/"))
        })
        .collect();
    files.sort();
    files
}
