//! Source file fingerprinting
//!
//! A fingerprint is the file's modification time in whole seconds since the
//! Unix epoch, used as a cheap proxy for "content may have changed". No
//! content hashing is performed.

use std::path::Path;
use std::time::UNIX_EPOCH;

/// Comparable freshness value for a source file
pub type Fingerprint = u64;

/// Sentinel recorded for a file that does not exist or cannot be inspected.
/// Compares lower than any real modification time.
pub const ABSENT: Fingerprint = 0;

/// Fingerprint of the file at `path`.
///
/// Filesystem errors never surface; a missing or unreadable file (and a
/// pre-epoch modification time) degrades to [`ABSENT`], which forces a
/// rebuild the same way a brand-new source would.
pub fn fingerprint(path: &Path) -> Fingerprint {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|mtime| mtime.duration_since(UNIX_EPOCH).ok())
        .map_or(ABSENT, |since_epoch| since_epoch.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::{Duration, UNIX_EPOCH};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_absent() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        assert_eq!(fingerprint(&dir.path().join("nope.js")), ABSENT);
    }

    #[test]
    fn test_existing_file_has_real_fingerprint() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("a.js");
        std::fs::write(&path, "var a;").expect("Failed to write file");
        assert_ne!(fingerprint(&path), ABSENT);
    }

    #[test]
    fn test_fingerprint_follows_set_mtime() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("a.js");
        std::fs::write(&path, "var a;").expect("Failed to write file");

        let file = File::options()
            .write(true)
            .open(&path)
            .expect("Failed to open file");
        file.set_modified(UNIX_EPOCH + Duration::from_secs(1_000_000))
            .expect("Failed to set mtime");
        drop(file);

        assert_eq!(fingerprint(&path), 1_000_000);
    }

    #[test]
    fn test_directory_fingerprint_never_panics() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        // Directories have an mtime too; callers only ever pass source files
        // but the function must stay total either way.
        let _ = fingerprint(dir.path());
    }
}
