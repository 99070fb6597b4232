//! Default values and well-known file names

/// Manifest file name, resolved relative to the project directory
pub const MANIFEST_FILE: &str = "jsbuild.toml";

/// Persisted build cache file name, resolved relative to the project directory
pub const CACHE_FILE: &str = ".build_cache.json";

/// Suffix appended to an artifact path while it is being produced
pub const TMP_SUFFIX: &str = ".tmp";

/// Default command used to invoke the external minifier
pub fn default_minifier() -> Vec<String> {
    vec!["bun".to_string(), "run".to_string(), "terser".to_string()]
}
