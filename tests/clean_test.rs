//! Integration tests for `jsbuild clean`

mod common;

use common::{run_jsbuild, TestProject};

fn setup_project() -> TestProject {
    let project = TestProject::new();
    project.create_file(
        "jsbuild.toml",
        r#"
[project]
name = "demo"

[[target]]
name = "bundle"
output = "out/bundle.js"
kind = "concat"
sources = ["src/a.js"]
"#,
    );
    project.create_file("src/a.js", "var a;");
    project
}

#[test]
fn test_clean_removes_artifacts_and_cache() {
    let project = setup_project();
    assert!(run_jsbuild(&project.path(), &["build"]).status.success());
    assert!(project.file_exists("out/bundle.js"));
    assert!(project.file_exists(".build_cache.json"));

    let output = run_jsbuild(&project.path(), &["clean"]);
    assert!(output.status.success());

    assert!(!project.file_exists("out/bundle.js"));
    assert!(!project.file_exists(".build_cache.json"));
    // Sources are never touched
    assert!(project.file_exists("src/a.js"));
}

#[test]
fn test_clean_then_build_regenerates_everything() {
    let project = setup_project();
    assert!(run_jsbuild(&project.path(), &["build"]).status.success());
    assert!(run_jsbuild(&project.path(), &["clean"]).status.success());

    let output = run_jsbuild(&project.path(), &["build"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Targets built: 1"));
}

#[test]
fn test_clean_without_manifest_fails() {
    let project = TestProject::new();
    let output = run_jsbuild(&project.path(), &["clean"]);
    assert!(!output.status.success());
}

#[test]
fn test_clean_on_fresh_project_succeeds() {
    let project = setup_project();
    let output = run_jsbuild(&project.path(), &["clean"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Removed 0 files"));
}
