//! Real git repository fixtures.
//!
//! All fixtures drive the `git` CLI directly, the same tool the resolver
//! shells out to, so integration tests exercise the real command path.

use std::fs;
use std::path::Path;
use std::process::Command;

fn run(path: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .unwrap_or_else(|e| panic!("fixture: failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "fixture: `git {args:?}` failed:\n{}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// Initialises a repository with one commit on `main`.
///
/// Specifically:
/// - Runs `git init`
/// - Configures `user.email`, `user.name`, and `commit.gpgsign = false`
/// - Creates `README.md` and makes an initial commit
/// - Renames the default branch to `main`
///
/// # Panics
/// Panics if any git operation fails.
pub fn repo_with_commit(path: &Path) {
    run(path, &["init"]);
    run(path, &["config", "user.email", "test@test.com"]);
    run(path, &["config", "user.name", "Test User"]);
    run(path, &["config", "commit.gpgsign", "false"]);

    fs::write(path.join("README.md"), "# Test")
        .unwrap_or_else(|e| panic!("fixture: failed to write README.md: {e}"));

    run(path, &["add", "."]);
    run(path, &["commit", "-m", "Initial commit"]);
    // Best-effort: older git versions may not support this flag
    let _ = Command::new("git")
        .args(["branch", "-m", "main"])
        .current_dir(path)
        .output();
}

/// Configures an `origin` remote with the given fetch URL.
///
/// # Panics
/// Panics if the git operation fails.
pub fn set_origin(path: &Path, url: &str) {
    run(path, &["remote", "add", "origin", url]);
}

/// Creates an annotated tag at HEAD.
///
/// # Panics
/// Panics if the git operation fails.
pub fn tag(path: &Path, name: &str) {
    run(path, &["tag", "-a", name, "-m", name]);
}
