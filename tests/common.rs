//! Shared test utilities for integration tests.
//!
//! Builds throwaway git repositories and commits files into them with
//! pinned dates, so relative-date assertions stay deterministic.

use anyhow::{Result, bail};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Creates a temporary git repository with identity configured.
///
/// # Errors
///
/// Returns error if git is unavailable or initialization fails
pub fn create_test_repo() -> Result<TempDir> {
    let dir = TempDir::new()?;

    run_git(dir.path(), &["init"], None)?;
    run_git(dir.path(), &["config", "user.name", "Test User"], None)?;
    run_git(dir.path(), &["config", "user.email", "test@example.com"], None)?;

    Ok(dir)
}

/// Writes a file into the repository, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(repo_path: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = repo_path.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Writes a file, stages it, and commits it with a pinned date.
///
/// # Arguments
///
/// * `repo_path`: Path to git repository
/// * `path`: Repository-relative file path
/// * `content`: File content
/// * `date`: Commit date in a format git accepts, e.g.
///   `2024-06-13 12:00:00 +0000`
///
/// # Errors
///
/// Returns error if the write or any git command fails
pub fn commit_file(repo_path: &Path, path: &str, content: &str, date: &str) -> Result<()> {
    write_file(repo_path, path, content)?;
    run_git(repo_path, &["add", path], None)?;
    run_git(
        repo_path,
        &["commit", "-m", &format!("Commit {}", path)],
        Some(date),
    )?;
    Ok(())
}

/// Runs a git command in the repository, optionally pinning commit dates.
fn run_git(repo_path: &Path, args: &[&str], date: Option<&str>) -> Result<()> {
    let mut command = Command::new("git");
    command.args(args).current_dir(repo_path);

    if let Some(date) = date {
        command
            .env("GIT_AUTHOR_DATE", date)
            .env("GIT_COMMITTER_DATE", date);
    }

    let output = command.output()?;

    if !output.status.success() {
        bail!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(())
}
