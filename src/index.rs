//! Markdown file index with last-modified resolution.

use crate::history::HistoryLookup;
use crate::scan;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// A Markdown file with its resolved last-modification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownFile {
    relative_path: PathBuf,
    last_modified: NaiveDateTime,
}

impl MarkdownFile {
    /// Creates a new Markdown file entry.
    pub fn new(relative_path: PathBuf, last_modified: NaiveDateTime) -> Self {
        Self {
            relative_path,
            last_modified,
        }
    }

    /// Returns the path relative to the repository root.
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Returns the last-modification time in UTC.
    pub fn last_modified(&self) -> NaiveDateTime {
        self.last_modified
    }
}

/// Resolves the last-modification time of a file.
///
/// Prefers version control history. Falls back to filesystem metadata when
/// history has no date for the path (untracked file, missing repository or
/// tool).
///
/// # Arguments
///
/// * `root`: Repository root directory
/// * `relative_path`: File path relative to `root`
/// * `history`: History lookup capability
///
/// # Errors
///
/// Returns error if history output is unparseable or the file's metadata
/// cannot be read.
pub fn resolve_last_modified(
    root: impl AsRef<Path>,
    relative_path: &Path,
    history: &dyn HistoryLookup,
) -> Result<NaiveDateTime> {
    let root = root.as_ref();

    if let Some(date) = history.last_modified(root, relative_path)? {
        return Ok(date);
    }

    let full_path = root.join(relative_path);
    let modified = fs::metadata(&full_path)
        .and_then(|m| m.modified())
        .with_context(|| {
            format!(
                "Failed to read modification time of {}",
                full_path.display()
            )
        })?;

    Ok(DateTime::<Utc>::from(modified).naive_utc())
}

/// Builds the sorted Markdown file index for a repository.
///
/// Scans for Markdown files, resolves each file's last-modification time,
/// and sorts most recent first. Equal timestamps keep traversal order.
///
/// # Arguments
///
/// * `root`: Repository root directory
/// * `history`: History lookup capability
///
/// # Errors
///
/// Returns error if scanning fails or any file's date cannot be resolved.
pub fn build_index(
    root: impl AsRef<Path>,
    history: &dyn HistoryLookup,
) -> Result<Vec<MarkdownFile>> {
    let root = root.as_ref();
    let mut files = Vec::new();

    for relative in scan::find_markdown_files(root)? {
        let last_modified = resolve_last_modified(root, &relative, history)?;
        files.push(MarkdownFile::new(relative, last_modified));
    }

    files.sort_by(|a, b| b.last_modified().cmp(&a.last_modified()));

    Ok(files)
}
