//! Markdown file discovery.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory names pruned from traversal at every depth.
const EXCLUDED_DIRS: &[&str] = &["node_modules", "build", "dist"];

/// Returns true if a path names a Markdown file.
///
/// Matches the `.md` suffix of the file name case-insensitively, so
/// `notes.MD` counts.
pub fn is_markdown(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_lowercase().ends_with(".md"))
        .unwrap_or(false)
}

/// Returns true if a path names the repository README.
pub fn is_readme(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_lowercase() == "readme.md")
        .unwrap_or(false)
}

/// Returns true if a directory entry should be pruned from traversal.
///
/// Applies only to directories; a hidden file is still collected.
fn is_excluded_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || EXCLUDED_DIRS.contains(&name.as_ref())
}

/// Finds all Markdown files under a repository root.
///
/// Walks the tree, pruning hidden directories and `node_modules`, `build`,
/// and `dist` at every level. Collects files whose name ends in `.md`
/// case-insensitively, except the README itself. Returned paths are
/// relative to `root`, in traversal order.
///
/// # Arguments
///
/// * `root`: Repository root directory
///
/// # Returns
///
/// Root-relative paths of the Markdown files found
///
/// # Errors
///
/// Returns error if the root does not exist or a directory cannot be read.
pub fn find_markdown_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut files = Vec::new();

    // Depth 0 is the root itself, which must never be pruned even when its
    // name is hidden-like (e.g. the default ".")
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded_dir(e));

    for entry in walker {
        let entry = entry
            .with_context(|| format!("Failed to read directory tree under {}", root.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_markdown(path) || is_readme(path) {
            continue;
        }

        let relative = path
            .strip_prefix(root)
            .with_context(|| format!("Path {} is not under {}", path.display(), root.display()))?;

        files.push(relative.to_path_buf());
    }

    Ok(files)
}
