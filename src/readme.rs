//! README managed-region splicing.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use std::fs;
use std::path::Path;

/// Start sentinel of the managed README region.
pub const START_MARKER: &str = "<!-- MARKDOWN_FILES_START -->";

/// End sentinel of the managed README region.
pub const END_MARKER: &str = "<!-- MARKDOWN_FILES_END -->";

static MANAGED_REGION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "(?s){}.*?{}",
        regex::escape(START_MARKER),
        regex::escape(END_MARKER)
    ))
    .unwrap()
});

/// Splices a rendered block into README content.
///
/// When both sentinel markers are present, replaces the first managed
/// region (markers included) with the markers wrapping the new block.
/// Otherwise trims trailing whitespace and appends a new managed region at
/// the end of the document.
///
/// # Arguments
///
/// * `content`: Current README content
/// * `block`: Freshly rendered Markdown block
///
/// # Returns
///
/// Updated README content
pub fn splice(content: &str, block: &str) -> String {
    let replacement = format!("{}\n{}\n{}", START_MARKER, block, END_MARKER);

    if content.contains(START_MARKER) && content.contains(END_MARKER) {
        MANAGED_REGION
            .replace(content, NoExpand(&replacement))
            .into_owned()
    } else {
        format!("{}\n\n{}\n", content.trim_end(), replacement)
    }
}

/// Rewrites the README at the repository root with a rendered block.
///
/// Reads `README.md`, splices the block into its managed region, and
/// overwrites the file in place. The write is not transactional; the
/// managed region is regenerated from scratch on every run.
///
/// # Arguments
///
/// * `root`: Repository root directory
/// * `block`: Freshly rendered Markdown block
///
/// # Errors
///
/// Returns error if `README.md` is missing, unreadable, or cannot be
/// written.
pub fn update_readme(root: impl AsRef<Path>, block: &str) -> Result<()> {
    let readme_path = root.as_ref().join("README.md");

    let content = fs::read_to_string(&readme_path)
        .with_context(|| format!("Failed to read {}", readme_path.display()))?;

    let updated = splice(&content, block);

    fs::write(&readme_path, updated)
        .with_context(|| format!("Failed to write {}", readme_path.display()))?;

    Ok(())
}
