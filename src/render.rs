//! Relative date formatting and table rendering.

use crate::index::MarkdownFile;
use chrono::NaiveDateTime;

/// Formats a last-modification time relative to the current time.
///
/// Produces strings like "Today", "3 days ago", or "2 months ago". Dates a
/// year or more old render as an absolute "Month DD, YYYY". Future
/// timestamps are treated as the present.
///
/// # Arguments
///
/// * `now`: Current time in UTC
/// * `last_modified`: Modification time in UTC
///
/// # Returns
///
/// Human readable relative date string
pub fn format_relative_date(now: NaiveDateTime, last_modified: NaiveDateTime) -> String {
    // Clock skew can put mtimes ahead of now; clamp instead of counting
    // backwards
    let days = (now - last_modified).num_days().max(0);

    if days == 0 {
        "Today".to_string()
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        let weeks = days / 7;
        format!("{} week{} ago", weeks, if weeks > 1 { "s" } else { "" })
    } else if days < 365 {
        let months = days / 30;
        format!("{} month{} ago", months, if months > 1 { "s" } else { "" })
    } else {
        last_modified.format("%B %d, %Y").to_string()
    }
}

/// Renders the managed README section for a file index.
///
/// Produces the section heading, a `File | Last Modified` table with one
/// row per file, and a trailing generation-timestamp line. Paths are
/// rendered as links with spaces percent-encoded. An empty index renders a
/// placeholder line instead of a table.
///
/// # Arguments
///
/// * `files`: Markdown file index, already sorted
/// * `now`: Generation time in UTC
///
/// # Returns
///
/// Rendered Markdown block
pub fn render_block(files: &[MarkdownFile], now: NaiveDateTime) -> String {
    let mut block = String::from("\n## Markdown Files in This Repository\n\n");

    if files.is_empty() {
        block.push_str("_No markdown files found in this repository (excluding README.md)._\n");
    } else {
        block.push_str("| File | Last Modified |\n");
        block.push_str("|------|---------------|\n");

        for file in files {
            let label = file.relative_path().display().to_string();
            let target = label.replace(' ', "%20");
            let date = format_relative_date(now, file.last_modified());
            block.push_str(&format!("| [{}]({}) | {} |\n", label, target, date));
        }
    }

    block.push_str(&format!(
        "\n_Last updated: {} UTC_\n",
        now.format("%Y-%m-%d %H:%M:%S")
    ));

    block
}
