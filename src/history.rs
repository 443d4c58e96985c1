//! Version control history lookup.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::path::Path;
use std::process::Command;

/// Date format requested from git and used to parse its output.
const GIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of last-modification dates from version control history.
///
/// Implementations report when a file last changed according to recorded
/// history, or `None` when history has no answer and the caller should
/// fall back to filesystem metadata.
pub trait HistoryLookup {
    /// Returns the most recent change date for a file, if history has one.
    ///
    /// # Arguments
    ///
    /// * `root`: Repository root directory
    /// * `path`: File path relative to `root`
    ///
    /// # Returns
    ///
    /// `Some` timestamp in UTC, or `None` when history has nothing for the
    /// path (untracked file, missing repository or tool).
    ///
    /// # Errors
    ///
    /// Returns error only for unexpected conditions, such as history output
    /// that cannot be parsed as a date.
    fn last_modified(&self, root: &Path, path: &Path) -> Result<Option<NaiveDateTime>>;
}

/// History lookup backed by the `git` binary.
///
/// Queries `git log -1` for the most recent commit touching a path. Dates
/// are requested in UTC so results are comparable regardless of commit or
/// local timezones.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitHistory;

impl HistoryLookup for GitHistory {
    fn last_modified(&self, root: &Path, path: &Path) -> Result<Option<NaiveDateTime>> {
        let output = Command::new("git")
            .current_dir(root)
            .env("TZ", "UTC0")
            .args(["log", "-1", "--format=%ad"])
            .arg(format!("--date=format-local:{}", GIT_DATE_FORMAT))
            .arg("--")
            .arg(path)
            .output();

        // Spawn failure means git itself is unavailable, an expected
        // fallback trigger like any other failed query
        let Ok(output) = output else {
            return Ok(None);
        };

        if !output.status.success() {
            return Ok(None);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let date = stdout.trim();
        if date.is_empty() {
            return Ok(None);
        }

        let parsed = NaiveDateTime::parse_from_str(date, GIT_DATE_FORMAT)
            .with_context(|| format!("Unparseable git date {:?} for {}", date, path.display()))?;

        Ok(Some(parsed))
    }
}
