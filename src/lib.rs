//! Markdown file index generator for repository READMEs.

mod config;
mod history;
mod index;
mod readme;
mod render;
mod scan;

pub use config::Config;
pub use history::{GitHistory, HistoryLookup};
pub use index::{MarkdownFile, build_index, resolve_last_modified};
pub use readme::{END_MARKER, START_MARKER, splice, update_readme};
pub use render::{format_relative_date, render_block};
pub use scan::{find_markdown_files, is_markdown, is_readme};
