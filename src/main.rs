use anyhow::{Context, Result};
use chrono::Utc;
use mdindex::{Config, GitHistory};

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let files = mdindex::build_index(&config.root, &GitHistory)
        .context("Failed to index markdown files")?;

    // One clock read so every row and the trailing stamp agree
    let now = Utc::now().naive_utc();
    let block = mdindex::render_block(&files, now);

    mdindex::update_readme(&config.root, &block).context("Failed to update README.md")?;

    println!(
        "README.md updated successfully with {} markdown file(s).",
        files.len()
    );

    Ok(())
}
