//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Command line configuration for mdindex.
#[derive(Debug, Clone, Parser)]
#[command(name = "mdindex", version, about, long_about = None)]
pub struct Config {
    /// Repository root to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the repository root does not exist or is not a
    /// directory.
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            bail!("Repository root does not exist: {}", self.root.display());
        }

        if !self.root.is_dir() {
            bail!("Repository root is not a directory: {}", self.root.display());
        }

        Ok(())
    }
}
