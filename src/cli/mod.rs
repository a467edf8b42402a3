//! CLI command handlers

pub mod generate;
pub mod preview;

use crate::config::{resolve_project_root, FeedConfig};
use crate::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Project root and the configuration loaded for it
#[derive(Debug, Clone)]
pub struct ProjectContext {
    pub root: PathBuf,
    pub config: FeedConfig,
}

impl ProjectContext {
    /// Resolve the root and load `patchfeed.toml` (or an explicit config file)
    pub fn load(root: Option<&Path>, config_file: Option<&Path>) -> Result<Self> {
        let root = resolve_project_root(root).context("Failed to determine project root")?;

        let config = match config_file {
            Some(path) => FeedConfig::load_from(path)?,
            None => FeedConfig::load(&root)?,
        };
        tracing::debug!(root = %root.display(), "using project root");

        Ok(Self { root, config })
    }

    /// Source path, honouring a command-line override
    pub fn source_path(&self, input: Option<&Path>) -> PathBuf {
        match input {
            Some(path) => self.root.join(path),
            None => self.config.source_path(&self.root),
        }
    }

    /// Output path, honouring a command-line override
    pub fn output_path(&self, output: Option<&Path>) -> PathBuf {
        match output {
            Some(path) => self.root.join(path),
            None => self.config.output_path(&self.root),
        }
    }
}
