//! Feed configuration
//!
//! Channel metadata and file locations are read from `patchfeed.toml` in the
//! project root. Every key is optional; a missing file means all defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file inside the project root
pub const CONFIG_FILE: &str = "patchfeed.toml";

/// Errors raised while loading `patchfeed.toml`
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Channel metadata and input/output locations
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeedConfig {
    /// `<title>` of the RSS channel
    pub site_title: String,

    /// Base URL of the site, also the channel `<link>`
    pub site_link: String,

    /// `<description>` of the RSS channel
    pub site_description: String,

    /// Page the patch notes are published on; item links point into it
    pub page: String,

    /// Source HTML document, relative to the project root
    pub source: PathBuf,

    /// Output feed, relative to the project root
    pub output: PathBuf,

    /// Class signature that marks the start of a patch block
    pub block_class: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            site_title: "maroon-series.art - Patch Notes".to_string(),
            site_link: "https://maroon-series.art/".to_string(),
            site_description: "Patch notes for Mar00n series site.".to_string(),
            page: "updates.html".to_string(),
            source: PathBuf::from("updates.html"),
            output: PathBuf::from("feed.xml"),
            block_class: "patch terminal-patch".to_string(),
        }
    }
}

impl FeedConfig {
    /// Load config from `<project_root>/patchfeed.toml`, or defaults if absent
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let config_path = project_root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Load config from an explicit file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Absolute location of the source document
    pub fn source_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.source)
    }

    /// Absolute location of the generated feed
    pub fn output_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.output)
    }

    /// Deep link to a patch block: site base + page + `#anchor`
    pub fn item_link(&self, anchor: &str) -> String {
        let mut link = self.site_link.clone();
        if !link.is_empty() && !link.ends_with('/') && !self.page.is_empty() {
            link.push('/');
        }
        link.push_str(&self.page);
        link.push('#');
        link.push_str(anchor);
        link
    }
}

/// Resolve the project root.
///
/// An explicit root wins. Otherwise the root is the parent of the invocation
/// directory (the tool is meant to be run from `scripts/` inside the site);
/// at the filesystem root the invocation directory itself is used.
pub fn resolve_project_root(explicit: Option<&Path>) -> std::io::Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }

    let current_dir = std::env::current_dir()?;
    Ok(current_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(current_dir))
}
