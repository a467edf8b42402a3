//! Source loader - reads the patch notes document

use std::path::{Path, PathBuf};

/// Errors raised while loading the source document
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("source file not found: {}", .path.display())]
    Missing { path: PathBuf },

    #[error("failed to read source '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read the whole document as UTF-8, with a leading BOM stripped
pub fn load_source(path: &Path) -> Result<String, SourceError> {
    if !path.exists() {
        return Err(SourceError::Missing {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded source");

    match content.strip_prefix('\u{FEFF}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(content),
    }
}
