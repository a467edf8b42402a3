//! Feed service - the load, split, extract, normalize, render pipeline

use super::source::load_source;
use crate::config::FeedConfig;
use crate::feed::{render_rss, Channel};
use crate::models::{FeedItem, PatchRecord};
use crate::parser::{extract_record, BlockSplitter};
use crate::Result;
use anyhow::Context;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Error raised when the feed cannot be written
#[derive(Debug, thiserror::Error)]
#[error("Failed to write feed '{}': {source}", .path.display())]
pub struct FeedWriteError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

/// Outcome of a successful `generate_feed` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    /// Where the feed was written
    pub output: PathBuf,
    /// Number of `<item>` elements
    pub items: usize,
    /// Items whose publication date fell back to the build time
    pub fallback_dates: usize,
}

/// Split the document into patch blocks and extract one record per block
pub fn extract_records(html: &str, config: &FeedConfig) -> Result<Vec<PatchRecord>> {
    let splitter = BlockSplitter::new(&config.block_class)?;
    let records: Vec<PatchRecord> = splitter
        .split(html)
        .enumerate()
        .map(|(index, fragment)| extract_record(index, fragment))
        .collect();

    tracing::debug!(blocks = records.len(), "extracted patch records");
    Ok(records)
}

/// Derive feed items from the document, in source order
pub fn collect_items(
    html: &str,
    config: &FeedConfig,
    build_time: DateTime<Utc>,
) -> Result<Vec<FeedItem>> {
    let records = extract_records(html, config)?;
    Ok(records
        .iter()
        .map(|record| FeedItem::from_record(record, config, build_time))
        .collect())
}

/// Render the complete RSS document for `html`
pub fn build_feed(html: &str, config: &FeedConfig, build_time: DateTime<Utc>) -> Result<String> {
    let items = collect_items(html, config, build_time)?;
    Ok(render_rss(&Channel::from_config(config, build_time), &items))
}

/// Write the feed, replacing any existing file.
///
/// The document goes to a sibling `.tmp` file first and is renamed into
/// place.
pub fn write_feed(path: &Path, xml: &str) -> std::result::Result<(), FeedWriteError> {
    let to_error = |source: std::io::Error| FeedWriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }

    let temp_path = path.with_extension("xml.tmp");
    fs::write(&temp_path, xml).map_err(to_error)?;
    fs::rename(&temp_path, path).map_err(to_error)?;

    Ok(())
}

/// Run the whole pipeline from `source` to `output`
pub fn generate_feed(
    source: &Path,
    output: &Path,
    config: &FeedConfig,
    build_time: DateTime<Utc>,
) -> Result<GenerateReport> {
    let html = load_source(source)?;
    let items = collect_items(&html, config, build_time)?;
    let xml = render_rss(&Channel::from_config(config, build_time), &items);

    write_feed(output, &xml)?;

    let report = GenerateReport {
        output: output.to_path_buf(),
        items: items.len(),
        fallback_dates: items.iter().filter(|item| item.pub_date.is_fallback()).count(),
    };
    tracing::info!(
        output = %output.display(),
        items = report.items,
        fallback_dates = report.fallback_dates,
        "feed written"
    );

    Ok(report)
}

/// Load the source and derive its items without writing anything
pub fn preview_items(
    source: &Path,
    config: &FeedConfig,
    build_time: DateTime<Utc>,
) -> Result<Vec<FeedItem>> {
    let html = load_source(source)?;
    collect_items(&html, config, build_time)
        .with_context(|| format!("Failed to extract patch notes from {}", source.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn build_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_extract_records_in_order() {
        let html = r#"<div class="patch terminal-patch"><strong>[2]</strong></div>
<div class="patch terminal-patch"><strong>[1]</strong></div>"#;

        let records = extract_records(html, &FeedConfig::default()).unwrap();
        let versions: Vec<&str> = records.iter().map(|r| r.version.as_str()).collect();
        assert_eq!(versions, vec!["2", "1"]);
    }

    #[test]
    fn test_custom_block_class() {
        let config = FeedConfig {
            block_class: "release".to_string(),
            ..FeedConfig::default()
        };
        let html = r#"<div class="release"><strong>[3.1]</strong></div>"#;

        let records = extract_records(html, &config).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].version, "3.1");
    }

    #[test]
    fn test_write_feed_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("feed.xml");
        std::fs::write(&path, "old").unwrap();

        write_feed(&path, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
        assert!(!temp.path().join("feed.xml.tmp").exists());
    }

    #[test]
    fn test_write_feed_creates_parent_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("public").join("feed.xml");

        write_feed(&path, "<rss/>").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_generate_report_counts_fallback_dates() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("updates.html");
        let output = temp.path().join("feed.xml");
        std::fs::write(
            &source,
            r#"<div class="patch terminal-patch"><span class="meta">2024.01.01</span></div>
<div class="patch terminal-patch"><span class="meta">someday</span></div>"#,
        )
        .unwrap();

        let report = generate_feed(&source, &output, &FeedConfig::default(), build_time()).unwrap();
        assert_eq!(report.items, 2);
        assert_eq!(report.fallback_dates, 1);
        assert_eq!(report.output, output);
    }
}
