use crate::config::FeedConfig;
use crate::parser::date::PubDate;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Title used when a block has no bracketed version label
pub const VERSION_SENTINEL: &str = "unknown";

/// Description used when a block has no list items
pub const EMPTY_DESCRIPTION: &str = "Patch release.";

/// Prefix of synthesized anchors (`patch-<version>`)
pub const ANCHOR_PREFIX: &str = "patch-";

/// A default substituted for a field the block did not provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// No `<strong>[...]</strong>` label; version is `"unknown"`
    Version,
    /// No meta span; the publication date will use the build time
    Meta,
    /// No `id` attribute; anchor is `"patch-" + version`
    Anchor,
}

/// One patch block, as extracted from the source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchRecord {
    /// Release label, never empty
    pub version: String,

    /// Raw meta text, expected to hold a date
    pub meta: Option<String>,

    /// Plain-text list items in document order
    pub description_lines: Vec<String>,

    /// Fragment identifier of the block, never empty
    pub anchor: String,

    /// Defaults applied while extracting this record
    pub fallbacks: Vec<Fallback>,
}

impl PatchRecord {
    /// Bullet lines joined by newlines, or the fixed sentence when empty
    pub fn description(&self) -> String {
        if self.description_lines.is_empty() {
            return EMPTY_DESCRIPTION.to_string();
        }
        self.description_lines
            .iter()
            .map(|line| format!("- {}", line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn used_fallback(&self, fallback: Fallback) -> bool {
        self.fallbacks.contains(&fallback)
    }
}

/// One `<item>` of the generated feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub guid: String,
    pub pub_date: PubDate,
    pub description: String,
}

impl FeedItem {
    pub fn from_record(record: &PatchRecord, config: &FeedConfig, build_time: DateTime<Utc>) -> Self {
        let link = config.item_link(&record.anchor);
        Self {
            title: record.version.clone(),
            guid: link.clone(),
            link,
            pub_date: PubDate::normalize(record.meta.as_deref(), build_time),
            description: record.description(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(lines: &[&str]) -> PatchRecord {
        PatchRecord {
            version: "00.10.02".to_string(),
            meta: Some("2024.03.15".to_string()),
            description_lines: lines.iter().map(|s| s.to_string()).collect(),
            anchor: "patch-00.10.02".to_string(),
            fallbacks: Vec::new(),
        }
    }

    #[test]
    fn test_description_joins_bullets() {
        let record = record(&["Fixed login bug", "Improved load times"]);
        assert_eq!(record.description(), "- Fixed login bug\n- Improved load times");
    }

    #[test]
    fn test_empty_description_uses_sentence() {
        assert_eq!(record(&[]).description(), "Patch release.");
    }

    #[test]
    fn test_feed_item_from_record() {
        let build_time = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let item = FeedItem::from_record(&record(&["One"]), &FeedConfig::default(), build_time);

        assert_eq!(item.title, "00.10.02");
        assert_eq!(item.link, "https://maroon-series.art/updates.html#patch-00.10.02");
        assert_eq!(item.guid, item.link);
        assert_eq!(
            item.pub_date,
            PubDate::Parsed(Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(item.description, "- One");
    }

    #[test]
    fn test_feed_item_without_meta_uses_build_time() {
        let build_time = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let mut record = record(&[]);
        record.meta = None;

        let item = FeedItem::from_record(&record, &FeedConfig::default(), build_time);
        assert_eq!(item.pub_date, PubDate::BuildTime(build_time));
    }

    #[test]
    fn test_feed_item_json_matches_feed_fields() {
        let build_time = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let item = FeedItem::from_record(&record(&["One"]), &FeedConfig::default(), build_time);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["title"], "00.10.02");
        assert_eq!(json["guid"], json["link"]);
        assert_eq!(json["pub_date"], "Fri, 15 Mar 2024 00:00:00 +0000");
        assert_eq!(json["description"], "- One");
    }
}
