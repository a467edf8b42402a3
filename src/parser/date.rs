//! Publication date normalization
//!
//! Patch notes carry their date as free text in the meta span. A fixed list
//! of formats is tried in order; when none matches, the build time is used.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Serialize, Serializer};

/// One accepted shape of a meta date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// Calendar date, interpreted as midnight UTC
    Date(&'static str),
    /// Date with wall-clock time, interpreted as UTC
    DateTime(&'static str),
    /// Four-digit year, interpreted as January 1st
    Year,
}

/// Accepted formats, in priority order
pub const DATE_FORMATS: [DateFormat; 4] = [
    DateFormat::Date("%Y.%m.%d"),
    DateFormat::Date("%Y-%m-%d"),
    DateFormat::DateTime("%Y.%m.%d %H:%M"),
    DateFormat::Year,
];

impl DateFormat {
    /// Parse `text` with this format only
    pub fn parse(&self, text: &str) -> Option<DateTime<Utc>> {
        match self {
            DateFormat::Date(fmt) => NaiveDate::parse_from_str(text, fmt)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc()),
            DateFormat::DateTime(fmt) => NaiveDateTime::parse_from_str(text, fmt)
                .ok()
                .map(|naive| naive.and_utc()),
            DateFormat::Year => {
                if text.len() != 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                text.parse::<i32>()
                    .ok()
                    .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
                    .map(|naive| naive.and_utc())
            }
        }
    }
}

/// Try every known format against the meta text; first match wins
pub fn parse_meta_date(meta: &str) -> Option<DateTime<Utc>> {
    let text = meta.trim();
    if text.is_empty() {
        return None;
    }
    DATE_FORMATS.iter().find_map(|format| format.parse(text))
}

/// Publication moment of a feed item.
///
/// Serializes as the same RFC 2822 string that goes into `<pubDate>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PubDate {
    /// Parsed from the block's meta text
    Parsed(DateTime<Utc>),
    /// Meta absent or unparseable; the run's build time stands in
    BuildTime(DateTime<Utc>),
}

impl PubDate {
    /// Normalize optional meta text, falling back to `build_time`
    pub fn normalize(meta: Option<&str>, build_time: DateTime<Utc>) -> Self {
        match meta.and_then(parse_meta_date) {
            Some(parsed) => PubDate::Parsed(parsed),
            None => PubDate::BuildTime(build_time),
        }
    }

    pub fn instant(&self) -> DateTime<Utc> {
        match self {
            PubDate::Parsed(at) | PubDate::BuildTime(at) => *at,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, PubDate::BuildTime(_))
    }

    /// RFC 2822 rendering used by `<pubDate>`
    pub fn to_rfc2822(&self) -> String {
        format_rfc2822(self.instant())
    }
}

impl Serialize for PubDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc2822())
    }
}

/// Render a moment the way RSS 2.0 expects, e.g. `Fri, 15 Mar 2024 00:00:00 +0000`
pub fn format_rfc2822(at: DateTime<Utc>) -> String {
    at.to_rfc2822()
}
