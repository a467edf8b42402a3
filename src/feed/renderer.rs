//! RSS 2.0 renderer
//!
//! Produces the feed document one element per line. Text fields are
//! XML-escaped; item descriptions are wrapped in CDATA.

use crate::config::FeedConfig;
use crate::models::FeedItem;
use crate::parser::date::format_rfc2822;
use chrono::{DateTime, Utc};

/// Channel-level metadata of the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub title: String,
    pub link: String,
    pub description: String,
    pub last_build_date: DateTime<Utc>,
}

impl Channel {
    pub fn from_config(config: &FeedConfig, build_time: DateTime<Utc>) -> Self {
        Self {
            title: config.site_title.clone(),
            link: config.site_link.clone(),
            description: config.site_description.clone(),
            last_build_date: build_time,
        }
    }
}

/// Serialize the channel and its items as an RSS 2.0 document
pub fn render_rss(channel: &Channel, items: &[FeedItem]) -> String {
    let mut lines = vec![
        r#"<?xml version="1.0" encoding="utf-8"?>"#.to_string(),
        r#"<rss version="2.0">"#.to_string(),
        "<channel>".to_string(),
        element("title", &channel.title),
        element("link", &channel.link),
        element("description", &channel.description),
        element("lastBuildDate", &format_rfc2822(channel.last_build_date)),
    ];

    for item in items {
        lines.push("<item>".to_string());
        lines.push(element("title", &item.title));
        lines.push(element("link", &item.link));
        lines.push(element("guid", &item.guid));
        lines.push(element("pubDate", &item.pub_date.to_rfc2822()));
        lines.push(format!(
            "<description>{}</description>",
            wrap_cdata(&item.description)
        ));
        lines.push("</item>".to_string());
    }

    lines.push("</channel>".to_string());
    lines.push("</rss>".to_string());

    let mut document = lines.join("\n");
    document.push('\n');
    document
}

fn element(tag: &str, text: &str) -> String {
    format!("<{}>{}</{}>", tag, escape_xml(text), tag)
}

/// Escape text for use in XML character data or attribute values
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Wrap text in a CDATA section, splitting any embedded `]]>`
pub fn wrap_cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}
