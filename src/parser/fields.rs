//! Field extraction for a single patch block
//!
//! Every field is best-effort: a block with missing or malformed parts still
//! yields a record. Each substituted default is recorded as a [`Fallback`].

use super::text::{clean_fragment_text, collapse_whitespace, decode_html_entities, strip_tags};
use crate::models::{Fallback, PatchRecord, ANCHOR_PREFIX, VERSION_SENTINEL};
use regex::Regex;
use std::sync::LazyLock;

static VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<strong>\[(.*?)\]</strong>").expect("VERSION regex should compile")
});
// Plain text directly inside the span, on one line
static META_STRICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<span class="meta">([^<\n]*)<"#).expect("META_STRICT regex should compile")
});
// Extra attributes, nested tags and line breaks allowed
static META_PERMISSIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<span\s+class="meta"[^>]*>(.*?)</span>"#)
        .expect("META_PERMISSIVE regex should compile")
});
static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<li(?:\s[^>]*)?>(.*?)</li>").expect("LIST_ITEM regex should compile")
});
static ID_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)id\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("ID_ATTR regex should compile")
});

/// Inner text of the first `<strong>[...]</strong>` label
pub fn extract_version(fragment: &str) -> Option<String> {
    VERSION
        .captures(fragment)
        .map(|cap| cap[1].trim().to_string())
        .filter(|version| !version.is_empty())
}

/// Text of the block's meta span, strict pattern first.
///
/// A strict match with no text (the span opens straight into a nested tag)
/// counts as a miss, so the permissive pattern gets its turn.
pub fn extract_meta(fragment: &str) -> Option<String> {
    let strict = META_STRICT
        .captures(fragment)
        .map(|cap| decode_html_entities(cap[1].trim()))
        .filter(|meta| !meta.trim().is_empty());

    let meta = match strict {
        Some(meta) => Some(meta),
        None => META_PERMISSIVE
            .captures(fragment)
            .map(|cap| collapse_whitespace(&decode_html_entities(&strip_tags(&cap[1])))),
    };

    meta.map(|m| m.trim().to_string()).filter(|m| !m.is_empty())
}

/// Cleaned text of every `<li>` in the block, in document order
pub fn extract_description_lines(fragment: &str) -> Vec<String> {
    LIST_ITEM
        .captures_iter(fragment)
        .map(|cap| clean_fragment_text(&cap[1]))
        .collect()
}

/// Value of the first `id` attribute in the block
pub fn extract_anchor(fragment: &str) -> Option<String> {
    ID_ATTR
        .captures(fragment)
        .and_then(|cap| cap.get(1).or_else(|| cap.get(2)))
        .map(|m| m.as_str().trim().to_string())
        .filter(|anchor| !anchor.is_empty())
}

/// Build a record from one fragment, substituting defaults where needed.
///
/// `index` is the block's position in the document and is only used for
/// diagnostics.
pub fn extract_record(index: usize, fragment: &str) -> PatchRecord {
    let mut fallbacks = Vec::new();

    let version = match extract_version(fragment) {
        Some(version) => version,
        None => {
            tracing::debug!(block = index, "no version label, using '{}'", VERSION_SENTINEL);
            fallbacks.push(Fallback::Version);
            VERSION_SENTINEL.to_string()
        }
    };

    let meta = extract_meta(fragment);
    if meta.is_none() {
        tracing::debug!(block = index, version = %version, "no meta span");
        fallbacks.push(Fallback::Meta);
    }

    let anchor = match extract_anchor(fragment) {
        Some(anchor) => anchor,
        None => {
            let synthesized = format!("{}{}", ANCHOR_PREFIX, version);
            tracing::debug!(block = index, anchor = %synthesized, "no id attribute, synthesizing anchor");
            fallbacks.push(Fallback::Anchor);
            synthesized
        }
    };

    PatchRecord {
        version,
        meta,
        description_lines: extract_description_lines(fragment),
        anchor,
        fallbacks,
    }
}
