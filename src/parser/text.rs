//! Markup-to-text helpers for list items and meta spans.

use regex::Regex;
use std::sync::LazyLock;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("TAG regex should compile"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex should compile"));

/// Remove every `<...>` tag, keeping the text between them
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// Decode character references the way browsers do in text content.
///
/// Covers the full HTML5 named table, legacy names without a trailing
/// semicolon (`&copy 2024`) and the Windows-1252 remapping of numeric
/// references in the 0x80..0x9F range. Unknown names are left untouched.
pub fn decode_html_entities(text: &str) -> String {
    htmlize::unescape(text).into_owned()
}

/// Tag-strip, decode, and trim one list item
pub fn clean_fragment_text(html: &str) -> String {
    decode_html_entities(&strip_tags(html)).trim().to_string()
}

/// Collapse runs of whitespace (including newlines) into one space
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("Improved <b>load</b> times"), "Improved load times");
        assert_eq!(
            strip_tags(r#"see <a href="/x">the docs</a>"#),
            "see the docs"
        );
    }

    #[test]
    fn test_decodes_named_entities() {
        assert_eq!(decode_html_entities("Fish &amp; chips"), "Fish & chips");
        assert_eq!(decode_html_entities("&lt;tag&gt;"), "<tag>");
        assert_eq!(decode_html_entities("wait&hellip;"), "wait\u{2026}");
    }

    #[test]
    fn test_decodes_numeric_entities() {
        assert_eq!(decode_html_entities("&#39;quoted&#x27;"), "'quoted'");
        assert_eq!(decode_html_entities("&#X41;"), "A");
        assert_eq!(decode_html_entities("&#0;"), "\u{fffd}");
        assert_eq!(decode_html_entities("&#xD800;"), "\u{fffd}");
    }

    #[test]
    fn test_decodes_full_named_table() {
        assert_eq!(clean_fragment_text("Caf&eacute; menu"), "Caf\u{e9} menu");
        assert_eq!(decode_html_entities("Done &check;"), "Done \u{2713}");
        assert_eq!(decode_html_entities("I &hearts; patches"), "I \u{2665} patches");
    }

    #[test]
    fn test_decodes_legacy_entity_without_semicolon() {
        assert_eq!(decode_html_entities("&copy 2024"), "\u{a9} 2024");
    }

    #[test]
    fn test_windows_1252_numeric_reference() {
        assert_eq!(decode_html_entities("dash &#150; x"), "dash \u{2013} x");
    }

    #[test]
    fn test_unknown_entity_is_kept() {
        assert_eq!(decode_html_entities("&bogus; & co"), "&bogus; & co");
    }

    #[test]
    fn test_decoding_happens_after_stripping() {
        // Escaped markup stays as literal text
        assert_eq!(clean_fragment_text("use &lt;br&gt; <i>here</i>"), "use <br> here");
    }

    #[test]
    fn test_clean_trims_nbsp() {
        assert_eq!(clean_fragment_text("&nbsp; padded \n"), "padded");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  2024.03.15 \n  "), "2024.03.15");
        assert_eq!(collapse_whitespace("a\n\t b"), "a b");
    }
}
