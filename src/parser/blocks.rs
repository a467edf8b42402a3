//! Patch block splitting
//!
//! A patch block opens with a `<div>` whose class attribute starts with the
//! configured signature (e.g. `class="patch terminal-patch ..."`). Each block
//! extends to the next opening marker or to the end of the document.

use anyhow::{Context, Result};
use regex::{Matches, Regex};

/// Locates patch block markers for one class signature
#[derive(Debug, Clone)]
pub struct BlockSplitter {
    marker: Regex,
    signature: String,
}

impl BlockSplitter {
    /// Build a splitter for blocks carrying `class="<block_class>..."`
    pub fn new(block_class: &str) -> Result<Self> {
        let signature = format!(r#"class="{}"#, block_class);
        let pattern = format!(r"<div[^>]*{}", regex::escape(&signature));
        let marker = Regex::new(&pattern).context("Failed to compile block marker regex")?;

        Ok(Self { marker, signature })
    }

    /// Lazily split `html` into patch fragments, in document order
    pub fn split<'a>(&'a self, html: &'a str) -> PatchBlocks<'a> {
        PatchBlocks {
            html,
            signature: &self.signature,
            markers: self.marker.find_iter(html),
            cursor: Some(0),
        }
    }
}

/// Iterator over patch fragments of one document.
///
/// The text before the first marker is yielded only if it carries the
/// signature itself, which for ordinary preambles it does not.
pub struct PatchBlocks<'a> {
    html: &'a str,
    signature: &'a str,
    markers: Matches<'a, 'a>,
    cursor: Option<usize>,
}

impl<'a> Iterator for PatchBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self.cursor?;
            let end = match self.markers.next() {
                Some(marker) => {
                    self.cursor = Some(marker.start());
                    marker.start()
                }
                None => {
                    self.cursor = None;
                    self.html.len()
                }
            };

            let fragment = &self.html[start..end];
            if fragment.contains(self.signature) {
                return Some(fragment);
            }
        }
    }
}
