//! Service layer for patchfeed
//!
//! The pipeline lives here so the CLI commands and the integration tests
//! drive exactly the same code.

pub mod feed_service;
pub mod source;

pub use feed_service::{
    build_feed, collect_items, extract_records, generate_feed, preview_items, write_feed,
    FeedWriteError, GenerateReport,
};
pub use source::{load_source, SourceError};
