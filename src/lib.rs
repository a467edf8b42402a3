// patchfeed - RSS feed generator for HTML patch notes
// Reads patch blocks from a hand-written page and republishes them as RSS 2.0

pub mod cli;
pub mod config;
pub mod feed;
pub mod models;
pub mod parser;
pub mod services;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use config::FeedConfig;
pub use models::{FeedItem, PatchRecord};
pub use services::{generate_feed, GenerateReport, SourceError};
