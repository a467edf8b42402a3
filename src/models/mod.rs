pub mod patch;

pub use patch::{Fallback, FeedItem, PatchRecord, ANCHOR_PREFIX, EMPTY_DESCRIPTION, VERSION_SENTINEL};
