pub mod blocks;
pub mod date;
pub mod fields;
pub mod text;

pub use blocks::{BlockSplitter, PatchBlocks};
pub use date::{format_rfc2822, parse_meta_date, DateFormat, PubDate, DATE_FORMATS};
pub use fields::{
    extract_anchor, extract_description_lines, extract_meta, extract_record, extract_version,
};
pub use text::{clean_fragment_text, decode_html_entities, strip_tags};
