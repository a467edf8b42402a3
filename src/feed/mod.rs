//! Feed output
//!
//! Renders extracted patch records as an RSS 2.0 document.

pub mod renderer;

pub use renderer::{escape_xml, render_rss, wrap_cdata, Channel};
