//! Markdown rendering of note records.

pub mod markdown;

pub use markdown::{format_front_matter, format_tag_links, render_note};
