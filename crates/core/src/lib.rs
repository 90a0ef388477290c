//! Convert Google Keep Takeout exports into markdown notes.
//!
//! The pipeline lives in [`convert::Converter`]; the other modules are its
//! individual steps.

pub mod attachments;
pub mod config;
pub mod convert;
pub mod naming;
pub mod note;
pub mod render;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
