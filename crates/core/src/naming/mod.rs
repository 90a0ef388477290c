//! Output file naming: filesystem-safe base names and collision handling.

pub mod duplicate;
pub mod filename;

pub use duplicate::{FolderNames, NameQuery, existing_markdown_names, unique_name};
pub use filename::{
    DerivedName, MAX_TITLE_CHARS, NamingError, derive_name, sanitize_title, subfolder_for,
};
