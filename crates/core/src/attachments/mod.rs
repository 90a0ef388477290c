//! Image attachments: locating them in the Takeout folder and copying them
//! next to the generated notes.

pub mod copier;
pub mod resolver;

pub use copier::{AttachmentCopier, AttachmentError, CopyReport, RESOURCES_DIR};
pub use resolver::{GlobSource, SourceQuery, alternate_extensions, resolve_attachment};
