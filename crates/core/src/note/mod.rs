//! Keep note records and the input directory they come from.

pub mod loader;
pub mod types;
pub mod walker;

pub use loader::{NoteError, load_note, parse_note};
pub use types::{Annotation, Attachment, ChecklistItem, Label, NoteRecord};
pub use walker::{NoteWalker, WalkError};
