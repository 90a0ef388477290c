//! Serde model of one exported Keep note.
//!
//! Field names follow the Takeout JSON. Fields the converter has no use for
//! (`color`, `isPinned`, `textContentHtml`, ...) are ignored on load.

use serde::Deserialize;

const WEBLINK_SOURCE: &str = "WEBLINK";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NoteRecord {
    pub title: String,
    /// Microseconds since the Unix epoch, `0` when the note was never edited.
    #[serde(rename = "userEditedTimestampUsec")]
    pub edited_timestamp: i64,
    pub labels: Option<Vec<Label>>,
    #[serde(rename = "textContent")]
    pub text_content: Option<String>,
    #[serde(rename = "listContent")]
    pub list_content: Option<Vec<ChecklistItem>>,
    pub annotations: Option<Vec<Annotation>>,
    pub attachments: Option<Vec<Attachment>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChecklistItem {
    pub text: String,
    #[serde(rename = "isChecked", default)]
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Annotation {
    pub source: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

impl Annotation {
    pub fn is_web_link(&self) -> bool {
        self.source == WEBLINK_SOURCE
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attachment {
    pub mimetype: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
}

impl Attachment {
    pub fn is_image(&self) -> bool {
        self.mimetype.contains("image")
    }
}

impl NoteRecord {
    /// Tag names in source order. Empty when the note has no labels.
    pub fn tags(&self) -> Vec<&str> {
        self.labels
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|l| l.name.as_str())
            .collect()
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Annotations that came from a web link; other kinds are dropped.
    pub fn web_links(&self) -> Vec<&Annotation> {
        self.annotations
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|a| a.is_web_link())
            .collect()
    }

    pub fn image_attachments(&self) -> Vec<&Attachment> {
        self.attachments
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|a| a.is_image())
            .collect()
    }
}
