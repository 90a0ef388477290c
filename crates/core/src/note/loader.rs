use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::NoteRecord;

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("failed to read note: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not JSON, or `title` / `userEditedTimestampUsec` are
    /// missing or have the wrong type.
    #[error("malformed note record: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read one exported note from disk.
pub fn load_note(path: &Path) -> Result<NoteRecord, NoteError> {
    let s = fs::read_to_string(path)
        .map_err(|source| NoteError::Io { path: path.to_path_buf(), source })?;
    parse_note(&s).map_err(|source| NoteError::Malformed { path: path.to_path_buf(), source })
}

pub fn parse_note(input: &str) -> Result<NoteRecord, serde_json::Error> {
    serde_json::from_str(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_full_takeout_note() {
        let json = r#"{
            "color": "DEFAULT",
            "isTrashed": false,
            "isPinned": false,
            "isArchived": false,
            "textContent": "Milk and eggs",
            "title": "Groceries",
            "userEditedTimestampUsec": 1700000000000000,
            "createdTimestampUsec": 1690000000000000,
            "labels": [{"name": "home"}, {"name": "errands"}],
            "listContent": [
                {"text": "Milk", "isChecked": true},
                {"text": "Eggs", "isChecked": false}
            ],
            "annotations": [
                {
                    "description": "",
                    "source": "WEBLINK",
                    "title": "Shop",
                    "url": "https://shop.example"
                }
            ],
            "attachments": [{"filePath": "photo.jpg", "mimetype": "image/jpeg"}]
        }"#;

        let note = parse_note(json).unwrap();
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.edited_timestamp, 1_700_000_000_000_000);
        assert_eq!(note.tags(), vec!["home", "errands"]);
        assert_eq!(note.text_content.as_deref(), Some("Milk and eggs"));
        let list = note.list_content.as_ref().unwrap();
        assert!(list[0].checked);
        assert!(!list[1].checked);
        assert_eq!(note.web_links()[0].url, "https://shop.example");
        assert_eq!(note.image_attachments()[0].file_path, "photo.jpg");
    }

    #[test]
    fn optional_sections_may_be_absent() {
        let note = parse_note(r#"{"title": "", "userEditedTimestampUsec": 0}"#).unwrap();
        assert!(note.labels.is_none());
        assert!(note.text_content.is_none());
        assert!(note.list_content.is_none());
        assert!(note.annotations.is_none());
        assert!(note.attachments.is_none());
    }

    #[test]
    fn missing_title_is_rejected() {
        assert!(parse_note(r#"{"userEditedTimestampUsec": 0}"#).is_err());
    }

    #[test]
    fn missing_timestamp_is_rejected() {
        assert!(parse_note(r#"{"title": "x"}"#).is_err());
    }

    #[test]
    fn timestamp_of_wrong_shape_is_rejected() {
        assert!(parse_note(r#"{"title": "x", "userEditedTimestampUsec": "soon"}"#).is_err());
    }

    #[test]
    fn load_reports_malformed_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        match load_note(&path) {
            Err(NoteError::Malformed { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn load_reports_missing_file_as_io() {
        let dir = TempDir::new().unwrap();
        let err = load_note(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, NoteError::Io { .. }));
    }
}
