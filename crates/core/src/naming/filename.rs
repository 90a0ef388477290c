//! Base filename derivation from a note's title and edit timestamp.

use std::fmt::Display;
use std::path::{Component, Path};

use chrono::{DateTime, TimeZone};
use thiserror::Error;
use tracing::warn;

/// Titles are cut to this many characters before becoming a filename.
pub const MAX_TITLE_CHARS: usize = 99;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NamingError {
    #[error("edit timestamp {0}us is outside the representable date range")]
    TimestampOutOfRange(i64),
}

/// Result of naming a note, before duplicate resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedName {
    /// File stem without the `.md` extension.
    pub base: String,
    pub has_title: bool,
    /// ISO-8601 edit time, only set for titled notes with a timestamp.
    pub display_date: Option<String>,
}

/// Derive the base filename for a note.
///
/// `now` names notes that have neither title nor timestamp, and its time zone
/// is the one the edit timestamp is rendered in. Pass `Local::now()` in
/// production.
pub fn derive_name<Tz>(
    title: &str,
    edited_timestamp: i64,
    now: &DateTime<Tz>,
) -> Result<DerivedName, NamingError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match (title.is_empty(), edited_timestamp) {
        (true, 0) => Ok(DerivedName {
            base: now.format("%Y%m%dT%H%M%S.%6f_edited").to_string(),
            has_title: false,
            display_date: None,
        }),
        (false, 0) => Ok(DerivedName {
            base: title_stem(title),
            has_title: true,
            display_date: None,
        }),
        (true, ts) => Ok(DerivedName {
            base: edited_at(ts, now)?.format("%Y-%m-%d+%H%M%S").to_string(),
            has_title: false,
            display_date: None,
        }),
        (false, ts) => Ok(DerivedName {
            base: title_stem(title),
            has_title: true,
            display_date: Some(edited_at(ts, now)?.format("%Y-%m-%dT%H:%M:%S").to_string()),
        }),
    }
}

fn edited_at<Tz: TimeZone>(
    micros: i64,
    now: &DateTime<Tz>,
) -> Result<DateTime<Tz>, NamingError> {
    DateTime::from_timestamp_micros(micros)
        .map(|utc| utc.with_timezone(&now.timezone()))
        .ok_or(NamingError::TimestampOutOfRange(micros))
}

fn title_stem(title: &str) -> String {
    sanitize_title(title).chars().take(MAX_TITLE_CHARS).collect()
}

/// Make a note title safe to use as a file name.
///
/// `\ / |` become `_`, `< >` become `-`, `:` becomes a space, and `? " *` and
/// newlines are dropped. Every other character is kept.
pub fn sanitize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        match c {
            '\\' | '/' | '|' => out.push('_'),
            '<' | '>' => out.push('-'),
            ':' => out.push(' '),
            '?' | '"' | '*' | '\n' => {}
            other => out.push(other),
        }
    }
    out
}

/// Destination subfolder below the output root, `None` for the root itself.
///
/// The first tag is sanitized like a title. A tag that would not be a single
/// plain directory name (`.`, `..`, empty) falls back to the root.
pub fn subfolder_for(tags: &[&str], tag_folders: bool) -> Option<String> {
    if !tag_folders {
        return None;
    }
    let folder = sanitize_title(tags.first()?);
    let mut components = Path::new(&folder).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Some(folder),
        _ => {
            warn!("Tag \"{folder}\" is not a usable folder name, using the output root");
            None
        }
    }
}
