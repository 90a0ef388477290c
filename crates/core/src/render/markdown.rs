//! Serialize a note record into markdown text.
//!
//! Rendering is pure. Attachment names are passed in already resolved so the
//! file copy happens before, and independently of, the text.

use tracing::debug;

use crate::naming::DerivedName;
use crate::note::{Annotation, ChecklistItem, NoteRecord};

/// Render a note to markdown.
///
/// Titled notes get a front-matter block with the edit date and tags. Untitled
/// notes list their tags as wiki links instead. `attachments` holds the file
/// names to link under `resources/`, in note order.
pub fn render_note(note: &NoteRecord, name: &DerivedName, attachments: &[String]) -> String {
    let mut out = String::new();
    let tags = note.tags();

    if tags.is_empty() {
        debug!("No tags available.");
    }
    if name.has_title {
        out.push_str(&format_front_matter(name.display_date.as_deref(), &tags));
    } else if !tags.is_empty() {
        out.push_str(&format_tag_links(&tags));
        out.push('\n');
    }

    match &note.text_content {
        Some(text) => {
            out.push_str(text);
            out.push_str("\n\n");
        }
        None => debug!("No text content available."),
    }

    match &note.list_content {
        Some(items) => {
            out.push_str(&format_checklist(items));
            out.push('\n');
        }
        None => debug!("No tasklist available."),
    }

    let links = note.web_links();
    if links.is_empty() {
        debug!("No annotations available.");
    } else {
        out.push_str(&format_web_links(&links));
        out.push_str("\n\n");
    }

    if attachments.is_empty() {
        debug!("No attachments available.");
    } else {
        out.push_str(&format_attachments(attachments));
    }

    out
}

/// `---` delimited block with optional `date:` and `tags:` lines.
pub fn format_front_matter(date: Option<&str>, tags: &[&str]) -> String {
    let mut block = String::from("---\n");
    if let Some(date) = date {
        block.push_str(&format!("date: {date}\n"));
    }
    if !tags.is_empty() {
        block.push_str(&format!("tags: [{}]\n", tags.join(", ")));
    }
    block.push_str("---\n\n");
    block
}

/// Space separated `[[tag]]` links.
pub fn format_tag_links(tags: &[&str]) -> String {
    tags.iter().map(|t| format!("[[{t}]]")).collect::<Vec<_>>().join(" ")
}

fn format_checklist(items: &[ChecklistItem]) -> String {
    let mut list = String::from("*Tasklist:*\n");
    for item in items {
        let mark = if item.checked { 'x' } else { ' ' };
        list.push_str(&format!("- [{mark}] {}\n", item.text));
    }
    list
}

fn format_web_links(links: &[&Annotation]) -> String {
    let mut line = String::from("*Weblinks:* ");
    for link in links {
        line.push_str(&format!("[{}]({});", link.title, link.url));
    }
    line
}

fn format_attachments(names: &[String]) -> String {
    let mut list = String::from("*Attachments:*\n");
    for name in names {
        list.push_str(&format!("![{name}](resources/{name})\n"));
    }
    list
}
