//! Note conversion pipeline.
//!
//! load -> name -> de-duplicate -> copy attachments -> render -> write.
//! Notes are handled one at a time; nothing carries over between them except
//! the output tree on disk.

use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::attachments::{AttachmentCopier, RESOURCES_DIR};
use crate::naming::{FolderNames, NamingError, derive_name, subfolder_for, unique_name};
use crate::note::{NoteError, NoteWalker, WalkError, load_note};
use crate::render::render_note;

/// Failure confined to a single note record.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Load(#[from] NoteError),

    #[error(transparent)]
    Naming(#[from] NamingError),
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid input path: {0}")]
    InvalidInputPath(#[from] WalkError),

    #[error("cannot write to {path}: {source}")]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("skipping {path}: {source}")]
    Record {
        path: PathBuf,
        #[source]
        source: RecordError,
    },
}

impl ConvertError {
    fn unwritable(path: &Path, source: std::io::Error) -> Self {
        ConvertError::DestinationUnwritable { path: path.to_path_buf(), source }
    }
}

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Takeout folder holding the `*.json` notes and their attachments.
    pub input_dir: PathBuf,
    /// Root of the markdown tree.
    pub output_dir: PathBuf,
    /// One subfolder per first tag instead of front-matter tags.
    pub tag_folders: bool,
}

/// A note that could not be converted.
#[derive(Debug, Clone)]
pub struct FailedNote {
    pub path: PathBuf,
    pub reason: String,
}

/// Statistics from a conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertStats {
    /// Number of note files discovered.
    pub files_found: usize,
    /// Number of markdown files written.
    pub notes_converted: usize,
    /// Notes written under a numbered name because the plain one was taken.
    pub notes_renamed: usize,
    pub attachments_copied: usize,
    pub attachments_missing: usize,
    /// Notes skipped because their record was unusable.
    pub failed: Vec<FailedNote>,
}

/// What happened to one converted note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteOutcome {
    pub markdown_path: PathBuf,
    /// Set when the derived name collided and a numbered one was used.
    pub renamed_from: Option<String>,
    pub attachments_copied: usize,
    pub attachments_missing: usize,
}

/// Progress callback for conversion runs.
/// Parameters: (current, total, current_path)
pub type ProgressCallback = Box<dyn Fn(usize, usize, &str)>;

pub struct Converter {
    options: ConvertOptions,
    attachments: AttachmentCopier,
    /// Markdown names per destination folder, listed once and kept current.
    folders: RefCell<HashMap<PathBuf, FolderNames>>,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        let attachments = AttachmentCopier::new(&options.input_dir);
        Self { options, attachments, folders: RefCell::new(HashMap::new()) }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Create the output root and its `resources` directory.
    pub fn init_output(&self) -> Result<(), ConvertError> {
        let resources = self.options.output_dir.join(RESOURCES_DIR);
        if !resources.exists() {
            fs::create_dir_all(&resources)
                .map_err(|e| ConvertError::unwritable(&resources, e))?;
            info!(
                "Created folder \"{}\" - home of markdown files.",
                self.options.output_dir.display()
            );
        }
        Ok(())
    }

    /// Convert every note in the input directory.
    ///
    /// A malformed note is logged, recorded in [`ConvertStats::failed`] and
    /// skipped. An unusable input directory or an unwritable destination
    /// stops the run.
    pub fn run(
        &self,
        progress: Option<ProgressCallback>,
    ) -> Result<ConvertStats, ConvertError> {
        let walker = NoteWalker::new(&self.options.input_dir)?;
        let files = walker.walk()?;

        self.init_output()?;

        let mut stats = ConvertStats { files_found: files.len(), ..Default::default() };

        for (i, file) in files.iter().enumerate() {
            if let Some(ref cb) = progress {
                cb(i + 1, files.len(), &file.to_string_lossy());
            }

            match self.convert_note(file) {
                Ok(outcome) => {
                    stats.notes_converted += 1;
                    if outcome.renamed_from.is_some() {
                        stats.notes_renamed += 1;
                    }
                    stats.attachments_copied += outcome.attachments_copied;
                    stats.attachments_missing += outcome.attachments_missing;
                }
                Err(ConvertError::Record { path, source }) => {
                    error!("Skipping {}: {}", path.display(), source);
                    stats.failed.push(FailedNote { path, reason: source.to_string() });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(stats)
    }

    /// Convert a single note file into the output tree.
    pub fn convert_note(&self, path: &Path) -> Result<NoteOutcome, ConvertError> {
        let record =
            |source: RecordError| ConvertError::Record { path: path.to_path_buf(), source };

        let note = load_note(path).map_err(|e| record(e.into()))?;
        let name = derive_name(&note.title, note.edited_timestamp, &Local::now())
            .map_err(|e| record(e.into()))?;

        let tags = note.tags();
        let notes_dir =
            self.ensure_folder(subfolder_for(&tags, self.options.tag_folders))?;

        let mut folders = self.folders.borrow_mut();
        let taken = match folders.entry(notes_dir.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(
                FolderNames::load(&notes_dir)
                    .map_err(|e| ConvertError::unwritable(&notes_dir, e))?,
            ),
        };
        let filename = unique_name(&name.base, &*taken);
        let renamed_from = if filename == name.base {
            None
        } else {
            let existing_path = notes_dir.join(format!("{}.md", name.base));
            info!("Existing file found: {}", existing_path.display());
            info!("New filename: {filename}.md");
            Some(name.base.clone())
        };

        let images = note.image_attachments();
        let copy = self.attachments.copy_all(&images, &notes_dir.join(RESOURCES_DIR));

        let markdown = render_note(&note, &name, &copy.names);

        info!("Convert \"{filename}\" to markdown file.");
        let markdown_path = notes_dir.join(format!("{filename}.md"));
        fs::write(&markdown_path, markdown)
            .map_err(|e| ConvertError::unwritable(&markdown_path, e))?;
        taken.insert(format!("{filename}.md"));

        Ok(NoteOutcome {
            markdown_path,
            renamed_from,
            attachments_copied: copy.copied,
            attachments_missing: copy.missing,
        })
    }

    /// Directory for a note, creating it and its `resources` on first use.
    fn ensure_folder(&self, subfolder: Option<String>) -> Result<PathBuf, ConvertError> {
        let Some(subfolder) = subfolder else {
            return Ok(self.options.output_dir.clone());
        };

        let dir = self.options.output_dir.join(&subfolder);
        let resources = dir.join(RESOURCES_DIR);
        if !resources.exists() {
            fs::create_dir_all(&resources)
                .map_err(|e| ConvertError::unwritable(&resources, e))?;
            info!("Create tag and resources subfolder: {subfolder}");
        } else {
            debug!("Using existing subfolder: {subfolder}");
        }
        Ok(dir)
    }
}
