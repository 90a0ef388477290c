use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::resolver::{GlobSource, resolve_attachment};
use crate::note::Attachment;

/// Name of the per-folder directory that receives copied attachments.
pub const RESOURCES_DIR: &str = "resources";

#[derive(Debug, Error)]
pub enum AttachmentError {
    #[error("file \"{name}\" not found in {root}")]
    NotFound { name: String, root: PathBuf },

    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of copying one note's attachments.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopyReport {
    /// Names to link from the markdown, one per attachment, in order.
    pub names: Vec<String>,
    pub copied: usize,
    pub missing: usize,
}

/// Copies attachments from the Takeout folder into a `resources` directory.
#[derive(Debug, Clone)]
pub struct AttachmentCopier {
    source: GlobSource,
}

impl AttachmentCopier {
    pub fn new(source_root: &Path) -> Self {
        Self { source: GlobSource::new(source_root) }
    }

    /// Copy one attachment and return the name it was found under.
    pub fn copy_one(
        &self,
        attachment: &Attachment,
        resources_dir: &Path,
    ) -> Result<String, AttachmentError> {
        let desired = link_name(&attachment.file_path);
        let resolved = resolve_attachment(&desired, &self.source).ok_or_else(|| {
            AttachmentError::NotFound {
                name: desired.clone(),
                root: self.source.root().to_path_buf(),
            }
        })?;
        if resolved != desired {
            info!("Found \"{}\" for \"{}\"", resolved, desired);
        }

        let from = self.source.root().join(&resolved);
        let to = resources_dir.join(&resolved);
        fs::copy(&from, &to).map_err(|source| AttachmentError::Copy { from, to, source })?;
        Ok(resolved)
    }

    /// Copy every attachment. Failures are logged and the original name is
    /// kept for the link; they never abort the note.
    pub fn copy_all(&self, attachments: &[&Attachment], resources_dir: &Path) -> CopyReport {
        let mut report = CopyReport::default();
        for attachment in attachments {
            match self.copy_one(attachment, resources_dir) {
                Ok(name) => {
                    report.copied += 1;
                    report.names.push(name);
                }
                Err(e) => {
                    warn!("{e}");
                    report.missing += 1;
                    report.names.push(link_name(&attachment.file_path));
                }
            }
        }
        report
    }
}

/// Last component of an attachment reference; copies always land directly in
/// `resources/`.
fn link_name(file_path: &str) -> String {
    Path::new(file_path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| file_path.to_string())
}
