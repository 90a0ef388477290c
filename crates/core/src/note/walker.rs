//! Discovery of exported note files in a Takeout folder.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("input directory does not exist: {0}")]
    MissingRoot(String),

    #[error("input path is not a directory: {0}")]
    NotADirectory(String),

    #[error("failed to read input directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// Lists the `*.json` note files directly inside the input directory.
#[derive(Debug)]
pub struct NoteWalker {
    root: PathBuf,
}

impl NoteWalker {
    pub fn new(root: &Path) -> Result<Self, WalkError> {
        let root = root
            .canonicalize()
            .map_err(|_| WalkError::MissingRoot(root.display().to_string()))?;

        if !root.is_dir() {
            return Err(WalkError::NotADirectory(root.display().to_string()));
        }

        Ok(Self { root })
    }

    /// Note files sorted by file name. Subdirectories are not descended into.
    pub fn walk(&self) -> Result<Vec<PathBuf>, WalkError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1).follow_links(true)
        {
            let entry = entry
                .map_err(|e| WalkError::WalkError(self.root.display().to_string(), e))?;

            let path = entry.path();
            if !entry.file_type().is_file() || is_hidden(path) || !is_json_file(path) {
                continue;
            }
            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }
}

fn is_json_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "json")
}

fn is_hidden(path: &Path) -> bool {
    path.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.starts_with('.'))
}
