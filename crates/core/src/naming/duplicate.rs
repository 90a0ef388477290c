//! Collision-free markdown file names.
//!
//! The existence check and the later write are not atomic. Two processes
//! converting into the same tree at once can still clobber each other.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Answers whether a file name is already used in a destination folder.
pub trait NameQuery {
    fn is_taken(&self, file_name: &str) -> bool;
}

impl NameQuery for HashSet<String> {
    fn is_taken(&self, file_name: &str) -> bool {
        self.contains(file_name)
    }
}

/// Names used in one destination folder.
///
/// Holds the markdown files listed once when the folder is first seen plus
/// every name written since. Anything not in that set is checked against the
/// filesystem, so a case-insensitive volume reports `groceries.md` as taken
/// when `Groceries.md` exists.
#[derive(Debug)]
pub struct FolderNames {
    dir: PathBuf,
    known: HashSet<String>,
}

impl FolderNames {
    pub fn load(dir: &Path) -> io::Result<Self> {
        Ok(Self { dir: dir.to_path_buf(), known: existing_markdown_names(dir)? })
    }

    /// Record a file name written into this folder.
    pub fn insert(&mut self, file_name: String) {
        self.known.insert(file_name);
    }
}

impl NameQuery for FolderNames {
    fn is_taken(&self, file_name: &str) -> bool {
        self.known.contains(file_name) || self.dir.join(file_name).exists()
    }
}

/// First stem in `base`, `base(1)`, `base(2)`, ... whose `.md` file name is
/// not taken.
pub fn unique_name<Q>(base: &str, taken: &Q) -> String
where
    Q: NameQuery + ?Sized,
{
    if !taken.is_taken(&format!("{base}.md")) {
        return base.to_string();
    }
    let mut n: u64 = 1;
    loop {
        let candidate = format!("{base}({n})");
        if !taken.is_taken(&format!("{candidate}.md")) {
            return candidate;
        }
        n += 1;
    }
}

/// File names of the markdown files in `dir`. A missing directory is empty.
pub fn existing_markdown_names(dir: &Path) -> io::Result<HashSet<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashSet::new()),
        Err(e) => return Err(e),
    };

    let mut names = HashSet::new();
    for entry in entries {
        let name = entry?.file_name().to_string_lossy().to_string();
        if name.ends_with(".md") {
            names.insert(name);
        }
    }
    Ok(names)
}
