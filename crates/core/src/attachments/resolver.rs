//! Attachment lookup with extension fallback.
//!
//! Takeout sometimes references `photo.jpg` while the exported file is
//! `photo.jpeg`. When the exact name is missing, every extension registered
//! for the same MIME type is tried against the same stem.

use std::path::{Path, PathBuf};

use glob::Pattern;

/// Answers whether a file name exists in the attachment source.
pub trait SourceQuery {
    fn contains(&self, name: &str) -> bool;
}

/// Glob lookup below a source directory. Names are matched literally.
#[derive(Debug, Clone)]
pub struct GlobSource {
    root: PathBuf,
}

impl GlobSource {
    pub fn new(root: &Path) -> Self {
        Self { root: root.to_path_buf() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceQuery for GlobSource {
    fn contains(&self, name: &str) -> bool {
        let pattern = Pattern::escape(&self.root.join(name).to_string_lossy());
        glob::glob(&pattern)
            .map(|mut paths| paths.any(|p| p.is_ok_and(|p| p.is_file())))
            .unwrap_or(false)
    }
}

/// Extensions (without dot) registered for the MIME type guessed from `name`.
pub fn alternate_extensions(name: &str) -> Option<&'static [&'static str]> {
    let mime = mime_guess::from_path(name).first()?;
    mime_guess::get_mime_extensions(&mime)
}

/// Name under which `desired` can be found in `source`, if any.
///
/// Returns `desired` itself when present. Otherwise, for each extension of
/// the guessed MIME type that occurs in `desired`, that extension is removed
/// and every extension of the type is appended in turn. The first existing
/// candidate wins.
pub fn resolve_attachment<Q>(desired: &str, source: &Q) -> Option<String>
where
    Q: SourceQuery + ?Sized,
{
    if source.contains(desired) {
        return Some(desired.to_string());
    }

    let extensions = alternate_extensions(desired)?;
    for ext in extensions {
        let dotted = format!(".{ext}");
        if !desired.contains(&dotted) {
            continue;
        }
        let stem = desired.replace(&dotted, "");
        for alt in extensions {
            let candidate = format!("{stem}.{alt}");
            if candidate != desired && source.contains(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    struct Names(HashSet<&'static str>);

    impl SourceQuery for Names {
        fn contains(&self, name: &str) -> bool {
            self.0.contains(name)
        }
    }

    fn names(list: &[&'static str]) -> Names {
        Names(list.iter().copied().collect())
    }

    #[test]
    fn exact_match_wins() {
        let src = names(&["photo.jpg", "photo.jpeg"]);
        assert_eq!(resolve_attachment("photo.jpg", &src).as_deref(), Some("photo.jpg"));
    }

    #[test]
    fn jpg_falls_back_to_jpeg() {
        let src = names(&["photo.jpeg"]);
        assert_eq!(resolve_attachment("photo.jpg", &src).as_deref(), Some("photo.jpeg"));
    }

    #[test]
    fn jpeg_falls_back_to_jpg() {
        let src = names(&["photo.jpg"]);
        assert_eq!(resolve_attachment("photo.jpeg", &src).as_deref(), Some("photo.jpg"));
    }

    #[test]
    fn other_types_do_not_cross_over() {
        let src = names(&["photo.png"]);
        assert_eq!(resolve_attachment("photo.jpg", &src), None);
    }

    #[test]
    fn unknown_extension_has_no_fallback() {
        let src = names(&["blob.jpeg"]);
        assert_eq!(resolve_attachment("blob.unknownext", &src), None);
    }

    #[test]
    fn jpeg_extensions_are_known() {
        let exts = alternate_extensions("x.jpg").unwrap();
        assert!(exts.contains(&"jpg"));
        assert!(exts.contains(&"jpeg"));
    }

    #[test]
    fn glob_source_matches_literal_names() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("[1] photo.jpeg"), [0xff]).unwrap();
        fs::write(dir.path().join("1 photo.jpeg"), [0xff]).unwrap();
        fs::create_dir(dir.path().join("folder.jpg")).unwrap();

        let src = GlobSource::new(dir.path());
        assert!(src.contains("[1] photo.jpeg"));
        assert!(!src.contains("[1] photo.jpg"));
        assert!(!src.contains("folder.jpg"));
        assert_eq!(
            resolve_attachment("[1] photo.jpg", &src).as_deref(),
            Some("[1] photo.jpeg")
        );
    }
}
