//! Built-site inventory and file-candidate resolution.
//!
//! The static cross-check needs many existence probes against the built
//! site tree, so the tree is scanned once into an in-memory set of file
//! paths. Memory cost is O(files); for a documentation site that is a few
//! thousand entries, not worth streaming.
//!
//! The inventory never consults the process working directory: callers
//! supply the site root explicitly, and every candidate path is resolved
//! against that root.

use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::normalize::ensure_leading_slash;

/// Set of regular files under a built-site root.
#[derive(Debug, Clone)]
pub struct SiteInventory {
    root: PathBuf,
    files: HashSet<PathBuf>,
}

impl SiteInventory {
    /// Scan the site root recursively and collect every regular file.
    ///
    /// Unreadable subdirectories and entries are skipped with a warning;
    /// the scan itself only fails when the root cannot be read at all.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] when the root directory cannot be read.
    pub fn scan(root: &Path) -> Result<Self> {
        let mut files = HashSet::new();
        let mut pending = vec![root.to_path_buf()];

        // Fail fast on an unreadable root; deeper errors degrade to warnings.
        fs::read_dir(root)?;

        while let Some(dir) = pending.pop() {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(dir = %dir.display(), error = %err, "skipping unreadable directory");
                    continue;
                },
            };

            for entry in entries {
                let Ok(entry) = entry else {
                    warn!(dir = %dir.display(), "skipping unreadable entry");
                    continue;
                };
                let Ok(file_type) = entry.file_type() else {
                    warn!(dir = %dir.display(), "skipping unreadable entry");
                    continue;
                };
                let path = entry.path();
                if file_type.is_dir() {
                    pending.push(path);
                } else if file_type.is_symlink() {
                    // Symlinked files count as site content; symlinked
                    // directories are never traversed, so link cycles
                    // cannot loop the scan.
                    if path.is_file() {
                        files.insert(lexical_normalize(&path));
                    }
                } else if file_type.is_file() {
                    files.insert(lexical_normalize(&path));
                }
            }
        }

        debug!(root = %root.display(), files = files.len(), "scanned site inventory");

        Ok(Self {
            root: root.to_path_buf(),
            files,
        })
    }

    /// Build an inventory from a pre-computed set of file paths.
    ///
    /// Paths must be resolved the same way [`SiteInventory::scan`] would
    /// resolve them, i.e. absolute-or-root-relative and lexically clean.
    #[must_use]
    pub fn from_files(root: PathBuf, files: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            root,
            files: files.into_iter().map(|p| lexical_normalize(&p)).collect(),
        }
    }

    /// The site root this inventory was built from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of files in the inventory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the inventory holds no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether a candidate path exists as a regular file in the site.
    #[must_use]
    pub fn contains(&self, candidate: &Path) -> bool {
        self.files.contains(&lexical_normalize(candidate))
    }

    /// File a redirect destination is expected to resolve to.
    ///
    /// A trailing-slash path serves `<path>/index.html`; a `.html` path
    /// serves itself. Anything else is ambiguous and yields `None` (the
    /// validator reports it as a warning, not a failure).
    #[must_use]
    pub fn target_candidate(&self, target_path: &str) -> Option<PathBuf> {
        if target_path.ends_with('/') {
            Some(self.join(target_path).join("index.html"))
        } else if target_path.ends_with(".html") {
            Some(self.join(target_path))
        } else {
            None
        }
    }

    /// File a redirect source would collide with if it existed.
    ///
    /// The raw source path keeps its trailing slash here: `/guide/` maps
    /// to `guide/index.html` while `/guide` maps to the literal `guide`
    /// entry. Only the leading slash is ensured.
    #[must_use]
    pub fn source_candidate(&self, source_path: &str) -> PathBuf {
        let source = ensure_leading_slash(source_path);
        if source.ends_with('/') {
            self.join(&source).join("index.html")
        } else {
            self.join(&source)
        }
    }

    fn join(&self, path: &str) -> PathBuf {
        lexical_normalize(&self.root.join(path.trim_start_matches('/')))
    }
}

/// Resolve `.` and `..` components without touching the file system.
///
/// Keeps inventory keys and candidate paths in the same shape even when a
/// rule spells its path with relative segments.
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                if !out.pop() {
                    out.push(Component::ParentDir);
                }
            },
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn site_with(files: &[&str]) -> (TempDir, SiteInventory) {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            File::create(&path).unwrap();
        }
        let inventory = SiteInventory::scan(dir.path()).unwrap();
        (dir, inventory)
    }

    #[test]
    fn test_scan_collects_nested_files() {
        let (_dir, inventory) = site_with(&[
            "index.html",
            "guide/index.html",
            "guide/setup/index.html",
        ]);

        assert_eq!(inventory.len(), 3);
        assert!(inventory.contains(&inventory.root().join("guide/index.html")));
        assert!(!inventory.contains(&inventory.root().join("missing/index.html")));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_tolerates_directory_symlink_cycles() {
        let dir = TempDir::new().unwrap();
        let guide = dir.path().join("guide");
        fs::create_dir_all(&guide).unwrap();
        File::create(guide.join("index.html")).unwrap();
        // Directory symlink pointing back at the root: must not be
        // traversed, and must not loop the scan.
        std::os::unix::fs::symlink(dir.path(), guide.join("loop")).unwrap();
        // Symlink to a regular file still counts as site content.
        std::os::unix::fs::symlink(guide.join("index.html"), dir.path().join("alias.html"))
            .unwrap();

        let inventory = SiteInventory::scan(dir.path()).unwrap();

        assert_eq!(inventory.len(), 2);
        assert!(inventory.contains(&dir.path().join("guide/index.html")));
        assert!(inventory.contains(&dir.path().join("alias.html")));
    }

    #[test]
    fn test_scan_missing_root_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no-such-site");

        assert!(SiteInventory::scan(&missing).is_err());
    }

    #[test]
    fn test_target_candidate_shapes() {
        let (_dir, inventory) = site_with(&["guide/index.html", "faq.html"]);
        let root = inventory.root().to_path_buf();

        assert_eq!(
            inventory.target_candidate("/guide/"),
            Some(root.join("guide/index.html"))
        );
        assert_eq!(inventory.target_candidate("/faq.html"), Some(root.join("faq.html")));
        assert_eq!(inventory.target_candidate("/guide"), None);
    }

    #[test]
    fn test_source_candidate_preserves_trailing_slash_distinction() {
        let (_dir, inventory) = site_with(&["guide/index.html"]);
        let root = inventory.root().to_path_buf();

        assert_eq!(
            inventory.source_candidate("/guide/"),
            root.join("guide/index.html")
        );
        assert_eq!(inventory.source_candidate("/guide"), root.join("guide"));
        assert_eq!(inventory.source_candidate("guide"), root.join("guide"));
    }

    #[test]
    fn test_relative_segments_resolved_lexically() {
        let (_dir, inventory) = site_with(&["guide/index.html"]);

        assert_eq!(
            inventory.target_candidate("/extra/../guide/"),
            Some(inventory.root().join("guide/index.html"))
        );
    }

    #[test]
    fn test_from_files_matches_scan_keys() {
        let root = PathBuf::from("/srv/site");
        let inventory = SiteInventory::from_files(
            root.clone(),
            vec![root.join("a/./index.html"), root.join("b.html")],
        );

        assert_eq!(inventory.len(), 2);
        assert!(inventory.contains(&root.join("a/index.html")));
        assert_eq!(
            inventory.target_candidate("/b.html"),
            Some(root.join("b.html"))
        );
        assert!(inventory.contains(&root.join("b.html")));
    }
}
