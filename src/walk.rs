//! Deterministic enumeration of synchronization candidate files.

use crate::filter::PathFilter;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// A candidate file under a walked root.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Path as walked, root prefix included.
    pub path: PathBuf,

    /// Path relative to the walked root.
    pub relative: PathBuf,
}

/// Recursive walker that prunes excluded subtrees.
///
/// Pruning happens at descent time: a directory the filter rejects is never
/// entered, so nothing below it is ever considered.
pub struct Walker<'a> {
    root: &'a Path,
    filter: &'a PathFilter,
    skip_exact: Option<&'a Path>,
}

impl<'a> Walker<'a> {
    pub fn new(root: &'a Path, filter: &'a PathFilter) -> Self {
        Self {
            root,
            filter,
            skip_exact: None,
        }
    }

    /// Additionally prune this exact path and everything below it.
    ///
    /// The source walk uses this for the target root: the filter permits
    /// that one path so the cleanup pass can enter it, but it must never
    /// become a copy candidate when it happens to sit inside the source.
    pub fn skip_exact(mut self, path: &'a Path) -> Self {
        self.skip_exact = Some(path);
        self
    }

    /// Collect every non-excluded file under the root.
    ///
    /// Entries come back sorted by relative path so action order is
    /// deterministic. A root that is missing or not a directory yields no
    /// entries, and entries the walk cannot read are logged and skipped.
    pub fn files(&self) -> Vec<FileEntry> {
        if !self.root.is_dir() {
            return Vec::new();
        }

        let walker = WalkDir::new(self.root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| {
                if self.skip_exact.is_some_and(|skip| entry.path() == skip) {
                    return false;
                }
                !self.filter.should_exclude(entry.path())
            });

        let mut entries = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(self.root) else {
                continue;
            };
            entries.push(FileEntry {
                path: entry.path().to_path_buf(),
                relative: relative.to_path_buf(),
            });
        }

        entries.sort_by(|a, b| a.relative.cmp(&b.relative));
        entries
    }
}
