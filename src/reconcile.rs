//! Two-pass directory reconciliation.
//!
//! Pass 1 copies new and changed source files into the target tree; pass 2
//! deletes target files with no source counterpart. "Changed" is decided by
//! content digest alone, never by size or timestamp. Actions flow through
//! the [`Reporter`] handed in by the caller; copy and delete failures abort
//! the run, leaving a partial state a re-run converges.

use crate::digest;
use crate::error::SyncError;
use crate::filter::PathFilter;
use crate::walk::Walker;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// A single observed reconciliation action, carrying the relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// File absent from target, copied fresh.
    CopyNew(PathBuf),

    /// Target content differed, overwritten.
    CopyChanged(PathBuf),

    /// Contents identical, nothing written.
    SkipIdentical(PathBuf),

    /// No source counterpart, target file removed.
    DeleteOrphaned(PathBuf),
}

/// Records actions as they happen and emits the matching log line.
#[derive(Debug, Default)]
pub struct Reporter {
    actions: Vec<SyncAction>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in execution order.
    pub fn actions(&self) -> &[SyncAction] {
        &self.actions
    }

    /// Tally of the recorded actions.
    pub fn summary(&self) -> SyncSummary {
        let mut summary = SyncSummary::default();
        for action in &self.actions {
            match action {
                SyncAction::CopyNew(_) => summary.copied_new += 1,
                SyncAction::CopyChanged(_) => summary.copied_changed += 1,
                SyncAction::SkipIdentical(_) => summary.skipped += 1,
                SyncAction::DeleteOrphaned(_) => summary.deleted += 1,
            }
        }
        summary
    }

    fn record(&mut self, action: SyncAction) {
        match &action {
            SyncAction::CopyNew(path) => info!("Copying new file: {}", path.display()),
            SyncAction::CopyChanged(path) => info!("Syncing: {}", path.display()),
            SyncAction::SkipIdentical(path) => {
                debug!("Skipping identical file: {}", path.display())
            }
            SyncAction::DeleteOrphaned(path) => {
                info!("Removing file from target: {}", path.display())
            }
        }
        self.actions.push(action);
    }
}

/// Tally of one reconciliation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    pub copied_new: usize,
    pub copied_changed: usize,
    pub skipped: usize,
    pub deleted: usize,
}

/// Two-pass source/target reconciler.
pub struct Reconciler {
    source_root: PathBuf,
    target_root: PathBuf,
    filter: PathFilter,
}

impl Reconciler {
    /// Create a reconciler for the given roots. The exclusion filter is
    /// derived from the target root and shared by both passes.
    pub fn new(source_root: PathBuf, target_root: PathBuf) -> Self {
        let filter = PathFilter::new(&target_root);
        Self {
            source_root,
            target_root,
            filter,
        }
    }

    /// Run both passes, strictly ordered: propagation completes before any
    /// orphan is considered.
    ///
    /// The run assumes it is the sole writer to the target tree; concurrent
    /// invocations against the same target are unsafe.
    #[instrument(skip(self, reporter), fields(source = %self.source_root.display(), target = %self.target_root.display()))]
    pub fn reconcile(&self, reporter: &mut Reporter) -> Result<(), SyncError> {
        let start = Instant::now();

        self.propagate(reporter)?;
        self.prune(reporter)?;

        let summary = reporter.summary();
        info!(
            copied_new = summary.copied_new,
            copied_changed = summary.copied_changed,
            skipped = summary.skipped,
            deleted = summary.deleted,
            duration_ms = start.elapsed().as_millis() as u64,
            "Reconciliation finished"
        );
        Ok(())
    }

    /// Pass 1: copy new and changed source files into the target tree.
    fn propagate(&self, reporter: &mut Reporter) -> Result<(), SyncError> {
        let entries = Walker::new(&self.source_root, &self.filter)
            .skip_exact(&self.target_root)
            .files();
        debug!(candidates = entries.len(), "Walked source tree");

        for entry in entries {
            let target_path = self.target_root.join(&entry.relative);
            let existed = target_path.exists();

            if existed && digest::files_identical(&entry.path, &target_path) {
                reporter.record(SyncAction::SkipIdentical(entry.relative));
                continue;
            }

            self.copy_file(&entry.path, &target_path)?;
            if existed {
                reporter.record(SyncAction::CopyChanged(entry.relative));
            } else {
                reporter.record(SyncAction::CopyNew(entry.relative));
            }
        }
        Ok(())
    }

    /// Pass 2: delete target files with no source counterpart.
    fn prune(&self, reporter: &mut Reporter) -> Result<(), SyncError> {
        let entries = Walker::new(&self.target_root, &self.filter).files();
        debug!(candidates = entries.len(), "Walked target tree");

        for entry in entries {
            let source_path = self.source_root.join(&entry.relative);
            if source_path.exists() {
                continue;
            }
            // A would-be source path that matches an exclusion rule is left
            // alone: such a file can legitimately live only in the target.
            if self.filter.should_exclude(&source_path) {
                continue;
            }

            fs::remove_file(&entry.path).map_err(|e| SyncError::Delete {
                path: entry.path.clone(),
                source: e,
            })?;
            reporter.record(SyncAction::DeleteOrphaned(entry.relative));
        }
        Ok(())
    }

    /// Copy one file into place, creating missing parent directories.
    fn copy_file(&self, source: &Path, target: &Path) -> Result<(), SyncError> {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| SyncError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        transfer(source, target).map_err(|e| SyncError::Copy {
            path: source.to_path_buf(),
            source: e,
        })
    }
}

/// Content first, then modification time, then permission bits. Stamping
/// the time before applying permissions keeps read-only source files
/// copyable.
fn transfer(source: &Path, target: &Path) -> io::Result<()> {
    let mut reader = File::open(source)?;
    let metadata = reader.metadata()?;
    let mut writer = File::create(target)?;
    io::copy(&mut reader, &mut writer)?;
    writer.set_modified(metadata.modified()?)?;
    fs::set_permissions(target, metadata.permissions())
}
