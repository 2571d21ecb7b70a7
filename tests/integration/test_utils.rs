//! Shared test utilities for integration tests

use docsync::reconcile::{Reconciler, Reporter, SyncAction};
use std::fs;
use std::path::{Path, PathBuf};

/// Write `content` at `relative` under `root`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Run one reconciliation over the pair and return the recorded actions.
pub fn run_sync(source: &Path, target: &Path) -> Vec<SyncAction> {
    let reconciler = Reconciler::new(source.to_path_buf(), target.to_path_buf());
    let mut reporter = Reporter::new();
    reconciler.reconcile(&mut reporter).unwrap();
    reporter.actions().to_vec()
}
