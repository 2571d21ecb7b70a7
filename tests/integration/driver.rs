//! End-to-end tests for the docsync binary
//!
//! Each test spawns the compiled binary in a temporary working directory,
//! where the default configuration resolves source "." and target "httpdocs",
//! then inspects the resulting tree and the docsync.log file.

use super::test_utils::write_file;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Spawn the docsync binary in `cwd`, with an optional `DOCSYNC_LOG` override.
fn run_docsync(cwd: &Path, level: Option<&str>) {
    let bin = env!("CARGO_BIN_EXE_docsync");
    let mut command = Command::new(bin);
    command.current_dir(cwd).env_remove("DOCSYNC_LOG");
    if let Some(level) = level {
        command.env("DOCSYNC_LOG", level);
    }
    let output = command.output().unwrap();
    assert!(
        output.status.success(),
        "docsync should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn read_log(cwd: &Path) -> String {
    fs::read_to_string(cwd.join("docsync.log")).unwrap()
}

/// Test that a default-configuration run mirrors the working directory into
/// httpdocs, removes orphans, and logs copies and deletions at info level
#[test]
fn test_binary_mirrors_tree_and_logs_actions() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path();

    write_file(cwd, "a.txt", "alpha");
    write_file(cwd, "assets/logo.png", "png bytes");
    write_file(cwd, "httpdocs/old.txt", "stale");

    run_docsync(cwd, None);

    assert_eq!(fs::read_to_string(cwd.join("httpdocs/a.txt")).unwrap(), "alpha");
    assert_eq!(
        fs::read_to_string(cwd.join("httpdocs/assets/logo.png")).unwrap(),
        "png bytes"
    );
    assert!(!cwd.join("httpdocs/old.txt").exists());
    // The target must not be folded into itself, and the log file stays put.
    assert!(!cwd.join("httpdocs/httpdocs").exists());
    assert!(!cwd.join("httpdocs/docsync.log").exists());

    let log = read_log(cwd);
    assert!(
        log.contains("Starting content synchronization..."),
        "missing startup line: {log}"
    );
    assert!(log.contains(" - INFO - Copying new file: a.txt"));
    assert!(log.contains(" - INFO - Copying new file: assets/logo.png"));
    assert!(log.contains(" - INFO - Removing file from target: old.txt"));
    assert!(
        log.contains("Content synchronization completed."),
        "missing completion line: {log}"
    );
}

/// Test that the log file accumulates across runs and that the default info
/// level suppresses the per-file skip lines of a no-op second run
#[test]
fn test_binary_log_appends_across_runs() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path();

    write_file(cwd, "x.txt", "stable");

    run_docsync(cwd, None);
    run_docsync(cwd, None);

    assert_eq!(fs::read_to_string(cwd.join("httpdocs/x.txt")).unwrap(), "stable");

    let log = read_log(cwd);
    assert_eq!(
        log.matches("Starting content synchronization...").count(),
        2,
        "both runs should land in one log file: {log}"
    );
    assert_eq!(log.matches("Content synchronization completed.").count(), 2);
    assert_eq!(log.matches("Copying new file: x.txt").count(), 1);
    assert!(
        !log.contains("Skipping identical file"),
        "skip lines should stay below the info level: {log}"
    );
}

/// Test that DOCSYNC_LOG=debug surfaces the skip line for an identical file
#[test]
fn test_binary_debug_override_surfaces_skips() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path();

    write_file(cwd, "x.txt", "stable");

    run_docsync(cwd, None);
    run_docsync(cwd, Some("debug"));

    let log = read_log(cwd);
    assert!(
        log.contains(" - DEBUG - Skipping identical file: x.txt"),
        "debug override should surface the skip line: {log}"
    );
}
