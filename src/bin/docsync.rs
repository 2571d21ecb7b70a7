//! DocSync binary.
//!
//! Runs one reconciliation pass over the configured source and target
//! trees. Driven entirely by `docsync.json` in the working directory; takes
//! no arguments and prints nothing on success. Progress goes to the log
//! file, with the level controlled by `DOCSYNC_LOG`.

use docsync::config::{SyncConfig, CONFIG_FILE};
use docsync::logging::{init_logging, LoggingConfig};
use docsync::reconcile::{Reconciler, Reporter};
use std::path::Path;
use std::process;
use tracing::{error, info};

fn main() {
    let logging_config = LoggingConfig::default();
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let config = SyncConfig::load(Path::new(CONFIG_FILE));

    info!("Starting content synchronization...");

    let reconciler = Reconciler::new(config.source_dir, config.target_dir);
    let mut reporter = Reporter::new();
    if let Err(e) = reconciler.reconcile(&mut reporter) {
        error!("Synchronization failed: {}", e);
        eprintln!("docsync: {}", e);
        process::exit(1);
    }

    info!("Content synchronization completed.");
}
