//! Run configuration loaded from the tool's JSON config file.
//!
//! The tool is driven entirely by `docsync.json` in the working directory.
//! Every key is optional and a missing or unreadable file means "use the
//! defaults", so a bare deployment works with no setup at all.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Name of the configuration file, resolved against the working directory.
pub const CONFIG_FILE: &str = "docsync.json";

/// Source and target roots for a synchronization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Tree to read from.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Tree to write to.
    #[serde(default = "default_target_dir")]
    pub target_dir: PathBuf,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_target_dir() -> PathBuf {
    PathBuf::from("httpdocs")
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            target_dir: default_target_dir(),
        }
    }
}

impl SyncConfig {
    /// Load configuration from `path`.
    ///
    /// A missing file and missing keys fall back to the defaults. A file
    /// that exists but fails to parse is logged and ignored rather than
    /// treated as fatal, so a botched edit degrades to default behavior.
    pub fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return Self::default(),
        };

        match serde_json::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    config_path = %path.display(),
                    "Ignoring malformed config file: {}", e
                );
                Self::default()
            }
        }
    }
}
