//! DocSync: content-driven one-way directory synchronization
//!
//! Mirrors a source tree into a target tree: copies new and changed files
//! (decided by BLAKE3 content digest, never by timestamp), then deletes
//! target files with no source counterpart. Substring exclusion rules apply
//! symmetrically to both passes, so an excluded file is neither copied nor
//! cleaned up.

pub mod config;
pub mod digest;
pub mod error;
pub mod filter;
pub mod logging;
pub mod reconcile;
pub mod walk;
