//! Exclusion rules for synchronization candidates.
//!
//! Both reconciliation passes consult one [`PathFilter`]: the source walk to
//! decide what participates, the target walk to decide what may be deleted.
//! Rules are ordered and first-match-wins; the fixed platform rules run
//! before the derived target-name rule.

use std::path::{Path, PathBuf};

/// Fixed exclusion patterns applied to every tested path, in order.
///
/// Hosting-platform control directories, key material, and the tool's own
/// artifacts. Matched as case-sensitive substrings of the path's string
/// form, so `.git` also covers `.gitignore` and anything below a `.git`
/// directory.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    ".git",
    ".myimunify_id",
    ".cagefs",
    ".cl.selector",
    ".ssh",
    crate::logging::LOG_FILE,
    crate::config::CONFIG_FILE,
];

/// A single exclusion predicate.
///
/// Substring is the only form in use today; the enum keeps room for glob or
/// regex rules without disturbing evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchRule {
    /// Case-sensitive substring over the path's string form.
    Substring(String),
}

impl MatchRule {
    fn matches(&self, path: &str) -> bool {
        match self {
            MatchRule::Substring(needle) => path.contains(needle),
        }
    }
}

/// Decides whether a filesystem path participates in synchronization.
#[derive(Debug, Clone)]
pub struct PathFilter {
    rules: Vec<MatchRule>,
    target_root: PathBuf,
    target_name: Option<String>,
}

impl PathFilter {
    /// Build the filter for a target root with the default rule set.
    pub fn new(target_root: &Path) -> Self {
        let rules = DEFAULT_EXCLUSIONS
            .iter()
            .map(|pattern| MatchRule::Substring((*pattern).to_string()))
            .collect();
        Self::with_rules(target_root, rules)
    }

    /// Build the filter with a custom ordered rule list.
    pub fn with_rules(target_root: &Path, rules: Vec<MatchRule>) -> Self {
        let target_name = target_root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Self {
            rules,
            target_root: target_root.to_path_buf(),
            target_name,
        }
    }

    /// True when `path` must not participate in synchronization.
    ///
    /// A path is excluded when any fixed rule matches its string form, or
    /// when the target directory's name occurs in it anywhere other than as
    /// the configured target root itself. The root exception is what lets
    /// the cleanup pass walk the target tree: one leading occurrence of the
    /// exact root path is stripped before the name check, so `httpdocs` and
    /// `httpdocs/a/b.txt` pass while `./httpdocs`, `backup/httpdocs`, and
    /// `httpdocs/httpdocs/x` are excluded.
    pub fn should_exclude(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        if self.rules.iter().any(|rule| rule.matches(&text)) {
            return true;
        }
        self.target_name_outside_root(path)
    }

    fn target_name_outside_root(&self, path: &Path) -> bool {
        let Some(name) = self.target_name.as_deref() else {
            return false;
        };
        // The configured root is the one permitted occurrence of the name.
        let probe = path.strip_prefix(&self.target_root).unwrap_or(path);
        probe.to_string_lossy().contains(name)
    }
}
