//! Layered ignore rules: built-in defaults plus the root's ignore file.

use crate::pattern::{self, CompiledPattern};
use std::fs;
use std::path::Path;

/// Names excluded from every snapshot before user rules apply: version
/// control, dependency and build output directories, editor settings, and
/// OS artifacts.
pub const DEFAULT_IGNORES: &[&str] = &[
    ".git",
    "node_modules",
    "venv",
    "__pycache__",
    ".vscode",
    ".idea",
    "dist",
    "build",
    ".env",
    ".DS_Store",
];

/// Ignore file consumed at the snapshot root. Subdirectory ignore files are
/// intentionally not consulted.
pub const IGNORE_FILE: &str = ".gitignore";

/// The full ordered rule list applied to one root.
///
/// Order is significant: later rules override earlier ones when both match a
/// path, which is what lets a negated `.gitignore` line re-include a path
/// the defaults excluded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternSet {
    rules: Vec<CompiledPattern>,
}

impl PatternSet {
    /// Build the rule list for `root`: built-in defaults first, then the
    /// root's ignore-file lines in file order, then any `extra` patterns.
    ///
    /// A missing ignore file is normal; an unreadable one is logged and the
    /// defaults still apply.
    pub fn load(root: &Path, extra: &[String]) -> Self {
        let mut raw: Vec<String> = DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect();

        let ignore_path = root.join(IGNORE_FILE);
        match fs::read_to_string(&ignore_path) {
            Ok(content) => {
                raw.extend(
                    content
                        .lines()
                        .map(str::trim)
                        .filter(|line| !line.is_empty() && !line.starts_with('#'))
                        .map(str::to_string),
                );
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    path = %ignore_path.display(),
                    error = %e,
                    "could not read ignore file, falling back to defaults"
                );
            }
        }

        raw.extend(extra.iter().cloned());
        Self::from_lines(raw.iter().map(String::as_str))
    }

    /// Build a set from raw pattern lines only, without defaults or any
    /// ignore-file read.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let rules = lines.into_iter().filter_map(pattern::compile).collect();
        Self { rules }
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Decide whether a root-relative, slash-separated path is ignored.
    ///
    /// Rules are evaluated in order and the last matching rule wins: a
    /// negated rule re-includes a path an earlier rule excluded, and a later
    /// plain rule excludes it again. Directory-only rules never apply to
    /// non-directory entries. A path no rule matches is kept.
    pub fn is_ignored(&self, rel_path: &str, is_dir: bool) -> bool {
        let mut ignored = false;
        for rule in &self.rules {
            if rule.is_dir_only && !is_dir {
                continue;
            }
            if rule.matches(rel_path) {
                ignored = !rule.is_negated;
            }
        }
        ignored
    }
}
