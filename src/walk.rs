//! Depth-first directory traversal with filtering and deterministic ordering.

use crate::ignore::PatternSet;
use crate::render::OutputFormat;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Options governing one snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// Apply the built-in defaults plus the root's `.gitignore`.
    pub use_git_ignore: bool,
    /// Layout of the rendered snapshot.
    pub output_format: OutputFormat,
    /// Maximum descent depth (`None` for unlimited). Depth 1 keeps only the
    /// root's immediate children.
    pub max_depth: Option<usize>,
    /// Leave out non-directory entries.
    pub exclude_files: bool,
    /// Annotate file entries with their size in KB.
    pub show_size: bool,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            use_git_ignore: false,
            output_format: OutputFormat::Tree,
            max_depth: None,
            exclude_files: true,
            show_size: false,
        }
    }
}

/// A surviving directory entry, in depth-first pre-order.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Display name (filename component only).
    pub name: String,
    /// Full filesystem path.
    pub path: PathBuf,
    /// Nesting depth (1 = direct child of root).
    pub depth: usize,
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// Byte size, meaningful for file entries.
    pub size: u64,
    /// Whether this is the last sibling at its level.
    pub is_last: bool,
}

/// Cached metadata for one path.
#[derive(Debug, Clone, Copy)]
struct StatRecord {
    is_dir: bool,
    size: u64,
}

/// Per-invocation traversal state.
///
/// Owns the compiled rule set and the stat cache, so nothing leaks between
/// runs; a new `Traversal` starts from a clean slate even if the ignore file
/// changed on disk since the last one.
pub struct Traversal<'a> {
    root: PathBuf,
    config: &'a SnapshotConfig,
    patterns: PatternSet,
    stat_cache: HashMap<PathBuf, StatRecord>,
}

impl<'a> Traversal<'a> {
    /// Prepare a traversal of `root`. The ignore file is read here, once;
    /// `extra_patterns` are appended after it and apply regardless of
    /// `use_git_ignore`.
    pub fn new(root: &Path, config: &'a SnapshotConfig, extra_patterns: &[String]) -> Self {
        let patterns = if config.use_git_ignore {
            PatternSet::load(root, extra_patterns)
        } else {
            PatternSet::from_lines(extra_patterns.iter().map(String::as_str))
        };
        Self {
            root: root.to_path_buf(),
            config,
            patterns,
            stat_cache: HashMap::new(),
        }
    }

    /// Walk the whole tree and return the surviving entries in display order.
    pub fn collect(&mut self) -> Vec<Entry> {
        let root = self.root.clone();
        let mut entries = Vec::new();
        self.walk_dir(&root, 0, &mut entries);
        entries
    }

    /// Recursive contract for one directory: list children, drop files when
    /// configured, drop ignored entries, sort survivors, emit them, then
    /// descend into subdirectories. A read failure here degrades this
    /// subtree to empty without aborting the walk.
    fn walk_dir(&mut self, dir: &Path, depth: usize, out: &mut Vec<Entry>) {
        if let Some(max) = self.config.max_depth {
            if depth >= max {
                return;
            }
        }

        let children = match list_dir(dir) {
            Ok(children) => children,
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "skipping unreadable directory");
                return;
            }
        };

        let mut survivors: Vec<(String, PathBuf, StatRecord)> = Vec::new();
        for (name, path) in children {
            let stat = match self.stat(&path) {
                Ok(stat) => stat,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            // Files dropped here never reach the ignore rules.
            if self.config.exclude_files && !stat.is_dir {
                continue;
            }
            if !self.patterns.is_empty() {
                let rel = relative_key(&self.root, &path);
                if self.patterns.is_ignored(&rel, stat.is_dir) {
                    continue;
                }
            }
            survivors.push((name, path, stat));
        }

        survivors.sort_by(|a, b| sort_cmp(&a.0, a.2.is_dir, &b.0, b.2.is_dir));

        let count = survivors.len();
        for (i, (name, path, stat)) in survivors.into_iter().enumerate() {
            out.push(Entry {
                name,
                path: path.clone(),
                depth: depth + 1,
                is_dir: stat.is_dir,
                size: stat.size,
                is_last: i + 1 == count,
            });
            if stat.is_dir {
                self.walk_dir(&path, depth + 1, out);
            }
        }
    }

    /// Stat with per-traversal memoization; classification and size display
    /// share the same record, so each path is stat'ed at most once per run.
    fn stat(&mut self, path: &Path) -> io::Result<StatRecord> {
        if let Some(rec) = self.stat_cache.get(path) {
            return Ok(*rec);
        }
        let meta = fs::metadata(path)?;
        let rec = StatRecord {
            is_dir: meta.is_dir(),
            size: meta.len(),
        };
        self.stat_cache.insert(path.to_path_buf(), rec);
        Ok(rec)
    }
}

fn list_dir(dir: &Path) -> io::Result<Vec<(String, PathBuf)>> {
    let mut children = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        children.push((name, entry.path()));
    }
    Ok(children)
}

/// Root-relative path with forward-slash separators, for glob matching.
fn relative_key(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

/// Display ordering for siblings: directories before files, dotted names
/// after plain ones, then case-insensitive alphabetical.
pub fn sort_cmp(a_name: &str, a_is_dir: bool, b_name: &str, b_is_dir: bool) -> Ordering {
    if a_is_dir != b_is_dir {
        return if a_is_dir {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    let a_dot = a_name.starts_with('.');
    let b_dot = b_name.starts_with('.');
    if a_dot != b_dot {
        return if a_dot {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }

    a_name.to_lowercase().cmp(&b_name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_sort_before_files() {
        assert_eq!(sort_cmp("zeta", true, "alpha.txt", false), Ordering::Less);
        assert_eq!(sort_cmp("alpha.txt", false, "zeta", true), Ordering::Greater);
    }

    #[test]
    fn dotted_names_sort_after_plain_ones() {
        assert_eq!(sort_cmp(".env", false, "zzz.txt", false), Ordering::Greater);
        assert_eq!(sort_cmp(".a", true, ".b", true), Ordering::Less);
    }

    #[test]
    fn ties_break_case_insensitively() {
        assert_eq!(sort_cmp("Banana.txt", false, "apple.txt", false), Ordering::Greater);
        assert_eq!(sort_cmp("apple.txt", false, "Banana.txt", false), Ordering::Less);
    }

    #[test]
    fn relative_key_uses_forward_slashes() {
        let root = PathBuf::from("/tmp/root");
        let path = root.join("a").join("b.txt");
        assert_eq!(relative_key(&root, &path), "a/b.txt");
    }
}
