#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use treesnap::walk::{Entry, SnapshotConfig, Traversal};

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Default config, but with files included (most assertions want them).
pub fn files_config() -> SnapshotConfig {
    SnapshotConfig {
        exclude_files: false,
        ..SnapshotConfig::default()
    }
}

/// Run a full traversal with no extra patterns.
pub fn collect(root: &Path, config: &SnapshotConfig) -> Vec<Entry> {
    let mut traversal = Traversal::new(root, config, &[]);
    traversal.collect()
}

/// Names of entries at a given depth, in display order.
pub fn names_at_depth(entries: &[Entry], depth: usize) -> Vec<String> {
    entries
        .iter()
        .filter(|e| e.depth == depth)
        .map(|e| e.name.clone())
        .collect()
}
