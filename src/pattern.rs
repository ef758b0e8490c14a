//! Ignore-pattern compilation with process-wide memoization.

use globset::{GlobBuilder, GlobMatcher};
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// One ignore rule in matchable form.
///
/// Produced by [`compile`] from a raw ignore-file line. The `!` and trailing
/// `/` markers are stripped into flags; the remaining glob is anchored with
/// `**/` when the line was unanchored, so a bare name like `build` matches at
/// any depth.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Normalized glob text (markers stripped, anchoring applied).
    pub glob: String,
    /// `!`-prefixed rules re-include paths excluded by an earlier rule.
    pub is_negated: bool,
    /// `/`-suffixed rules apply to directory entries only.
    pub is_dir_only: bool,
    matcher: GlobMatcher,
}

impl PartialEq for CompiledPattern {
    fn eq(&self, other: &Self) -> bool {
        self.glob == other.glob
            && self.is_negated == other.is_negated
            && self.is_dir_only == other.is_dir_only
    }
}

impl CompiledPattern {
    /// Test a root-relative, slash-separated path against this rule.
    ///
    /// A rule matches the path itself or any of its ancestor prefixes, so a
    /// rule that excludes a directory also covers everything beneath it.
    pub fn matches(&self, rel_path: &str) -> bool {
        if self.matcher.is_match(rel_path) {
            return true;
        }
        let mut end = rel_path.len();
        while let Some(cut) = rel_path[..end].rfind('/') {
            if self.matcher.is_match(&rel_path[..cut]) {
                return true;
            }
            end = cut;
        }
        false
    }
}

fn pattern_cache() -> &'static Mutex<HashMap<String, Option<CompiledPattern>>> {
    static CACHE: OnceLock<Mutex<HashMap<String, Option<CompiledPattern>>>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HashMap::new()))
}

/// Compile one raw ignore-pattern line.
///
/// Results are memoized by the raw string for the lifetime of the process:
/// the same line always yields the same rule, and repeated lines skip
/// recompilation. Returns `None` for lines that are not valid globs; those
/// are logged and dropped from the rule set.
pub fn compile(raw: &str) -> Option<CompiledPattern> {
    let mut cache = pattern_cache().lock().unwrap_or_else(|e| e.into_inner());
    if let Some(hit) = cache.get(raw) {
        return hit.clone();
    }
    let compiled = build(raw);
    cache.insert(raw.to_string(), compiled.clone());
    compiled
}

fn build(raw: &str) -> Option<CompiledPattern> {
    let (is_negated, rest) = match raw.strip_prefix('!') {
        Some(r) => (true, r),
        None => (false, raw),
    };
    let (is_dir_only, rest) = match rest.strip_suffix('/') {
        Some(r) => (true, r),
        None => (false, rest),
    };
    if rest.is_empty() {
        tracing::warn!(pattern = raw, "skipping empty ignore pattern");
        return None;
    }

    // A leading slash anchors the rule to the root; matching is against
    // root-relative paths, so the slash itself is dropped. Everything else
    // that is not already `**/`-prefixed matches at any depth.
    let glob = if let Some(rooted) = rest.strip_prefix('/') {
        rooted.to_string()
    } else if rest.starts_with("**/") {
        rest.to_string()
    } else {
        format!("**/{rest}")
    };

    match GlobBuilder::new(&glob).literal_separator(true).build() {
        Ok(g) => Some(CompiledPattern {
            matcher: g.compile_matcher(),
            glob,
            is_negated,
            is_dir_only,
        }),
        Err(e) => {
            tracing::warn!(pattern = raw, error = %e, "skipping invalid ignore pattern");
            None
        }
    }
}
