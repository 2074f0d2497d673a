use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::is_glob_pattern;

/// Result of scanning files.
pub struct ScanResult {
    /// Matching files, sorted by path.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

/// Collect step definition source files under `base_dir`.
///
/// `includes` entries are literal directories or glob patterns expanded to
/// directories; an empty list scans `base_dir` itself. `ignore_patterns`
/// entries are either glob patterns matched against the full path or literal
/// paths (relative to `base_dir`) matched by prefix.
pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    extensions: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files: BTreeSet<String> = BTreeSet::new();
    let mut skipped_count = 0;

    let ignores = IgnoreSet::new(base_dir, ignore_patterns, verbose);

    let dirs_to_scan: Vec<PathBuf> = if includes.is_empty() {
        vec![Path::new(base_dir).to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in includes {
            if is_glob_pattern(inc) {
                let full_pattern = Path::new(base_dir).join(inc);
                let pattern_str = full_pattern.to_string_lossy();
                match glob(&pattern_str) {
                    Ok(entries) => {
                        for entry in entries.flatten() {
                            if entry.is_dir() {
                                paths.push(entry);
                            }
                        }
                    }
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid glob pattern '{}': {}",
                                "warning:".bold().yellow(),
                                inc,
                                e
                            );
                        }
                    }
                }
            } else {
                let path = Path::new(base_dir).join(inc);
                if path.exists() {
                    paths.push(path);
                } else if verbose {
                    eprintln!(
                        "{} Include path does not exist: {}",
                        "warning:".bold().yellow(),
                        path.display()
                    );
                }
            }
        }
        paths
    };

    for dir in dirs_to_scan {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            if ignores.is_ignored(path) {
                continue;
            }

            if path.is_file() && has_step_extension(path, extensions) {
                files.insert(path.to_string_lossy().into_owned());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

/// Ignore entries split by kind.
///
/// An entry with `*` or `?` is a glob tested against the whole walked path, so
/// `**/vendor/**` catches vendored gems at any depth. Anything else names one
/// directory or file relative to the scan root and excludes it together with
/// everything below it, compared by path component so `legacy` never hides
/// `legacy_steps.rb`.
struct IgnoreSet {
    prefixes: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &str, patterns: &[String], verbose: bool) -> Self {
        let mut prefixes = Vec::new();
        let mut globs = Vec::new();
        for p in patterns {
            if !is_glob_pattern(p) {
                prefixes.push(Path::new(base_dir).join(p));
                continue;
            }
            match Pattern::new(p) {
                Ok(pattern) => globs.push(pattern),
                Err(e) if verbose => eprintln!(
                    "{} Invalid ignore pattern '{}': {}",
                    "warning:".bold().yellow(),
                    p,
                    e
                ),
                Err(_) => {}
            }
        }
        Self { prefixes, globs }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.prefixes.iter().any(|prefix| path.starts_with(prefix)) {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.globs.iter().any(|g| g.matches(&path_str))
    }
}

fn has_step_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
}
