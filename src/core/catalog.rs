//! Multi-file step catalog.
//!
//! Each file gets its own [`StepScanner`] so files can be scanned in parallel
//! with rayon. Results are merged back in input order, which keeps every
//! file's steps together and the output deterministic.

use std::{
    collections::{BTreeSet, HashMap},
    path::Path,
};

use rayon::prelude::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    core::{
        scanner::StepScanner,
        step::{StepDefinition, StepType},
    },
    issues::{Issue, ReadErrorIssue},
};

/// In-memory source file handed to the scanner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceFile {
    pub path: String,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ByType {
    #[serde(rename = "Given")]
    pub given: usize,
    #[serde(rename = "When")]
    pub when: usize,
    #[serde(rename = "Then")]
    pub then: usize,
    #[serde(rename = "Before")]
    pub before: usize,
    #[serde(rename = "After")]
    pub after: usize,
    #[serde(rename = "AfterStep")]
    pub after_step: usize,
    #[serde(rename = "Transform")]
    pub transform: usize,
}

impl ByType {
    fn count(&mut self, step_type: StepType) {
        let slot = match step_type {
            StepType::Given => &mut self.given,
            StepType::When => &mut self.when,
            StepType::Then => &mut self.then,
            StepType::Before => &mut self.before,
            StepType::After => &mut self.after,
            StepType::AfterStep => &mut self.after_step,
            StepType::Transform => &mut self.transform,
        };
        *slot += 1;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Stats {
    pub total: usize,
    pub by_type: ByType,
    /// Distinct `(type, name)` step patterns defined more than once. Hooks are
    /// not counted.
    pub ambiguous: usize,
    pub files_scanned: usize,
    pub files_with_steps: usize,
}

/// Steps from many files plus stats and diagnostics.
#[derive(Clone, Debug, Default)]
pub struct StepCatalog {
    pub steps: Vec<StepDefinition>,
    pub stats: Stats,
    pub issues: Vec<Issue>,
}

impl StepCatalog {
    /// Scan in-memory files. `SourceFile::path` is used verbatim as filename.
    pub fn from_files(files: &[SourceFile]) -> Self {
        let per_file: Vec<(Vec<StepDefinition>, Vec<Issue>)> = files
            .par_iter()
            .map(|file| {
                let mut scanner = StepScanner::new();
                scanner.read(&file.path, &file.text);
                scanner.into_parts()
            })
            .collect();

        Self::merge(per_file, files.len())
    }

    /// Read and scan files from disk.
    ///
    /// Filenames are recorded relative to `root` when possible. Unreadable
    /// files become [`ReadErrorIssue`]s and do not stop the scan.
    pub fn from_paths(root: &Path, paths: &BTreeSet<String>) -> Self {
        let per_file: Vec<(Vec<StepDefinition>, Vec<Issue>)> = paths
            .par_iter()
            .map(|path| {
                let display = display_path(root, path);
                match std::fs::read_to_string(path) {
                    Ok(text) => {
                        let mut scanner = StepScanner::new();
                        scanner.read(&display, &text);
                        scanner.into_parts()
                    }
                    Err(e) => (
                        Vec::new(),
                        vec![Issue::ReadError(ReadErrorIssue {
                            file_path: display,
                            error: format!("Failed to read file: {}", e),
                        })],
                    ),
                }
            })
            .collect();

        Self::merge(per_file, paths.len())
    }

    fn merge(per_file: Vec<(Vec<StepDefinition>, Vec<Issue>)>, files_scanned: usize) -> Self {
        let mut steps = Vec::new();
        let mut issues = Vec::new();
        let mut files_with_steps = 0;

        for (file_steps, file_issues) in per_file {
            if !file_steps.is_empty() {
                files_with_steps += 1;
            }
            steps.extend(file_steps);
            issues.extend(file_issues);
        }

        let stats = compute_stats(&steps, files_scanned, files_with_steps);
        Self {
            steps,
            stats,
            issues,
        }
    }

    pub fn steps_of_type(&self, step_type: StepType) -> impl Iterator<Item = &StepDefinition> {
        self.steps.iter().filter(move |s| s.step_type == step_type)
    }
}

fn compute_stats(steps: &[StepDefinition], files_scanned: usize, files_with_steps: usize) -> Stats {
    let mut by_type = ByType::default();
    for s in steps {
        by_type.count(s.step_type);
    }

    let mut seen: HashMap<(StepType, &str), usize> = HashMap::new();
    for s in steps.iter().filter(|s| s.step_type.has_pattern()) {
        *seen.entry((s.step_type, s.name.as_str())).or_insert(0) += 1;
    }
    let ambiguous = seen.values().filter(|&&c| c > 1).count();

    Stats {
        total: steps.len(),
        by_type,
        ambiguous,
        files_scanned,
        files_with_steps,
    }
}

fn display_path(root: &Path, path: &str) -> String {
    Path::new(path)
        .strip_prefix(root)
        .map(|rel| rel.to_string_lossy().into_owned())
        .unwrap_or_else(|_| path.to_string())
}
