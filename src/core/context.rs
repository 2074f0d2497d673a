use std::{
    cell::OnceCell,
    collections::BTreeSet,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{catalog::StepCatalog, file_scanner::scan_files},
};

/// Project-level scan context.
///
/// Loads configuration, discovers step definition files, and lazily builds
/// the [`StepCatalog`] on first access.
///
/// # Configuration Priority
///
/// 1. CLI arguments (`--source-root`, `--include`, `--ignore`)
/// 2. `.stepcatrc.json` config file
/// 3. Built-in defaults
pub struct ScanContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root; step filenames are reported relative to it.
    pub root_dir: PathBuf,

    /// Discovered step definition files, sorted.
    pub files: BTreeSet<String>,

    /// True if config was loaded from a file.
    pub config_from_file: bool,

    pub verbose: bool,

    catalog: OnceCell<StepCatalog>,
}

impl ScanContext {
    /// Create a new `ScanContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the root path is not valid UTF-8 or the config file
    /// is invalid.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if !common_args.include.is_empty() {
            config.includes = common_args.include.clone();
        }
        config.ignores.extend(common_args.ignore.iter().cloned());
        config.validate()?;

        let scan_dir = resolve_scan_dir(&root_dir, &config.source_root);
        let scan_path = scan_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", scan_dir))?;

        let scan_result = scan_files(
            scan_path,
            &config.includes,
            &config.ignores,
            &config.normalized_extensions(),
            verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            config_from_file: config_result.from_file,
            verbose,
            catalog: OnceCell::new(),
        })
    }

    /// Scan all discovered files (lazy, parallel on first call).
    pub fn catalog(&self) -> &StepCatalog {
        self.catalog
            .get_or_init(|| StepCatalog::from_paths(&self.root_dir, &self.files))
    }
}

/// Join the configured source root onto the project root.
///
/// `./`-style roots are folded away so reported paths stay short.
fn resolve_scan_dir(root_dir: &Path, source_root: &str) -> PathBuf {
    let p = Path::new(source_root);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    if p.components().all(|c| matches!(c, Component::CurDir)) {
        return root_dir.to_path_buf();
    }
    let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
    root_dir.join(rel)
}
