//! Report formatting and printing utilities.
//!
//! Step listings go to stdout, diagnostics go to stderr in cargo style.
//! Kept apart from the scanner so stepcat can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::OutputFormat,
    commands::{CommandResult, CommandSummary, InitSummary, ListSummary},
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{StepDefinition, catalog::Stats};
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Width of the widest step type name (`AfterStep`).
const TYPE_COLUMN_WIDTH: usize = 9;

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::List(summary) => match summary.format {
            OutputFormat::Json => {
                print_json_to(summary, &result.issues, &mut io::stdout().lock());
            }
            OutputFormat::Text => {
                print_steps_to(&summary.steps, summary.show_code, &mut io::stdout().lock());
                print_list_summary_to(summary, &mut io::stdout().lock());
                print_issues_to(&result.issues, verbose, &mut io::stderr().lock());
            }
        },
        CommandSummary::Init(summary) => print_init(summary),
    }
}

/// Print one aligned row per step, optionally followed by its code.
pub fn print_steps_to<W: Write>(steps: &[StepDefinition], show_code: bool, writer: &mut W) {
    let name_width = steps
        .iter()
        .map(|s| UnicodeWidthStr::width(s.name.as_str()))
        .max()
        .unwrap_or(0);

    for step in steps {
        let name_pad = name_width.saturating_sub(UnicodeWidthStr::width(step.name.as_str()));
        let _ = writeln!(
            writer,
            "{}  {}{:name_pad$}  {}",
            format!("{:<width$}", step.step_type.as_str(), width = TYPE_COLUMN_WIDTH).bold(),
            step.name,
            "",
            format!("{}:{}", step.filename, step.line_number).dimmed(),
            name_pad = name_pad
        );

        if show_code {
            for line in &step.code {
                let _ = writeln!(writer, "    {} {}", "|".blue(), line);
            }
            let _ = writeln!(writer);
        }
    }
}

/// Print the one-line summary under a text listing.
pub fn print_list_summary_to<W: Write>(summary: &ListSummary, writer: &mut W) {
    let stats = &summary.stats;
    if summary.steps.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Scanned {} {} - no step definitions found",
                stats.files_scanned,
                if stats.files_scanned == 1 { "file" } else { "files" }
            )
            .green()
        );
        return;
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Found {} step definition(s) in {} {}",
            summary.steps.len(),
            stats.files_with_steps,
            if stats.files_with_steps == 1 { "file" } else { "files" }
        )
        .green()
    );
    if stats.ambiguous > 0 {
        let _ = writeln!(
            writer,
            "{} {} step pattern(s) defined more than once",
            "note:".bold(),
            stats.ambiguous
        );
    }
}

#[derive(Serialize)]
struct JsonListing<'a> {
    steps: &'a [StepDefinition],
    stats: &'a Stats,
    issues: &'a [Issue],
}

pub fn print_json_to<W: Write>(summary: &ListSummary, issues: &[Issue], writer: &mut W) {
    let listing = JsonListing {
        steps: &summary.steps,
        stats: &summary.stats,
        issues,
    };
    match serde_json::to_string_pretty(&listing) {
        Ok(json) => {
            let _ = writeln!(writer, "{}", json);
        }
        Err(e) => {
            let _ = writeln!(io::stderr(), "{} {}", "error:".bold().red(), e);
        }
    }
}

/// Print diagnostics.
///
/// Verbose mode prints every issue in cargo style; otherwise a single count
/// line per severity.
pub fn print_issues_to<W: Write>(issues: &[Issue], verbose: bool, writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    if verbose {
        let mut sorted: Vec<&Issue> = issues.iter().collect();
        sorted.sort_by(|a, b| {
            let (a, b) = (a.location(), b.location());
            a.file_path.cmp(b.file_path).then(a.line.cmp(&b.line))
        });
        for issue in sorted {
            print_issue(issue, writer);
        }
        print_problem_count(issues, writer);
        return;
    }

    let errors = count(issues, Severity::Error);
    let warnings = count(issues, Severity::Warning);
    if errors > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "error:".bold().red(),
            errors,
            "-v".cyan()
        );
    }
    if warnings > 0 {
        let _ = writeln!(
            writer,
            "{} {} step(s) extracted with low confidence (use {} for details)",
            "warning:".bold().yellow(),
            warnings,
            "-v".cyan()
        );
    }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };
    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );

    let loc = issue.location();
    match loc.line {
        Some(line) => {
            let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), loc.file_path, line);
        }
        None => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), loc.file_path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "   {} {} {}", "=".blue(), "note:".bold(), details);
    }

    let _ = writeln!(writer);
}

fn print_problem_count<W: Write>(issues: &[Issue], writer: &mut W) {
    let errors = count(issues, Severity::Error);
    let warnings = count(issues, Severity::Warning);
    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        errors + warnings,
        errors,
        if errors == 1 { "error" } else { "errors" }.red(),
        warnings,
        if warnings == 1 { "warning" } else { "warnings" }.yellow()
    );
}

fn count(issues: &[Issue], severity: Severity) -> usize {
    issues.iter().filter(|i| i.severity() == severity).count()
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!(
            "{} {} already exists",
            FAILURE_MARK.red(),
            CONFIG_FILE_NAME
        );
    }
}

// ============================================================
// Tests
// ============================================================
