//! Diagnostic types for step extraction.
//!
//! The scanner never fails, but some extractions are low-confidence. Each
//! diagnostic is self-contained with everything the reporters (CLI, MCP) need
//! to display it.

use enum_dispatch::enum_dispatch;
use serde::Serialize;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnterminatedBody,
    UnmatchedPattern,
    ReadError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnterminatedBody => write!(f, "unterminated-body"),
            Rule::UnmatchedPattern => write!(f, "unmatched-pattern"),
            Rule::ReadError => write!(f, "read-error"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A native step body ran to end of file before its `end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnterminatedBodyIssue {
    pub file_path: String,
    /// Line of the step opener.
    pub line: usize,
    /// Body lines captured up to end of file (comments excluded).
    pub captured_lines: usize,
}

impl UnterminatedBodyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnterminatedBody
    }
}

/// A Given/When/Then/Transform opener without a `/.../` pattern literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmatchedPatternIssue {
    pub file_path: String,
    pub line: usize,
    /// The opener line, used verbatim as the step name.
    pub text: String,
}

impl UnmatchedPatternIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnmatchedPattern
    }
}

/// A discovered source file could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ReadErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ReadError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A diagnostic produced while building a step catalog.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum Issue {
    UnterminatedBody(UnterminatedBodyIssue),
    UnmatchedPattern(UnmatchedPatternIssue),
    ReadError(ReadErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::UnterminatedBody(_) => UnterminatedBodyIssue::severity(),
            Issue::UnmatchedPattern(_) => UnmatchedPatternIssue::severity(),
            Issue::ReadError(_) => ReadErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::UnterminatedBody(_) => UnterminatedBodyIssue::rule(),
            Issue::UnmatchedPattern(_) => UnmatchedPatternIssue::rule(),
            Issue::ReadError(_) => ReadErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub struct ReportLocation<'a> {
    pub file_path: &'a str,
    /// `None` for file-level issues.
    pub line: Option<usize>,
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types to provide a consistent interface for the
/// report functions. Uses `enum_dispatch` for zero-cost dispatch on the
/// `Issue` enum.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for UnterminatedBodyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation {
            file_path: &self.file_path,
            line: Some(self.line),
        }
    }

    fn message(&self) -> String {
        "step body has no closing `end`".to_string()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "captured {} line(s) up to end of file",
            self.captured_lines
        ))
    }
}

impl Report for UnmatchedPatternIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation {
            file_path: &self.file_path,
            line: Some(self.line),
        }
    }

    fn message(&self) -> String {
        "no /pattern/ literal found, using the whole line as name".to_string()
    }

    fn details(&self) -> Option<String> {
        Some(self.text.clone())
    }
}

impl Report for ReadErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation {
            file_path: &self.file_path,
            line: None,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }
}
