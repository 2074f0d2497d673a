//! Step definition scanner.
//!
//! Walks one file line by line and emits a [`StepDefinition`] for every
//! step opener it recognizes, in either of two dialects:
//!
//! - **Native** (Ruby/Cucumber): `Given /^pattern$/ do ... end`. The whole body
//!   is captured by balancing block keywords against `end` (see [`body`]).
//! - **Attribute** (C#/SpecFlow): `[Given(@"pattern")]`. Only the attribute line
//!   is recognized; the method body is replaced by [`ATTRIBUTE_BODY_PLACEHOLDER`].
//!
//! A contiguous run of comment lines directly above an opener is attached to
//! that step's `code`. Any other line discards pending comments.
//!
//! The scanner never fails. Unterminated bodies and names that could not be
//! derived from a pattern literal are still emitted, and noted as
//! [`Issue`]s for the caller to report or ignore.

mod body;
mod classify;
mod cursor;
mod extract;

pub use body::balance_delta;
pub use classify::{LineKind, classify_line};
pub use cursor::LineCursor;
pub use extract::{ExtractedName, clean_attribute, parse_step_name, parse_step_type};

use crate::{
    core::step::{StepDefinition, StepType},
    issues::{Issue, UnmatchedPatternIssue, UnterminatedBodyIssue},
};

/// Stands in for the body of attribute-dialect steps, which is not captured.
pub const ATTRIBUTE_BODY_PLACEHOLDER: &str =
    "The actual c# code is not displayed. This could be a future enhancement";

/// Accumulates step definitions over any number of files.
///
/// ```
/// use stepcat::core::scanner::StepScanner;
///
/// let mut scanner = StepScanner::new();
/// scanner.read("steps.rb", "# setup\nGiven /^a$/\nend");
///
/// let step = &scanner.steps()[0];
/// assert_eq!(step.name, "Given a");
/// assert_eq!(step.line_number, 2);
/// assert_eq!(step.code, vec!["# setup", "Given /^a$/", "end"]);
/// ```
#[derive(Debug, Default)]
pub struct StepScanner {
    steps: Vec<StepDefinition>,
    issues: Vec<Issue>,
}

impl StepScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan one file and append its steps to the collection.
    pub fn read(&mut self, filename: &str, content: &str) {
        let mut scan = FileScan {
            filename,
            cursor: LineCursor::new(content),
            comments: Vec::new(),
            steps: &mut self.steps,
            issues: &mut self.issues,
        };
        scan.parse_lines();
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// Low-confidence extractions seen so far.
    pub fn diagnostics(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_parts(self) -> (Vec<StepDefinition>, Vec<Issue>) {
        (self.steps, self.issues)
    }
}

/// State of a single file scan. Dropped when the file is done.
struct FileScan<'a, 's> {
    filename: &'a str,
    cursor: LineCursor<'a>,
    comments: Vec<String>,
    steps: &'s mut Vec<StepDefinition>,
    issues: &'s mut Vec<Issue>,
}

impl<'a> FileScan<'a, '_> {
    fn parse_lines(&mut self) {
        while let Some(line) = self.cursor.next_line() {
            match classify_line(line) {
                LineKind::Comment => self.comments.push(line.to_string()),
                LineKind::NativeOpener => {
                    self.cursor.unread(line.trim_start());
                    self.parse_native_step();
                    self.comments.clear();
                }
                LineKind::AttributeOpener => {
                    self.parse_attribute_step(line);
                    self.comments.clear();
                }
                LineKind::Other => self.comments.clear(),
            }
        }
    }

    fn parse_native_step(&mut self) {
        let Some(opener) = self.cursor.peek() else {
            return;
        };
        let line_number = self.cursor.line_number() + 1;
        let step_type = parse_step_type(opener);
        let extracted = parse_step_name(opener);

        let mut code = std::mem::take(&mut self.comments);
        let comment_count = code.len();
        let closed = body::capture_body(&mut self.cursor, &mut code);

        let Some(step_type) = step_type else {
            return;
        };

        if !closed {
            self.issues.push(Issue::UnterminatedBody(UnterminatedBodyIssue {
                file_path: self.filename.to_string(),
                line: line_number,
                captured_lines: code.len() - comment_count,
            }));
        }
        if step_type.has_pattern() && !extracted.from_pattern {
            self.issues.push(Issue::UnmatchedPattern(UnmatchedPatternIssue {
                file_path: self.filename.to_string(),
                line: line_number,
                text: opener.to_string(),
            }));
        }

        self.push_step(step_type, extracted.name, code, line_number);
    }

    fn parse_attribute_step(&mut self, line: &str) {
        let cleaned = clean_attribute(line);
        let Some(step_type) = parse_step_type(&cleaned) else {
            return;
        };
        let name = parse_step_name(&cleaned).name;

        let mut code = std::mem::take(&mut self.comments);
        code.push(ATTRIBUTE_BODY_PLACEHOLDER.to_string());

        let line_number = self.cursor.line_number();
        self.push_step(step_type, name, code, line_number);
    }

    fn push_step(
        &mut self,
        step_type: StepType,
        name: String,
        code: Vec<String>,
        line_number: usize,
    ) {
        self.steps.push(StepDefinition {
            step_type,
            name,
            filename: self.filename.to_string(),
            code,
            line_number,
        });
    }
}
