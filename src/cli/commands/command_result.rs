use crate::{
    cli::{args::OutputFormat, exit_status::ExitStatus},
    core::{StepDefinition, catalog::Stats},
    issues::{Issue, Severity},
};

#[derive(Debug)]
pub enum CommandSummary {
    List(ListSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ListSummary {
    /// Steps to print, already filtered by the requested types.
    pub steps: Vec<StepDefinition>,
    /// Stats over the whole catalog (unfiltered).
    pub stats: Stats,
    pub format: OutputFormat,
    pub show_code: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running stepcat commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Diagnostics collected while scanning. Empty for `init`.
    pub issues: Vec<Issue>,
    /// If true, any diagnostic makes the command fail.
    pub strict: bool,
}

impl CommandResult {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Warning)
            .count()
    }

    pub fn exit_status(&self) -> ExitStatus {
        if let CommandSummary::Init(InitSummary { created: false }) = self.summary {
            return ExitStatus::Failure;
        }
        if self.error_count() > 0 || (self.strict && !self.issues.is_empty()) {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
