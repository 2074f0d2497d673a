use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed; warnings alone do not fail a scan
/// - `Failure` (1): Unreadable files, diagnostics under `--strict`, or `init`
///   found an existing config
/// - `Error` (2): Command failed due to internal error (config error, bad arguments, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
