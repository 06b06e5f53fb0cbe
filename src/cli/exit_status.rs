use std::process::ExitCode;

/// Exit status for tokenctl commands.
///
/// - `Success` (0): Command completed, nothing to report
/// - `Failure` (1): Reference issues found, or the requested token does not resolve
/// - `Error` (2): Command could not run (bad config, unreadable or invalid token file)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}
