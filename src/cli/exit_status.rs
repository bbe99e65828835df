use std::process::ExitCode;

/// Exit status of the CLI, following common conventions for linter tools.
///
/// - `Success` (0): the scan completed (missing translations are reported, not failed on)
/// - `Failure` (1): `--strict` and at least one string is missing a translation
/// - `Error` (2): the scan failed (unreadable tree, malformed resource file, no default locale, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The scan completed.
    Success,
    /// Missing translations were found in strict mode.
    Failure,
    /// The scan could not be completed.
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
