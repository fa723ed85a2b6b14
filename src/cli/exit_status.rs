use std::process::ExitCode;

/// How a lutkey command finished.
///
/// `check` reports overlapping keys with `Failure`; configuration, IO and
/// unresolvable keys surface as `Error` from `main`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    /// The command ran but the table needs attention.
    Failure = 1,
    Error = 2,
}

impl ExitStatus {
    pub fn is_success(self) -> bool {
        self == ExitStatus::Success
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}
