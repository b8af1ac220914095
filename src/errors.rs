//! Error type shared by the sysfs and character-device front ends.

use std::io::Error as IOError;

use crate::fixed_str::FixedStrErr;

pub type Result<T> = std::result::Result<T, Error>;

/// The step of a sysfs invocation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SysfsAction {
    Export,
    SetDirection,
    GetDirection,
    SetValue,
    GetValue,
}

impl std::fmt::Display for SysfsAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SysfsAction::Export => "export gpio",
            SysfsAction::SetDirection => "set gpio direction",
            SysfsAction::GetDirection => "get gpio direction",
            SysfsAction::SetValue => "set gpio value",
            SysfsAction::GetValue => "get gpio value",
        };
        f.write_str(s)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot {action}: {source}")]
    Sysfs {
        action: SysfsAction,
        #[source]
        source: IOError,
    },
    #[error(transparent)]
    Io(#[from] IOError),
    #[error("{op} failed: {}", negated(.source))]
    Ioctl {
        op: &'static str,
        #[source]
        source: nix::Error,
    },
    #[error("Invalid direction '{0}': expected 'in' or 'out'")]
    InvalidDirection(String),
    #[error("Invalid value '{0}': expected '0' or '1'")]
    InvalidValue(String),
    #[error("Invalid request: {values} values given for {lines} lines")]
    ValueCount { lines: usize, values: usize },
    #[error("Line request exceeded maximum number of lines: {max}")]
    TooManyLines { max: usize },
    #[error("Line offset {0} requested more than once")]
    DuplicateOffset(u32),
    #[error("Offset {offset} is out of range for a chip with {lines} lines")]
    Offset { offset: u32, lines: u32 },
    #[error("Invalid name or label: {0}")]
    Label(#[from] FixedStrErr),
}

fn negated(errno: &nix::Error) -> i32 {
    -(*errno as i32)
}

impl Error {
    pub(crate) fn ioctl(op: &'static str) -> impl FnOnce(nix::Error) -> Self {
        move |source| Error::Ioctl { op, source }
    }

    /// The OS error number behind this failure.
    ///
    /// Argument validation failures report `EINVAL`.
    pub fn errno(&self) -> i32 {
        match self {
            Error::Sysfs { source, .. } | Error::Io(source) => {
                source.raw_os_error().unwrap_or(libc::EIO)
            }
            Error::Ioctl { source, .. } => *source as i32,
            Error::TooManyLines { .. } => libc::E2BIG,
            Error::InvalidDirection(_)
            | Error::InvalidValue(_)
            | Error::ValueCount { .. }
            | Error::DuplicateOffset(_)
            | Error::Offset { .. }
            | Error::Label(_) => libc::EINVAL,
        }
    }

    /// Whether the failure came back from the kernel rather than from
    /// argument checking.
    pub fn is_os_error(&self) -> bool {
        matches!(
            self,
            Error::Sysfs { .. } | Error::Io(_) | Error::Ioctl { .. }
        )
    }
}
