use std::str::FromStr;

use crate::{errors::Error, uapi::v1::GPIOHANDLE_REQUEST_FLAGS};

/// Direction of a GPIO line.
///
/// Parses from and prints as the sysfs spelling, `in` or `out`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Input,
    Output,
}

impl Direction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Direction::Input => "in",
            Direction::Output => "out",
        }
    }

    pub(crate) const fn request_flags(&self) -> GPIOHANDLE_REQUEST_FLAGS {
        match self {
            Direction::Input => GPIOHANDLE_REQUEST_FLAGS::INPUT,
            Direction::Output => GPIOHANDLE_REQUEST_FLAGS::OUTPUT,
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Direction::Input),
            "out" => Ok(Direction::Output),
            other => Err(Error::InvalidDirection(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
