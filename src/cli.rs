//! Command-line surfaces of `gpio-sysfs` and `gpio-cdev`.
//!
//! Arguments are parsed with clap, then checked and turned into an
//! invocation before anything touches the system.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::{
    cdev,
    chip::DEFAULT_DEV_DIR,
    errors::Error,
    line::{LineOffsets, ValueFit},
    sysfs::{self, DEFAULT_SYSFS_ROOT},
};

/// Exit status for usage errors and sysfs failures.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing required option {0}")]
    Missing(&'static str),
    #[error(transparent)]
    Invalid(#[from] Error),
}

/// Control a GPIO through /sys/class/gpio
#[derive(Parser, Debug)]
#[command(name = "gpio-sysfs")]
#[command(version)]
#[command(override_usage = "gpio-sysfs -n NUM [-d DIR] [-v VAL]")]
pub struct SysfsArgs {
    /// GPIO number NUM.
    #[arg(short = 'n', long = "number", value_name = "NUM")]
    pub number: Option<u32>,

    /// Set GPIO direction DIR. { in, out }
    #[arg(short = 'd', long, value_name = "DIR")]
    pub direction: Option<String>,

    /// Set GPIO value VAL. { 0, 1 }
    #[arg(short = 'v', long, value_name = "VAL")]
    pub value: Option<String>,

    /// GPIO class directory
    #[arg(long, value_name = "DIR", env = "GPIO_SYSFS_ROOT", default_value = DEFAULT_SYSFS_ROOT)]
    pub sysfs_root: PathBuf,
}

impl SysfsArgs {
    pub fn invocation(&self) -> Result<sysfs::Invocation, CliError> {
        let pin = self.number.ok_or(CliError::Missing("-n"))?;
        Ok(sysfs::Invocation {
            pin,
            direction: self.direction.as_deref().map(str::parse).transpose()?,
            value: self.value.as_deref().map(str::parse).transpose()?,
        })
    }

    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}

/// Control GPIO lines through a /dev/gpiochipN character device
#[derive(Parser, Debug)]
#[command(name = "gpio-cdev")]
#[command(version)]
#[command(override_usage = "gpio-cdev -n NAME -o OFF [-o OFF ...] [-d DIR] [-v VAL]")]
pub struct CdevArgs {
    /// GPIO chip NAME, e.g. gpiochip0, or a path to the device.
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Line offset OFF on the chip. Repeat for more lines.
    #[arg(short = 'o', long = "offset", value_name = "OFF")]
    pub offsets: Vec<u32>,

    /// Request lines with direction DIR. { in, out }
    #[arg(short = 'd', long, value_name = "DIR")]
    pub direction: Option<String>,

    /// Drive output lines with bitstring VAL, e.g. 0110.
    #[arg(short = 'v', long, value_name = "VAL")]
    pub value: Option<String>,

    /// Consumer label attached to the requested lines
    #[arg(long, value_name = "LABEL", env = "GPIO_CONSUMER", default_value = cdev::DEFAULT_CONSUMER)]
    pub consumer: String,

    /// Require exactly one value per line instead of repeating VAL
    #[arg(long, env = "GPIO_STRICT_VALUES")]
    pub strict: bool,

    /// Directory chip names are looked up in
    #[arg(long, value_name = "DIR", env = "GPIO_DEV_DIR", default_value = DEFAULT_DEV_DIR)]
    pub dev_dir: PathBuf,
}

impl CdevArgs {
    pub fn invocation(&self) -> Result<cdev::Invocation, CliError> {
        let chip = self.name.clone().ok_or(CliError::Missing("-n"))?;
        if self.offsets.is_empty() {
            return Err(CliError::Missing("-o"));
        }

        Ok(cdev::Invocation {
            chip,
            offsets: LineOffsets::try_from_iter(self.offsets.iter().copied())?,
            direction: self
                .direction
                .as_deref()
                .map(str::parse)
                .transpose()?
                .unwrap_or_default(),
            values: self.value.as_deref().map(str::parse).transpose()?,
            fit: if self.strict {
                ValueFit::Exact
            } else {
                ValueFit::Cycle
            },
            consumer: self.consumer.clone(),
        })
    }

    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}

/// Exit status of a failed `gpio-cdev` run.
///
/// Kernel failures exit with the negated errno as a shell sees it
/// (`-EBUSY` becomes 240); everything else exits with 1.
pub fn cdev_exit_status(err: &Error) -> u8 {
    if err.is_os_error() {
        (-err.errno()) as u8
    } else {
        EXIT_FAILURE
    }
}
