//! Legacy `/sys/class/gpio` interface.
//!
//! Every operation opens its attribute file, performs a single read or
//! write, and closes it again. Sysfs attributes are treated as
//! immediately consistent: nothing is retried.

use std::{
    fs::OpenOptions,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    errors::{Error, Result, SysfsAction},
    line::{Direction, LineValue},
};

pub const DEFAULT_SYSFS_ROOT: &str = "/sys/class/gpio";

/// A GPIO class directory, normally [`DEFAULT_SYSFS_ROOT`].
#[derive(Debug, Clone)]
pub struct Sysfs {
    root: PathBuf,
}

impl Default for Sysfs {
    fn default() -> Self {
        Self::new(DEFAULT_SYSFS_ROOT)
    }
}

impl Sysfs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The directory the kernel creates once `pin` is exported.
    pub fn pin_dir(&self, pin: u32) -> PathBuf {
        self.root.join(format!("gpio{pin}"))
    }

    pub fn is_exported(&self, pin: u32) -> bool {
        self.pin_dir(pin).exists()
    }

    /// Export `pin`. Does nothing if it is already exported.
    pub fn export(&self, pin: u32) -> Result<()> {
        if self.is_exported(pin) {
            debug!(pin, "already exported");
            return Ok(());
        }
        write_attr(&self.root.join("export"), &pin.to_string())
            .map_err(sysfs_err(SysfsAction::Export))
    }

    pub fn set_direction(&self, pin: u32, direction: Direction) -> Result<()> {
        write_attr(&self.pin_dir(pin).join("direction"), direction.as_str())
            .map_err(sysfs_err(SysfsAction::SetDirection))
    }

    pub fn direction(&self, pin: u32) -> Result<Direction> {
        read_attr(&self.pin_dir(pin).join("direction"))
            .map_err(sysfs_err(SysfsAction::GetDirection))?
            .parse()
    }

    pub fn set_value(&self, pin: u32, value: LineValue) -> Result<()> {
        write_attr(&self.pin_dir(pin).join("value"), &value.to_string())
            .map_err(sysfs_err(SysfsAction::SetValue))
    }

    pub fn value(&self, pin: u32) -> Result<LineValue> {
        read_attr(&self.pin_dir(pin).join("value"))
            .map_err(sysfs_err(SysfsAction::GetValue))?
            .parse()
    }
}

fn sysfs_err(action: SysfsAction) -> impl FnOnce(std::io::Error) -> Error {
    move |source| Error::Sysfs { action, source }
}

fn write_attr(path: &Path, contents: &str) -> std::io::Result<()> {
    debug!(path = %path.display(), contents, "write");
    let mut f = OpenOptions::new().write(true).truncate(true).open(path)?;
    f.write_all(contents.as_bytes())
}

fn read_attr(path: &Path) -> std::io::Result<String> {
    debug!(path = %path.display(), "read");
    let mut f = OpenOptions::new().read(true).open(path)?;
    let mut s = String::new();
    f.read_to_string(&mut s)?;
    s.truncate(s.trim_end().len());
    Ok(s)
}

/// One `gpio-sysfs` invocation.
///
/// A missing direction or value means "read it back and print it".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub pin: u32,
    pub direction: Option<Direction>,
    pub value: Option<LineValue>,
}

/// Export the pin, then set or report its direction, then set or report
/// its value. Reports are written to `out`; the first failure stops the
/// sequence.
pub fn run(sysfs: &Sysfs, inv: &Invocation, out: &mut impl Write) -> Result<()> {
    sysfs.export(inv.pin)?;

    match inv.direction {
        Some(direction) => sysfs.set_direction(inv.pin, direction)?,
        None => writeln!(out, "gpio direction = {}", sysfs.direction(inv.pin)?)?,
    }

    match inv.value {
        Some(value) => sysfs.set_value(inv.pin, value)?,
        None => writeln!(out, "gpio value = {}", sysfs.value(inv.pin)?)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_paths() {
        let sysfs = Sysfs::default();
        assert_eq!(
            sysfs.pin_dir(17),
            PathBuf::from("/sys/class/gpio/gpio17")
        );
    }

    #[test]
    fn trailing_newline_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("direction");
        std::fs::write(&path, "out\n").unwrap();
        assert_eq!(read_attr(&path).unwrap(), "out");
    }

    #[test]
    fn writes_replace_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("direction");
        std::fs::write(&path, "out\n").unwrap();
        write_attr(&path, "in").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "in");
    }

    #[test]
    fn unexpected_attribute_contents_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let sysfs = Sysfs::new(dir.path());
        std::fs::create_dir(sysfs.pin_dir(4)).unwrap();
        std::fs::write(sysfs.pin_dir(4).join("value"), "7\n").unwrap();
        assert!(matches!(sysfs.value(4), Err(Error::InvalidValue(_))));
    }
}
