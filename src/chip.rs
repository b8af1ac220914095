use std::{
    fs::File,
    os::fd::{AsFd, AsRawFd, BorrowedFd, RawFd},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    errors::{Error, Result},
    fixed_str::FixedStr,
    line::{LineHandle, LineRequest, Lines},
    uapi::{self, GPIO_MAX_NAME_SIZE},
};

/// Where chip names given on the command line are looked up.
pub const DEFAULT_DEV_DIR: &str = "/dev";

/// Resolve a chip name such as `gpiochip0` to its device node.
///
/// Names containing a `/` are taken as paths and returned unchanged.
pub fn chip_path(dev_dir: &Path, name: &str) -> PathBuf {
    if name.contains('/') {
        PathBuf::from(name)
    } else {
        dev_dir.join(name)
    }
}

/// The operations a GPIO chip offers for line-handle requests.
pub trait GpioChip {
    type Handle: LineHandle;

    fn info(&self) -> Result<ChipInfo>;

    /// Acquire the requested lines, yielding a handle that owns them.
    fn request_lines(&self, request: &LineRequest) -> Result<Self::Handle>;
}

#[derive(Debug, Clone)]
pub struct ChipInfo {
    name: FixedStr<GPIO_MAX_NAME_SIZE>,
    label: FixedStr<GPIO_MAX_NAME_SIZE>,
    lines: u32,
}

impl ChipInfo {
    pub fn new(name: &str, label: &str, lines: u32) -> Result<Self> {
        Ok(Self {
            name: FixedStr::new(name)?,
            label: FixedStr::new(label)?,
            lines,
        })
    }

    /// The name of the device driving this GPIO chip in the kernel
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// A functional name for this GPIO chip, such as a product number.  Might
    /// be an empty string.
    ///
    /// As an example, the SoC GPIO chip on a Raspberry Pi is "pinctrl-bcm2835"
    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// The number of lines/pins indexable through this chip
    pub const fn num_lines(&self) -> u32 {
        self.lines
    }

    /// Fail if any offset is not a line of this chip.
    pub fn check_offsets(&self, offsets: &[u32]) -> Result<()> {
        match offsets.iter().find(|o| **o >= self.lines) {
            Some(&offset) => Err(Error::Offset {
                offset,
                lines: self.lines,
            }),
            None => Ok(()),
        }
    }
}

/// A GPIO Chip maps to the actual device driver instance in hardware that
/// one interacts with to interact with individual GPIOs.  Often these chips
/// map to IP chunks on an SoC but could also be enumerated within the kernel
/// via something like a PCI or USB bus.
///
/// The Linux kernel enumerates GPIO character devices at `/dev/gpiochipN`.
/// The numbering is not guaranteed to be stable across boots, so a udev
/// symlink is the reliable way to address a particular chip.
#[derive(Debug)]
pub struct Chip {
    file: File,
    path: PathBuf,
}

impl Chip {
    /// Open the GPIO Chip at the provided path (e.g. `/dev/gpiochip<N>`)
    pub fn open(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "opening gpio chip");
        let file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)?;
        let this = Self {
            file,
            path: path.to_owned(),
        };

        let info = this.info()?;
        debug!(
            name = info.name(),
            label = info.label(),
            lines = info.num_lines(),
            "opened gpio chip"
        );
        Ok(this)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GpioChip for Chip {
    type Handle = Lines;

    fn info(&self) -> Result<ChipInfo> {
        let mut info = uapi::gpiochip_info {
            name: [0; GPIO_MAX_NAME_SIZE],
            label: [0; GPIO_MAX_NAME_SIZE],
            lines: 0,
        };
        unsafe {
            uapi::gpio_get_chipinfo(self.as_raw_fd(), &mut info)
                .map_err(Error::ioctl("GPIO_GET_CHIPINFO_IOCTL"))?;
        }

        Ok(ChipInfo {
            name: FixedStr::from_c_bytes(&info.name)?,
            label: FixedStr::from_c_bytes(&info.label)?,
            lines: info.lines,
        })
    }

    fn request_lines(&self, request: &LineRequest) -> Result<Lines> {
        Lines::new(self, request)
    }
}

impl AsRawFd for Chip {
    #[inline(always)]
    fn as_raw_fd(&self) -> RawFd {
        self.file.as_raw_fd()
    }
}

impl AsFd for Chip {
    #[inline(always)]
    fn as_fd(&self) -> BorrowedFd<'_> {
        self.file.as_fd()
    }
}
