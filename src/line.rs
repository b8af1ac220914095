use std::{
    fs::File,
    os::fd::{AsRawFd, FromRawFd},
};

use tracing::debug;

use crate::{
    errors::{Error, Result},
    fixed_str::FixedStr,
    uapi::{self, v1::GPIOHANDLES_MAX, GPIO_MAX_NAME_SIZE},
};

pub mod options;
pub mod set;
pub mod values;

pub use options::Direction;
pub use set::LineOffsets;
pub use values::{BitString, LineValue, LineValues, ValueFit};

/// Everything the kernel needs to hand out a line handle.
#[derive(Debug, Clone)]
pub struct LineRequest {
    offsets: LineOffsets,
    direction: Direction,
    defaults: Option<Vec<LineValue>>,
    consumer: FixedStr<GPIO_MAX_NAME_SIZE>,
}

impl LineRequest {
    pub fn new(offsets: LineOffsets, direction: Direction, consumer: &str) -> Result<Self> {
        Ok(Self {
            offsets,
            direction,
            defaults: None,
            consumer: FixedStr::new(consumer)?,
        })
    }

    /// Initial output levels, applied by the kernel when the lines are
    /// acquired as outputs.
    pub fn with_defaults(mut self, values: Vec<LineValue>) -> Result<Self> {
        if values.len() != self.offsets.len() {
            return Err(Error::ValueCount {
                lines: self.offsets.len(),
                values: values.len(),
            });
        }
        self.defaults = Some(values);
        Ok(self)
    }

    pub fn offsets(&self) -> &LineOffsets {
        &self.offsets
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub fn consumer(&self) -> &str {
        &self.consumer
    }

    pub fn defaults(&self) -> Option<&[LineValue]> {
        self.defaults.as_deref()
    }

    pub(crate) fn to_api_v1(&self) -> uapi::v1::gpiohandle_request {
        let mut req = uapi::v1::gpiohandle_request::zeroed();

        let (n_lines, lines) = self.offsets.to_api_v1();
        req.lines = n_lines;
        req.lineoffsets = lines;
        req.flags = self.direction.request_flags();
        req.consumer_label = self.consumer.into_c_chars();

        if let (Direction::Output, Some(defaults)) = (self.direction, &self.defaults) {
            for (w, v) in req.default_values.iter_mut().zip(defaults) {
                *w = v.into_raw();
            }
        }

        req
    }
}

/// Operations available on a set of acquired lines.
pub trait LineHandle {
    fn offsets(&self) -> &LineOffsets;

    /// Read the current value of every line in the handle.
    fn get_values(&self) -> Result<LineValues>;

    /// Drive every line in the handle. Only meaningful for outputs.
    fn set_values(&mut self, values: &LineValues) -> Result<()>;
}

/// Lines acquired through `GPIO_GET_LINEHANDLE_IOCTL`.
///
/// The lines are released when this is dropped and the handle
/// descriptor closes.
#[derive(Debug)]
pub struct Lines {
    line_fd: File,
    offsets: LineOffsets,
    direction: Direction,
}

impl Lines {
    pub(crate) fn new(chip_fd: &impl AsRawFd, request: &LineRequest) -> Result<Self> {
        let mut req = request.to_api_v1();

        debug!(
            offsets = ?&*request.offsets,
            direction = %request.direction,
            consumer = request.consumer(),
            "requesting line handle"
        );

        let line_fd = unsafe {
            uapi::v1::gpio_get_linehandle(chip_fd.as_raw_fd(), &mut req)
                .map_err(Error::ioctl("GPIO_GET_LINEHANDLE_IOCTL"))?;
            // The ioctl succeeded, so the kernel handed us ownership of req.fd.
            File::from_raw_fd(req.fd)
        };

        Ok(Self {
            line_fd,
            offsets: request.offsets.clone(),
            direction: request.direction,
        })
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl LineHandle for Lines {
    fn offsets(&self) -> &LineOffsets {
        &self.offsets
    }

    fn get_values(&self) -> Result<LineValues> {
        let mut data = uapi::v1::gpiohandle_data::zeroed();
        unsafe {
            uapi::v1::gpiohandle_get_line_values(self.line_fd.as_raw_fd(), &mut data)
                .map_err(Error::ioctl("GPIOHANDLE_GET_LINE_VALUES_IOCTL"))?;
        }
        Ok(LineValues::from_raw(&self.offsets, &data.values))
    }

    fn set_values(&mut self, values: &LineValues) -> Result<()> {
        if values.offsets() != &self.offsets {
            return Err(Error::ValueCount {
                lines: self.offsets.len(),
                values: values.values().len(),
            });
        }

        let mut data = uapi::v1::gpiohandle_data {
            values: values.to_raw::<GPIOHANDLES_MAX>(),
        };
        debug!(values = ?values.values(), "setting line values");
        unsafe {
            uapi::v1::gpiohandle_set_line_values(self.line_fd.as_raw_fd(), &mut data)
                .map_err(Error::ioctl("GPIOHANDLE_SET_LINE_VALUES_IOCTL"))?;
        }
        Ok(())
    }
}
