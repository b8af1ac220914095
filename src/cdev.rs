//! One `gpio-cdev` invocation: open the chip, request a line handle,
//! optionally drive the lines, then read them back.
//!
//! Descriptors are owned values, so whichever step fails, the handle and
//! the chip are closed on the way out.

use std::{io::Write, path::Path};

use itertools::Itertools;
use tracing::{debug, warn};

use crate::{
    chip::{chip_path, Chip, GpioChip},
    errors::Result,
    line::{
        BitString, Direction, LineHandle, LineOffsets, LineRequest, LineValue, LineValues, ValueFit,
    },
};

pub const DEFAULT_CONSUMER: &str = "gpio-cdev";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Chip name under the device directory, or a path.
    pub chip: String,
    pub offsets: LineOffsets,
    pub direction: Direction,
    pub values: Option<BitString>,
    pub fit: ValueFit,
    pub consumer: String,
}

impl Invocation {
    /// Values to drive, one per line, if the lines are outputs and a
    /// bitstring was given.
    fn output_values(&self) -> Result<Option<Vec<LineValue>>> {
        let Some(bits) = &self.values else {
            return Ok(None);
        };
        let values = bits.fit(self.offsets.len(), self.fit)?;
        if self.direction == Direction::Input {
            warn!("values given for input lines are ignored");
            return Ok(None);
        }
        Ok(Some(values))
    }
}

/// Open the chip named by `inv` under `dev_dir` and run the invocation.
pub fn open_and_run(dev_dir: &Path, inv: &Invocation, out: &mut impl Write) -> Result<LineValues> {
    let chip = Chip::open(&chip_path(dev_dir, &inv.chip))?;
    run(&chip, inv, out)
}

/// Request the lines on an open chip, set them if asked, and print the
/// values read back as `<offset> = <value>` lines.
pub fn run<C: GpioChip>(chip: &C, inv: &Invocation, out: &mut impl Write) -> Result<LineValues> {
    let info = chip.info()?;
    info.check_offsets(&inv.offsets)?;

    let values = inv.output_values()?;

    let mut request = LineRequest::new(inv.offsets.clone(), inv.direction, &inv.consumer)?;
    if let Some(values) = &values {
        request = request.with_defaults(values.clone())?;
    }

    let mut handle = chip.request_lines(&request)?;
    debug!(chip = info.name(), lines = inv.offsets.len(), "line handle acquired");

    if let Some(values) = values {
        debug!(values = %values.iter().join(""), "driving outputs");
        handle.set_values(&LineValues::new(inv.offsets.clone(), values)?)?;
    }

    let read = handle.get_values()?;
    for (offset, value) in read.iter() {
        writeln!(out, "{offset} = {value}")?;
    }

    Ok(read)
}
