// Copyright (c) 2018 The rust-gpio-cdev Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `gpio-utils` crate backs two small command-line tools for poking
//! at GPIOs on Linux:
//!
//! - `gpio-sysfs` uses the legacy [sysfs interface] under
//!   `/sys/class/gpio`: export a pin, then set or read its direction and
//!   value through the attribute files.
//! - `gpio-cdev` uses the [GPIO character device ABI] (`/dev/gpiochipN`):
//!   request a line handle for a set of offsets, optionally drive them,
//!   and read their values back.
//!
//! Both are thin, synchronous wrappers. The kernel owns every piece of
//! state; nothing is cached between calls.
//!
//! # Examples
//!
//! Drive two lines of `gpiochip0` high and low and read them back:
//!
//! ```no_run
//! use gpio_utils::chip::{Chip, GpioChip};
//! use gpio_utils::line::{Direction, LineHandle, LineOffsets, LineRequest, LineValue, LineValues};
//!
//! # fn main() -> gpio_utils::Result<()> {
//! let chip = Chip::open("/dev/gpiochip0".as_ref())?;
//! let offsets = LineOffsets::try_from_iter([17, 27])?;
//! let request = LineRequest::new(offsets.clone(), Direction::Output, "example")?;
//! let mut handle = chip.request_lines(&request)?;
//! handle.set_values(&LineValues::new(
//!     offsets,
//!     vec![LineValue::Active, LineValue::Inactive],
//! )?)?;
//! for (offset, value) in handle.get_values()?.iter() {
//!     println!("{offset} = {value}");
//! }
//! # Ok(()) }
//! ```
//!
//! And the same through sysfs, for a single pin:
//!
//! ```no_run
//! use gpio_utils::line::{Direction, LineValue};
//! use gpio_utils::sysfs::Sysfs;
//!
//! # fn main() -> gpio_utils::Result<()> {
//! let sysfs = Sysfs::default();
//! sysfs.export(17)?;
//! sysfs.set_direction(17, Direction::Output)?;
//! sysfs.set_value(17, LineValue::Active)?;
//! # Ok(()) }
//! ```
//!
//! [sysfs interface]: https://www.kernel.org/doc/Documentation/gpio/sysfs.txt
//! [GPIO character device ABI]: https://www.kernel.org/doc/Documentation/ABI/testing/gpio-cdev

mod errors;

pub mod fixed_str;

#[allow(non_camel_case_types)]
pub mod uapi;

pub mod chip;

pub mod line;

pub mod sysfs;

pub mod cdev;

pub mod cli;

pub mod logging;

pub use chip::{Chip, GpioChip};
pub use errors::{Error, Result, SysfsAction};
