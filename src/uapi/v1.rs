// Copyright (c) 2018 The rust-gpio-cdev Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! GPIO character device ABI v1 (line handles), available since Linux 4.8.

use bitflags::bitflags;
use nix::ioctl_readwrite;
use static_assertions::{assert_eq_size, const_assert_eq};

use super::GPIO_MAX_NAME_SIZE;

/// Revision of the line-handle ABI described by this module.
pub const ABI_VERSION: u32 = 1;

/// Maximum number of lines in a single handle request.
pub const GPIOHANDLES_MAX: usize = 64;

bitflags! {
    /// Line Request Flags
    ///
    /// Maps to kernel [`GPIOHANDLE_REQUEST_*`] flags.
    ///
    /// [`GPIOHANDLE_REQUEST_*`]: https://github.com/torvalds/linux/blob/v5.19/include/uapi/linux/gpio.h#L58
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GPIOHANDLE_REQUEST_FLAGS: u32 {
        const INPUT = (1 << 0);
        const OUTPUT = (1 << 1);
        const ACTIVE_LOW = (1 << 2);
        const OPEN_DRAIN = (1 << 3);
        const OPEN_SOURCE = (1 << 4);
    }
}

/// Information about a GPIO handle request
#[repr(C)]
pub struct gpiohandle_request {
    /// an array of desired lines, specified by offset index for the associated GPIO device
    pub lineoffsets: [u32; GPIOHANDLES_MAX],
    /// desired flags for the desired GPIO lines.
    ///
    /// Even if multiple lines are requested, the same flags apply to all
    /// of them: all inputs or all outputs, all active low etc.
    pub flags: GPIOHANDLE_REQUEST_FLAGS,
    /// if [GPIOHANDLE_REQUEST_FLAGS::OUTPUT] is set for a requested
    /// line, this specifies the default output value, should be 0 (low) or
    /// 1 (high), anything else than 0 or 1 will be interpreted as 1 (high)
    pub default_values: [u8; GPIOHANDLES_MAX],
    /// a desired consumer label for the selected GPIO line(s)
    /// such as "my-bitbanged-relay"
    pub consumer_label: [libc::c_char; GPIO_MAX_NAME_SIZE],
    /// number of lines requested in this request, i.e. the number of
    /// valid fields in the above arrays, set to 1 to request a single line
    pub lines: u32,
    /// if successful this field will contain a valid anonymous file handle
    /// after a [gpio_get_linehandle] operation, zero or negative value
    /// means error.
    pub fd: libc::c_int,
}

impl gpiohandle_request {
    pub const fn zeroed() -> Self {
        Self {
            lineoffsets: [0; GPIOHANDLES_MAX],
            flags: GPIOHANDLE_REQUEST_FLAGS::empty(),
            default_values: [0; GPIOHANDLES_MAX],
            consumer_label: [0; GPIO_MAX_NAME_SIZE],
            lines: 0,
            fd: 0,
        }
    }
}

/// Values of the lines on a GPIO handle
#[repr(C)]
pub struct gpiohandle_data {
    /// When getting the state of lines this contains the current
    /// state of a line.
    ///
    /// When setting the state of lines these should contain
    /// the desired target state
    pub values: [u8; GPIOHANDLES_MAX],
}

impl gpiohandle_data {
    pub const fn zeroed() -> Self {
        Self {
            values: [0; GPIOHANDLES_MAX],
        }
    }
}

assert_eq_size!(GPIOHANDLE_REQUEST_FLAGS, u32);
assert_eq_size!(gpiohandle_request, [u8; 364]);
const_assert_eq!(core::mem::offset_of!(gpiohandle_request, flags), 256);
const_assert_eq!(core::mem::offset_of!(gpiohandle_request, default_values), 260);
const_assert_eq!(core::mem::offset_of!(gpiohandle_request, consumer_label), 324);
const_assert_eq!(core::mem::offset_of!(gpiohandle_request, lines), 356);
const_assert_eq!(core::mem::offset_of!(gpiohandle_request, fd), 360);
assert_eq_size!(gpiohandle_data, [u8; GPIOHANDLES_MAX]);

ioctl_readwrite!(gpio_get_linehandle, 0xB4, 0x03, gpiohandle_request);
ioctl_readwrite!(gpiohandle_get_line_values, 0xB4, 0x08, gpiohandle_data);
ioctl_readwrite!(gpiohandle_set_line_values, 0xB4, 0x09, gpiohandle_data);
