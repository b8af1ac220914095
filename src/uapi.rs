//! Raw kernel ABI for `<linux/gpio.h>`.
//!
//! Each ABI revision lives in its own module with its struct layouts
//! pinned at compile time, so a layout mismatch fails the build rather
//! than corrupting an ioctl argument.

mod common;

pub use common::*;

pub mod v1;
