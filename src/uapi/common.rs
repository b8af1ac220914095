use nix::ioctl_read;
use static_assertions::{assert_eq_size, const_assert_eq};

pub const GPIO_MAX_NAME_SIZE: usize = 32;

/// struct gpiochip_info
#[repr(C)]
pub struct gpiochip_info {
    /// the Linux kernel name of this GPIO chip
    pub name: [libc::c_char; GPIO_MAX_NAME_SIZE],
    /// a functional name for this GPIO chip, such as a product number,
    /// may be empty
    pub label: [libc::c_char; GPIO_MAX_NAME_SIZE],
    /// number of GPIO lines on this chip
    pub lines: u32,
}

assert_eq_size!(gpiochip_info, [u8; 68]);
const_assert_eq!(core::mem::offset_of!(gpiochip_info, lines), 64);

ioctl_read!(gpio_get_chipinfo, 0xB4, 0x01, gpiochip_info);
