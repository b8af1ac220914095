//! NUL-terminated strings stored inline in kernel ABI structs.

use std::ops::Deref;

/// A string of at most `N - 1` bytes, stored NUL padded in `N` bytes.
///
/// The kernel copies name and label fields with `strscpy`-like
/// semantics, so the last byte is always kept free for the terminator.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FixedStr<const N: usize> {
    s: [u8; N],
}

impl<const N: usize> FixedStr<N> {
    #[inline]
    pub const fn empty() -> Self {
        Self { s: [0; N] }
    }

    pub fn new(s: &str) -> Result<Self, FixedStrErr> {
        if s.len() >= N {
            return Err(FixedStrErr::CapacityOverflow {
                capacity: N.saturating_sub(1),
                required: s.len(),
            });
        }
        if s.as_bytes().contains(&0) {
            return Err(FixedStrErr::InteriorNul);
        }

        let mut f = Self::empty();
        f.s[..s.len()].copy_from_slice(s.as_bytes());
        Ok(f)
    }

    /// Read a field filled in by the kernel.
    ///
    /// Everything after the first NUL is discarded. A field without any
    /// NUL is truncated to keep the terminator slot free.
    pub fn from_c_bytes(bytes: &[libc::c_char; N]) -> Result<Self, FixedStrErr> {
        let mut s = [0u8; N];
        for (w, r) in s.iter_mut().zip(bytes.iter()) {
            *w = *r as u8;
        }

        let nul = s.iter().position(|c| *c == 0).unwrap_or(N.saturating_sub(1));
        s[nul..].fill(0);
        let _ = core::str::from_utf8(&s[..nul])?;

        Ok(Self { s })
    }

    pub fn into_c_chars(self) -> [libc::c_char; N] {
        self.s.map(|c| c as libc::c_char)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.s.iter().position(|c| *c == 0).unwrap_or(N)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0 || self.s[0] == 0
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // Contents are validated as UTF-8 on every constructor.
        core::str::from_utf8(&self.s[..self.len()]).unwrap_or_default()
    }
}

impl<const N: usize> Default for FixedStr<N> {
    #[inline(always)]
    fn default() -> Self {
        Self::empty()
    }
}

impl<const N: usize> std::fmt::Debug for FixedStr<N> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FixedStr").field(&self.as_str()).finish()
    }
}

impl<const N: usize> std::fmt::Display for FixedStr<N> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

impl<const N: usize> Deref for FixedStr<N> {
    type Target = str;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FixedStrErr {
    #[error("exceeded fixed string size: {required} bytes given, at most {capacity} allowed")]
    CapacityOverflow { capacity: usize, required: usize },
    #[error("string contains a NUL byte")]
    InteriorNul,
    #[error("UTF8 Error")]
    Utf8(#[from] core::str::Utf8Error),
}
