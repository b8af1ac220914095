use crate::{
    errors::{Error, Result},
    uapi::v1::GPIOHANDLES_MAX,
};

/// The offsets of a line request, in the order they were given.
///
/// Bounded by the number of lines a single handle request can carry.
/// Order is significant: values are matched to lines by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineOffsets(heapless::Vec<u32, GPIOHANDLES_MAX>);

impl LineOffsets {
    pub const fn empty() -> Self {
        Self(heapless::Vec::new())
    }

    pub const fn capacity(&self) -> usize {
        GPIOHANDLES_MAX
    }

    pub fn add_offset(&mut self, offset: u32) -> Result<()> {
        if self.0.contains(&offset) {
            return Err(Error::DuplicateOffset(offset));
        }
        self.0
            .push(offset)
            .map_err(|_| Error::TooManyLines { max: GPIOHANDLES_MAX })
    }

    pub fn try_from_iter(iter: impl IntoIterator<Item = u32>) -> Result<Self> {
        let mut set = Self::empty();
        for offset in iter {
            set.add_offset(offset)?;
        }
        Ok(set)
    }

    pub fn find_idx(&self, offset: u32) -> Option<usize> {
        self.0.iter().position(|o| *o == offset)
    }

    pub(crate) fn to_api_v1(&self) -> (u32, [u32; GPIOHANDLES_MAX]) {
        let mut lines = [0; GPIOHANDLES_MAX];
        for (offset, wr) in self.0.iter().zip(lines.iter_mut()) {
            *wr = *offset;
        }
        (self.0.len() as u32, lines)
    }
}

impl std::ops::Deref for LineOffsets {
    type Target = [u32];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
