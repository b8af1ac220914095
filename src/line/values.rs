use std::str::FromStr;

use crate::errors::{Error, Result};

use super::LineOffsets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineValue {
    Active,
    Inactive,
}

impl LineValue {
    pub const fn new(is_active: bool) -> Self {
        if is_active {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    pub const fn is_active(&self) -> bool {
        matches!(self, LineValue::Active)
    }

    /// Kernel encoding: any non-zero byte reads as active.
    pub(crate) const fn from_raw(raw: u8) -> Self {
        Self::new(raw != 0)
    }

    pub(crate) const fn into_raw(self) -> u8 {
        self.is_active() as u8
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(LineValue::Inactive),
            '1' => Some(LineValue::Active),
            _ => None,
        }
    }
}

impl FromStr for LineValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next().and_then(LineValue::from_char), chars.next()) {
            (Some(v), None) => Ok(v),
            _ => Err(Error::InvalidValue(s.to_owned())),
        }
    }
}

impl std::fmt::Display for LineValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.is_active() { "1" } else { "0" })
    }
}

/// How a value bitstring is matched against the requested lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueFit {
    /// Repeat the bitstring until every line has a value.
    #[default]
    Cycle,
    /// The bitstring must name exactly one value per line.
    Exact,
}

/// A bitstring such as `"0110"`, one character per value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString(Vec<LineValue>);

impl BitString {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Expand into one value per line.
    pub fn fit(&self, lines: usize, fit: ValueFit) -> Result<Vec<LineValue>> {
        if fit == ValueFit::Exact && self.0.len() != lines {
            return Err(Error::ValueCount {
                lines,
                values: self.0.len(),
            });
        }
        Ok(self.0.iter().copied().cycle().take(lines).collect())
    }
}

impl FromStr for BitString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidValue(s.to_owned()));
        }
        s.chars()
            .map(LineValue::from_char)
            .collect::<Option<Vec<_>>>()
            .map(BitString)
            .ok_or_else(|| Error::InvalidValue(s.to_owned()))
    }
}

/// One value per requested line, in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineValues {
    offsets: LineOffsets,
    values: Vec<LineValue>,
}

impl LineValues {
    pub fn new(offsets: LineOffsets, values: Vec<LineValue>) -> Result<Self> {
        if offsets.len() != values.len() {
            return Err(Error::ValueCount {
                lines: offsets.len(),
                values: values.len(),
            });
        }
        Ok(Self { offsets, values })
    }

    pub(crate) fn from_raw(offsets: &LineOffsets, raw: &[u8]) -> Self {
        let values = raw
            .iter()
            .take(offsets.len())
            .copied()
            .map(LineValue::from_raw)
            .collect();
        Self {
            offsets: offsets.clone(),
            values,
        }
    }

    pub(crate) fn to_raw<const N: usize>(&self) -> [u8; N] {
        let mut raw = [0; N];
        for (w, v) in raw.iter_mut().zip(self.values.iter()) {
            *w = v.into_raw();
        }
        raw
    }

    pub fn offsets(&self) -> &LineOffsets {
        &self.offsets
    }

    pub fn values(&self) -> &[LineValue] {
        &self.values
    }

    pub fn get(&self, offset: u32) -> Option<LineValue> {
        self.values.get(self.offsets.find_idx(offset)?).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, LineValue)> + '_ {
        self.offsets.iter().copied().zip(self.values.iter().copied())
    }
}
