use std::{fmt, marker::PhantomData, mem::size_of, slice::SliceIndex, str::FromStr};

use crate::mode::DisplayMode;
use crate::{Error, Result};

/// Sixteen lamps, index 0 is the MSB and index 15 is the LSB.
pub type BitVector16 = BitField<u16>;

/// The generic parameter should be an unsigned integer type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitField<T> {
    values: Vec<bool>,
    register_type: PhantomData<T>,
}

/// Treats most significant bit as index 0
impl<T> BitField<T> {
    pub fn new() -> Self {
        Self {
            values: vec![false; size_of::<T>() * 8],
            register_type: PhantomData,
        }
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn bits(&self) -> &[bool] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Result<bool> {
        self.values
            .get(index)
            .copied()
            .ok_or_else(|| Error::out_of_range(index, self.size()))
    }

    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        let size = self.size();
        let flag = self
            .values
            .get_mut(index)
            .ok_or_else(|| Error::out_of_range(index, size))?;
        *flag = value;
        Ok(())
    }

    /// Flips exactly one bit. An index past the end leaves every bit untouched.
    pub fn toggle(&mut self, index: usize) -> Result<()> {
        let size = self.size();
        let flag = self
            .values
            .get_mut(index)
            .ok_or_else(|| Error::out_of_range(index, size))?;
        *flag = !*flag;
        Ok(())
    }

    pub fn get_range<U>(&self, indices: U) -> &[bool]
    where
        U: SliceIndex<[bool], Output = [bool]>,
    {
        &self.values[indices]
    }

    /// Bits rendered as '0'/'1' in index order, grouped by nibble.
    pub fn binary_string(&self) -> String {
        self.values
            .chunks(4)
            .map(|nibble| {
                nibble
                    .iter()
                    .map(|flag| if *flag { '1' } else { '0' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<T> Default for BitField<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BitField<T>
where
    T: num::Zero
        + num::One
        + std::ops::Shl<usize, Output = T>
        + std::ops::Shr<usize, Output = T>
        + std::ops::BitOrAssign
        + std::ops::BitAnd<Output = T>
        + Eq
        + Copy,
{
    /// The first index of the range is the most significant bit of the result
    pub fn get_range_value<U>(&self, indices: U) -> T
    where
        U: SliceIndex<[bool], Output = [bool]>,
    {
        let mut value = T::zero();
        for flag in self.values[indices].iter() {
            value = value << 1;
            if *flag {
                value |= T::one();
            }
        }
        value
    }

    pub fn set_range_value<U>(&mut self, indices: U, value: T)
    where
        U: SliceIndex<[bool], Output = [bool]>,
    {
        for (i, flag) in self.values[indices].iter_mut().rev().enumerate() {
            *flag = (value >> i) & T::one() == T::one();
        }
    }

    pub fn as_value(&self) -> T {
        self.get_range_value(0..self.size())
    }
}

impl<T> BitField<T>
where
    T: num::Zero
        + num::One
        + std::ops::Shl<usize, Output = T>
        + std::ops::Shr<usize, Output = T>
        + std::ops::BitOrAssign
        + std::ops::BitAnd<Output = T>
        + Eq
        + Copy
        + fmt::UpperHex,
{
    /// One uppercase hex digit per nibble, prefixed with `0x`.
    pub fn hex_string(&self) -> String {
        format!("0x{:0width$X}", self.as_value(), width = self.size() / 4)
    }
}

impl BitVector16 {
    pub fn msb(&self) -> bool {
        self.values[0]
    }

    pub fn unsigned_value(&self) -> u16 {
        self.as_value()
    }

    /// Two's-complement reading of the same bits.
    pub fn signed_value(&self) -> i32 {
        let unsigned = i32::from(self.unsigned_value());
        // unsigned is never 0 while the MSB is set
        if self.msb() && unsigned != 0 {
            unsigned - 65536
        } else {
            unsigned
        }
    }

    pub fn display_value(&self, mode: DisplayMode) -> i32 {
        match mode {
            DisplayMode::Unsigned => i32::from(self.unsigned_value()),
            DisplayMode::Signed => self.signed_value(),
        }
    }
}

impl<T> From<T> for BitField<T>
where
    T: num::Zero
        + num::One
        + std::ops::Shl<usize, Output = T>
        + std::ops::Shr<usize, Output = T>
        + std::ops::BitOrAssign
        + std::ops::BitAnd<Output = T>
        + Eq
        + Copy,
{
    fn from(value: T) -> Self {
        let mut field: BitField<T> = Self::new();
        field.set_range_value(0..field.size(), value);
        field
    }
}

/// Accepts the output of `binary_string`; spaces are ignored.
impl<T> FromStr for BitField<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut field: BitField<T> = Self::new();
        let digits = s
            .chars()
            .filter(|c| *c != ' ')
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(Error::Parse(format!("unexpected character {:?}", other))),
            })
            .collect::<Result<Vec<bool>>>()?;

        if digits.len() != field.size() {
            return Err(Error::Parse(format!(
                "expected {} binary digits, found {}",
                field.size(),
                digits.len()
            )));
        }

        field.values = digits;
        Ok(field)
    }
}

impl<T> fmt::Display for BitField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary_string())
    }
}
