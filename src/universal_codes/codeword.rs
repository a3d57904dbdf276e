use std::{fmt::Display, fmt::Formatter, str::FromStr};

/// A prefix-free bit string of at most 24 bits, stored most significant bit first.
///
/// The 24 bit cap matches the BitPacker out24 word: the length goes in the top byte and
/// the bits in the low 24.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Codeword {
    bits: u32,
    len: u8,
}

impl Codeword {
    pub const MAX_LEN: u8 = 24;

    /// Create a codeword from the `len` least significant bits of `bits`.
    pub fn new(bits: u32, len: u8) -> Self {
        debug_assert!(len <= Self::MAX_LEN, "codeword of {} bits", len);
        Self {
            bits: bits & mask(len),
            len,
        }
    }

    /// The zero length codeword, used as a starting point when building codes.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Right aligned value of the bits.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Bit at `idx`, counting from the first (most significant) bit.
    pub fn bit(&self, idx: usize) -> bool {
        debug_assert!(idx < self.len());
        (self.bits >> (self.len() - 1 - idx)) & 1 == 1
    }

    /// Value of the `width` bits starting at `idx`, or None if they run past the end.
    pub fn field(&self, idx: usize, width: usize) -> Option<u32> {
        if idx + width > self.len() {
            return None;
        }
        Some((self.bits >> (self.len() - idx - width)) & mask(width as u8))
    }

    /// Put the `width` least significant bits of `bits` in front of this codeword.
    pub fn prepend(&mut self, bits: u32, width: u8) {
        debug_assert!(self.len + width <= Self::MAX_LEN);
        self.bits |= (bits & mask(width)) << self.len;
        self.len += width;
    }

    /// Add one bit to the end of this codeword.
    pub fn push(&mut self, bit: bool) {
        debug_assert!(self.len < Self::MAX_LEN);
        self.bits = (self.bits << 1) | bit as u32;
        self.len += 1;
    }

    /// True if `other` starts with every bit of this codeword.
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        self.len <= other.len && other.bits >> (other.len - self.len) == self.bits
    }

    /// Pack as a BitPacker out24 word: length in the top byte, bits in the low 24.
    pub fn to_out24(self) -> u32 {
        (self.len as u32) << 24 | self.bits
    }

    /// Iterate over the bits, first bit first.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(move |idx| self.bit(idx))
    }
}

/// Mask selecting the `width` least significant bits.
fn mask(width: u8) -> u32 {
    if width >= 32 {
        u32::MAX
    } else {
        (1 << width) - 1
    }
}

/// Number of bits in the natural binary form of `n` (no leading zeros). Zero has width 0.
pub fn bit_width(n: usize) -> u8 {
    (usize::BITS - n.leading_zeros()) as u8
}

impl Display for Codeword {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Parse failure for a codeword written as a string of 0s and 1s.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCodewordError {
    #[error("invalid character {0:?} in codeword")]
    InvalidDigit(char),
    #[error("codeword longer than {} bits", Codeword::MAX_LEN)]
    TooLong,
}

impl FromStr for Codeword {
    type Err = ParseCodewordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut code = Codeword::empty();
        for c in s.chars() {
            if code.len == Self::MAX_LEN {
                return Err(ParseCodewordError::TooLong);
            }
            match c {
                '0' => code.push(false),
                '1' => code.push(true),
                other => return Err(ParseCodewordError::InvalidDigit(other)),
            }
        }
        Ok(code)
    }
}
