use core::fmt;
use core::str::FromStr;

use crate::{Error, Word};

/// Number of low-order bits of a [`Word`] that take part in an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BitWidth {
    W8,
    W16,
    W32,
}

impl BitWidth {
    pub const ALL: [BitWidth; 3] = [BitWidth::W8, BitWidth::W16, BitWidth::W32];

    #[inline]
    pub const fn bits(self) -> u8 {
        match self {
            BitWidth::W8 => 8,
            BitWidth::W16 => 16,
            BitWidth::W32 => 32,
        }
    }

    /// Mask covering the low `bits()` bits.
    #[inline]
    pub const fn mask(self) -> u32 {
        match self {
            BitWidth::W8 => 0xff,
            BitWidth::W16 => 0xffff,
            BitWidth::W32 => u32::MAX,
        }
    }

    #[inline]
    pub const fn sign_bit(self) -> u32 {
        1u32 << (self.bits() - 1)
    }

    /// Drops every bit above the logical width.
    ///
    /// The engine never does this on its own; results may carry arbitrary
    /// upper bits.
    #[inline]
    pub const fn truncate(self, word: Word) -> u32 {
        (word as u32) & self.mask()
    }
}

impl fmt::Display for BitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl TryFrom<u32> for BitWidth {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            8 => Ok(BitWidth::W8),
            16 => Ok(BitWidth::W16),
            32 => Ok(BitWidth::W32),
            other => Err(Error::UnsupportedWidth(other)),
        }
    }
}

impl FromStr for BitWidth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::InvalidWidth(s.to_string()))?;
        BitWidth::try_from(bits)
    }
}
