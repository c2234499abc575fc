use std::fmt::Display;
use std::ops::BitOr;
use std::str::FromStr;

use crate::error::Error;

/// Byte order of a multi-byte value in memory.
///
/// Bit 0 of the discriminant selects the base order (0 = little, 1 = big)
/// and bit 1 enables swapping of adjacent byte pairs on top of it, which
/// yields the two historical mixed orders.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
#[repr(u8)]
pub enum Endian {
    Little = 0b00,
    Big = 0b01,
    LittleSwapped = 0b10,
    BigSwapped = 0b11,
}

impl Endian {
    /// The pair-swap flag on its own; composes with a base order via `|`.
    pub const SWAP_PAIRS: Self = Self::LittleSwapped;

    /// PDP-11 order: big-endian words of little-endian byte pairs.
    pub const PDP: Self = Self::BigSwapped;

    /// Honeywell 316 order: little-endian words of big-endian byte pairs.
    pub const HONEYWELL_316: Self = Self::LittleSwapped;

    pub const fn compose(base: Self, swap_pairs: bool) -> Self {
        Self::from_bits_masked((base as u8 & 1) | ((swap_pairs as u8) << 1))
    }

    pub(crate) const fn from_bits_masked(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::Little,
            0b01 => Self::Big,
            0b10 => Self::LittleSwapped,
            _ => Self::BigSwapped,
        }
    }

    pub fn from_bits(bits: u8) -> Result<Self, Error> {
        if bits & !0b11 != 0 {
            return Err(Error::InvalidBits(bits));
        }
        Ok(Self::from_bits_masked(bits))
    }

    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    #[inline(always)]
    pub const fn is_big(&self) -> bool {
        self.bits() & 1 != 0
    }

    #[inline(always)]
    pub const fn is_little(&self) -> bool {
        !self.is_big()
    }

    #[inline(always)]
    pub const fn swaps_pairs(&self) -> bool {
        self.bits() & 0b10 != 0
    }

    /// The order with the pair-swap flag cleared.
    pub const fn base(self) -> Self {
        Self::from_bits_masked(self.bits() & 1)
    }

    pub const fn with_swapped_pairs(self) -> Self {
        Self::from_bits_masked(self.bits() | 0b10)
    }

    /// Memory position of the byte with significance `i` (0 = least
    /// significant) in a value of `width` bytes stored in this order.
    ///
    /// A single byte has no pairs to swap, so its position is always 0.
    #[inline(always)]
    pub const fn index(self, width: usize, i: usize) -> usize {
        let i = if self.is_big() { width - 1 - i } else { i };
        i ^ ((self.swaps_pairs() && width > 1) as usize)
    }
}

impl BitOr for Endian {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits_masked(self.bits() | rhs.bits())
    }
}

impl TryFrom<u8> for Endian {
    type Error = Error;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl From<Endian> for u8 {
    fn from(endian: Endian) -> u8 {
        endian.bits()
    }
}

impl Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Little => "LE",
            Self::Big => "BE",
            Self::LittleSwapped => "H316",
            Self::BigSwapped => "PDP",
        })
    }
}

impl FromStr for Endian {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "le" | "little" => Ok(Self::Little),
            "be" | "big" => Ok(Self::Big),
            "h316" | "honeywell316" | "le-swap" => Ok(Self::LittleSwapped),
            "pdp" | "pdp11" | "be-swap" => Ok(Self::BigSwapped),
            _ => Err(Error::InvalidName(s.to_owned())),
        }
    }
}
