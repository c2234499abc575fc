use crate::endian::Endian;

/// Reverses `buf` in place.
#[inline]
pub fn reverse(buf: &mut [u8]) {
    // common widths first, so each one lowers to a fixed sequence of swaps
    match buf.len() {
        0 | 1 => (),
        2 => buf.swap(0, 1),
        4 => {
            buf.swap(0, 3);
            buf.swap(1, 2);
        }
        8 => {
            buf.swap(0, 7);
            buf.swap(1, 6);
            buf.swap(2, 5);
            buf.swap(3, 4);
        }
        n => {
            let (mut lo, mut hi) = (0, n - 1);
            while lo < hi {
                buf.swap(lo, hi);
                lo += 1;
                hi -= 1;
            }
        }
    }
}

/// Swaps the bytes of each adjacent pair in `buf`.
///
/// `buf` must have even length; a trailing odd byte is left in place.
#[inline]
pub fn swap_pairs(buf: &mut [u8]) {
    debug_assert!(buf.len() % 2 == 0, "pair swap over odd length {}", buf.len());

    for pair in buf.chunks_exact_mut(2) {
        pair.swap(0, 1);
    }
}

/// The operations needed to move bytes from one order to another: the XOR
/// of the two orders' bits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Transform(u8);

impl Transform {
    pub const IDENTITY: Self = Self(0b00);
    pub const REVERSE: Self = Self(0b01);
    pub const SWAP_PAIRS: Self = Self(0b10);
    pub const REVERSE_SWAP_PAIRS: Self = Self(0b11);

    #[inline(always)]
    pub const fn between(from: Endian, to: Endian) -> Self {
        Self(from.bits() ^ to.bits())
    }

    #[inline(always)]
    pub const fn is_identity(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn reverses(self) -> bool {
        self.0 & 0b01 != 0
    }

    #[inline(always)]
    pub const fn swaps_pairs(self) -> bool {
        self.0 & 0b10 != 0
    }

    #[inline(always)]
    pub const fn is_reverse_only(self) -> bool {
        self.0 == Self::REVERSE.0
    }

    /// Applies the transform in place; reversal happens before the pair
    /// swap.
    #[inline]
    pub fn apply(self, buf: &mut [u8]) {
        if self.reverses() {
            reverse(buf);
        }
        if self.swaps_pairs() {
            swap_pairs(buf);
        }
    }
}
