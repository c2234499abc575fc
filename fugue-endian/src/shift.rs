//! Read/write by shift-and-mask assembly.
//!
//! These work on the arithmetic value of `T`'s bit pattern, so they need no
//! scratch buffer and no knowledge of the host. When the host description is
//! accurate they produce exactly the bytes of the copy-based path in
//! [`Host`](crate::Host).

use crate::endian::Endian;
use crate::scalar::{Bits, Scalar};

#[inline]
pub fn read<T: Scalar>(order: Endian, src: &[u8]) -> T {
    debug_assert!(src.len() >= T::SIZEOF);

    let mut bits = <T::Bits as Bits>::ZERO;
    for i in 0..T::SIZEOF {
        bits = bits | T::Bits::from_byte_at(src[order.index(T::SIZEOF, i)], i);
    }
    T::from_bits(bits)
}

#[inline]
pub fn write<T: Scalar>(order: Endian, dst: &mut [u8], value: T) {
    debug_assert!(dst.len() >= T::SIZEOF);

    let bits = value.to_bits();
    for i in 0..T::SIZEOF {
        dst[order.index(T::SIZEOF, i)] = bits.byte_at(i);
    }
}
