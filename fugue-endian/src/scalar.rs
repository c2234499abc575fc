use std::fmt::Debug;
use std::mem::size_of;
use std::ops::BitOr;

use paste::paste;

use crate::order::Order;

/// Which native order governs a type: integers and floats are detected and
/// overridden independently.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Domain {
    Integer,
    Float,
}

/// Unsigned integer that carries the bit pattern of a [`Scalar`].
pub trait Bits: Copy + Eq + Debug + BitOr<Output = Self> + Send + Sync + 'static {
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Copy + Default;

    const ZERO: Self;

    fn swap_bytes(self) -> Self;

    fn to_ne_bytes(self) -> Self::Bytes;
    fn from_ne_bytes(bytes: Self::Bytes) -> Self;

    /// `byte` shifted into significance position `index`.
    fn from_byte_at(byte: u8, index: usize) -> Self;

    /// The byte at significance position `index`.
    fn byte_at(self, index: usize) -> u8;
}

/// A fixed-width value with a byte order.
pub trait Scalar: Copy + Send + Sync + 'static {
    const SIZEOF: usize;
    const SIGNED: bool;
    const DOMAIN: Domain;

    type Bits: Bits;

    /// The value whose native byte image identifies the domain's order.
    fn probe() -> Self;

    fn to_bits(self) -> Self::Bits;
    fn from_bits(bits: Self::Bits) -> Self;

    #[inline(always)]
    fn from_bytes<O: Order>(buf: &[u8]) -> Self {
        O::read(buf)
    }

    #[inline(always)]
    fn into_bytes<O: Order>(&self, buf: &mut [u8]) {
        O::write(buf, *self)
    }
}

macro_rules! impl_bits {
    [$($t:ident),*] => {
        $(
            impl Bits for $t {
                type Bytes = [u8; size_of::<$t>()];

                const ZERO: Self = 0;

                #[inline(always)]
                fn swap_bytes(self) -> Self {
                    <$t>::swap_bytes(self)
                }

                #[inline(always)]
                fn to_ne_bytes(self) -> Self::Bytes {
                    <$t>::to_ne_bytes(self)
                }

                #[inline(always)]
                fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                    <$t>::from_ne_bytes(bytes)
                }

                #[inline(always)]
                fn from_byte_at(byte: u8, index: usize) -> Self {
                    (byte as $t) << (8 * index)
                }

                #[inline(always)]
                fn byte_at(self, index: usize) -> u8 {
                    (self >> (8 * index)) as u8
                }
            }
        )*
    };
}

impl_bits![u8, u16, u32, u64, u128, usize];

macro_rules! impl_integer {
    ($t:ident, $u:ident, $signed:ident) => {
        impl Scalar for $t {
            const SIZEOF: usize = size_of::<$t>();
            const SIGNED: bool = $signed;
            const DOMAIN: Domain = Domain::Integer;

            type Bits = $u;

            #[inline(always)]
            fn probe() -> Self {
                1
            }

            #[inline(always)]
            fn to_bits(self) -> $u {
                self as $u
            }

            #[inline(always)]
            fn from_bits(bits: $u) -> Self {
                bits as $t
            }
        }
    };
}

macro_rules! impls_for {
    [$($bits:literal),*] => {
        $(
            paste! {
                impl_integer!([<u $bits>], [<u $bits>], false);
                impl_integer!([<i $bits>], [<u $bits>], true);
            }
        )*
    };
}

impls_for![8, 16, 32, 64, 128];

impl_integer!(usize, usize, false);
impl_integer!(isize, usize, true);

#[cfg(feature = "float")]
mod float {
    use super::*;

    // reinterpretation through the integer bit pattern is only sound for
    // IEEE-754 binary32/binary64
    const _: () = assert!(
        f32::RADIX == 2
            && f32::MANTISSA_DIGITS == 24
            && f32::MIN_EXP == -125
            && f32::MAX_EXP == 128
            && f64::MANTISSA_DIGITS == 53
            && f64::MIN_EXP == -1021
            && f64::MAX_EXP == 1024
    );

    macro_rules! impl_float {
        ($t:ident, $u:ident) => {
            impl Scalar for $t {
                const SIZEOF: usize = size_of::<$t>();
                const SIGNED: bool = true;
                const DOMAIN: Domain = Domain::Float;

                type Bits = $u;

                #[inline(always)]
                fn probe() -> Self {
                    2.0
                }

                #[inline(always)]
                fn to_bits(self) -> $u {
                    <$t>::to_bits(self)
                }

                #[inline(always)]
                fn from_bits(bits: $u) -> Self {
                    <$t>::from_bits(bits)
                }
            }
        };
    }

    impl_float!(f32, u32);
    impl_float!(f64, u64);
}
