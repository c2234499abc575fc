//! Byte order conversion for fixed-width integers and IEEE-754 floats.
//!
//! Orders cover little and big endian plus the two mixed orders with swapped
//! byte pairs (PDP-11 and Honeywell 316). Native order is detected per value
//! domain, so a host whose floats are laid out differently from its integers
//! can be described with [`Host`].
//!
//! ```
//! use fugue_endian::{read, write, Endian};
//!
//! let mut buf = [0u8; 4];
//! write(Endian::PDP, &mut buf, 0x0102_0304u32);
//! assert_eq!(buf, [0x02, 0x01, 0x04, 0x03]);
//! assert_eq!(read::<u32>(Endian::PDP, &buf), 0x0102_0304);
//! ```

pub use byteorder::{BE, LE};

pub mod endian;
pub use endian::Endian;

pub mod error;
pub use error::Error;

pub mod host;
pub use host::{Host, Strategy};

pub mod native;

pub mod order;
pub use order::{Order, H316, PDP};

pub mod scalar;
pub use scalar::{Bits, Domain, Scalar};

pub mod shift;

pub mod swap;
pub use swap::Transform;

/// Converts `value` between native order and `order`.
#[inline(always)]
pub fn convert<T: Scalar>(order: Endian, value: T) -> T {
    Host::BUILD.convert(order, value)
}

/// Alias of [`convert`] for values arriving in `order`.
#[inline(always)]
pub fn convert_from<T: Scalar>(order: Endian, value: T) -> T {
    convert(order, value)
}

/// Alias of [`convert`] for values leaving in `order`.
#[inline(always)]
pub fn convert_to<T: Scalar>(order: Endian, value: T) -> T {
    convert(order, value)
}

/// Decodes the leading `T::SIZEOF` bytes of `src` stored in `order`.
///
/// Panics if `src` is too short.
#[inline(always)]
pub fn read<T: Scalar>(order: Endian, src: &[u8]) -> T {
    Host::BUILD.read(order, src)
}

/// Encodes `value` into the leading `T::SIZEOF` bytes of `dst` in `order`.
///
/// Panics if `dst` is too short.
#[inline(always)]
pub fn write<T: Scalar>(order: Endian, dst: &mut [u8], value: T) {
    Host::BUILD.write(order, dst, value)
}

/// Like [`read`], but reports a short buffer or unknown native order.
pub fn try_read<T: Scalar>(order: Endian, src: &[u8]) -> Result<T, Error> {
    Host::BUILD.try_read(order, src)
}

/// Like [`write`], but reports a short buffer or unknown native order.
pub fn try_write<T: Scalar>(order: Endian, dst: &mut [u8], value: T) -> Result<(), Error> {
    Host::BUILD.try_write(order, dst, value)
}

/// The host's order for `T`'s domain, or `None` if it is unsupported.
#[inline(always)]
pub fn native_order<T: Scalar>() -> Option<Endian> {
    Host::BUILD.native::<T>()
}
