use crate::endian::Endian;
use crate::host::Host;
use crate::scalar::Scalar;
use crate::{BE, LE};

/// A byte order known at compile time.
pub trait Order: Copy + Send + Sync + 'static {
    const ENDIAN: Endian;
    const NATIVE: bool;

    #[inline(always)]
    fn read<T: Scalar>(buf: &[u8]) -> T {
        Host::BUILD.read(Self::ENDIAN, buf)
    }

    #[inline(always)]
    fn write<T: Scalar>(buf: &mut [u8], value: T) {
        Host::BUILD.write(Self::ENDIAN, buf, value)
    }

    #[inline(always)]
    fn convert<T: Scalar>(value: T) -> T {
        Host::BUILD.convert(Self::ENDIAN, value)
    }
}

/// PDP-11 byte order marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PDP {}

/// Honeywell 316 byte order marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum H316 {}

impl Order for BE {
    const ENDIAN: Endian = Endian::Big;
    const NATIVE: bool = cfg!(target_endian = "big");
}

impl Order for LE {
    const ENDIAN: Endian = Endian::Little;
    const NATIVE: bool = cfg!(target_endian = "little");
}

impl Order for PDP {
    const ENDIAN: Endian = Endian::PDP;
    const NATIVE: bool = false;
}

impl Order for H316 {
    const ENDIAN: Endian = Endian::HONEYWELL_316;
    const NATIVE: bool = false;
}
