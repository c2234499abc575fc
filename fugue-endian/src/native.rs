//! Native byte order detection.
//!
//! Each domain is classified by probing the in-memory image of a value with
//! a single non-zero byte: `1` for integers (least significant byte) and
//! `2.0` for IEEE-754 floats (most significant byte). The two domains are
//! independent.

use crate::endian::Endian;
use crate::scalar::{Bits, Domain, Scalar};

/// Integer order fixed at build time through `FUGUE_ENDIAN_NATIVE_INT`.
pub const BUILD_INTEGER: Option<Endian> =
    parse_override(option_env!("FUGUE_ENDIAN_NATIVE_INT_BITS"));

/// Float order fixed at build time through `FUGUE_ENDIAN_NATIVE_FLOAT`.
pub const BUILD_FLOAT: Option<Endian> =
    parse_override(option_env!("FUGUE_ENDIAN_NATIVE_FLOAT_BITS"));

// build.rs normalises the variables to a single digit
const fn parse_override(value: Option<&str>) -> Option<Endian> {
    match value {
        Some(value) => match value.as_bytes() {
            [digit @ b'0'..=b'3'] => Some(Endian::from_bits_masked(*digit - b'0')),
            _ => None,
        },
        None => None,
    }
}

#[inline(always)]
fn is_set(probe: &[u8], index: usize) -> bool {
    probe.get(index).map_or(false, |b| *b != 0)
}

/// Classifies the native image of the integer `1`.
pub fn classify_integer(probe: &[u8]) -> Option<Endian> {
    let last = probe.len().checked_sub(1)?;

    if is_set(probe, 0) {
        Some(Endian::Little)
    } else if is_set(probe, last) {
        Some(Endian::Big)
    } else if is_set(probe, 1) {
        Some(Endian::HONEYWELL_316)
    } else if last > 0 && is_set(probe, last - 1) {
        Some(Endian::PDP)
    } else {
        None
    }
}

/// Classifies the native image of the float `2.0`.
pub fn classify_float(probe: &[u8]) -> Option<Endian> {
    let last = probe.len().checked_sub(1)?;

    if is_set(probe, last) {
        Some(Endian::Little)
    } else if is_set(probe, 0) {
        Some(Endian::Big)
    } else if is_set(probe, 1) {
        Some(Endian::PDP)
    } else if last > 0 && is_set(probe, last - 1) {
        Some(Endian::HONEYWELL_316)
    } else {
        None
    }
}

/// Probes the machine for the order of `T`, ignoring any override.
#[inline]
pub fn detect<T: Scalar>() -> Option<Endian> {
    let image = T::probe().to_bits().to_ne_bytes();
    match T::DOMAIN {
        Domain::Integer => classify_integer(image.as_ref()),
        Domain::Float => classify_float(image.as_ref()),
    }
}
