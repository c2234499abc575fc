use std::any::type_name;

use crate::endian::Endian;
use crate::error::Error;
use crate::native;
use crate::scalar::{Bits, Domain, Scalar};
use crate::shift;
use crate::swap::Transform;

/// How integers are moved between memory and registers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Copy into a scratch buffer and apply the transform there.
    #[default]
    Copy,
    /// Assemble the value byte by byte with shifts.
    Shift,
}

impl Strategy {
    pub const BUILD: Self = if cfg!(feature = "shift-rw") {
        Self::Shift
    } else {
        Self::Copy
    };
}

/// Description of the host's native byte orders.
///
/// A domain left as `None` is detected from the machine on use; a domain set
/// explicitly bypasses detection entirely.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[derive(serde::Deserialize, serde::Serialize)]
pub struct Host {
    #[serde(default)]
    integer: Option<Endian>,
    #[serde(default)]
    float: Option<Endian>,
    #[serde(default)]
    strategy: Strategy,
}

impl Host {
    /// The description fixed by build configuration.
    pub const BUILD: Self = Self {
        integer: native::BUILD_INTEGER,
        float: native::BUILD_FLOAT,
        strategy: Strategy::BUILD,
    };

    pub const fn detect() -> Self {
        Self {
            integer: None,
            float: None,
            strategy: Strategy::Copy,
        }
    }

    pub fn with_integer_order(mut self, endian: Endian) -> Self {
        log::debug!("native integer byte order set to {}", endian);
        self.integer = Some(endian);
        self
    }

    pub fn with_float_order(mut self, endian: Endian) -> Self {
        log::debug!("native float byte order set to {}", endian);
        self.float = Some(endian);
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        log::debug!("read/write strategy set to {:?}", strategy);
        self.strategy = strategy;
        self
    }

    pub fn integer_order(&self) -> Option<Endian> {
        self.integer
    }

    pub fn float_order(&self) -> Option<Endian> {
        self.float
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Native order of `T`, or `None` if it cannot be classified.
    #[inline(always)]
    pub fn native<T: Scalar>(&self) -> Option<Endian> {
        let fixed = match T::DOMAIN {
            Domain::Integer => self.integer,
            Domain::Float => self.float,
        };
        fixed.or_else(native::detect::<T>)
    }

    pub fn check<T: Scalar>(&self) -> Result<Endian, Error> {
        self.native::<T>().ok_or_else(|| {
            log::warn!("native byte order of `{}` cannot be classified", type_name::<T>());
            Error::UnknownNative(type_name::<T>())
        })
    }

    #[inline(always)]
    fn transform<T: Scalar>(&self, target: Endian) -> Transform {
        if T::SIZEOF == 1 {
            return Transform::IDENTITY;
        }

        let native = self.native::<T>();
        debug_assert!(
            native.is_some(),
            "native byte order of `{}` cannot be classified",
            type_name::<T>()
        );
        native.map_or(Transform::IDENTITY, |native| Transform::between(native, target))
    }

    /// Converts `value` between native order and `target`; the conversion
    /// is its own inverse.
    #[inline]
    pub fn convert<T: Scalar>(&self, target: Endian, value: T) -> T {
        if T::SIZEOF == 1 {
            return value;
        }

        let code = self.transform::<T>(target);
        if code.is_identity() {
            value
        } else if code.is_reverse_only() {
            T::from_bits(value.to_bits().swap_bytes())
        } else {
            let mut bytes = value.to_bits().to_ne_bytes();
            code.apply(bytes.as_mut());
            T::from_bits(T::Bits::from_ne_bytes(bytes))
        }
    }

    #[inline]
    pub fn read<T: Scalar>(&self, order: Endian, src: &[u8]) -> T {
        debug_assert!(src.len() >= T::SIZEOF);

        if self.shifts::<T>() {
            return shift::read(order, src);
        }

        let mut bytes = <T::Bits as Bits>::Bytes::default();
        bytes.as_mut().copy_from_slice(&src[..T::SIZEOF]);
        self.transform::<T>(order).apply(bytes.as_mut());
        T::from_bits(T::Bits::from_ne_bytes(bytes))
    }

    #[inline]
    pub fn write<T: Scalar>(&self, order: Endian, dst: &mut [u8], value: T) {
        debug_assert!(dst.len() >= T::SIZEOF);

        if self.shifts::<T>() {
            return shift::write(order, dst, value);
        }

        let mut bytes = value.to_bits().to_ne_bytes();
        self.transform::<T>(order).apply(bytes.as_mut());
        dst[..T::SIZEOF].copy_from_slice(bytes.as_ref());
    }

    pub fn try_read<T: Scalar>(&self, order: Endian, src: &[u8]) -> Result<T, Error> {
        Self::fits::<T>(src.len())?;
        self.check::<T>()?;
        Ok(self.read(order, src))
    }

    pub fn try_write<T: Scalar>(&self, order: Endian, dst: &mut [u8], value: T) -> Result<(), Error> {
        Self::fits::<T>(dst.len())?;
        self.check::<T>()?;
        self.write(order, dst, value);
        Ok(())
    }

    // the shift path assumes the machine's own integer order, so floats and
    // overridden integers take the copy path
    #[inline(always)]
    fn shifts<T: Scalar>(&self) -> bool {
        self.strategy == Strategy::Shift
            && T::DOMAIN == Domain::Integer
            && self.integer.is_none()
    }

    fn fits<T: Scalar>(len: usize) -> Result<(), Error> {
        if len < T::SIZEOF {
            Err(Error::BufferTooSmall {
                ty: type_name::<T>(),
                size: T::SIZEOF,
                len,
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const ALL: [Endian; 4] = [
        Endian::Little,
        Endian::Big,
        Endian::HONEYWELL_316,
        Endian::PDP,
    ];

    fn machine() -> Endian {
        if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        }
    }

    fn swapped() -> Endian {
        if cfg!(target_endian = "big") {
            Endian::Little
        } else {
            Endian::Big
        }
    }

    #[test]
    fn test_convert_matches_std() {
        let host = Host::detect();

        let v = 0x0102_0304u32;
        assert_eq!(host.convert(Endian::Big, v), v.to_be());
        assert_eq!(host.convert(Endian::Little, v), v.to_le());

        let v = 0x0102_0304_0506_0708u64;
        assert_eq!(host.convert(Endian::Big, v), v.to_be());
        assert_eq!(host.convert(Endian::Little, v), v.to_le());

        let v = -12345i16;
        assert_eq!(host.convert(Endian::Big, v), v.to_be());
    }

    #[test]
    fn test_convert_mixed() {
        let host = Host::detect();
        let v = 0x0102_0304u32;

        let pdp = host.convert(Endian::PDP, v);
        assert_eq!(pdp.to_ne_bytes(), [0x02, 0x01, 0x04, 0x03]);

        let h316 = host.convert(Endian::HONEYWELL_316, v);
        assert_eq!(h316.to_ne_bytes(), [0x03, 0x04, 0x01, 0x02]);

        assert_eq!(host.convert(Endian::PDP, pdp), v);
        assert_eq!(host.convert(Endian::HONEYWELL_316, h316), v);
    }

    #[test]
    fn test_single_byte_noop() {
        let host = Host::detect();
        for order in ALL {
            assert_eq!(host.convert(order, 0xa5u8), 0xa5);
            assert_eq!(host.convert(order, -3i8), -3);
        }
    }

    #[test]
    fn test_single_byte_read_write() {
        for host in [Host::detect(), Host::detect().with_strategy(Strategy::Shift)] {
            for order in ALL {
                let mut buf = [0u8; 1];
                host.write(order, &mut buf, 0xabu8);
                assert_eq!(buf, [0xab], "{}", order);
                assert_eq!(host.read::<u8>(order, &buf), 0xab);

                let mut buf = [0u8; 2];
                host.write(order, &mut buf, -2i8);
                assert_eq!(buf, [0xfe, 0x00], "{}", order);
                assert_eq!(host.read::<i8>(order, &[0xab, 0xcd]), 0xabu8 as i8);
            }
        }
    }

    #[test]
    fn test_strategies_honour_integer_override() {
        let copy = Host::detect().with_integer_order(swapped());
        let shift = copy.with_strategy(Strategy::Shift);

        for order in ALL {
            let mut a = [0u8; 4];
            let mut b = [0u8; 4];
            copy.write(order, &mut a, 0x0102_0304u32);
            shift.write(order, &mut b, 0x0102_0304u32);
            assert_eq!(a, b, "{}", order);
            assert_eq!(shift.read::<u32>(order, &a), copy.read::<u32>(order, &a));
        }

        // the override is taken at its word: the machine order now reverses
        let mut buf = [0u8; 4];
        shift.write(machine(), &mut buf, 0x0102_0304u32);
        assert_eq!(buf, 0x0403_0201u32.to_ne_bytes());
    }

    #[test]
    fn test_read_write_layouts() {
        for host in [Host::detect(), Host::detect().with_strategy(Strategy::Shift)] {
            let mut buf = [0u8; 4];
            host.write(Endian::PDP, &mut buf, 0x0102_0304u32);
            assert_eq!(buf, [0x02, 0x01, 0x04, 0x03]);
            assert_eq!(host.read::<u32>(Endian::PDP, &buf), 0x0102_0304);

            let mut buf = [0u8; 2];
            host.write(Endian::Big, &mut buf, 0x0102u16);
            assert_eq!(buf, [0x01, 0x02]);
            host.write(Endian::Little, &mut buf, 0x0102u16);
            assert_eq!(buf, [0x02, 0x01]);

            let mut buf = [0u8; 8];
            host.write(Endian::Little, &mut buf, 0x0102_0304_0506_0708u64);
            assert_eq!(buf, [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
        }
    }

    #[test]
    fn test_integer_override() {
        // claiming the opposite order flips which targets need a transform
        let host = Host::detect().with_integer_order(swapped());

        assert_eq!(host.native::<u32>(), Some(swapped()));
        assert_eq!(host.convert(swapped(), 0x0102_0304u32), 0x0102_0304);
        assert_eq!(host.convert(machine(), 0x0102_0304u32), 0x0403_0201);
    }

    #[cfg(feature = "float")]
    #[test]
    fn test_domain_independence() {
        let host = Host::detect().with_float_order(swapped());

        assert_eq!(host.native::<u32>(), Some(machine()));
        assert_eq!(host.native::<f32>(), Some(swapped()));
        assert_eq!(host.native::<f64>(), Some(swapped()));

        // integers still follow the machine
        assert_eq!(host.convert(machine(), 0x0102_0304u32), 0x0102_0304);

        // floats follow the override
        assert_eq!(host.convert(swapped(), 7.0f32).to_bits(), 7.0f32.to_bits());
        assert_eq!(host.convert(machine(), 7.0f32).to_bits(), 0x0000_e040);
    }

    #[cfg(feature = "float")]
    #[test]
    fn test_float_layouts() {
        let host = Host::detect();

        let mut buf = [0u8; 4];
        host.write(Endian::Big, &mut buf, 7.0f32);
        assert_eq!(buf, [0x40, 0xe0, 0x00, 0x00]);
        host.write(Endian::Little, &mut buf, 7.0f32);
        assert_eq!(buf, [0x00, 0x00, 0xe0, 0x40]);
        assert_eq!(host.read::<f32>(Endian::Little, &buf), 7.0);

        let mut buf = [0u8; 8];
        host.write(Endian::Big, &mut buf, 7.0f64);
        assert_eq!(buf, [0x40, 0x1c, 0, 0, 0, 0, 0, 0]);
        host.write(Endian::Little, &mut buf, 7.0f64);
        assert_eq!(buf, [0, 0, 0, 0, 0, 0, 0x1c, 0x40]);
        assert_eq!(host.read::<f64>(Endian::Little, &buf), 7.0);
    }

    #[test]
    fn test_checked() {
        let host = Host::detect();

        assert_eq!(
            host.try_read::<u32>(Endian::Big, &[1, 2, 3]),
            Err(Error::BufferTooSmall { ty: "u32", size: 4, len: 3 })
        );
        assert_eq!(host.try_read::<u32>(Endian::Big, &[1, 2, 3, 4, 5]), Ok(0x0102_0304));

        let mut small = [0u8; 1];
        assert!(matches!(
            host.try_write(Endian::Big, &mut small, 1u16),
            Err(Error::BufferTooSmall { size: 2, len: 1, .. })
        ));

        let mut buf = [0u8; 2];
        assert_eq!(host.try_write(Endian::Big, &mut buf, 0x0102u16), Ok(()));
        assert_eq!(buf, [0x01, 0x02]);
    }

    #[test]
    fn test_config() {
        let host: Host = serde_json::from_str(r#"{ "float": "Big", "strategy": "shift" }"#).unwrap();
        assert_eq!(host.integer_order(), None);
        assert_eq!(host.float_order(), Some(Endian::Big));
        assert_eq!(host.strategy(), Strategy::Shift);

        let host: Host = serde_json::from_str("{}").unwrap();
        assert_eq!(host, Host::detect());
    }
}
