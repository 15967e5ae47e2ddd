//! [Endianness](https://en.wikipedia.org/wiki/Endianness)
//!
//! Marker types for the byte orders integers can be converted to and from,
//! and the generic conversions the [`network`](crate::network),
//! [`big`](crate::big) and [`little`](crate::little) modules are built on.

use crate::{
    mode::{
        host_byte_order,
        ByteOrder,
    },
    swap::ReverseBytes,
};

mod sealed {
    pub trait Sealed {}
}

/// Trait for types that represent endianesses.
///
/// This trait is sealed and can't be implemented for custom types. It is only
/// implemented for [`BigEndian`] and [`LittleEndian`] (and the type alias
/// [`NetworkEndian`]).
pub trait Endianness: sealed::Sealed {
    const BYTE_ORDER: ByteOrder;

    /// Whether a host with byte order `host` has to reverse bytes to convert
    /// to or from this byte order.
    #[inline]
    fn reverses_on(host: ByteOrder) -> bool {
        host != Self::BYTE_ORDER
    }

    /// Whether this host has to reverse bytes to convert to or from this byte
    /// order.
    ///
    /// With a fixed host byte order this is a constant.
    #[inline]
    fn reverses() -> bool {
        Self::reverses_on(host_byte_order())
    }
}

/// Big endian byte order
#[derive(Clone, Copy, Debug, Default)]
pub struct BigEndian;
impl Endianness for BigEndian {
    const BYTE_ORDER: ByteOrder = ByteOrder::Big;
}
impl sealed::Sealed for BigEndian {}

/// Little endian byte order
#[derive(Clone, Copy, Debug, Default)]
pub struct LittleEndian;
impl Endianness for LittleEndian {
    const BYTE_ORDER: ByteOrder = ByteOrder::Little;
}
impl sealed::Sealed for LittleEndian {}

/// Network byte order.
///
/// This is always big endian.
pub use self::BigEndian as NetworkEndian;

/// Converts `value` from host byte order to the byte order `E`.
#[inline]
pub fn from_host<E: Endianness, T: ReverseBytes>(value: T) -> T {
    if E::reverses() {
        value.reverse_bytes()
    }
    else {
        value
    }
}

/// Converts `value` from the byte order `E` to host byte order.
///
/// Reversing bytes is an involution, so this is the same operation as
/// [`from_host`].
#[inline]
pub fn to_host<E: Endianness, T: ReverseBytes>(value: T) -> T {
    from_host::<E, T>(value)
}
