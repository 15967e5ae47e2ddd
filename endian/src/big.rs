//! Conversion between host byte order and big endian.

use crate::{
    endianness::{
        self,
        BigEndian,
    },
    swap::ReverseBytes,
};

#[inline]
pub fn host_to_big<T: ReverseBytes>(host: T) -> T {
    endianness::from_host::<BigEndian, T>(host)
}

#[inline]
pub fn big_to_host<T: ReverseBytes>(big: T) -> T {
    endianness::to_host::<BigEndian, T>(big)
}

#[inline]
pub fn host_to_big_16(host: u16) -> u16 {
    host_to_big(host)
}

#[inline]
pub fn host_to_big_32(host: u32) -> u32 {
    host_to_big(host)
}

#[inline]
pub fn host_to_big_64(host: u64) -> u64 {
    host_to_big(host)
}

#[inline]
pub fn big_to_host_16(big: u16) -> u16 {
    big_to_host(big)
}

#[inline]
pub fn big_to_host_32(big: u32) -> u32 {
    big_to_host(big)
}

#[inline]
pub fn big_to_host_64(big: u64) -> u64 {
    big_to_host(big)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::is_little_endian;

    #[test]
    fn byte_is_unchanged() {
        assert_eq!(host_to_big(0x01u8), 0x01);
        assert_eq!(big_to_host(0x01u8), 0x01);
    }

    // only holds if the configured host byte order is the real one.
    #[cfg(any(
        endian_mode = "runtime",
        all(endian_mode = "little", target_endian = "little"),
        all(endian_mode = "big", target_endian = "big")
    ))]
    #[test]
    fn storage_order() {
        assert_eq!(host_to_big_16(0x0102).to_ne_bytes(), [1, 2]);
        assert_eq!(host_to_big_32(0x01020304).to_ne_bytes(), [1, 2, 3, 4]);
        assert_eq!(
            host_to_big_64(0x0102030405060708).to_ne_bytes(),
            [1, 2, 3, 4, 5, 6, 7, 8]
        );
    }

    #[test]
    fn reverses_only_when_host_differs() {
        let (n16, n32, n64) = (0x0102u16, 0x01020304u32, 0x0102030405060708u64);
        if is_little_endian() {
            assert_eq!(host_to_big_16(n16), 0x0201);
            assert_eq!(host_to_big_32(n32), 0x04030201);
            assert_eq!(host_to_big_64(n64), 0x0807060504030201);
        }
        else {
            assert_eq!(host_to_big_16(n16), n16);
            assert_eq!(host_to_big_32(n32), n32);
            assert_eq!(host_to_big_64(n64), n64);
        }
    }

    #[test]
    fn round_trip() {
        for value in [0u16, 0x0102, 0xff00, u16::MAX] {
            assert_eq!(big_to_host_16(host_to_big_16(value)), value);
            assert_eq!(host_to_big_16(big_to_host_16(value)), value);
        }
        for value in [0u32, 0x01020304, 0xdeadbeef, u32::MAX] {
            assert_eq!(big_to_host_32(host_to_big_32(value)), value);
            assert_eq!(host_to_big_32(big_to_host_32(value)), value);
        }
        for value in [0u64, 0x0102030405060708, 0xdeadbeefcafebabe, u64::MAX] {
            assert_eq!(big_to_host_64(host_to_big_64(value)), value);
            assert_eq!(host_to_big_64(big_to_host_64(value)), value);
        }
    }
}
