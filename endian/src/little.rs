//! Conversion between host byte order and little endian.

use crate::{
    endianness::{
        self,
        LittleEndian,
    },
    swap::ReverseBytes,
};

#[inline]
pub fn host_to_little<T: ReverseBytes>(host: T) -> T {
    endianness::from_host::<LittleEndian, T>(host)
}

#[inline]
pub fn little_to_host<T: ReverseBytes>(little: T) -> T {
    endianness::to_host::<LittleEndian, T>(little)
}

#[inline]
pub fn host_to_little_16(host: u16) -> u16 {
    host_to_little(host)
}

#[inline]
pub fn host_to_little_32(host: u32) -> u32 {
    host_to_little(host)
}

#[inline]
pub fn host_to_little_64(host: u64) -> u64 {
    host_to_little(host)
}

#[inline]
pub fn little_to_host_16(little: u16) -> u16 {
    little_to_host(little)
}

#[inline]
pub fn little_to_host_32(little: u32) -> u32 {
    little_to_host(little)
}

#[inline]
pub fn little_to_host_64(little: u64) -> u64 {
    little_to_host(little)
}
