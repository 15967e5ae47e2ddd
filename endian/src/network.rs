//! Conversion between host and network byte order.
//!
//! Network byte order is big endian. Converting to and from it is the same
//! operation, so each `network_to_host*` function is an alias of the
//! corresponding `host_to_network*` function.

use crate::{
    endianness::{
        self,
        NetworkEndian,
    },
    swap::ReverseBytes,
};

#[inline]
pub fn host_to_network<T: ReverseBytes>(host: T) -> T {
    endianness::from_host::<NetworkEndian, T>(host)
}

#[inline]
pub fn network_to_host<T: ReverseBytes>(network: T) -> T {
    host_to_network(network)
}

#[inline]
pub fn host_to_network_16(host: u16) -> u16 {
    host_to_network(host)
}

#[inline]
pub fn host_to_network_32(host: u32) -> u32 {
    host_to_network(host)
}

#[inline]
pub fn host_to_network_64(host: u64) -> u64 {
    host_to_network(host)
}

#[inline]
pub fn network_to_host_16(network: u16) -> u16 {
    host_to_network_16(network)
}

#[inline]
pub fn network_to_host_32(network: u32) -> u32 {
    host_to_network_32(network)
}

#[inline]
pub fn network_to_host_64(network: u64) -> u64 {
    host_to_network_64(network)
}
