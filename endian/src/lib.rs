//! Convert integers between host byte order and network, big endian or little
//! endian byte order.
//!
//! ```
//! use endian::{
//!     big,
//!     little,
//!     network,
//! };
//!
//! let wire = network::host_to_network_16(0x0102);
//! assert_eq!(network::network_to_host_16(wire), 0x0102);
//!
//! let stored = little::host_to_little(0x01020304u32);
//! assert_eq!(little::little_to_host(stored), 0x01020304);
//!
//! // a single byte has no byte order.
//! assert_eq!(big::host_to_big(0x01u8), 0x01);
//! ```
//!
//! # Host byte order
//!
//! How the host byte order is determined is decided when this crate is built:
//!
//! - `force-little` feature: the host is little endian.
//! - `force-big` feature: the host is big endian.
//! - `runtime-detect` feature: the host is probed once at run time.
//! - none of these: the byte order of the compilation target is used.
//!
//! The `ENDIAN_MODE` environment variable (`little`, `big`, `runtime` or
//! `auto`) can be used instead of the features. Requesting two different modes
//! fails the build. With a fixed mode the conversions compile down to either
//! nothing or a single byte swap.

pub mod big;
pub mod endianness;
pub mod hexdump;
pub mod little;
pub mod mode;
pub mod network;
pub mod swap;

pub use self::{
    endianness::{
        BigEndian,
        Endianness,
        LittleEndian,
        NetworkEndian,
    },
    mode::{
        detect,
        host_byte_order,
        is_big_endian,
        is_little_endian,
        verify_host_byte_order,
        ByteOrder,
        Mode,
        ParseByteOrderError,
        MODE,
    },
    swap::{
        reverse_byte_array,
        reverse_bytes,
        reverse_bytes_16,
        reverse_bytes_32,
        reverse_bytes_64,
        ReverseBytes,
        Width,
    },
};

pub const VERSION_MAJOR: u64 = 1;
pub const VERSION_MINOR: u64 = 0;
pub const VERSION_PATCH: u64 = 0;
pub const VERSION: &str = "1.0.0";

/// Returns the version of this library.
#[inline]
pub fn version() -> &'static str {
    VERSION
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Host byte order is configured as {configured} endian, but this machine is {detected} endian")]
    ByteOrderMismatch {
        configured: ByteOrder,
        detected: ByteOrder,
    },
}
