//! Host byte order detection.
//!
//! The [`Mode`] is chosen when the crate is built (see the crate-level docs)
//! and is available as the constant [`MODE`]. With one of the fixed modes the
//! predicates in this module are constants. With [`Mode::RuntimeDetect`] the
//! host is probed once and the result is cached for the lifetime of the
//! process.

pub mod detect;

use std::str::FromStr;

use crate::Error;

/// A byte order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ByteOrder {
    /// Most significant byte first.
    #[display(fmt = "big")]
    Big,

    /// Least significant byte first.
    #[display(fmt = "little")]
    Little,
}

impl ByteOrder {
    /// Byte order used in network protocols.
    pub const NETWORK: Self = Self::Big;

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Big => Self::Little,
            Self::Little => Self::Big,
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid byte order: {input:?}")]
pub struct ParseByteOrderError {
    pub input: String,
}

impl FromStr for ByteOrder {
    type Err = ParseByteOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "big" | "be" | "network" => Ok(Self::Big),
            "little" | "le" => Ok(Self::Little),
            _ => {
                Err(ParseByteOrderError {
                    input: s.to_owned(),
                })
            }
        }
    }
}

/// How the host byte order is determined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Mode {
    /// The host is assumed to be little endian.
    #[display(fmt = "little endian host")]
    LittleEndianHost,

    /// The host is assumed to be big endian.
    #[display(fmt = "big endian host")]
    BigEndianHost,

    /// The host byte order is probed at run time.
    #[display(fmt = "runtime detection")]
    RuntimeDetect,
}

impl Mode {
    /// Returns the byte order this mode fixes, if any.
    #[inline]
    pub const fn fixed_byte_order(self) -> Option<ByteOrder> {
        match self {
            Self::LittleEndianHost => Some(ByteOrder::Little),
            Self::BigEndianHost => Some(ByteOrder::Big),
            Self::RuntimeDetect => None,
        }
    }

    /// Returns the host byte order under this mode. `probe` is only called
    /// for [`Mode::RuntimeDetect`].
    #[inline]
    pub fn resolve(self, probe: impl FnOnce() -> ByteOrder) -> ByteOrder {
        self.fixed_byte_order().unwrap_or_else(probe)
    }
}

/// The mode this crate was built with.
#[cfg(endian_mode = "little")]
pub const MODE: Mode = Mode::LittleEndianHost;

/// The mode this crate was built with.
#[cfg(endian_mode = "big")]
pub const MODE: Mode = Mode::BigEndianHost;

/// The mode this crate was built with.
#[cfg(endian_mode = "runtime")]
pub const MODE: Mode = Mode::RuntimeDetect;

#[cfg(not(any(endian_mode = "little", endian_mode = "big", endian_mode = "runtime")))]
compile_error!("no byte order mode was configured. The build script should have set `endian_mode`.");

/// Returns the host byte order.
///
/// This is a constant unless the crate was built with runtime detection.
#[inline]
pub fn host_byte_order() -> ByteOrder {
    MODE.resolve(detect::host_byte_order)
}

#[inline]
pub fn is_big_endian() -> bool {
    host_byte_order() == ByteOrder::Big
}

#[inline]
pub fn is_little_endian() -> bool {
    !is_big_endian()
}

/// Checks that the configured host byte order matches how this machine
/// actually stores integers.
///
/// A fixed mode that disagrees with the machine makes every conversion wrong,
/// so applications that force a mode should call this once on startup and
/// abort on error.
pub fn verify_host_byte_order() -> Result<ByteOrder, Error> {
    let configured = host_byte_order();
    let detected = detect::probe();

    if configured == detected {
        Ok(configured)
    }
    else {
        tracing::error!(mode = %MODE, %configured, %detected, "host byte order mismatch");
        Err(Error::ByteOrderMismatch {
            configured,
            detected,
        })
    }
}
