//! Runtime probe for the host byte order.
//!
//! The probe is compiled in every mode, so it can be used to double-check a
//! fixed mode (see [`verify_host_byte_order`](super::verify_host_byte_order)).

use lazy_static::lazy_static;

use super::ByteOrder;

const PROBE: u32 = 0x01020304;

/// Inspects how this machine stores a `u32` in memory.
///
/// The bytes are read from the integer's storage, not computed with shifts,
/// which would give the same result on every machine.
#[inline]
pub fn probe() -> ByteOrder {
    let storage = PROBE.to_ne_bytes();
    if storage[0] == 0x01 {
        ByteOrder::Big
    }
    else {
        ByteOrder::Little
    }
}

lazy_static! {
    static ref HOST_BYTE_ORDER: ByteOrder = {
        let byte_order = probe();
        tracing::debug!(%byte_order, "probed host byte order");
        byte_order
    };
}

/// Returns the probed host byte order. The probe only runs once per process.
#[inline]
pub fn host_byte_order() -> ByteOrder {
    *HOST_BYTE_ORDER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_matches_target() {
        let expected = if cfg!(target_endian = "big") {
            ByteOrder::Big
        }
        else {
            ByteOrder::Little
        };
        assert_eq!(probe(), expected);
    }

    #[test]
    fn cached_order_is_stable() {
        let first = host_byte_order();
        for _ in 0..16 {
            assert_eq!(host_byte_order(), first);
        }
        assert_eq!(first, probe());
    }

    #[test]
    fn cached_order_is_stable_across_threads() {
        let expected = probe();
        let handles = (0..8)
            .map(|_| std::thread::spawn(host_byte_order))
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
