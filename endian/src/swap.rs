//! Byte reversal.
//!
//! [`reverse_bytes_16`], [`reverse_bytes_32`] and [`reverse_bytes_64`] use the
//! `swap_bytes` intrinsics, which compile to a single instruction on targets
//! that have one. With the `portable-swap` feature they use the shift-and-mask
//! functions in [`portable`] instead. Both always produce the same result.

mod sealed {
    pub trait Sealed {}
}

/// Trait for the fixed-width unsigned integer types this crate converts.
///
/// This trait is sealed.
pub trait Width: sealed::Sealed + Copy {
    const BYTES: usize;
    const BITS: usize;
}

/// Trait for integers whose byte sequence can be reversed.
pub trait ReverseBytes: Width {
    /// Returns the integer whose storage bytes are those of `self` in reverse
    /// order.
    fn reverse_bytes(self) -> Self;
}

#[inline]
pub fn reverse_bytes<T: ReverseBytes>(value: T) -> T {
    value.reverse_bytes()
}

#[inline]
pub const fn reverse_bytes_16(value: u16) -> u16 {
    if cfg!(feature = "portable-swap") {
        portable::reverse16(value)
    }
    else {
        value.swap_bytes()
    }
}

#[inline]
pub const fn reverse_bytes_32(value: u32) -> u32 {
    if cfg!(feature = "portable-swap") {
        portable::reverse32(value)
    }
    else {
        value.swap_bytes()
    }
}

#[inline]
pub const fn reverse_bytes_64(value: u64) -> u64 {
    if cfg!(feature = "portable-swap") {
        portable::reverse64(value)
    }
    else {
        value.swap_bytes()
    }
}

/// Reverses a byte array by swapping the `i`-th byte with the `N - 1 - i`-th
/// byte for the first half of the array.
#[inline]
pub fn reverse_byte_array<const N: usize>(mut bytes: [u8; N]) -> [u8; N] {
    for i in 0..N / 2 {
        bytes.swap(i, N - 1 - i);
    }
    bytes
}

/// Byte reversal with shifts and masks only.
pub mod portable {
    #[inline]
    pub const fn reverse16(n: u16) -> u16 {
        ((n & 0xff00) >> 8) | ((n & 0x00ff) << 8)
    }

    #[inline]
    pub const fn reverse32(n: u32) -> u32 {
        ((n & 0xff000000) >> 24)
            | ((n & 0x00ff0000) >> 8)
            | ((n & 0x0000ff00) << 8)
            | ((n & 0x000000ff) << 24)
    }

    #[inline]
    pub const fn reverse64(n: u64) -> u64 {
        ((n & 0xff00000000000000) >> 56)
            | ((n & 0x00ff000000000000) >> 40)
            | ((n & 0x0000ff0000000000) >> 24)
            | ((n & 0x000000ff00000000) >> 8)
            | ((n & 0x00000000ff000000) << 8)
            | ((n & 0x0000000000ff0000) << 24)
            | ((n & 0x000000000000ff00) << 40)
            | ((n & 0x00000000000000ff) << 56)
    }
}

macro_rules! impl_width {
    {
        $(
            $ty:ty;
        )*
    } => {
        $(
            impl sealed::Sealed for $ty {}

            impl Width for $ty {
                const BYTES: usize = std::mem::size_of::<$ty>();
                const BITS: usize = std::mem::size_of::<$ty>() * 8;
            }
        )*
    };
}

impl_width! {
    u8;
    u16;
    u32;
    u64;
    u128;
    usize;
}

// a single byte has no order.
impl ReverseBytes for u8 {
    #[inline]
    fn reverse_bytes(self) -> Self {
        self
    }
}

macro_rules! impl_reverse_bytes {
    {
        $(
            $ty:ty => $reverse:path;
        )*
    } => {
        $(
            impl ReverseBytes for $ty {
                #[inline]
                fn reverse_bytes(self) -> Self {
                    $reverse(self)
                }
            }
        )*
    };
}

macro_rules! impl_reverse_bytes_via_storage {
    {
        $(
            $ty:ty;
        )*
    } => {
        $(
            impl ReverseBytes for $ty {
                #[inline]
                fn reverse_bytes(self) -> Self {
                    <$ty>::from_ne_bytes(reverse_byte_array(self.to_ne_bytes()))
                }
            }
        )*
    };
}

impl_reverse_bytes! {
    u16 => reverse_bytes_16;
    u32 => reverse_bytes_32;
    u64 => reverse_bytes_64;
}

// widths without a dedicated function go through their storage bytes.
impl_reverse_bytes_via_storage! {
    u128;
    usize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexdump::Hexdump;

    macro_rules! make_tests {
        {
            $(
                $name:ident : $ty:ty => { $value:expr } == { $reversed:expr };
            )*
        } => {
            $(
                #[test]
                fn $name() {
                    let value: $ty = $value;
                    let expected: $ty = $reversed;

                    let got = reverse_bytes(value);
                    if got != expected {
                        panic!(
                            r#"reversing {value:#x}:

expected:
{}

got:
{}"#,
                            Hexdump::new(expected.to_be_bytes()),
                            Hexdump::new(got.to_be_bytes()),
                        )
                    }

                    // the storage bytes of the result are the storage bytes of the input, mirrored.
                    let mut storage = value.to_ne_bytes();
                    storage.reverse();
                    assert_eq!(got.to_ne_bytes(), storage);

                    assert_eq!(reverse_bytes(got), value);
                }
            )*
        };
    }

    make_tests! {
        test_u8 : u8 => { 0x01 } == { 0x01 };
        test_u16 : u16 => { 0x0102 } == { 0x0201 };
        test_u32 : u32 => { 0x01020304 } == { 0x04030201 };
        test_u64 : u64 => { 0x0102030405060708 } == { 0x0807060504030201 };
        test_u128 : u128 => { 0x0102030405060708090a0b0c0d0e0f10 } == { 0x100f0e0d0c0b0a090807060504030201 };
        test_u16_asymmetric : u16 => { 0xff00 } == { 0x00ff };
        test_u32_alternating : u32 => { 0xa55aa55a } == { 0x5aa55aa5 };
        test_u64_high_bit : u64 => { 0x8000000000000001 } == { 0x0100000000000080 };
    }

    #[test]
    fn width_specific_functions() {
        assert_eq!(reverse_bytes_16(0x0201), 0x0102);
        assert_eq!(reverse_bytes_32(0x04030201), 0x01020304);
        assert_eq!(reverse_bytes_64(0x0807060504030201), 0x0102030405060708);
    }

    #[test]
    fn portable_matches_intrinsic() {
        for value in [0u16, 1, 0x0102, 0x00ff, 0xff00, 0xbeef, u16::MAX] {
            assert_eq!(portable::reverse16(value), value.swap_bytes());
        }
        for value in [0u32, 1, 0x01020304, 0xdeadbeef, 0x80000000, u32::MAX] {
            assert_eq!(portable::reverse32(value), value.swap_bytes());
        }
        for value in [
            0u64,
            1,
            0x0102030405060708,
            0xdeadbeefcafebabe,
            0x8000000000000000,
            u64::MAX,
        ] {
            assert_eq!(portable::reverse64(value), value.swap_bytes());
        }
    }

    #[test]
    fn usize_goes_through_storage() {
        let value = usize::from_ne_bytes(std::array::from_fn(|i| i as u8 + 1));
        assert_eq!(reverse_bytes(value), value.swap_bytes());
    }

    #[test]
    fn reverse_odd_and_degenerate_arrays() {
        assert_eq!(reverse_byte_array::<0>([]), [0u8; 0]);
        assert_eq!(reverse_byte_array([7]), [7]);
        assert_eq!(reverse_byte_array([1, 2, 3]), [3, 2, 1]);
        assert_eq!(reverse_byte_array([1, 2, 3, 4, 5]), [5, 4, 3, 2, 1]);
    }

    #[test]
    fn widths() {
        assert_eq!(<u8 as Width>::BYTES, 1);
        assert_eq!(<u16 as Width>::BITS, 16);
        assert_eq!(<u32 as Width>::BYTES, 4);
        assert_eq!(<u64 as Width>::BITS, 64);
        assert_eq!(<u128 as Width>::BYTES, 16);
    }
}
