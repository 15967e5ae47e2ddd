//! Hex rendering of the bytes an integer is stored as.
//!
//! ```
//! use endian::hexdump::Hexdump;
//!
//! let dump = Hexdump::new(0x0102u16.to_be_bytes());
//! assert_eq!(dump.to_string(), "Hexdump: 2 bytes\n0000  01 02\n");
//! ```

use std::fmt::{
    Debug,
    Display,
};

const BYTES_PER_LINE: usize = 16;

#[inline]
pub fn hexdump<B>(bytes: B) -> Hexdump<B> {
    Hexdump::new(bytes)
}

pub struct Hexdump<B> {
    bytes: B,
    config: Config,
}

impl<B> Hexdump<B> {
    #[inline]
    pub fn new(bytes: B) -> Self {
        Self::with_config(bytes, Default::default())
    }

    #[inline]
    pub fn with_config(bytes: B, config: Config) -> Self {
        Self { bytes, config }
    }
}

impl<B: AsRef<[u8]>> Display for Hexdump<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.bytes.as_ref();
        let pad_offset_to = std::cmp::max(num_hex_digits(self.config.offset + bytes.len()), 4);

        if self.config.header {
            writeln!(f, "Hexdump: {} bytes", bytes.len())?;
        }

        for (i, line) in bytes.chunks(BYTES_PER_LINE).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            let offset = self.config.offset + i * BYTES_PER_LINE;
            write!(f, "{offset:0pad_offset_to$x} ")?;
            for b in line {
                write!(f, " {b:02x}")?;
            }
        }

        if self.config.trailing_newline {
            writeln!(f)?;
        }

        Ok(())
    }
}

impl<B: AsRef<[u8]>> Debug for Hexdump<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hex = Hexdump {
            bytes: self.bytes.as_ref(),
            config: Config {
                offset: self.config.offset,
                trailing_newline: false,
                header: false,
            },
        };
        Display::fmt(&hex, f)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub offset: usize,
    pub trailing_newline: bool,
    pub header: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            offset: 0,
            trailing_newline: true,
            header: true,
        }
    }
}

fn num_hex_digits(mut num: usize) -> usize {
    if num == 0 {
        1
    }
    else {
        let mut d = 0usize;
        while num != 0 {
            d += 1;
            num >>= 4;
        }
        d
    }
}
