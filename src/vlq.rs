use core::cmp::Ordering;
use core::fmt;

use crate::{ParseError, ParseResult};

#[doc = r#"
A variable-length quantity: the base-128, big-endian, continuation-flagged
integer encoding used for delta-times and event payload lengths.

Each encoded byte carries 7 payload bits, most significant septet first;
every byte except the last has its high bit set. At most [`Vlq::MAX_LEN`]
bytes are ever consumed, which caps values at 28 significant bits. A value
whose fourth byte still carries the continuation flag is cut off there: the
format reserves no fifth byte, so the remaining bits simply never existed
as far as the decoder is concerned.

A `Vlq` remembers both the decoded value and the number of bytes it was
read from (or will be written as), so a decode cursor can advance without
re-scanning. Comparison is by decoded value only, never by encoded length.

# Example
```rust
# use midiwire::prelude::*;
let vlq = Vlq::read(&[0x81, 0x00, 0xFF]).unwrap();

assert_eq!(vlq.value(), 128);
assert_eq!(vlq.encoded_len(), 2);

let mut out = Vec::new();
vlq.write_into(&mut out);
assert_eq!(out, [0x81, 0x00]);
```
"#]
#[derive(Debug, Clone, Copy)]
pub struct Vlq {
    value: u32,
    byte_len: u8,
}

impl Vlq {
    /// The longest encoded form the format permits.
    pub const MAX_LEN: usize = 4;

    /// Build a quantity from a plain value.
    ///
    /// The encoded length is the minimal septet count, never less than one
    /// byte: `Vlq::new(0)` still occupies a single `0x00` byte on the wire.
    pub const fn new(value: u32) -> Self {
        let mut byte_len = 1u8;
        let mut rest = value >> 7;
        while rest != 0 && (byte_len as usize) < Self::MAX_LEN {
            byte_len += 1;
            rest >>= 7;
        }
        Self { value, byte_len }
    }

    /// Decode a quantity from the front of `bytes`.
    ///
    /// Scans up to [`Vlq::MAX_LEN`] bytes, stopping at the first byte whose
    /// high bit is clear (inclusive). A fourth byte is consumed even when
    /// its continuation flag is still set; whatever it claimed to continue
    /// is dropped.
    ///
    /// # Errors
    /// [`ParseError::OutOfBounds`] if `bytes` runs out before a terminal
    /// byte (or the 4-byte cap) is reached.
    pub fn read(bytes: &[u8]) -> ParseResult<Self> {
        let mut value = 0u32;
        for (idx, &byte) in bytes.iter().enumerate().take(Self::MAX_LEN) {
            value = (value << 7) | u32::from(byte & 0x7F);
            if byte & 0x80 == 0 || idx + 1 == Self::MAX_LEN {
                return Ok(Self {
                    value,
                    byte_len: idx as u8 + 1,
                });
            }
        }
        Err(ParseError::OutOfBounds)
    }

    /// Decode a quantity embedded in a fixed 4-byte slot.
    ///
    /// Applies the same continuation-bit scan as [`Vlq::read`]; bytes after
    /// the terminal one are ignored.
    pub const fn from_fixed(buf: [u8; 4]) -> Self {
        let mut value = 0u32;
        let mut idx = 0;
        loop {
            let byte = buf[idx];
            value = (value << 7) | ((byte & 0x7F) as u32);
            idx += 1;
            if byte & 0x80 == 0 || idx == Self::MAX_LEN {
                return Self {
                    value,
                    byte_len: idx as u8,
                };
            }
        }
    }

    /// The decoded value.
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// The number of bytes consumed by [`Vlq::read`], or the minimal
    /// encoded length for a quantity built from a value.
    pub const fn encoded_len(&self) -> usize {
        self.byte_len as usize
    }

    /// Append the minimal encoded form to `out`.
    ///
    /// Continuation bits are set on all but the final byte. The output is
    /// always minimal even if the quantity was decoded from a padded
    /// encoding (one with leading `0x80` bytes).
    pub fn write_into(&self, out: &mut Vec<u8>) {
        let mut septets = 0usize;
        while septets + 1 < Self::MAX_LEN && (self.value >> (7 * (septets + 1))) != 0 {
            septets += 1;
        }
        for i in (1..=septets).rev() {
            out.push((((self.value >> (7 * i)) & 0x7F) as u8) | 0x80);
        }
        out.push((self.value & 0x7F) as u8);
    }
}

impl From<u32> for Vlq {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<Vlq> for u32 {
    fn from(vlq: Vlq) -> Self {
        vlq.value
    }
}

impl PartialEq for Vlq {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Vlq {}

impl PartialOrd for Vlq {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Vlq {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for Vlq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
