use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::{ParseError, ParseResult};

#[doc = r#"
How the tracks of a file relate to one another.

Stored in the header's first 16-bit field:

- `0` — one track carrying every channel.
- `1` — several tracks played simultaneously against one time base.
- `2` — several sequentially independent single-track patterns.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum Format {
    /// Format 0.
    SingleTrack = 0,
    /// Format 1.
    MultiTrackSimultaneous = 1,
    /// Format 2.
    MultiTrackSequential = 2,
}

#[doc = r#"
The fixed six-byte `MThd` payload: format, track count and time division,
three big-endian 16-bit fields in that order.

The division value is carried verbatim; interpreting it (ticks per quarter
note versus SMPTE subdivision) is the playback side's concern.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    format: Format,
    track_count: u16,
    divisions: u16,
}

impl Header {
    /// The payload length every header chunk declares.
    pub const LEN: u32 = 6;

    /// Create a header record.
    pub const fn new(format: Format, track_count: u16, divisions: u16) -> Self {
        Self {
            format,
            track_count,
            divisions,
        }
    }

    /// Decode a header from an `MThd` chunk payload.
    ///
    /// Consumes exactly six bytes; anything beyond them is ignored.
    ///
    /// # Errors
    /// - [`ParseError::OutOfBounds`] if fewer than six bytes are present.
    /// - [`ParseError::InvalidFormat`] if the format word is not 0, 1 or 2.
    pub fn read(payload: &[u8]) -> ParseResult<Self> {
        if payload.len() < Self::LEN as usize {
            return Err(ParseError::OutOfBounds);
        }
        let word = |i: usize| u16::from_be_bytes([payload[i], payload[i + 1]]);

        let raw = word(0);
        let format = Format::try_from(raw).map_err(|_| ParseError::InvalidFormat(raw))?;

        Ok(Self {
            format,
            track_count: word(2),
            divisions: word(4),
        })
    }

    /// Append the six payload bytes to `out`.
    pub fn write_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&u16::from(self.format).to_be_bytes());
        out.extend_from_slice(&self.track_count.to_be_bytes());
        out.extend_from_slice(&self.divisions.to_be_bytes());
    }

    /// The track-relationship format.
    pub const fn format(&self) -> Format {
        self.format
    }

    /// The number of track chunks the file claims to hold.
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }

    /// The raw time-division word.
    pub const fn divisions(&self) -> u16 {
        self.divisions
    }
}
