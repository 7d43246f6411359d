#![doc = r#"
Chunk framing: the length-prefixed container around headers and tracks.

# Overview

A file is a sequence of chunks. Each chunk is a 4-byte ASCII type tag, a
32-bit big-endian payload length, and exactly that many payload bytes. Two
tags exist:

- `MThd` — the six-byte [`Header`] record.
- `MTrk` — a [`Track`](crate::Track) payload of delta-timed messages.

Decoding reads the tag and length, pulls the whole payload off the stream
(continuing across partial reads) and only then hands it to the matching
payload decoder. Encoding mirrors this: tag, length, payload bytes.

A track chunk keeps the length it declared on the wire separately from the
length its messages re-encode to. The two differ when a source file padded
bytes after its end-of-track event; those bytes are dropped on decode, but
a chunk built from an in-memory track always recomputes a matching length.
"#]

mod header;
pub use header::*;

use std::io::{self, Read, Write};

use crate::{ChunkError, ChunkResult, Track};

/// The type tag of a header chunk.
pub const HEADER_TAG: [u8; 4] = *b"MThd";

/// The type tag of a track chunk.
pub const TRACK_TAG: [u8; 4] = *b"MTrk";

#[doc = r#"
One decoded chunk: a header or a track.

Which variant is live is determined solely by the 4-byte type tag read
from (or written to) the wire.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// An `MThd` chunk.
    Header(Header),
    /// An `MTrk` chunk.
    Track {
        /// The length field as read from, or destined for, the wire.
        declared_len: u32,
        /// The decoded message sequence.
        track: Track,
    },
}

impl Chunk {
    /// Frame a track, declaring the length its messages encode to.
    pub fn from_track(track: Track) -> Self {
        Self::Track {
            declared_len: track.byte_len(),
            track,
        }
    }

    /// Frame a track under an explicit declared length, preserving a
    /// length field taken from elsewhere (typically a source file).
    pub fn from_track_with_len(declared_len: u32, track: Track) -> Self {
        Self::Track {
            declared_len,
            track,
        }
    }

    /// Decode the next chunk from `reader`.
    ///
    /// Reads the tag and length, then exactly `length` payload bytes,
    /// retrying partial reads until the count is satisfied.
    ///
    /// # Errors
    /// - [`ChunkError::InvalidChunkType`] if the tag is neither `MThd` nor
    ///   `MTrk`.
    /// - [`ChunkError::ZeroLength`] if the declared length is zero.
    /// - [`ChunkError::TruncatedStream`] if the stream ends early,
    ///   including at the tag itself.
    /// - [`ChunkError::Io`] for unrecoverable read failures.
    /// - [`ChunkError::Parse`] if the payload bytes do not decode.
    pub fn read_from<R: Read>(reader: &mut R) -> ChunkResult<Self> {
        Self::read_or_eof(reader)?.ok_or(ChunkError::TruncatedStream {
            expected: 4,
            read: 0,
        })
    }

    /// Decode the next chunk, or return `Ok(None)` on a clean end of
    /// stream (no tag bytes at all).
    pub fn read_or_eof<R: Read>(reader: &mut R) -> ChunkResult<Option<Self>> {
        let mut tag = [0u8; 4];
        match fill_exact(reader, &mut tag)? {
            0 => return Ok(None),
            4 => {}
            read => {
                return Err(ChunkError::TruncatedStream { expected: 4, read });
            }
        }
        if tag != HEADER_TAG && tag != TRACK_TAG {
            return Err(ChunkError::InvalidChunkType(tag));
        }

        let mut len_buf = [0u8; 4];
        let read = fill_exact(reader, &mut len_buf)?;
        if read < len_buf.len() {
            return Err(ChunkError::TruncatedStream { expected: 4, read });
        }
        let length = u32::from_be_bytes(len_buf);
        if length == 0 {
            return Err(ChunkError::ZeroLength);
        }
        log::trace!(
            "chunk `{}` declares {length} payload byte(s)",
            tag.escape_ascii()
        );

        let mut payload = vec![0u8; length as usize];
        let read = fill_exact(reader, &mut payload)?;
        if read < payload.len() {
            log::warn!("stream ended {} byte(s) into a {length}-byte chunk payload", read);
            return Err(ChunkError::TruncatedStream {
                expected: length,
                read,
            });
        }

        if tag == HEADER_TAG {
            Ok(Some(Self::Header(Header::read(&payload)?)))
        } else {
            Ok(Some(Self::Track {
                declared_len: length,
                track: Track::read(&payload)?,
            }))
        }
    }

    /// Encode the chunk to `writer`: tag, declared length, payload.
    ///
    /// Write errors propagate directly; encoding has no other failure
    /// mode.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            Self::Header(header) => write_header_chunk(writer, header),
            Self::Track {
                declared_len,
                track,
            } => write_track_chunk(writer, *declared_len, track),
        }
    }

    /// True for header chunks.
    pub const fn is_header(&self) -> bool {
        matches!(self, Self::Header(_))
    }

    /// True for track chunks.
    pub const fn is_track(&self) -> bool {
        matches!(self, Self::Track { .. })
    }

    /// The 4-byte type tag this chunk writes.
    pub const fn tag(&self) -> [u8; 4] {
        match self {
            Self::Header(_) => HEADER_TAG,
            Self::Track { .. } => TRACK_TAG,
        }
    }

    /// The length field this chunk writes.
    pub const fn declared_len(&self) -> u32 {
        match self {
            Self::Header(_) => Header::LEN,
            Self::Track { declared_len, .. } => *declared_len,
        }
    }

    /// The header record, if this is a header chunk.
    pub const fn header(&self) -> Option<&Header> {
        match self {
            Self::Header(header) => Some(header),
            Self::Track { .. } => None,
        }
    }

    /// The track, if this is a track chunk.
    pub const fn track(&self) -> Option<&Track> {
        match self {
            Self::Track { track, .. } => Some(track),
            Self::Header(_) => None,
        }
    }

    /// Consume the chunk, keeping its track if it has one.
    pub fn into_track(self) -> Option<Track> {
        match self {
            Self::Track { track, .. } => Some(track),
            Self::Header(_) => None,
        }
    }
}

impl From<Header> for Chunk {
    fn from(header: Header) -> Self {
        Self::Header(header)
    }
}

impl From<Track> for Chunk {
    fn from(track: Track) -> Self {
        Self::from_track(track)
    }
}

pub(crate) fn write_header_chunk<W: Write>(writer: &mut W, header: &Header) -> io::Result<()> {
    writer.write_all(&HEADER_TAG)?;
    writer.write_all(&Header::LEN.to_be_bytes())?;
    let mut payload = Vec::with_capacity(Header::LEN as usize);
    header.write_into(&mut payload);
    writer.write_all(&payload)
}

pub(crate) fn write_track_chunk<W: Write>(
    writer: &mut W,
    declared_len: u32,
    track: &Track,
) -> io::Result<()> {
    writer.write_all(&TRACK_TAG)?;
    writer.write_all(&declared_len.to_be_bytes())?;
    let mut payload = Vec::with_capacity(declared_len as usize);
    track.write_into(&mut payload);
    writer.write_all(&payload)
}

/// Read into `buf` until it is full or the stream ends, retrying partial
/// reads. Returns the byte count actually delivered; it is only less than
/// `buf.len()` at end of stream.
fn fill_exact<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
