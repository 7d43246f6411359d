use thiserror::Error;

#[doc = r#"
An error produced while decoding the bytes inside a chunk payload.

Payload-level failures are terminal for the event or chunk being decoded;
the codec never retries and never yields a partially built value.
"#]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The status byte begins none of the three event shapes and no running
    /// status is in effect.
    #[error("status byte {0:#04X} does not begin any event and no running status is in effect")]
    InvalidEventType(u8),
    /// The header's format word is not 0, 1 or 2.
    #[error("unknown header format {0}")]
    InvalidFormat(u16),
    /// The payload ended before the field being decoded was complete.
    #[error("read past the end of the chunk payload")]
    OutOfBounds,
}

#[doc = r#"
An error produced while framing a chunk against a byte stream.

Covers the container layer on top of [`ParseError`]: the 4-byte type tag,
the 32-bit big-endian length field and the raw payload read.
"#]
#[derive(Debug, Error)]
pub enum ChunkError {
    /// The 4-byte type tag is neither `MThd` nor `MTrk`.
    #[error("invalid chunk type tag `{}`", .0.escape_ascii())]
    InvalidChunkType([u8; 4]),
    /// The chunk declares a zero-length payload.
    #[error("chunk declares a zero-length payload")]
    ZeroLength,
    /// The stream ended before the declared byte count was satisfied.
    #[error("stream ended after {read} of {expected} byte(s)")]
    TruncatedStream {
        /// Bytes the field or payload called for.
        expected: u32,
        /// Bytes actually delivered before end of stream.
        read: usize,
    },
    /// An unrecoverable read or write failure from the underlying stream.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
    /// The payload bytes did not decode.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[doc = r#"
An error produced while assembling a whole file from its chunks.
"#]
#[derive(Debug, Error)]
pub enum FileError {
    /// The stream ended without an `MThd` chunk.
    #[error("no header chunk found")]
    NoHeader,
    /// A second `MThd` chunk appeared.
    #[error("more than one header chunk found")]
    DuplicateHeader,
    /// A chunk failed to decode.
    #[error(transparent)]
    Chunk(#[from] ChunkError),
}

/// The payload-decode result type (see [`ParseError`])
pub type ParseResult<T> = Result<T, ParseError>;

/// The chunk-framing result type (see [`ChunkError`])
pub type ChunkResult<T> = Result<T, ChunkError>;
