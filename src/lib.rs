#![doc = r#"
Lossless codec for the Standard MIDI File container format.

# Overview

A file on the wire is a sequence of chunks: a 4-byte ASCII type tag, a
32-bit big-endian length, then that many payload bytes. The `MThd` payload
is a fixed six-byte [`Header`](chunk::Header); each `MTrk` payload is a
[`Track`] — delta-timed [`Message`]s whose [`Event`](event::Event)s come
in three shapes (channel, system-exclusive, meta), with lengths and
delta-times written as base-128 variable-length quantities ([`Vlq`]).

The crate decodes byte streams into that model and encodes the model back
out, byte-identically for well-formed input. It performs no synthesis, no
playback scheduling and no device I/O; a player consumes the decoded model
read-only.

# Example

```rust
use midiwire::prelude::*;
use std::io::Cursor;

let bytes: &[u8] = &[
    b'M', b'T', b'r', b'k',         // tag
    0x00, 0x00, 0x00, 0x0B,        // length: 11
    0x00, 0x90, 60, 100,           // note on
    0x60, 64, 100,                 // running status
    0x00, 0xFF, 0x2F, 0x00,        // end of track
];

let chunk = Chunk::read_from(&mut Cursor::new(bytes))?;
let track = chunk.track().unwrap();
assert_eq!(track.len(), 3);

let mut out = Vec::new();
chunk.write_to(&mut out)?;
assert_eq!(out, bytes);
# Ok::<(), Box<dyn std::error::Error>>(())
```

# Errors

Decoding failures are terminal for the chunk or event being processed and
never yield partially built values; see [`ChunkError`] and [`ParseError`].
Encoding can only fail on the underlying stream write.
"#]
#![warn(missing_docs)]

mod error;
pub use error::*;

mod vlq;
pub use vlq::*;

pub mod event;

mod message;
pub use message::*;

mod track;
pub use track::*;

pub mod chunk;

mod file;
pub use file::*;

/// Re-exports everything needed to decode and encode files.
pub mod prelude {
    pub use crate::{
        ChunkError, ChunkResult, FileError, MidiFile, ParseError, ParseResult,
        chunk::{Chunk, Format, HEADER_TAG, Header, TRACK_TAG},
        event::{ChannelEvent, Event, MetaEvent, SysexEvent},
        message::*,
        track::*,
        vlq::*,
    };
}
