use std::io::{self, Read, Write};

use crate::{
    FileError, Track,
    chunk::{Chunk, Header, write_header_chunk, write_track_chunk},
};

#[doc = r#"
A whole file: one [`Header`] and its [`Track`]s, in stream order.

This is the model a playback component traverses. The codec itself stops
here: no scheduling, no timing interpretation, no device I/O.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidiFile {
    header: Header,
    tracks: Vec<Track>,
}

impl MidiFile {
    /// Assemble a file from parts.
    pub fn new(header: Header, tracks: Vec<Track>) -> Self {
        Self { header, tracks }
    }

    /// Decode a file by reading chunks until a clean end of stream.
    ///
    /// Exactly one header chunk must appear; it need not come first.
    /// A mismatch between the header's track count and the track chunks
    /// actually present is tolerated (files in the wild disagree) but
    /// logged.
    ///
    /// # Errors
    /// [`FileError::NoHeader`], [`FileError::DuplicateHeader`], or any
    /// [`ChunkError`](crate::ChunkError) from a chunk that fails to
    /// decode.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, FileError> {
        let mut header = None;
        let mut tracks = Vec::new();

        while let Some(chunk) = Chunk::read_or_eof(reader)? {
            match chunk {
                Chunk::Header(h) => {
                    if header.replace(h).is_some() {
                        return Err(FileError::DuplicateHeader);
                    }
                }
                Chunk::Track { track, .. } => tracks.push(track),
            }
        }

        let header = header.ok_or(FileError::NoHeader)?;
        if usize::from(header.track_count()) != tracks.len() {
            log::warn!(
                "header declares {} track(s) but the stream held {}",
                header.track_count(),
                tracks.len()
            );
        }
        Ok(Self { header, tracks })
    }

    /// Encode the file: the header chunk, then each track chunk with a
    /// recomputed length field.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write_header_chunk(writer, &self.header)?;
        for track in &self.tracks {
            write_track_chunk(writer, track.byte_len(), track)?;
        }
        Ok(())
    }

    /// The header record.
    pub const fn header(&self) -> &Header {
        &self.header
    }

    /// The tracks, in the order their chunks appeared.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Consume the file, keeping its tracks.
    pub fn into_tracks(self) -> Vec<Track> {
        self.tracks
    }
}
