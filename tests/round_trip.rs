use midiwire::prelude::*;
use pretty_assertions::assert_eq;
use std::io::Cursor;

/// A two-track format-1 file, written out by hand.
#[rustfmt::skip]
fn sample_file_bytes() -> Vec<u8> {
    vec![
        // MThd: format 1, 2 tracks, 480 divisions
        b'M', b'T', b'h', b'd',
        0x00, 0x00, 0x00, 0x06,
        0x00, 0x01, 0x00, 0x02, 0x01, 0xE0,
        // MTrk 1: tempo, then end of track
        b'M', b'T', b'r', b'k',
        0x00, 0x00, 0x00, 0x0B,
        0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20,
        0x00, 0xFF, 0x2F, 0x00,
        // MTrk 2: notes with running status, sysex, end of track
        b'M', b'T', b'r', b'k',
        0x00, 0x00, 0x00, 0x16,
        0x00, 0x90, 60, 100,
        0x81, 0x40, 64, 100,            // two-byte delta, running status
        0x60, 0x80, 60, 0,
        0x00, 0xF0, 0x03, 0x7E, 0x7F, 0x09,
        0x00, 0xFF, 0x2F, 0x00,
    ]
}

fn read_all_chunks(bytes: &[u8]) -> Vec<Chunk> {
    let mut cursor = Cursor::new(bytes);
    let mut chunks = Vec::new();
    while let Some(chunk) = Chunk::read_or_eof(&mut cursor).unwrap() {
        chunks.push(chunk);
    }
    chunks
}

#[test]
fn chunk_stream_round_trips_byte_identically() {
    let bytes = sample_file_bytes();
    let chunks = read_all_chunks(&bytes);
    assert_eq!(chunks.len(), 3);

    let mut out = Vec::new();
    for chunk in &chunks {
        chunk.write_to(&mut out).unwrap();
    }
    assert_eq!(out, bytes);
}

#[test]
fn decoded_model_matches_the_wire() {
    let bytes = sample_file_bytes();
    let chunks = read_all_chunks(&bytes);

    let header = chunks[0].header().unwrap();
    assert_eq!(header.format(), Format::MultiTrackSimultaneous);
    assert_eq!(header.track_count(), 2);
    assert_eq!(header.divisions(), 480);

    let tempo_track = chunks[1].track().unwrap();
    assert_eq!(tempo_track.len(), 2);
    assert!(tempo_track.messages()[0].event().is_meta_event());

    let note_track = chunks[2].track().unwrap();
    assert_eq!(note_track.len(), 5);
    assert_eq!(note_track.messages()[1].delta_ticks().value(), 192);
    let Event::Channel(second_note) = note_track.messages()[1].event() else {
        panic!("expected a channel event");
    };
    assert!(second_note.inherits_status());
    assert!(note_track.messages()[3].event().is_sysex_event());
    assert!(note_track.messages()[4].event().is_end_of_track());
}

#[test]
fn whole_file_round_trips() {
    let bytes = sample_file_bytes();
    let file = MidiFile::read_from(&mut Cursor::new(&bytes)).unwrap();

    assert_eq!(file.tracks().len(), 2);

    let mut out = Vec::new();
    file.write_to(&mut out).unwrap();
    assert_eq!(out, bytes);
}

#[test]
fn file_built_in_memory_survives_a_round_trip() {
    let mut track = Track::new();
    track.push(Message::new(0u32, ChannelEvent::new(0x91, [67, 90])));
    track.push(Message::new(300u32, ChannelEvent::new(0x81, [67, 0])));
    track.push(Message::new(0u32, MetaEvent::end_of_track()));

    let file = MidiFile::new(
        Header::new(Format::SingleTrack, 1, 96),
        vec![track.clone()],
    );

    let mut bytes = Vec::new();
    file.write_to(&mut bytes).unwrap();

    let decoded = MidiFile::read_from(&mut Cursor::new(&bytes)).unwrap();
    assert_eq!(decoded.tracks()[0], track);
    assert_eq!(decoded, file);
}
