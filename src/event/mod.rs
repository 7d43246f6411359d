#![doc = r#"
Track event decoding and encoding.

# Overview

Every message in a track payload carries one event in one of three shapes,
discriminated by its first byte:

- `0xFF` — a meta event: a type byte, a VLQ byte count, then that many
  payload bytes.
- `0xF0` / `0xF7` — a system-exclusive event: a VLQ byte count, then that
  many payload bytes.
- `0x80..=0xEF` — a channel event: exactly two data bytes follow.

Any other first byte only decodes when the previous event in the track was
a channel event ("running status"): the byte is then the *first data byte*
of a channel event that reuses the previously active status, and the
decoded event stores the sentinel status `0` meaning "inherit from
context". Without running status such a byte is a decode failure.

Decoding is driven byte-by-byte from a payload slice; the caller advances
its cursor by [`Event::encoded_len`] afterwards, so nothing is parsed
twice.
"#]

mod channel;
pub use channel::*;

mod sysex;
pub use sysex::*;

mod meta;
pub use meta::*;

use crate::{ParseError, ParseResult, Vlq};

#[doc = r#"
One track event: channel, system-exclusive or meta.

Each variant owns its payload outright, so clones deep-copy buffers and
moves hand them over without bookkeeping.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A channel voice/mode event (two data bytes).
    Channel(ChannelEvent),
    /// A system-exclusive event (owned payload).
    Sysex(SysexEvent),
    /// A meta event (type byte plus owned payload).
    Meta(MetaEvent),
}

impl Event {
    /// Decode one event from the front of `bytes`.
    ///
    /// `running_status` states whether the previous event in the track was
    /// a channel event; it decides whether a first byte outside all three
    /// shapes is treated as running-status data or rejected.
    ///
    /// # Errors
    /// - [`ParseError::InvalidEventType`] if the first byte begins no shape
    ///   and running status does not apply.
    /// - [`ParseError::OutOfBounds`] if `bytes` ends mid-event.
    pub fn read(bytes: &[u8], running_status: bool) -> ParseResult<Self> {
        let (&status, rest) = bytes.split_first().ok_or(ParseError::OutOfBounds)?;

        match status {
            0xFF => {
                let (&meta_type, rest) = rest.split_first().ok_or(ParseError::OutOfBounds)?;
                let (length, data) = read_length_prefixed(rest)?;
                Ok(Self::Meta(MetaEvent::from_wire(meta_type, length, data)))
            }
            0xF0 | 0xF7 => {
                let (length, data) = read_length_prefixed(rest)?;
                Ok(Self::Sysex(SysexEvent::from_wire(status, length, data)))
            }
            0x80..=0xEF => match rest {
                [first, second, ..] => Ok(Self::Channel(ChannelEvent::new(
                    status,
                    [*first, *second],
                ))),
                _ => Err(ParseError::OutOfBounds),
            },
            _ if running_status => {
                // the byte already read is the first data byte
                let (&second, _) = rest.split_first().ok_or(ParseError::OutOfBounds)?;
                Ok(Self::Channel(ChannelEvent::running([status, second])))
            }
            _ => {
                log::warn!("status byte {status:#04X} begins no event and running status is off");
                Err(ParseError::InvalidEventType(status))
            }
        }
    }

    /// Append the encoded form to `out`.
    ///
    /// The running-status form of a channel event emits its two data bytes
    /// only; everything else leads with its status byte.
    pub fn write_into(&self, out: &mut Vec<u8>) {
        match self {
            Self::Channel(evt) => evt.write_into(out),
            Self::Sysex(evt) => evt.write_into(out),
            Self::Meta(evt) => evt.write_into(out),
        }
    }

    /// True for channel events, explicit or running-status.
    pub const fn is_channel_event(&self) -> bool {
        matches!(self, Self::Channel(_))
    }

    /// True for system-exclusive events.
    pub const fn is_sysex_event(&self) -> bool {
        matches!(self, Self::Sysex(_))
    }

    /// True for meta events.
    pub const fn is_meta_event(&self) -> bool {
        matches!(self, Self::Meta(_))
    }

    /// True for the meta event that terminates a track (type `0x2F`).
    pub const fn is_end_of_track(&self) -> bool {
        match self {
            Self::Meta(evt) => evt.is_end_of_track(),
            _ => false,
        }
    }

    /// Byte footprint of the encoded form, used to advance a decode cursor
    /// without re-parsing.
    pub const fn encoded_len(&self) -> usize {
        match self {
            Self::Channel(evt) => evt.encoded_len(),
            Self::Sysex(evt) => evt.encoded_len(),
            Self::Meta(evt) => evt.encoded_len(),
        }
    }
}

/// Read a VLQ byte count and the payload slice it prefixes.
fn read_length_prefixed(bytes: &[u8]) -> ParseResult<(Vlq, &[u8])> {
    let length = Vlq::read(bytes)?;
    let rest = &bytes[length.encoded_len()..];
    let data = rest
        .get(..length.value() as usize)
        .ok_or(ParseError::OutOfBounds)?;
    Ok((length, data))
}

impl From<ChannelEvent> for Event {
    fn from(value: ChannelEvent) -> Self {
        Self::Channel(value)
    }
}

impl From<SysexEvent> for Event {
    fn from(value: SysexEvent) -> Self {
        Self::Sysex(value)
    }
}

impl From<MetaEvent> for Event {
    fn from(value: MetaEvent) -> Self {
        Self::Meta(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn encode(event: &Event) -> Vec<u8> {
        let mut out = Vec::new();
        event.write_into(&mut out);
        out
    }

    #[test]
    fn channel_event_round_trip() {
        let bytes = [0x90, 60, 100];
        let event = Event::read(&bytes, false).unwrap();

        assert!(event.is_channel_event());
        assert!(!event.is_sysex_event());
        assert!(!event.is_meta_event());
        assert_eq!(event.encoded_len(), 3);
        assert_eq!(encode(&event), bytes);
    }

    #[test]
    fn running_status_inherits() {
        // second message of a pair whose first carried status 0x90: the
        // leading byte is already data
        let bytes = [64, 90];
        let event = Event::read(&bytes, true).unwrap();

        let Event::Channel(evt) = &event else {
            panic!("expected a channel event");
        };
        assert!(evt.inherits_status());
        assert_eq!(evt.data(), [64, 90]);
        assert_eq!(event.encoded_len(), 2);
        // re-encoding the running-status form emits data bytes only
        assert_eq!(encode(&event), bytes);
    }

    #[test]
    fn data_byte_without_running_status_is_rejected() {
        let err = Event::read(&[64, 90], false).unwrap_err();
        assert_eq!(err, ParseError::InvalidEventType(64));
    }

    #[test]
    fn system_status_outside_shapes_is_rejected() {
        let err = Event::read(&[0xF4, 0x00], false).unwrap_err();
        assert_eq!(err, ParseError::InvalidEventType(0xF4));
    }

    #[test]
    fn meta_event_round_trip() {
        // tempo: FF 51 03 tt tt tt
        let bytes = [0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20];
        let event = Event::read(&bytes, false).unwrap();

        let Event::Meta(evt) = &event else {
            panic!("expected a meta event");
        };
        assert_eq!(evt.meta_type(), 0x51);
        assert_eq!(evt.length().value(), 3);
        assert_eq!(evt.data(), [0x07, 0xA1, 0x20]);
        assert!(!evt.is_end_of_track());
        assert_eq!(event.encoded_len(), bytes.len());
        assert_eq!(encode(&event), bytes);
    }

    #[test]
    fn sysex_event_round_trip() {
        let bytes = [0xF0, 0x04, 0x7E, 0x7F, 0x09, 0x01];
        let event = Event::read(&bytes, false).unwrap();

        let Event::Sysex(evt) = &event else {
            panic!("expected a sysex event");
        };
        assert_eq!(evt.status(), 0xF0);
        assert_eq!(evt.length().value(), 4);
        assert_eq!(event.encoded_len(), bytes.len());
        assert_eq!(encode(&event), bytes);
    }

    #[test]
    fn empty_meta_payload() {
        let bytes = [0xFF, 0x2F, 0x00];
        let event = Event::read(&bytes, false).unwrap();
        assert!(event.is_end_of_track());
        assert_eq!(event.encoded_len(), 3);
        assert_eq!(encode(&event), bytes);
    }

    #[test]
    fn truncated_payload_is_out_of_bounds() {
        // meta claims 5 payload bytes, only 2 present
        let err = Event::read(&[0xFF, 0x01, 0x05, b'h', b'i'], false).unwrap_err();
        assert_eq!(err, ParseError::OutOfBounds);

        // channel event cut after its first data byte
        let err = Event::read(&[0x90, 60], false).unwrap_err();
        assert_eq!(err, ParseError::OutOfBounds);

        let err = Event::read(&[], false).unwrap_err();
        assert_eq!(err, ParseError::OutOfBounds);
    }

    #[test]
    fn predicates_are_mutually_exclusive() {
        let events = [
            Event::from(ChannelEvent::new(0xC5, [1, 0])),
            Event::from(SysexEvent::new(0xF7, vec![0x01])),
            Event::from(MetaEvent::end_of_track()),
        ];
        for event in &events {
            let flags = [
                event.is_channel_event(),
                event.is_sysex_event(),
                event.is_meta_event(),
            ];
            assert_eq!(flags.iter().filter(|f| **f).count(), 1);
        }
    }
}
