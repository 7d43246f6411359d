use crate::{Message, ParseResult, Vlq, event::Event};

#[doc = r#"
An ordered sequence of [`Message`]s, as carried by one `MTrk` payload.

Order is temporal: each message's delta counts from the one before it, and
encoding replays the messages in exactly the order they were appended.

# Decoding

[`Track::read`] walks the payload one message at a time: a delta-time VLQ,
then one event. The running-status flag starts false, becomes true after
every channel event (explicit or inherited) and false after anything else,
which is what lets a status-less data byte resolve to a channel event.

Decoding stops at whichever comes first: the end of the payload, or an
end-of-track meta event (type `0x2F`). The end-of-track message itself is
kept; any declared bytes after it are never read.
"#]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Track {
    messages: Vec<Message>,
}

impl Track {
    /// Create an empty track.
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Decode a track from an `MTrk` chunk payload.
    ///
    /// # Errors
    /// Any [`ParseError`](crate::ParseError) from the delta or event being
    /// decoded; the track built so far is discarded.
    pub fn read(payload: &[u8]) -> ParseResult<Self> {
        let mut messages = Vec::new();
        let mut running_status = false;
        let mut cursor = 0usize;

        while cursor < payload.len() {
            let delta = Vlq::read(&payload[cursor..])?;
            cursor += delta.encoded_len();

            let event = Event::read(&payload[cursor..], running_status)?;
            cursor += event.encoded_len();
            running_status = event.is_channel_event();

            let end_of_track = event.is_end_of_track();
            messages.push(Message::new(delta, event));
            if end_of_track {
                break;
            }
        }

        Ok(Self { messages })
    }

    /// Append the encoded form of every message, in order, to `out`.
    pub fn write_into(&self, out: &mut Vec<u8>) {
        for message in &self.messages {
            message.write_into(out);
        }
    }

    /// The encoded byte count of the whole message sequence.
    ///
    /// This is the value a chunk's length field takes when the chunk is
    /// built from the track alone.
    pub fn byte_len(&self) -> u32 {
        self.messages
            .iter()
            .map(|message| message.encoded_len() as u32)
            .sum()
    }

    /// Append a message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// The messages, in temporal order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Iterate over the messages in temporal order.
    pub fn iter(&self) -> core::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// The number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True if the track holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl IntoIterator for Track {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a Track {
    type Item = &'a Message;
    type IntoIter = core::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl FromIterator<Message> for Track {
    fn from_iter<T: IntoIterator<Item = Message>>(iter: T) -> Self {
        Self {
            messages: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseError;
    use crate::event::ChannelEvent;
    use pretty_assertions::assert_eq;

    fn encode(track: &Track) -> Vec<u8> {
        let mut out = Vec::new();
        track.write_into(&mut out);
        out
    }

    #[test]
    fn mixed_events_round_trip() {
        #[rustfmt::skip]
        let payload = [
            0x00, 0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20,   // tempo
            0x00, 0xF0, 0x02, 0x7E, 0x7F,               // sysex
            0x00, 0x90, 60, 100,                        // note on
            0x60, 0x80, 60, 0,                          // note off
            0x00, 0xFF, 0x2F, 0x00,                     // end of track
        ];
        let track = Track::read(&payload).unwrap();

        assert_eq!(track.len(), 5);
        assert_eq!(track.byte_len() as usize, payload.len());
        assert_eq!(encode(&track), payload);
    }

    #[test]
    fn running_status_carries_across_messages() {
        #[rustfmt::skip]
        let payload = [
            0x00, 0x90, 60, 100,    // explicit note on
            0x10, 64, 100,          // running status: another note on
            0x10, 67, 100,          // still running
        ];
        let track = Track::read(&payload).unwrap();

        assert_eq!(track.len(), 3);
        let statuses: Vec<u8> = track
            .iter()
            .map(|msg| match msg.event() {
                Event::Channel(evt) => evt.status(),
                _ => panic!("expected channel events"),
            })
            .collect();
        assert_eq!(statuses, [0x90, ChannelEvent::RUNNING_STATUS, ChannelEvent::RUNNING_STATUS]);

        // the status-less forms re-encode without a status byte, so the
        // payload survives byte for byte
        assert_eq!(encode(&track), payload);
    }

    #[test]
    fn running_status_is_broken_by_meta_event() {
        #[rustfmt::skip]
        let payload = [
            0x00, 0x90, 60, 100,
            0x00, 0xFF, 0x06, 0x01, b'A',   // marker meta event
            0x00, 64, 100,                  // no running status anymore
        ];
        let err = Track::read(&payload).unwrap_err();
        assert_eq!(err, ParseError::InvalidEventType(64));
    }

    #[test]
    fn stops_at_end_of_track() {
        #[rustfmt::skip]
        let payload = [
            0x00, 0x90, 60, 100,
            0x00, 0xFF, 0x2F, 0x00,
            0xDE, 0xAD, 0xBE, 0xEF,     // trailing padding, never read
        ];
        let track = Track::read(&payload).unwrap();

        assert_eq!(track.len(), 2);
        assert!(track.messages().last().unwrap().event().is_end_of_track());
        // the padding is not part of the track's content
        assert_eq!(track.byte_len() as usize, payload.len() - 4);
    }

    #[test]
    fn empty_payload_yields_empty_track() {
        let track = Track::read(&[]).unwrap();
        assert!(track.is_empty());
        assert_eq!(track.byte_len(), 0);
    }

    #[test]
    fn truncated_event_fails() {
        // delta present, event cut off after the status byte
        let err = Track::read(&[0x00, 0x90, 60]).unwrap_err();
        assert_eq!(err, ParseError::OutOfBounds);
    }
}
