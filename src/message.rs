use crate::{Vlq, event::Event};

#[doc = r#"
A delta-time paired with the event it precedes.

The delta is the tick count since the previous message in the same track
(zero for the first). The pairing is immutable once built; clones
deep-copy the event's payload.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    delta_ticks: Vlq,
    event: Event,
}

impl Message {
    /// Pair a delta-time with an event.
    pub fn new(delta_ticks: impl Into<Vlq>, event: impl Into<Event>) -> Self {
        Self {
            delta_ticks: delta_ticks.into(),
            event: event.into(),
        }
    }

    /// Ticks since the previous message in the track.
    pub const fn delta_ticks(&self) -> Vlq {
        self.delta_ticks
    }

    /// The event this delta leads to.
    pub const fn event(&self) -> &Event {
        &self.event
    }

    /// Consume the message, keeping its event.
    pub fn into_event(self) -> Event {
        self.event
    }

    /// Byte footprint of the encoded form: delta field plus event.
    pub const fn encoded_len(&self) -> usize {
        self.delta_ticks.encoded_len() + self.event.encoded_len()
    }

    /// Append the delta bytes and then the event bytes to `out`.
    pub fn write_into(&self, out: &mut Vec<u8>) {
        self.delta_ticks.write_into(out);
        self.event.write_into(out);
    }
}
