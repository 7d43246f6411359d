#[doc = r#"
A channel event: a status byte in `0x80..=0xEF` and exactly two data bytes.

A status of [`ChannelEvent::RUNNING_STATUS`] (zero) marks the running-status
form: the event was decoded without a status byte of its own and inherits
the most recent explicit channel status from its surrounding track. The
running-status form re-encodes as the two data bytes alone.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelEvent {
    status: u8,
    data: [u8; 2],
}

impl ChannelEvent {
    /// The sentinel status marking an event that inherits its status from
    /// running-status context.
    pub const RUNNING_STATUS: u8 = 0;

    /// Create a channel event with an explicit status byte.
    ///
    /// The status is stored as given; meaningful values lie in
    /// `0x80..=0xEF`, the high nibble selecting the voice/mode kind and the
    /// low nibble the channel.
    pub const fn new(status: u8, data: [u8; 2]) -> Self {
        Self { status, data }
    }

    /// Create the running-status form: two data bytes, no status of its own.
    pub const fn running(data: [u8; 2]) -> Self {
        Self {
            status: Self::RUNNING_STATUS,
            data,
        }
    }

    /// The stored status byte; [`ChannelEvent::RUNNING_STATUS`] for the
    /// running-status form.
    pub const fn status(&self) -> u8 {
        self.status
    }

    /// Both data bytes, in wire order.
    pub const fn data(&self) -> [u8; 2] {
        self.data
    }

    /// The channel from the status byte's low nibble, or `None` for the
    /// running-status form.
    pub const fn channel(&self) -> Option<u8> {
        if self.inherits_status() {
            None
        } else {
            Some(self.status & 0x0F)
        }
    }

    /// True if this event carries no status byte of its own.
    pub const fn inherits_status(&self) -> bool {
        self.status == Self::RUNNING_STATUS
    }

    /// Materialize an explicit status on the running-status form.
    ///
    /// Use this when lifting an event out of the track that supplied its
    /// context: the result re-encodes with the status byte spelled out.
    /// An event that already has an explicit status is returned unchanged.
    pub const fn resolve(self, status: u8) -> Self {
        if self.inherits_status() {
            Self {
                status,
                data: self.data,
            }
        } else {
            self
        }
    }

    /// Byte footprint of the encoded form: the two data bytes, plus the
    /// status byte when it is explicit.
    pub const fn encoded_len(&self) -> usize {
        if self.inherits_status() { 2 } else { 3 }
    }

    pub(crate) fn write_into(&self, out: &mut Vec<u8>) {
        if !self.inherits_status() {
            out.push(self.status);
        }
        out.extend_from_slice(&self.data);
    }
}
