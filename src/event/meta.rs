use crate::Vlq;

#[doc = r#"
A meta event: the `0xFF` escape, a type byte, a [`Vlq`] byte count and an
exclusively owned payload.

As with [`SysexEvent`](crate::event::SysexEvent), the stored [`Vlq`] and
the payload always agree. The type byte selects the meaning of the payload;
the codec only interprets [`MetaEvent::END_OF_TRACK`], which terminates a
track's message sequence.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaEvent {
    meta_type: u8,
    length: Vlq,
    data: Vec<u8>,
}

impl MetaEvent {
    /// The meta type marking the logical end of a track.
    pub const END_OF_TRACK: u8 = 0x2F;

    /// Create a meta event owning `data`, deriving a minimal length field.
    pub fn new(meta_type: u8, data: Vec<u8>) -> Self {
        Self {
            meta_type,
            length: Vlq::new(data.len() as u32),
            data,
        }
    }

    /// The conventional empty-payload end-of-track event.
    pub fn end_of_track() -> Self {
        Self::new(Self::END_OF_TRACK, Vec::new())
    }

    /// Adopt a payload slice together with the length quantity it was
    /// decoded behind. The caller sizes the slice to the quantity's value.
    pub(crate) fn from_wire(meta_type: u8, length: Vlq, data: &[u8]) -> Self {
        debug_assert_eq!(length.value() as usize, data.len());
        Self {
            meta_type,
            length,
            data: data.to_vec(),
        }
    }

    /// The meta type byte.
    pub const fn meta_type(&self) -> u8 {
        self.meta_type
    }

    /// The payload byte count as a quantity.
    pub const fn length(&self) -> Vlq {
        self.length
    }

    /// The owned payload bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// True for the meta type that terminates a track.
    pub const fn is_end_of_track(&self) -> bool {
        self.meta_type == Self::END_OF_TRACK
    }

    /// Byte footprint of the encoded form: `0xFF`, the type byte, the
    /// length field and the payload.
    pub const fn encoded_len(&self) -> usize {
        2 + self.length.encoded_len() + self.length.value() as usize
    }

    pub(crate) fn write_into(&self, out: &mut Vec<u8>) {
        out.push(0xFF);
        out.push(self.meta_type);
        self.length.write_into(out);
        out.extend_from_slice(&self.data);
    }
}
