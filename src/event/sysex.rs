use crate::Vlq;

#[doc = r#"
A system-exclusive event: status `0xF0` or `0xF7`, a [`Vlq`] byte count and
an exclusively owned payload.

The stored [`Vlq`] and the payload always agree: `length.value()` equals
`data.len()`. Constructors enforce this, so the invariant holds for the
lifetime of the event. Cloning deep-copies the payload; moving transfers
ownership of it.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysexEvent {
    status: u8,
    length: Vlq,
    data: Vec<u8>,
}

impl SysexEvent {
    /// Create a sysex event owning `data`.
    ///
    /// The length field is derived from the payload, so it encodes
    /// minimally.
    pub fn new(status: u8, data: Vec<u8>) -> Self {
        Self {
            status,
            length: Vlq::new(data.len() as u32),
            data,
        }
    }

    /// Adopt a payload slice together with the length quantity it was
    /// decoded behind. The caller sizes the slice to the quantity's value.
    pub(crate) fn from_wire(status: u8, length: Vlq, data: &[u8]) -> Self {
        debug_assert_eq!(length.value() as usize, data.len());
        Self {
            status,
            length,
            data: data.to_vec(),
        }
    }

    /// The status byte, `0xF0` or `0xF7`.
    pub const fn status(&self) -> u8 {
        self.status
    }

    /// The payload byte count as a quantity.
    pub const fn length(&self) -> Vlq {
        self.length
    }

    /// The owned payload bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Byte footprint of the encoded form: status byte, length field and
    /// payload.
    pub const fn encoded_len(&self) -> usize {
        1 + self.length.encoded_len() + self.length.value() as usize
    }

    pub(crate) fn write_into(&self, out: &mut Vec<u8>) {
        out.push(self.status);
        self.length.write_into(out);
        out.extend_from_slice(&self.data);
    }
}
