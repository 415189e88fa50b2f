//! The unit the codec exchanges with the transport.

use bytes::Bytes;

use crate::core::reader::PacketReader;

/// A complete wire packet: the opcode that names its field schema, and the
/// frozen body those fields live in.
///
/// The framer consumes the opcode (and any length field) off the stream, so
/// a decoder handed a [`reader`](Self::reader) starts at the first body
/// field — the same position its peer's encoder started writing at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub opcode: u8,
    pub body: Bytes,
}

impl Packet {
    pub fn new(opcode: u8, body: Bytes) -> Self {
        Self { opcode, body }
    }

    /// Body length in bytes.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// A reader positioned at the start of the body. Cloning the underlying
    /// store is cheap; the bytes themselves are shared.
    pub fn reader(&self) -> PacketReader {
        PacketReader::new(self.body.clone())
    }
}
