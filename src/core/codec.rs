//! Frame codec for packets over byte streams.
//!
//! Splits complete `[opcode][length?][body]` frames off an inbound byte
//! stream and emits them on the outbound one, via the `tokio_util`
//! [`Decoder`]/[`Encoder`] traits so it can sit directly inside a `Framed`
//! transport.
//!
//! The codec has no opinion about what opcodes mean. Whether a packet
//! carries a length field at all — and how wide it is — is dictated by a
//! caller-supplied [`FrameTable`]; field layouts inside the body belong to
//! the opcode-specific encoder/decoder pairs on either end.

use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};
use tracing::trace;

use crate::config::{WireConfig, MAX_FRAME_LEN};
use crate::core::packet::Packet;
use crate::error::{ProtocolError, Result};

/// How a packet's wire length is carried for a given opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// The body is always exactly this many bytes; no length field.
    Fixed(usize),
    /// A one-byte length field precedes the body.
    Variable,
    /// A two-byte big-endian length field precedes the body.
    VariableShort,
}

/// Caller-supplied schema mapping each opcode to its frame kind.
///
/// Unregistered opcodes are malformed traffic and fail decoding; the
/// transport decides what to do with the connection.
#[derive(Clone)]
pub struct FrameTable {
    kinds: [Option<FrameKind>; 256],
}

impl FrameTable {
    pub fn new() -> Self {
        Self { kinds: [None; 256] }
    }

    /// Registers `opcode` as carrying `kind` frames, replacing any earlier
    /// registration.
    pub fn register(&mut self, opcode: u8, kind: FrameKind) -> &mut Self {
        self.kinds[usize::from(opcode)] = Some(kind);
        self
    }

    pub fn get(&self, opcode: u8) -> Option<FrameKind> {
        self.kinds[usize::from(opcode)]
    }
}

impl Default for FrameTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrameTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registered = self.kinds.iter().filter(|k| k.is_some()).count();
        f.debug_struct("FrameTable")
            .field("registered", &registered)
            .finish()
    }
}

/// Splits and emits packet frames over a byte stream.
pub struct PacketFramer {
    table: FrameTable,
    max_frame_len: usize,
}

impl PacketFramer {
    /// Creates a framer with the default frame length ceiling.
    pub fn new(table: FrameTable) -> Self {
        Self {
            table,
            max_frame_len: MAX_FRAME_LEN,
        }
    }

    /// Creates a framer honoring the configured frame length ceiling.
    pub fn with_config(table: FrameTable, config: &WireConfig) -> Self {
        Self {
            table,
            max_frame_len: config.max_frame_len,
        }
    }
}

impl Decoder for PacketFramer {
    type Item = Packet;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Packet>> {
        if src.is_empty() {
            return Ok(None);
        }

        let opcode = src[0];
        let kind = self
            .table
            .get(opcode)
            .ok_or(ProtocolError::UnknownOpcode(opcode))?;

        let (header_len, body_len) = match kind {
            FrameKind::Fixed(len) => (1, len),
            FrameKind::Variable => {
                if src.len() < 2 {
                    return Ok(None);
                }
                (2, usize::from(src[1]))
            }
            FrameKind::VariableShort => {
                if src.len() < 3 {
                    return Ok(None);
                }
                (3, usize::from(u16::from_be_bytes([src[1], src[2]])))
            }
        };

        // Validate the declared length before waiting for (or allocating) it.
        if body_len > self.max_frame_len {
            return Err(ProtocolError::OversizedFrame(body_len));
        }

        if src.len() < header_len + body_len {
            src.reserve(header_len + body_len - src.len());
            return Ok(None);
        }

        let mut frame = src.split_to(header_len + body_len);
        frame.advance(header_len);
        trace!(opcode, len = body_len, "decoded packet frame");
        Ok(Some(Packet::new(opcode, frame.freeze())))
    }
}

impl Encoder<Packet> for PacketFramer {
    type Error = ProtocolError;

    fn encode(&mut self, packet: Packet, dst: &mut BytesMut) -> Result<()> {
        let kind = self
            .table
            .get(packet.opcode)
            .ok_or(ProtocolError::UnknownOpcode(packet.opcode))?;
        let body_len = packet.len();

        match kind {
            FrameKind::Fixed(len) => {
                if body_len != len {
                    return Err(ProtocolError::FrameLengthMismatch {
                        opcode: packet.opcode,
                        expected: len,
                        actual: body_len,
                    });
                }
                dst.reserve(1 + body_len);
                dst.put_u8(packet.opcode);
            }
            FrameKind::Variable => {
                if body_len > usize::from(u8::MAX) {
                    return Err(ProtocolError::LengthOverflow {
                        length: body_len,
                        width: 1,
                    });
                }
                dst.reserve(2 + body_len);
                dst.put_u8(packet.opcode);
                dst.put_u8(body_len as u8);
            }
            FrameKind::VariableShort => {
                if body_len > usize::from(u16::MAX) {
                    return Err(ProtocolError::LengthOverflow {
                        length: body_len,
                        width: 2,
                    });
                }
                dst.reserve(3 + body_len);
                dst.put_u8(packet.opcode);
                dst.put_u16(body_len as u16);
            }
        }
        dst.extend_from_slice(&packet.body);
        trace!(opcode = packet.opcode, len = body_len, "encoded packet frame");
        Ok(())
    }
}
