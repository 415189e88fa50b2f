//! Sequential typed reads over a fixed packet body.

use bytes::Bytes;

use crate::config::STRING_TERMINATOR;
use crate::core::access::{AccessMode, AccessState};
use crate::core::order::ByteOrder;
use crate::core::transform::ValueType;
use crate::error::{ProtocolError, Result};

/// Consumes a fixed-capacity byte store sequentially, producing typed
/// values.
///
/// A reader owns its backing store and never reallocates it; one reader is
/// created per inbound packet and dropped when its decoder finishes. Every
/// primitive applies the read half of the field's [`ValueType`] and, for
/// multi-byte fields, consumes bytes in the order's emission sequence —
/// mirroring exactly what [`PacketWriter`](crate::core::writer::PacketWriter)
/// produced.
///
/// Reading past the end of the store fails with
/// [`ProtocolError::BufferExhausted`]; the reader performs no recovery.
/// Bit-addressed reads are not supported — the wire format only packs bits
/// on the outbound path — and [`set_access`](Self::set_access) rejects
/// [`AccessMode::BitAddressed`].
#[derive(Debug, Clone)]
pub struct PacketReader {
    buf: Bytes,
    pos: usize,
    access: AccessState,
}

impl PacketReader {
    /// Creates a reader over the given backing store.
    pub fn new(buf: Bytes) -> Self {
        Self {
            buf,
            pos: 0,
            access: AccessState::default(),
        }
    }

    /// Creates a reader over a copy of the given bytes.
    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(data))
    }

    /// Switches the addressing mode.
    ///
    /// Only [`AccessMode::ByteAddressed`] is accepted; bit-addressed reads
    /// fail with [`ProtocolError::UnsupportedCombination`].
    pub fn set_access(&mut self, mode: AccessMode) -> Result<()> {
        match mode {
            AccessMode::ByteAddressed => Ok(()),
            AccessMode::BitAddressed => Err(ProtocolError::UnsupportedCombination(
                "bit-addressed reads are not supported",
            )),
        }
    }

    /// Current byte cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the end of the store.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The entire backing store, including already-consumed bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Advances the cursor without interpreting the skipped bytes.
    pub fn skip(&mut self, count: usize) -> Result<()> {
        if count > self.remaining() {
            return Err(ProtocolError::BufferExhausted {
                requested: count,
                remaining: self.remaining(),
            });
        }
        self.pos += count;
        Ok(())
    }

    fn take(&mut self) -> Result<u8> {
        match self.buf.get(self.pos) {
            Some(&b) => {
                self.pos += 1;
                Ok(b)
            }
            None => Err(ProtocolError::BufferExhausted {
                requested: 1,
                remaining: 0,
            }),
        }
    }

    /// Reads one byte through the cipher.
    pub fn read_u8(&mut self, ty: ValueType) -> Result<u8> {
        self.access.require(AccessMode::ByteAddressed)?;
        Ok(ty.decode(self.take()?))
    }

    /// Reads one byte through the cipher as a signed value.
    pub fn read_i8(&mut self, ty: ValueType) -> Result<i8> {
        Ok(self.read_u8(ty)? as i8)
    }

    /// Consumes `seq.len()` bytes, composing them per the emission sequence.
    /// The cipher rides the last byte consumed; earlier bytes are plain.
    fn read_sequence(&mut self, seq: &[usize], ty: ValueType) -> Result<u64> {
        let mut value = 0u64;
        for (i, &idx) in seq.iter().enumerate() {
            let byte_ty = if i + 1 == seq.len() {
                ty
            } else {
                ValueType::Standard
            };
            value |= u64::from(self.read_u8(byte_ty)?) << (8 * idx);
        }
        Ok(value)
    }

    /// Reads a 16-bit value in the given order.
    pub fn read_u16(&mut self, ty: ValueType, order: ByteOrder) -> Result<u16> {
        let seq = order.sequence(2)?;
        Ok(self.read_sequence(seq, ty)? as u16)
    }

    /// Reads a 16-bit value in the given order, sign-extended.
    pub fn read_i16(&mut self, ty: ValueType, order: ByteOrder) -> Result<i16> {
        Ok(self.read_u16(ty, order)? as i16)
    }

    /// Reads a 32-bit value in the given order.
    pub fn read_u32(&mut self, ty: ValueType, order: ByteOrder) -> Result<u32> {
        let seq = order.sequence(4)?;
        Ok(self.read_sequence(seq, ty)? as u32)
    }

    /// Reads a 32-bit value in the given order, sign-extended.
    pub fn read_i32(&mut self, ty: ValueType, order: ByteOrder) -> Result<i32> {
        Ok(self.read_u32(ty, order)? as i32)
    }

    /// Reads a 64-bit value in the given order.
    pub fn read_u64(&mut self, ty: ValueType, order: ByteOrder) -> Result<u64> {
        let seq = order.sequence(8)?;
        self.read_sequence(seq, ty)
    }

    /// Reads a 64-bit value in the given order, sign-extended.
    pub fn read_i64(&mut self, ty: ValueType, order: ByteOrder) -> Result<i64> {
        Ok(self.read_u64(ty, order)? as i64)
    }

    /// Reads a wire string: bytes up to (but excluding) the terminator.
    ///
    /// A store that ends before the terminator is malformed and fails with
    /// [`ProtocolError::BufferExhausted`].
    pub fn read_string(&mut self) -> Result<String> {
        let mut raw = Vec::new();
        loop {
            let b = self.read_u8(ValueType::Standard)?;
            if b == STRING_TERMINATOR {
                break;
            }
            raw.push(b);
        }
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }

    /// Reads `count` bytes, each through the cipher, advancing the cursor.
    pub fn read_bytes(&mut self, count: usize, ty: ValueType) -> Result<Vec<u8>> {
        let mut data = Vec::with_capacity(count);
        for _ in 0..count {
            data.push(self.read_u8(ty)?);
        }
        Ok(data)
    }

    /// Reads the next `count` bytes back-to-front **without advancing the
    /// cursor**: byte `cursor + count - 1` first, down to `cursor` last,
    /// each through the cipher.
    ///
    /// This is a peek; callers that want the region consumed must
    /// [`skip`](Self::skip) past it themselves.
    pub fn read_bytes_reverse(&self, count: usize, ty: ValueType) -> Result<Vec<u8>> {
        self.access.require(AccessMode::ByteAddressed)?;
        if count > self.remaining() {
            return Err(ProtocolError::BufferExhausted {
                requested: count,
                remaining: self.remaining(),
            });
        }
        Ok(self.buf[self.pos..self.pos + count]
            .iter()
            .rev()
            .map(|&b| ty.decode(b))
            .collect())
    }
}

impl From<Bytes> for PacketReader {
    fn from(buf: Bytes) -> Self {
        Self::new(buf)
    }
}
