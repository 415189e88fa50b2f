//! Typed appends into a growable packet buffer.

use bytes::{Bytes, BytesMut};

use crate::config::{DEFAULT_INITIAL_CAPACITY, STRING_TERMINATOR};
use crate::core::access::{AccessMode, AccessState, BIT_MASKS};
use crate::core::order::ByteOrder;
use crate::core::transform::ValueType;
use crate::error::{ProtocolError, Result};

/// An open variable-length header: where the length field lives and how
/// many bytes were reserved for it.
#[derive(Debug, Clone, Copy)]
struct LengthMark {
    at: usize,
    width: usize,
}

/// Appends typed values to a growable byte store.
///
/// A writer exclusively owns its store and is created per outbound packet:
/// write a header (plain or variable-length), write the body fields in the
/// order the peer's decoder expects, finalize any open length field, then
/// [`finish`](Self::finish) the store for the transport.
///
/// The store grows transparently. Any write that would pass the current
/// capacity at least doubles it first; bytes below the cursor and every
/// recorded offset survive reallocation unchanged.
///
/// Byte-granularity writes require [`AccessMode::ByteAddressed`]. Switching
/// to [`AccessMode::BitAddressed`] with [`set_access`](Self::set_access)
/// unlocks [`write_bits`](Self::write_bits) for packed sub-byte regions;
/// switching back rounds the cursor up to the next whole byte.
#[derive(Debug)]
pub struct PacketWriter {
    /// Zero-filled through the current capacity; `pos` tracks the written
    /// prefix.
    buf: BytesMut,
    pos: usize,
    access: AccessState,
    length_mark: Option<LengthMark>,
}

impl PacketWriter {
    /// Creates a writer with the default initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Creates a writer with the given initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::zeroed(capacity),
            pos: 0,
            access: AccessState::default(),
            length_mark: None,
        }
    }

    /// Current byte cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Current capacity of the backing store.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// The written prefix of the store.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// Switches the addressing mode, reconciling both cursors.
    ///
    /// Entering bit mode seeds the bit cursor at `byte_cursor * 8`; leaving
    /// it rounds the bit cursor up to the next whole byte.
    pub fn set_access(&mut self, mode: AccessMode) {
        match mode {
            AccessMode::BitAddressed => self.access.enter_bits(self.pos),
            AccessMode::ByteAddressed => self.pos = self.access.leave_bits(),
        }
    }

    /// Grows the store until it can hold `needed` bytes, at least doubling
    /// each time. Existing content and recorded offsets are preserved.
    fn grow_to(&mut self, needed: usize) {
        if needed <= self.buf.len() {
            return;
        }
        let mut capacity = self.buf.len().max(1);
        while capacity < needed {
            capacity *= 2;
        }
        self.buf.resize(capacity, 0);
    }

    fn ensure_capacity(&mut self, additional: usize) {
        self.grow_to(self.pos + additional);
    }

    /// Writes one byte through the cipher.
    pub fn write_u8(&mut self, value: u8, ty: ValueType) -> Result<()> {
        self.access.require(AccessMode::ByteAddressed)?;
        self.ensure_capacity(1);
        self.buf[self.pos] = ty.encode(value);
        self.pos += 1;
        Ok(())
    }

    /// Writes one signed byte through the cipher.
    pub fn write_i8(&mut self, value: i8, ty: ValueType) -> Result<()> {
        self.write_u8(value as u8, ty)
    }

    /// Emits `seq.len()` bytes of `value` per the emission sequence. The
    /// cipher rides the last byte written; earlier bytes are plain.
    fn write_sequence(&mut self, value: u64, seq: &[usize], ty: ValueType) -> Result<()> {
        for (i, &idx) in seq.iter().enumerate() {
            let byte_ty = if i + 1 == seq.len() {
                ty
            } else {
                ValueType::Standard
            };
            self.write_u8((value >> (8 * idx)) as u8, byte_ty)?;
        }
        Ok(())
    }

    /// Writes a 16-bit value in the given order.
    pub fn write_u16(&mut self, value: u16, ty: ValueType, order: ByteOrder) -> Result<()> {
        let seq = order.sequence(2)?;
        self.write_sequence(u64::from(value), seq, ty)
    }

    /// Writes a signed 16-bit value in the given order.
    pub fn write_i16(&mut self, value: i16, ty: ValueType, order: ByteOrder) -> Result<()> {
        self.write_u16(value as u16, ty, order)
    }

    /// Writes a 32-bit value in the given order.
    pub fn write_u32(&mut self, value: u32, ty: ValueType, order: ByteOrder) -> Result<()> {
        let seq = order.sequence(4)?;
        self.write_sequence(u64::from(value), seq, ty)
    }

    /// Writes a signed 32-bit value in the given order.
    pub fn write_i32(&mut self, value: i32, ty: ValueType, order: ByteOrder) -> Result<()> {
        self.write_u32(value as u32, ty, order)
    }

    /// Writes a 64-bit value in the given order.
    pub fn write_u64(&mut self, value: u64, ty: ValueType, order: ByteOrder) -> Result<()> {
        let seq = order.sequence(8)?;
        self.write_sequence(value, seq, ty)
    }

    /// Writes a signed 64-bit value in the given order.
    pub fn write_i64(&mut self, value: i64, ty: ValueType, order: ByteOrder) -> Result<()> {
        self.write_u64(value as u64, ty, order)
    }

    /// Writes a wire string: the raw bytes followed by the terminator.
    pub fn write_string(&mut self, s: &str) -> Result<()> {
        for &b in s.as_bytes() {
            self.write_u8(b, ValueType::Standard)?;
        }
        self.write_u8(STRING_TERMINATOR, ValueType::Standard)
    }

    /// Appends a run of raw bytes.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.access.require(AccessMode::ByteAddressed)?;
        self.ensure_capacity(data.len());
        self.buf[self.pos..self.pos + data.len()].copy_from_slice(data);
        self.pos += data.len();
        Ok(())
    }

    /// Appends a run of raw bytes in reverse order.
    pub fn write_bytes_reverse(&mut self, data: &[u8]) -> Result<()> {
        for &b in data.iter().rev() {
            self.write_u8(b, ValueType::Standard)?;
        }
        Ok(())
    }

    /// Writes a fixed-length packet header: the opcode byte.
    pub fn write_header(&mut self, opcode: u8) -> Result<()> {
        self.write_u8(opcode, ValueType::Standard)
    }

    /// Writes a variable-length packet header: the opcode byte plus a
    /// one-byte length placeholder. The matching
    /// [`finish_variable_header`](Self::finish_variable_header) patches the
    /// real length in once the body is written.
    pub fn write_variable_header(&mut self, opcode: u8) -> Result<()> {
        self.open_length_mark(opcode, 1)
    }

    /// Writes a variable-length packet header with a two-byte length
    /// placeholder, for bodies longer than 255 bytes. Finish with
    /// [`finish_variable_short_header`](Self::finish_variable_short_header).
    pub fn write_variable_short_header(&mut self, opcode: u8) -> Result<()> {
        self.open_length_mark(opcode, 2)
    }

    fn open_length_mark(&mut self, opcode: u8, width: usize) -> Result<()> {
        if let Some(mark) = self.length_mark {
            return Err(ProtocolError::LengthMarkOpen(mark.at));
        }
        self.write_header(opcode)?;
        let at = self.pos;
        for _ in 0..width {
            self.write_u8(0, ValueType::Standard)?;
        }
        self.length_mark = Some(LengthMark { at, width });
        Ok(())
    }

    /// Patches the body length into an open one-byte header placeholder.
    /// The cursor does not move.
    pub fn finish_variable_header(&mut self) -> Result<()> {
        self.close_length_mark(1)
    }

    /// Patches the body length into an open two-byte header placeholder.
    /// The cursor does not move.
    pub fn finish_variable_short_header(&mut self) -> Result<()> {
        self.close_length_mark(2)
    }

    fn close_length_mark(&mut self, width: usize) -> Result<()> {
        let mark = self.length_mark.ok_or(ProtocolError::MissingLengthMark)?;
        if mark.width != width {
            return Err(ProtocolError::LengthMarkMismatch {
                reserved: mark.width,
                finished: width,
            });
        }
        let length = self.pos - mark.at - width;
        match width {
            1 => {
                if length > usize::from(u8::MAX) {
                    return Err(ProtocolError::LengthOverflow { length, width });
                }
                self.buf[mark.at] = length as u8;
            }
            _ => {
                if length > usize::from(u16::MAX) {
                    return Err(ProtocolError::LengthOverflow { length, width });
                }
                self.buf[mark.at..mark.at + 2].copy_from_slice(&(length as u16).to_be_bytes());
            }
        }
        self.length_mark = None;
        Ok(())
    }

    /// Writes a single flag bit. Requires bit mode.
    pub fn write_bit(&mut self, flag: bool) -> Result<()> {
        self.write_bits(1, u32::from(flag))
    }

    /// Writes the low `count` bits of `value` at the bit cursor.
    ///
    /// Requires bit mode and `count <= 32`. The bit cursor advances by
    /// `count` up front so capacity planning sees the post-write position;
    /// the value is then merged into the store a partial byte at a time,
    /// high bits first, clearing each byte's target bits before oring the
    /// new ones in.
    pub fn write_bits(&mut self, count: usize, value: u32) -> Result<()> {
        self.access.require(AccessMode::BitAddressed)?;
        if count > 32 {
            return Err(ProtocolError::InvalidBitCount(count));
        }

        let mut byte_pos = self.access.bit_pos() >> 3;
        let mut bit_offset = 8 - (self.access.bit_pos() & 7);
        self.access.advance_bits(count);

        let needed = ((self.access.bit_pos() + 7) >> 3).max(byte_pos + 1);
        self.grow_to(needed);

        let mut count = count;
        while count > bit_offset {
            let mask = BIT_MASKS[bit_offset] as u8;
            let merged =
                (self.buf[byte_pos] & !mask) | ((value >> (count - bit_offset)) as u8 & mask);
            self.buf[byte_pos] = merged;
            byte_pos += 1;
            count -= bit_offset;
            bit_offset = 8;
        }
        if count == bit_offset {
            let mask = BIT_MASKS[count] as u8;
            self.buf[byte_pos] = (self.buf[byte_pos] & !mask) | (value as u8 & mask);
        } else {
            // Merge in u32: for count = 0 the shift equals bit_offset, which
            // can reach the full width of a byte.
            let mask = BIT_MASKS[count];
            let shift = bit_offset - count;
            let cleared = u32::from(self.buf[byte_pos]) & !(mask << shift);
            self.buf[byte_pos] = (cleared | ((value & mask) << shift)) as u8;
        }
        Ok(())
    }

    /// Freezes the written prefix into an immutable store for the transport.
    ///
    /// Leaves bit mode if necessary. Fails if a variable-length header is
    /// still open: an unfinalized length field means the packet is not
    /// complete.
    pub fn finish(mut self) -> Result<Bytes> {
        if self.access.mode() == AccessMode::BitAddressed {
            self.pos = self.access.leave_bits();
        }
        if let Some(mark) = self.length_mark {
            return Err(ProtocolError::LengthMarkOpen(mark.at));
        }
        self.buf.truncate(self.pos);
        Ok(self.buf.freeze())
    }
}

impl Default for PacketWriter {
    fn default() -> Self {
        Self::new()
    }
}
