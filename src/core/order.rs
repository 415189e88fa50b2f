//! Byte-order emission sequences.
//!
//! Each order defines, for a given field width, the sequence in which the
//! bytes of an integer hit the wire. Index 0 is the least-significant byte.
//! The middle orders exist only at 32 bits; requesting them at any other
//! width is an unsupported combination, never a silent fallback.

use crate::error::{ProtocolError, Result};

/// Order in which the bytes of a multi-byte value are emitted or consumed.
/// Also known as "endianness".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    Little,
    #[default]
    Big,
    Middle,
    InverseMiddle,
}

const BIG16: [usize; 2] = [1, 0];
const LITTLE16: [usize; 2] = [0, 1];
const BIG32: [usize; 4] = [3, 2, 1, 0];
const LITTLE32: [usize; 4] = [0, 1, 2, 3];
const MIDDLE32: [usize; 4] = [1, 0, 3, 2];
const INVERSE_MIDDLE32: [usize; 4] = [2, 3, 1, 0];
const BIG64: [usize; 8] = [7, 6, 5, 4, 3, 2, 1, 0];
const LITTLE64: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

impl ByteOrder {
    /// Resolves the emission sequence for a field of `width` bytes.
    ///
    /// The caller applies the field's [`ValueType`] to the **last** index in
    /// the returned sequence; every earlier byte travels untransformed.
    /// Fails before any byte of the field is produced or consumed.
    ///
    /// [`ValueType`]: crate::core::transform::ValueType
    pub(crate) fn sequence(self, width: usize) -> Result<&'static [usize]> {
        match (self, width) {
            (ByteOrder::Big, 2) => Ok(&BIG16),
            (ByteOrder::Little, 2) => Ok(&LITTLE16),
            (ByteOrder::Big, 4) => Ok(&BIG32),
            (ByteOrder::Little, 4) => Ok(&LITTLE32),
            (ByteOrder::Middle, 4) => Ok(&MIDDLE32),
            (ByteOrder::InverseMiddle, 4) => Ok(&INVERSE_MIDDLE32),
            (ByteOrder::Big, 8) => Ok(&BIG64),
            (ByteOrder::Little, 8) => Ok(&LITTLE64),
            (ByteOrder::Middle, _) => Err(ProtocolError::UnsupportedCombination(
                "middle-endian is only defined for 32-bit values",
            )),
            (ByteOrder::InverseMiddle, _) => Err(ProtocolError::UnsupportedCombination(
                "inverse-middle-endian is only defined for 32-bit values",
            )),
            _ => Err(ProtocolError::UnsupportedCombination(
                "unknown field width",
            )),
        }
    }
}
