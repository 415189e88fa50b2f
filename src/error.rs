//! # Error Types
//!
//! Comprehensive error handling for the packet codec.
//!
//! This module defines all error variants that can occur during codec
//! operations, from buffer exhaustion to misuse of the framing API.
//!
//! ## Error Categories
//! - **Combination Errors**: Byte-order/width pairs the wire format does not
//!   define, and bit-addressed reads
//! - **State Errors**: Byte-mode operations in bit mode and vice versa,
//!   framing marks opened or finished out of order
//! - **Bounds Errors**: Reads past the end of the backing store, bodies too
//!   long for their reserved length field
//! - **Configuration Errors**: Invalid or unreadable configuration
//!
//! All failures are synchronous and surfaced to the immediate caller; the
//! codec never retries, logs, or swallows an error. Recovering from a
//! malformed packet (usually by dropping the connection) is the transport
//! layer's job.

use crate::core::access::AccessMode;
use thiserror::Error;

/// Primary error type for all codec operations.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// A byte-order/width pair the wire format does not define, or a
    /// bit-addressed read.
    #[error("unsupported combination: {0}")]
    UnsupportedCombination(&'static str),

    /// A byte-mode operation was invoked in bit mode, or vice versa.
    #[error("operation requires {required:?} access, buffer is in {actual:?} access")]
    InvalidAccessMode {
        required: AccessMode,
        actual: AccessMode,
    },

    /// Bit count outside `0..=32` passed to a bit write.
    #[error("bit count out of range: {0} (must be between 0 and 32 inclusive)")]
    InvalidBitCount(usize),

    /// A read consumed past the end of the backing store.
    #[error("buffer exhausted: needed {requested} byte(s), {remaining} remaining")]
    BufferExhausted { requested: usize, remaining: usize },

    /// A variable-length header was finished with no matching open mark.
    #[error("no variable-length header is open")]
    MissingLengthMark,

    /// A variable-length header was opened while another is still open, or
    /// the buffer was finished with one unfinalized.
    #[error("a variable-length header is already open at position {0}")]
    LengthMarkOpen(usize),

    /// The open mark reserves a different length width than the finish call.
    #[error("variable-length header reserves {reserved} byte(s), finish expected {finished}")]
    LengthMarkMismatch { reserved: usize, finished: usize },

    /// A packet body too long for its reserved length field.
    #[error("packet body of {length} bytes does not fit a {width}-byte length field")]
    LengthOverflow { length: usize, width: usize },

    /// A frame whose declared length exceeds the configured maximum.
    #[error("frame body of {0} bytes exceeds the maximum frame length")]
    OversizedFrame(usize),

    /// No frame kind registered for the opcode.
    #[error("no frame kind registered for opcode {0}")]
    UnknownOpcode(u8),

    /// A fixed-size frame whose body length does not match its registration.
    #[error("opcode {opcode} is registered as {expected} byte(s), body is {actual}")]
    FrameLengthMismatch {
        opcode: u8,
        expected: usize,
        actual: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
