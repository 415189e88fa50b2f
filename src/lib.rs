//! # packet-wire
//!
//! Obfuscated binary packet codec core for client/server game protocols.
//!
//! The crate implements the buffer layer a game protocol stack sits on:
//! typed primitives (bytes, shorts, ints, longs, strings, raw runs and
//! sub-byte bit fields) written to and read from per-packet byte stores,
//! with the wire format's obfuscation conventions — per-byte value ciphers
//! and non-standard byte orders — built into every primitive.
//!
//! ## Layers
//! - [`core::transform`] / [`core::order`]: the cipher and byte-order
//!   families every multi-byte primitive composes
//! - [`core::writer`] / [`core::reader`]: growable write buffers with
//!   deferred-length framing and bit-addressed writes; fixed read buffers
//! - [`core::packet`] / [`core::codec`]: the framed packet unit and a
//!   `tokio_util` codec for carrying it over byte streams
//!
//! ## Example
//! ```
//! use packet_wire::{ByteOrder, PacketReader, PacketWriter, ValueType};
//!
//! # fn main() -> packet_wire::Result<()> {
//! let mut out = PacketWriter::new();
//! out.write_u16(4000, ValueType::AddBias, ByteOrder::Little)?;
//! out.write_string("hello")?;
//! let wire = out.finish()?;
//!
//! let mut inb = PacketReader::new(wire);
//! assert_eq!(inb.read_u16(ValueType::AddBias, ByteOrder::Little)?, 4000);
//! assert_eq!(inb.read_string()?, "hello");
//! # Ok(())
//! # }
//! ```
//!
//! ## Scope
//! The codec accepts a backing byte store and a cursor, and exposes typed
//! primitives; callers supply field order and semantics. Opcode dispatch,
//! per-packet field layouts, and socket I/O live in the surrounding
//! protocol stack, not here.

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::core::access::AccessMode;
pub use crate::core::codec::{FrameKind, FrameTable, PacketFramer};
pub use crate::core::order::ByteOrder;
pub use crate::core::packet::Packet;
pub use crate::core::reader::PacketReader;
pub use crate::core::transform::ValueType;
pub use crate::core::writer::PacketWriter;
pub use crate::error::{ProtocolError, Result};
