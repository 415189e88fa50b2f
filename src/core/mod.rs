//! # Core Codec Components
//!
//! Low-level packet buffers, value ciphers, and stream framing.
//!
//! This module provides the foundation of the wire protocol: typed reads
//! and writes against a packet buffer, the obfuscation transforms each
//! field byte may carry, and the frame codec that splits packets off a
//! byte stream.
//!
//! ## Components
//! - **Transform**: the four per-byte value ciphers
//! - **Order**: the four byte-order emission sequences
//! - **Access**: byte/bit addressing state shared by both buffer types
//! - **Reader/Writer**: the per-packet buffer types
//! - **Packet/Codec**: the framed unit and its stream codec
//!
//! ## Wire Format
//! ```text
//! [Opcode(1)] [Length(0|1|2)] [Body(N), possibly bit-packed sub-regions]
//! ```
//!
//! ## Safety
//! - Declared lengths are validated before allocation
//! - Readers fail on exhaustion rather than wrapping or hanging
//! - One buffer per in-flight packet; instances are never shared

pub mod access;
pub mod codec;
pub mod order;
pub mod packet;
pub mod reader;
pub mod transform;
pub mod writer;
