#![no_main]

use libfuzzer_sys::fuzz_target;
use packet_wire::{ByteOrder, PacketReader, ValueType};

// Arbitrary byte soup must never panic the reader; every failure mode is a
// typed error.
fuzz_target!(|data: &[u8]| {
    let mut reader = PacketReader::from_slice(data);
    let _ = reader.read_u8(ValueType::AddBias);
    let _ = reader.read_i16(ValueType::SubBias, ByteOrder::Little);
    let _ = reader.read_u32(ValueType::Negate, ByteOrder::Middle);
    let _ = reader.read_u32(ValueType::Standard, ByteOrder::InverseMiddle);
    let _ = reader.read_string();
    let _ = reader.read_bytes_reverse(data.len(), ValueType::Negate);
    let _ = reader.read_i64(ValueType::Standard, ByteOrder::Big);
    let _ = reader.read_bytes(reader.remaining(), ValueType::AddBias);
});
