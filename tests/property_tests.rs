//! Property-based tests using proptest
//!
//! These tests validate codec invariants across a wide range of randomly
//! generated inputs, ensuring robust behavior under all conditions.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use bytes::BytesMut;
use packet_wire::{
    ByteOrder, FrameKind, FrameTable, Packet, PacketFramer, PacketReader, PacketWriter, ValueType,
};
use proptest::prelude::*;
use tokio_util::codec::{Decoder, Encoder};

fn any_value_type() -> impl Strategy<Value = ValueType> {
    prop_oneof![
        Just(ValueType::Standard),
        Just(ValueType::AddBias),
        Just(ValueType::Negate),
        Just(ValueType::SubBias),
    ]
}

fn any_wide_order() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::Big), Just(ByteOrder::Little)]
}

fn any_int_order() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![
        Just(ByteOrder::Big),
        Just(ByteOrder::Little),
        Just(ByteOrder::Middle),
        Just(ByteOrder::InverseMiddle),
    ]
}

// Property: every supported write/read pair is an exact round trip
proptest! {
    #[test]
    fn prop_u16_round_trip(value in any::<u16>(), ty in any_value_type(), order in any_wide_order()) {
        let mut writer = PacketWriter::new();
        writer.write_u16(value, ty, order).expect("write");
        let wire = writer.finish().expect("finish");

        let mut reader = PacketReader::new(wire);
        prop_assert_eq!(reader.read_u16(ty, order).expect("read"), value);
    }
}

proptest! {
    #[test]
    fn prop_u32_round_trip(value in any::<u32>(), ty in any_value_type(), order in any_int_order()) {
        let mut writer = PacketWriter::new();
        writer.write_u32(value, ty, order).expect("write");
        let wire = writer.finish().expect("finish");

        let mut reader = PacketReader::new(wire);
        prop_assert_eq!(reader.read_u32(ty, order).expect("read"), value);
    }
}

proptest! {
    #[test]
    fn prop_i64_round_trip(value in any::<i64>(), ty in any_value_type(), order in any_wide_order()) {
        let mut writer = PacketWriter::new();
        writer.write_i64(value, ty, order).expect("write");
        let wire = writer.finish().expect("finish");

        let mut reader = PacketReader::new(wire);
        prop_assert_eq!(reader.read_i64(ty, order).expect("read"), value);
    }
}

// Property: mixed field sequences drain in write order
proptest! {
    #[test]
    fn prop_field_sequence_round_trip(
        a in any::<u8>(),
        b in any::<i16>(),
        c in any::<u32>(),
        d in any::<i64>(),
        ty in any_value_type(),
    ) {
        let mut writer = PacketWriter::new();
        writer.write_u8(a, ty).expect("u8");
        writer.write_i16(b, ty, ByteOrder::Little).expect("i16");
        writer.write_u32(c, ty, ByteOrder::InverseMiddle).expect("u32");
        writer.write_i64(d, ty, ByteOrder::Big).expect("i64");
        let wire = writer.finish().expect("finish");

        let mut reader = PacketReader::new(wire);
        prop_assert_eq!(reader.read_u8(ty).expect("u8"), a);
        prop_assert_eq!(reader.read_i16(ty, ByteOrder::Little).expect("i16"), b);
        prop_assert_eq!(reader.read_u32(ty, ByteOrder::InverseMiddle).expect("u32"), c);
        prop_assert_eq!(reader.read_i64(ty, ByteOrder::Big).expect("i64"), d);
        prop_assert_eq!(reader.remaining(), 0);
    }
}

// Property: strings round-trip as long as they avoid the terminator byte
proptest! {
    #[test]
    fn prop_string_round_trip(s in "[ -~]{0,256}") {
        let mut writer = PacketWriter::new();
        writer.write_string(&s).expect("write");
        let wire = writer.finish().expect("finish");
        prop_assert_eq!(wire.len(), s.len() + 1);

        let mut reader = PacketReader::new(wire);
        prop_assert_eq!(reader.read_string().expect("read"), s);
    }
}

// Property: growth never corrupts earlier content, whatever the start size
proptest! {
    #[test]
    fn prop_growth_preserves_content(
        initial in 0usize..32,
        payload in prop::collection::vec(any::<u8>(), 0..2048),
    ) {
        let mut writer = PacketWriter::with_capacity(initial);
        writer.write_bytes(&payload).expect("write");
        let wire = writer.finish().expect("finish");
        prop_assert_eq!(&wire[..], &payload[..]);
    }
}

// Property: bit runs pack to the documented width and round the cursor up
proptest! {
    #[test]
    fn prop_bit_runs_occupy_exact_bytes(widths in prop::collection::vec(0usize..=32, 1..40)) {
        let mut writer = PacketWriter::new();
        writer.set_access(packet_wire::AccessMode::BitAddressed);
        for &width in &widths {
            writer.write_bits(width, u32::MAX).expect("bits");
        }
        writer.set_access(packet_wire::AccessMode::ByteAddressed);

        let total: usize = widths.iter().sum();
        prop_assert_eq!(writer.position(), (total + 7) / 8);
    }
}

// Property: framer encode/decode is lossless for registered opcodes
proptest! {
    #[test]
    fn prop_framed_packet_round_trip(
        opcode in 0u8..=255,
        body in prop::collection::vec(any::<u8>(), 0..512),
    ) {
        let mut table = FrameTable::new();
        table.register(opcode, FrameKind::VariableShort);
        let mut framer = PacketFramer::new(table);

        let mut buf = BytesMut::new();
        framer
            .encode(Packet::new(opcode, bytes::Bytes::from(body.clone())), &mut buf)
            .expect("encode");

        let decoded = framer.decode(&mut buf).expect("decode").expect("complete");
        prop_assert_eq!(decoded.opcode, opcode);
        prop_assert_eq!(&decoded.body[..], &body[..]);
        prop_assert_eq!(buf.len(), 0);
    }
}

// Property: arbitrary byte soup never panics the reader
proptest! {
    #[test]
    fn prop_reader_never_panics(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut reader = PacketReader::from_slice(&data);
        let _ = reader.read_u32(ValueType::AddBias, ByteOrder::Middle);
        let _ = reader.read_u16(ValueType::Negate, ByteOrder::Little);
        let _ = reader.read_string();
        let _ = reader.read_bytes_reverse(8, ValueType::SubBias);
        let _ = reader.read_u64(ValueType::Standard, ByteOrder::Big);
    }
}
