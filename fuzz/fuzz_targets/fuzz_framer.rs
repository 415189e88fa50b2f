#![no_main]

use bytes::BytesMut;
use libfuzzer_sys::fuzz_target;
use packet_wire::{FrameKind, FrameTable, PacketFramer};
use tokio_util::codec::Decoder;

// Hostile streams may declare any length or opcode; the framer must either
// produce frames or fail with a typed error, never panic or over-read.
fuzz_target!(|data: &[u8]| {
    let mut table = FrameTable::new();
    table
        .register(0, FrameKind::Fixed(0))
        .register(1, FrameKind::Fixed(8))
        .register(2, FrameKind::Variable)
        .register(3, FrameKind::VariableShort);

    let mut framer = PacketFramer::new(table);
    let mut buf = BytesMut::from(data);
    while let Ok(Some(_)) = framer.decode(&mut buf) {}
});
