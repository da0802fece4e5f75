#![no_main]

use libfuzzer_sys::fuzz_target;
use packet_header::{read_length, Packet};

fuzz_target!(|data: &[u8]| {
    // Header reads must agree with full decoding whenever decoding succeeds
    let length = read_length(Some(data));
    if let Ok(packet) = Packet::from_bytes(data) {
        assert_eq!(length.ok(), Some(packet.len()));
    }
});
