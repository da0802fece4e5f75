#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Edge-case tests for the header reader and packet decoding
//! Covers absent regions, short buffers, boundary lengths and trailing data

use packet_header::core::header::{read_length, try_read_length, HeaderView, PacketHeader};
use packet_header::core::packet::Packet;
use packet_header::error::PacketError;
use packet_header::{packet, MAX_PACKET_SIZE};

// ============================================================================
// HEADER READER
// ============================================================================

#[test]
fn test_length_300_little_endian() {
    let region = 300u16.to_le_bytes();
    assert_eq!(read_length(Some(&region[..])).unwrap(), 300);
    // The same bytes read big-endian would be 11265; the layout is LE.
    assert_ne!(u16::from_be_bytes(region), 300);
}

#[test]
fn test_absent_region_indistinguishable_from_zero_length() {
    let empty = packet![].to_bytes();
    assert_eq!(read_length(None).unwrap(), 0);
    assert_eq!(
        read_length(None).unwrap(),
        read_length(Some(empty.as_slice())).unwrap()
    );

    // Only the Option-returning reader can tell them apart.
    assert_eq!(try_read_length(None).unwrap(), None);
    assert_eq!(try_read_length(Some(empty.as_slice())).unwrap(), Some(0));
}

#[test]
fn test_boundary_lengths() {
    for v in [0u16, 1, 255, 256, u16::MAX] {
        let region = v.to_le_bytes();
        assert_eq!(read_length(Some(&region[..])).unwrap(), v);
    }
}

#[test]
fn test_header_read_ignores_payload_size() {
    // Declares 10 elements but carries none: the header read still succeeds.
    let region = [10u8, 0];
    assert_eq!(read_length(Some(&region[..])).unwrap(), 10);
    assert!(Packet::from_bytes(&region).is_err());
}

#[test]
fn test_max_packet_size_not_enforced_by_reader() {
    let over = (MAX_PACKET_SIZE as u16 + 1).to_le_bytes();
    assert_eq!(
        read_length(Some(&over[..])).unwrap() as usize,
        MAX_PACKET_SIZE + 1
    );
}

#[test]
fn test_empty_and_single_byte_regions() {
    for region in [&[][..], &[0x01][..]] {
        match read_length(Some(region)) {
            Err(PacketError::Truncated { needed: 2, available }) => {
                assert_eq!(available, region.len())
            }
            other => panic!("Unexpected result: {other:?}"),
        }
    }
}

#[test]
fn test_header_view_on_foreign_buffer() {
    let mut buf = PacketHeader::new(2).to_bytes().to_vec();
    buf.extend_from_slice(&(-1i32).to_le_bytes());
    buf.extend_from_slice(&i32::MAX.to_le_bytes());

    let view = HeaderView::new(&buf).expect("header present");
    assert_eq!(view.length(), 2);
    assert_eq!(view.elements().collect::<Vec<_>>(), vec![-1, i32::MAX]);
}

// ============================================================================
// PACKET DECODING
// ============================================================================

#[test]
fn test_packet_empty_buffer() {
    assert!(matches!(
        Packet::from_bytes(&[]),
        Err(PacketError::Truncated {
            needed: 2,
            available: 0
        })
    ));
}

#[test]
fn test_packet_partial_element() {
    let mut bytes = packet![1, 2].to_bytes();
    bytes.pop();
    match Packet::from_bytes(&bytes) {
        Err(PacketError::Truncated { needed, available }) => {
            assert_eq!(needed, 10);
            assert_eq!(available, 9);
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_packet_max_length_roundtrip() {
    let packet = Packet::filled(-3, u16::MAX);
    let bytes = packet.to_bytes();
    assert_eq!(bytes.len(), 2 + 4 * u16::MAX as usize);
    assert_eq!(read_length(Some(bytes.as_slice())).unwrap(), u16::MAX);

    let decoded = Packet::from_bytes(&bytes).expect("Should decode max length");
    assert_eq!(decoded, packet);
}

#[test]
fn test_packet_serde_rejects_oversized() {
    let packet = packet![1, 2, 3];
    let text = toml::to_string(&Wrapper { packet }).expect("serialize");
    let back: Wrapper = toml::from_str(&text).expect("deserialize");
    assert_eq!(back.packet.data(), &[1, 2, 3]);

    let too_long = vec![0; u16::MAX as usize + 1];
    let err = Packet::try_from(too_long).unwrap_err();
    assert_eq!(err, PacketError::OversizedPacket(u16::MAX as usize + 1));
}

#[derive(serde::Serialize, serde::Deserialize)]
struct Wrapper {
    packet: Packet,
}
