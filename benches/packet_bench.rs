use bytes::BytesMut;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use packet_header::{core::codec::PacketCodec, core::packet::Packet, read_length};
use tokio_util::codec::{Decoder, Encoder};

fn bench_read_length(c: &mut Criterion) {
    let region = Packet::new(300).to_bytes();
    c.bench_function("read_length", |b| {
        b.iter(|| read_length(black_box(Some(region.as_slice()))))
    });
}

#[allow(clippy::unwrap_used)]
fn bench_packet_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("packet_encode_decode");
    let lengths = [16u16, 256, 1024, u16::MAX];

    for &length in &lengths {
        let packet = Packet::filled(0x5A5A, length);
        group.throughput(Throughput::Bytes(packet.encoded_len() as u64));
        group.bench_function(format!("encode_{length}"), |b| {
            b.iter_batched(
                || packet.clone(),
                |p| {
                    let mut buf = BytesMut::with_capacity(p.encoded_len());
                    let mut codec = PacketCodec::unbounded();
                    codec.encode(p, &mut buf).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("decode_{length}"), |b| {
            let bytes = packet.to_bytes();
            b.iter_batched(
                || BytesMut::from(bytes.as_slice()),
                |mut buf| {
                    let mut codec = PacketCodec::unbounded();
                    assert!(codec.decode(&mut buf).unwrap().is_some());
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_read_length, bench_packet_encode_decode);
criterion_main!(benches);
