//! Codec throughput benchmarks
//!
//! Happy path encode/decode across message sizes, plus the rejection path to
//! confirm early validation failures stay cheap.

use codec::{Message, MessageCodec, SimpleMessageCodec, MAX_HEADERS_COUNT, MAX_PAYLOAD_BYTES};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Message with `headers` short header pairs and an ASCII payload
fn create_message(headers: usize, payload_len: usize) -> Message {
    let mut message: Message = (0..headers)
        .map(|i| (format!("X-Header-{i:02}"), format!("value-{i}")))
        .collect();
    message.payload = (0..payload_len).map(|i| b'a' + (i % 26) as u8).collect();
    message
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let codec = SimpleMessageCodec::new();

    for &(headers, payload_len) in &[(1, 64), (8, 4096), (MAX_HEADERS_COUNT, MAX_PAYLOAD_BYTES)] {
        let message = create_message(headers, payload_len);
        group.throughput(Throughput::Bytes(payload_len as u64));
        group.bench_with_input(
            BenchmarkId::new("headers_payload", format!("{headers}x{payload_len}")),
            &message,
            |b, message| {
                b.iter(|| {
                    let encoded = codec.encode(black_box(message));
                    black_box(encoded)
                });
            },
        );
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    let codec = SimpleMessageCodec::new();

    for &(headers, payload_len) in &[(1, 64), (8, 4096), (MAX_HEADERS_COUNT, MAX_PAYLOAD_BYTES)] {
        let encoded = match codec.encode(&create_message(headers, payload_len)) {
            Ok(bytes) => bytes,
            Err(err) => panic!("benchmark message must be valid: {err}"),
        };
        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("headers_payload", format!("{headers}x{payload_len}")),
            &encoded,
            |b, encoded| {
                b.iter(|| {
                    let decoded = codec.decode(black_box(encoded));
                    black_box(decoded)
                });
            },
        );
    }

    group.finish();
}

/// Rejections should not cost more than the checks that find them
fn bench_rejection_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("rejection_path");
    let codec = SimpleMessageCodec::new();

    let no_headers = create_message(0, 64);
    group.bench_function("encode_no_headers", |b| {
        b.iter(|| black_box(codec.encode(black_box(&no_headers))));
    });

    let truncated = vec![0x3F, 0x01, 0x01, b'a'];
    group.bench_function("decode_truncated", |b| {
        b.iter(|| black_box(codec.decode(black_box(&truncated))));
    });

    let mut non_ascii_tail = vec![b'a'; 64 * 1024];
    non_ascii_tail[0] = 0x00;
    non_ascii_tail.push(0xFF);
    group.bench_function("decode_non_ascii_tail", |b| {
        b.iter(|| black_box(codec.decode(black_box(&non_ascii_tail))));
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_rejection_path);
criterion_main!(benches);
