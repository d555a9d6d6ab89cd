//! Benchmarks for the word codec

use std::io::Cursor;

use bytes::BytesMut;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rosapi::protocol::{encode_word, read_word, MAX_WORD_SIZE};

fn codec_benchmarks(c: &mut Criterion) {
    c.bench_function("encode short word", |b| {
        let mut buf = BytesMut::with_capacity(64);
        b.iter(|| {
            buf.clear();
            encode_word(&mut buf, black_box(b"=name=ether1")).unwrap();
        });
    });

    c.bench_function("encode two-byte-prefix word", |b| {
        let payload = vec![b'x'; 0x1000];
        let mut buf = BytesMut::with_capacity(0x1010);
        b.iter(|| {
            buf.clear();
            encode_word(&mut buf, black_box(&payload)).unwrap();
        });
    });

    c.bench_function("decode short word", |b| {
        let mut encoded = BytesMut::new();
        encode_word(&mut encoded, b"=name=ether1").unwrap();
        let encoded = encoded.to_vec();
        b.iter(|| {
            let mut cursor = Cursor::new(black_box(&encoded));
            read_word(&mut cursor, MAX_WORD_SIZE).unwrap()
        });
    });
}

criterion_group!(benches, codec_benchmarks);
criterion_main!(benches);
