//! Word Codec Tests
//!
//! Tests for length-prefix and word encoding/decoding.

use std::io::Cursor;

use bytes::BytesMut;
use rosapi::protocol::{
    decode_length, encode_length, encode_word, read_word, MAX_WORD_SIZE,
};
use rosapi::RosError;

// =============================================================================
// Length Prefix Tests
// =============================================================================

#[test]
fn test_prefix_width_boundaries() {
    // (length, expected prefix width)
    let cases = [
        (0x00, 1),
        (0x7F, 1),
        (0x80, 2),
        (0x3FFF, 2),
        (0x4000, 3),
        (0x1F_FFFF, 3),
        (0x20_0000, 4),
        (0xFFF_FFFF, 4),
        (0x1000_0000, 5),
        (0xFFFF_FFFF, 5),
    ];

    for (length, width) in cases {
        let (_, n) = encode_length(length);
        assert_eq!(n, width, "length 0x{:X} took {} prefix bytes", length, n);
    }
}

#[test]
fn test_prefix_exact_bytes() {
    let (prefix, n) = encode_length(0x7F);
    assert_eq!(&prefix[..n], &[0x7F]);

    let (prefix, n) = encode_length(0x80);
    assert_eq!(&prefix[..n], &[0x80, 0x80]);

    let (prefix, n) = encode_length(0x4000);
    assert_eq!(&prefix[..n], &[0xC0, 0x40, 0x00]);

    let (prefix, n) = encode_length(0x20_0000);
    assert_eq!(&prefix[..n], &[0xE0, 0x20, 0x00, 0x00]);

    let (prefix, n) = encode_length(0x1000_0000);
    assert_eq!(&prefix[..n], &[0xF0, 0x10, 0x00, 0x00, 0x00]);
}

#[test]
fn test_length_roundtrip_at_boundaries() {
    let lengths = [
        0u32,
        1,
        0x7F,
        0x80,
        0x3FFF,
        0x4000,
        0x1F_FFFF,
        0x20_0000,
        0xFFF_FFFF,
        0x1000_0000,
        0xFFFF_FFFF,
    ];

    for length in lengths {
        let (prefix, n) = encode_length(length);
        let decoded = decode_length(&mut Cursor::new(&prefix[..n])).unwrap();
        assert_eq!(decoded, length, "length 0x{:X} did not roundtrip", length);
    }
}

#[test]
fn test_ambiguous_prefix_rejected() {
    for first in [0xF1u8, 0xF8, 0xFF] {
        let result = decode_length(&mut Cursor::new(vec![first, 0, 0, 0, 0]));
        assert!(
            matches!(result, Err(RosError::Protocol(_))),
            "first byte 0x{:02X} must be rejected",
            first
        );
    }
}

// =============================================================================
// Word Tests
// =============================================================================

#[test]
fn test_word_roundtrip_short() {
    let mut buf = BytesMut::new();
    let written = encode_word(&mut buf, b"/interface/print").unwrap();
    assert_eq!(written, 1 + 16);

    let word = read_word(&mut Cursor::new(buf.to_vec()), MAX_WORD_SIZE).unwrap();
    assert_eq!(word, b"/interface/print");
}

#[test]
fn test_word_roundtrip_two_byte_prefix() {
    let payload = vec![b'x'; 0x1234];
    let mut buf = BytesMut::new();
    let written = encode_word(&mut buf, &payload).unwrap();
    assert_eq!(written, 2 + payload.len());

    let word = read_word(&mut Cursor::new(buf.to_vec()), MAX_WORD_SIZE).unwrap();
    assert_eq!(word, payload);
}

#[test]
fn test_word_roundtrip_three_byte_prefix() {
    let payload = vec![0xAB; 0x4001];
    let mut buf = BytesMut::new();
    let written = encode_word(&mut buf, &payload).unwrap();
    assert_eq!(written, 3 + payload.len());

    let word = read_word(&mut Cursor::new(buf.to_vec()), MAX_WORD_SIZE).unwrap();
    assert_eq!(word, payload);
}

#[test]
fn test_empty_word_roundtrip() {
    let mut buf = BytesMut::new();
    let written = encode_word(&mut buf, &[]).unwrap();
    assert_eq!(written, 1);
    assert_eq!(&buf[..], &[0x00]);

    let word = read_word(&mut Cursor::new(vec![0x00]), MAX_WORD_SIZE).unwrap();
    assert!(word.is_empty());
}

#[test]
fn test_word_not_utf8_is_preserved() {
    let payload = vec![0x00, 0xFF, 0xFE, 0x80];
    let mut buf = BytesMut::new();
    encode_word(&mut buf, &payload).unwrap();

    let word = read_word(&mut Cursor::new(buf.to_vec()), MAX_WORD_SIZE).unwrap();
    assert_eq!(word, payload);
}

#[test]
fn test_encode_oversize_word_fails_cleanly() {
    let payload = vec![0u8; MAX_WORD_SIZE + 1];
    let mut buf = BytesMut::new();

    let result = encode_word(&mut buf, &payload);
    assert!(matches!(result, Err(RosError::WordTooLong { .. })));
    // failed encode must not leave partial bytes behind
    assert!(buf.is_empty());
}

#[test]
fn test_read_word_enforces_limit() {
    let mut buf = BytesMut::new();
    encode_word(&mut buf, &vec![b'a'; 100]).unwrap();

    let result = read_word(&mut Cursor::new(buf.to_vec()), 10);
    assert!(matches!(
        result,
        Err(RosError::WordTooLong { length: 100, limit: 10 })
    ));
}

#[test]
fn test_read_word_truncated_payload() {
    // declares 5 bytes, delivers 2
    let result = read_word(&mut Cursor::new(vec![0x05, b'a', b'b']), MAX_WORD_SIZE);
    assert!(matches!(result, Err(RosError::Io(_))));
}

#[test]
fn test_read_word_truncated_prefix() {
    // 0xF0 demands 4 more bytes, delivers 1
    let result = read_word(&mut Cursor::new(vec![0xF0, 0x01]), MAX_WORD_SIZE);
    assert!(matches!(result, Err(RosError::Io(_))));
}
