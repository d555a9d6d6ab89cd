//! Shared test helpers
//!
//! A scripted in-memory stream standing in for the router side of a
//! connection, plus builders for wire-format byte sequences.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{Cursor, Read, Write};
use std::rc::Rc;

use bytes::BytesMut;
use rosapi::protocol::encode_word;

/// In-memory bidirectional stream: reads from a pre-scripted buffer,
/// collects writes for later inspection.
#[derive(Debug)]
pub struct ScriptedStream {
    input: Cursor<Vec<u8>>,
    written: Rc<RefCell<Vec<u8>>>,
}

impl ScriptedStream {
    /// Build a stream that will yield `input`, plus a handle to everything
    /// written into it.
    pub fn new(input: Vec<u8>) -> (Self, Rc<RefCell<Vec<u8>>>) {
        let written = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                input: Cursor::new(input),
                written: Rc::clone(&written),
            },
            written,
        )
    }
}

impl Read for ScriptedStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.input.read(buf)
    }
}

impl Write for ScriptedStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.written.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Append one word to a wire buffer
pub fn put_word(buf: &mut BytesMut, payload: &[u8]) {
    encode_word(buf, payload).unwrap();
}

/// Append one full sentence (words + empty terminator) to a wire buffer
pub fn put_sentence(buf: &mut BytesMut, words: &[&str]) {
    for word in words {
        encode_word(buf, word.as_bytes()).unwrap();
    }
    encode_word(buf, &[]).unwrap();
}

/// Wire bytes of a successful login exchange for the given challenge
pub fn login_script(challenge_hex: &str) -> Vec<u8> {
    let mut buf = BytesMut::new();
    let ret = format!("=ret={}", challenge_hex);
    put_sentence(&mut buf, &["!done", &ret]);
    put_sentence(&mut buf, &["!done"]);
    buf.to_vec()
}
