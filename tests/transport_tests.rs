//! Transport Tests
//!
//! Tests for full-buffer send/recv behavior over imperfect streams.

use std::io::{self, Read, Write};

use rosapi::transport::Transport;
use rosapi::RosError;

/// Stream that delivers data in 1-byte reads and fails every other call
/// with `Interrupted`, the way a signal-hit syscall would.
struct InterruptingStream {
    data: Vec<u8>,
    pos: usize,
    interrupt_next: bool,
    written: Vec<u8>,
}

impl InterruptingStream {
    fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            pos: 0,
            interrupt_next: true,
            written: Vec::new(),
        }
    }
}

impl Read for InterruptingStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.interrupt_next {
            self.interrupt_next = false;
            return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
        }
        self.interrupt_next = true;

        if self.pos >= self.data.len() {
            return Ok(0);
        }
        buf[0] = self.data[self.pos];
        self.pos += 1;
        Ok(1)
    }
}

impl Write for InterruptingStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.interrupt_next {
            self.interrupt_next = false;
            return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
        }
        self.interrupt_next = true;

        // accept one byte at a time to force short writes
        self.written.push(buf[0]);
        Ok(1)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_recv_exact_survives_short_and_interrupted_reads() {
    let mut transport = Transport::new(InterruptingStream::new(b"abcdef".to_vec()));

    let mut buf = [0u8; 6];
    transport.recv_exact(&mut buf).unwrap();
    assert_eq!(&buf, b"abcdef");
}

#[test]
fn test_recv_exact_eof_mid_buffer() {
    let mut transport = Transport::new(InterruptingStream::new(b"ab".to_vec()));

    let mut buf = [0u8; 6];
    let result = transport.recv_exact(&mut buf);
    match result {
        Err(RosError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
        other => panic!("expected UnexpectedEof, got {:?}", other),
    }
}

#[test]
fn test_send_survives_short_and_interrupted_writes() {
    let mut transport = Transport::new(InterruptingStream::new(Vec::new()));

    transport.send(b"/login").unwrap();
    assert_eq!(transport.get_ref().written, b"/login");
}

#[test]
fn test_recv_exact_empty_buffer_is_noop() {
    let mut transport = Transport::new(InterruptingStream::new(Vec::new()));

    let mut buf = [0u8; 0];
    transport.recv_exact(&mut buf).unwrap();
}
