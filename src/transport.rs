//! Transport
//!
//! Owns a connected byte stream and guarantees full-buffer reads and
//! writes. Partial I/O is normal at the socket level and handled here;
//! higher layers only ever see complete buffers.

use std::io::{self, Read, Write};

use crate::error::Result;

/// Full-buffer I/O over a connected byte stream
///
/// Short reads and writes are retried until the buffer is complete, and the
/// "interrupted, try again" signal is swallowed. Any other I/O error
/// surfaces immediately; the connection owning this transport must then be
/// considered dead.
#[derive(Debug)]
pub struct Transport<S> {
    stream: S,
}

impl<S: Read + Write> Transport<S> {
    /// Wrap an already-connected stream
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    /// Write the entire buffer
    pub fn send(&mut self, buf: &[u8]) -> Result<()> {
        let mut sent = 0;
        while sent < buf.len() {
            match self.stream.write(&buf[sent..]) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "stream refused to accept more bytes",
                    )
                    .into());
                }
                Ok(n) => sent += n,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        self.stream.flush()?;
        Ok(())
    }

    /// Fill the entire buffer
    pub fn recv_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.stream.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "stream closed mid-read",
                    )
                    .into());
                }
                Ok(n) => filled += n,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    /// Borrow the underlying stream
    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    /// Unwrap back into the underlying stream
    pub fn into_inner(self) -> S {
        self.stream
    }
}

// The protocol readers are generic over `Read`; delegating here lets them
// run directly on a transport without a second buffering layer.
impl<S: Read + Write> Read for Transport<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.read(buf)
    }
}

impl<S: Read + Write> Write for Transport<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stream.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stream.flush()
    }
}
