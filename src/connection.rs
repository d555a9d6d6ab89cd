//! Connection Handler
//!
//! Owns the byte stream to one router and drives the request/reply
//! exchange over it. The protocol is strictly synchronous: exactly one
//! command may be outstanding at a time, which `&mut self` on the query
//! methods enforces at compile time.
//!
//! ## Login Handshake
//!
//! Authentication is the MD5 challenge-response exchange:
//!
//! 1. `/login` with no arguments; the router answers `!done` with a
//!    32-hex-character `ret` challenge.
//! 2. `/login` with `=name=<user>` and `=response=00<hex>` where the
//!    response is `md5(0x00 ++ password ++ challenge)` in lowercase hex.
//!
//! A `!trap` answer to the second step is an authentication failure; the
//! server-supplied `message` attribute is surfaced when present.

use std::io::{self, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use bytes::BytesMut;
use md5::{Digest, Md5};
use zeroize::Zeroizing;

use crate::config::ConnectConfig;
use crate::error::{Result, RosError};
use crate::protocol::{encode_word, read_reply, Reply, STATUS_DONE, STATUS_TRAP};
use crate::transport::Transport;
use crate::typed::{Interface, RegistrationEntry, SystemHealth, SystemResource};

/// An authenticated connection to one router
///
/// Generic over the stream type so the protocol can be driven over any
/// bidirectional byte stream; `TcpStream` is the one used in production.
/// Dropping the connection releases the stream.
#[derive(Debug)]
pub struct Connection<S = TcpStream> {
    transport: Transport<S>,
}

impl Connection<TcpStream> {
    /// Connect to a router and perform the login handshake
    ///
    /// Resolves the configured host, tries each candidate address in turn,
    /// and authenticates on the first stream that connects. Socket timeouts
    /// from the config are applied before the handshake.
    pub fn connect(config: &ConnectConfig, password: &str) -> Result<Self> {
        let stream = open_socket(&config.host, config.port)?;

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        if config.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))?;
        }
        if config.write_timeout_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(config.write_timeout_ms)))?;
        }

        Self::login(stream, &config.username, password)
    }
}

impl<S: Read + Write> Connection<S> {
    /// Perform the login handshake over an already-connected stream
    pub fn login(stream: S, username: &str, password: &str) -> Result<Self> {
        let mut connection = Self {
            transport: Transport::new(stream),
        };

        // Await challenge
        let reply = connection.query("/login", &[])?;
        let challenge = challenge_from_reply(&reply)?;

        let response = challenge_response(password, &challenge);
        let name_arg = format!("=name={}", username);
        let response_arg = format!("=response=00{}", response);

        // Await confirmation
        let reply = connection.query("/login", &[&name_arg, &response_arg])?;
        match reply.terminator().status() {
            STATUS_DONE => {
                tracing::debug!("Logged in as {}", username);
                Ok(connection)
            }
            STATUS_TRAP => {
                let message = reply
                    .terminator()
                    .attribute("message")
                    .unwrap_or("access denied");
                Err(RosError::AuthenticationFailed(message.to_string()))
            }
            other => Err(RosError::Protocol(format!(
                "Login reply terminated with unexpected status !{}",
                other
            ))),
        }
    }

    /// Execute a command and return its full reply
    ///
    /// The command travels as the first word, each argument verbatim as a
    /// subsequent word, then the empty terminator word. Arguments are
    /// expected pre-formatted (`=key=value`, `?query`, `.tag=...`). The
    /// reply is owned by the caller; a `!trap` reply is returned like any
    /// other and left for the caller to inspect.
    pub fn query(&mut self, command: &str, args: &[&str]) -> Result<Reply> {
        let request = encode_request(command, args)?;

        tracing::trace!("Sending {} ({} words)", command, args.len() + 1);
        self.transport.send(&request)?;

        read_reply(&mut self.transport)
    }

    /// Execute a command and hand the reply to a handler
    ///
    /// The reply is owned by this call: it is handed to the handler by
    /// reference and released when the call returns, on every path,
    /// including a handler error.
    pub fn query_with<T, F>(&mut self, command: &str, args: &[&str], handler: F) -> Result<T>
    where
        F: FnOnce(&Reply) -> Result<T>,
    {
        let reply = self.query(command, args)?;
        handler(&reply)
    }

    // =========================================================================
    // Typed Convenience Queries
    // =========================================================================

    /// Fetch `/interface/print` as typed records
    pub fn interfaces(&mut self) -> Result<Vec<Interface>> {
        let reply = self.checked_query("/interface/print")?;
        Ok(Interface::from_reply(&reply))
    }

    /// Fetch `/interface/wireless/registration-table/print` as typed records
    pub fn registration_table(&mut self) -> Result<Vec<RegistrationEntry>> {
        let reply = self.checked_query("/interface/wireless/registration-table/print")?;
        Ok(RegistrationEntry::from_reply(&reply))
    }

    /// Fetch `/system/resource/print` as a typed record
    pub fn system_resource(&mut self) -> Result<SystemResource> {
        let reply = self.checked_query("/system/resource/print")?;
        SystemResource::from_reply(&reply).ok_or_else(|| {
            RosError::Protocol("Resource reply carried no data sentence".to_string())
        })
    }

    /// Fetch `/system/health/print` as a typed record
    pub fn system_health(&mut self) -> Result<SystemHealth> {
        let reply = self.checked_query("/system/health/print")?;
        SystemHealth::from_reply(&reply).ok_or_else(|| {
            RosError::Protocol("Health reply carried no data sentence".to_string())
        })
    }

    /// Query with no arguments, turning a `!trap` reply into an error
    fn checked_query(&mut self, command: &str) -> Result<Reply> {
        let reply = self.query(command, &[])?;
        if reply.is_trap() {
            let message = reply
                .terminator()
                .attribute("message")
                .unwrap_or("no message given");
            return Err(RosError::Protocol(format!(
                "{} failed: {}",
                command, message
            )));
        }
        Ok(reply)
    }

    /// Close the connection, releasing the underlying stream
    pub fn close(self) {
        drop(self);
    }
}

/// Serialize one request sentence
///
/// Caller errors are rejected before any byte is produced: an empty command
/// or an empty argument would put an empty word on the wire, which the
/// protocol reserves as the sentence terminator.
fn encode_request(command: &str, args: &[&str]) -> Result<BytesMut> {
    if command.is_empty() {
        return Err(RosError::InvalidArgument(
            "Command must not be empty".to_string(),
        ));
    }
    for (i, arg) in args.iter().enumerate() {
        if arg.is_empty() {
            return Err(RosError::InvalidArgument(format!(
                "Argument {} must not be empty",
                i
            )));
        }
    }

    let mut buf = BytesMut::new();
    encode_word(&mut buf, command.as_bytes())?;
    for arg in args {
        encode_word(&mut buf, arg.as_bytes())?;
    }
    encode_word(&mut buf, &[])?;

    Ok(buf)
}

/// Extract the 16-byte login challenge from the first `/login` reply
fn challenge_from_reply(reply: &Reply) -> Result<[u8; 16]> {
    let terminator = reply.terminator();
    if terminator.status() != STATUS_DONE {
        return Err(RosError::Protocol(format!(
            "Login challenge reply terminated with !{}",
            terminator.status()
        )));
    }

    let ret = terminator.attribute("ret").ok_or_else(|| {
        RosError::Protocol("Login challenge reply has no `ret` attribute".to_string())
    })?;
    if ret.len() != 32 {
        return Err(RosError::Protocol(format!(
            "Login challenge is {} characters, expected 32",
            ret.len()
        )));
    }

    let bytes = hex::decode(ret)
        .map_err(|e| RosError::Protocol(format!("Login challenge is not hexadecimal: {}", e)))?;
    let mut challenge = [0u8; 16];
    challenge.copy_from_slice(&bytes);
    Ok(challenge)
}

/// Compute the login response digest
///
/// The digest input is a single zero byte, the password bytes, and the
/// 16-byte binary challenge, in that order with no separators. The buffer
/// holding the password bytes is scrubbed once the digest is taken.
/// Returned as lowercase hex, without the `00` placeholder prefix the wire
/// format puts in front of it.
pub fn challenge_response(password: &str, challenge: &[u8]) -> String {
    let mut material = Zeroizing::new(Vec::with_capacity(1 + password.len() + challenge.len()));
    material.push(0u8);
    material.extend_from_slice(password.as_bytes());
    material.extend_from_slice(challenge);

    hex::encode(Md5::digest(material.as_slice()))
}

/// Resolve a host and connect to the first reachable address
fn open_socket(host: &str, port: u16) -> Result<TcpStream> {
    let mut last_error: Option<io::Error> = None;

    for addr in (host, port).to_socket_addrs()? {
        match TcpStream::connect(addr) {
            Ok(stream) => {
                tracing::debug!("Connected to {}", addr);
                return Ok(stream);
            }
            Err(e) => {
                tracing::debug!("Connecting to {} failed: {}", addr, e);
                last_error = Some(e);
            }
        }
    }

    Err(last_error
        .unwrap_or_else(|| {
            io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("{} did not resolve to any address", host),
            )
        })
        .into())
}
