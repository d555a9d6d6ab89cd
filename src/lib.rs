//! # rosapi
//!
//! A synchronous client for the MikroTik RouterOS management API:
//! - Length-prefixed word codec for the binary wire format
//! - Sentence/reply assembly with explicit termination semantics
//! - Strict request/reply command exchange over one persistent connection
//! - MD5 challenge-response login handshake
//! - Typed projections for common `print` commands
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Typed Projections                        │
//! │        (interface / registration / resource / health)        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Connection                              │
//! │           (login handshake, query, query_with)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Protocol   │          │  Transport  │
//!   │ word/sent./ │          │ (full-buf   │
//!   │   reply     │          │  send/recv) │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use rosapi::{ConnectConfig, Connection};
//!
//! # fn main() -> rosapi::Result<()> {
//! let config = ConnectConfig::builder()
//!     .host("10.0.0.1")
//!     .username("admin")
//!     .build();
//! let mut conn = Connection::connect(&config, "password")?;
//!
//! for iface in conn.interfaces()? {
//!     println!("{}: {} / {} bytes", iface.name, iface.rx_bytes, iface.tx_bytes);
//! }
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod transport;
pub mod connection;
pub mod typed;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, RosError};
pub use config::{ConnectConfig, DEFAULT_API_PORT};
pub use connection::{challenge_response, Connection};
pub use protocol::{Reply, Sentence};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
