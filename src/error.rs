//! Error types for the RouterOS API client
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RosError
pub type Result<T> = std::result::Result<T, RosError>;

/// Unified error type for RouterOS API operations
///
/// Allocation failure during buffer growth is not representable here: Rust
/// aborts on failed allocation. Capacity limits that the protocol enforces
/// surface as `WordTooLong`.
#[derive(Debug, Error)]
pub enum RosError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Word of {length} bytes exceeds the limit of {limit} bytes")]
    WordTooLong { length: u64, limit: usize },

    // -------------------------------------------------------------------------
    // Caller Errors
    // -------------------------------------------------------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // -------------------------------------------------------------------------
    // Authentication Errors
    // -------------------------------------------------------------------------
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),
}
