//! Configuration for RouterOS API connections
//!
//! Centralized configuration with sensible defaults.

/// Default TCP service port of the plaintext API
pub const DEFAULT_API_PORT: u16 = 8728;

/// Connection configuration
///
/// Timeouts are applied at the socket before any protocol exchange; the
/// protocol core itself never imposes deadlines. A value of 0 disables the
/// timeout.
#[derive(Debug, Clone)]
pub struct ConnectConfig {
    // -------------------------------------------------------------------------
    // Endpoint Configuration
    // -------------------------------------------------------------------------
    /// Router hostname or address
    pub host: String,

    /// API service port
    pub port: u16,

    // -------------------------------------------------------------------------
    // Login Configuration
    // -------------------------------------------------------------------------
    /// Username presented during the login handshake
    pub username: String,

    // -------------------------------------------------------------------------
    // Socket Configuration
    // -------------------------------------------------------------------------
    /// Socket read timeout (milliseconds, 0 = block forever)
    pub read_timeout_ms: u64,

    /// Socket write timeout (milliseconds, 0 = block forever)
    pub write_timeout_ms: u64,
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            host: "192.168.88.1".to_string(),
            port: DEFAULT_API_PORT,
            username: "admin".to_string(),
            read_timeout_ms: 0,
            write_timeout_ms: 0,
        }
    }
}

impl ConnectConfig {
    /// Create a new config builder
    pub fn builder() -> ConnectConfigBuilder {
        ConnectConfigBuilder::default()
    }
}

/// Builder for ConnectConfig
#[derive(Default)]
pub struct ConnectConfigBuilder {
    config: ConnectConfig,
}

impl ConnectConfigBuilder {
    /// Set the router hostname or address
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the API service port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the login username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.config.username = username.into();
        self
    }

    /// Set the socket read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the socket write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    pub fn build(self) -> ConnectConfig {
        self.config
    }
}
