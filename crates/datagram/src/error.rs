//! Error types for hamlink datagram

use thiserror::Error;

/// Datagram error types
#[derive(Error, Debug)]
pub enum DatagramError {
    #[error("Datagram too short: need at least {min} bytes, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Payload too large: {len} bytes exceeds maximum of {max}")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for hamlink datagram operations
pub type Result<T> = std::result::Result<T, DatagramError>;
