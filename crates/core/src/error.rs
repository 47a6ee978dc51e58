//! Error types for hamlink core

use thiserror::Error;

/// Core error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("expected {expected} bits, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid character {ch:?} at position {position}, only '0' and '1' are allowed")]
    InvalidBitChar { ch: char, position: usize },

    #[error("invalid bit value {value}, only 0 and 1 are allowed")]
    InvalidBitValue { value: u8 },

    #[error("bit position {position} out of range 1..={len}")]
    PositionOutOfRange { position: usize, len: usize },
}

/// Result type for hamlink core operations
pub type Result<T> = std::result::Result<T, CoreError>;
