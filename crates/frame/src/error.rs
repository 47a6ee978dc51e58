//! Error types for hamlink frame

use thiserror::Error;

/// Frame processing error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("Invalid frame format: {msg}")]
    InvalidFormat { msg: String },

    #[error("Codeword size mismatch: expected {expected} bits, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Invalid payload: {0}")]
    InvalidPayload(#[source] hamlink_core::CoreError),

    #[error("Invalid block length: {actual} bits is not a multiple of {block}")]
    InvalidBlockLength { block: usize, actual: usize },

    #[error("Core error: {0}")]
    Core(#[from] hamlink_core::CoreError),
}

impl FrameError {
    /// Whether this error means the frame markers were wrong or the frame
    /// could not be split into header, codeword and terminator
    pub fn is_invalid_frame(&self) -> bool {
        matches!(
            self,
            FrameError::InvalidFormat { .. } | FrameError::SizeMismatch { .. } | FrameError::Core(_)
        )
    }
}

/// Result type for hamlink frame operations
pub type Result<T> = std::result::Result<T, FrameError>;
