//! Bit-flip injection for exercising the receiver

use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::debug;

use hamlink_frame::prelude::*;

use crate::rx::INVALID_FRAME_MESSAGE;

/// Options for flipping one codeword bit inside a frame
#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct CorruptConfig {
    /// Valid frame to corrupt
    pub frame: String,

    /// 1-based codeword position to flip (1..=7); markers are never touched
    pub position: usize,
}

/// Flip the chosen codeword bit; returns the new frame or an error line
pub fn render(config: &CorruptConfig) -> String {
    let mut frame = match FrameParser::parse(config.frame.trim()) {
        Ok(frame) => frame,
        Err(_) => return INVALID_FRAME_MESSAGE.to_string(),
    };

    match frame.flip(config.position) {
        Ok(()) => {
            debug!(position = config.position, %frame, "flipped codeword bit");
            frame.to_string()
        }
        Err(FrameError::Core(reason)) => format!("Erro: Posição inválida: {}.", reason),
        Err(e) => format!("Erro: Posição inválida: {}.", e),
    }
}
