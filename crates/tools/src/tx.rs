//! Transmitter: payload in, frame out

use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::info;

use hamlink_frame::prelude::*;

/// Prefix of the message printed for a malformed payload
pub const INVALID_PAYLOAD_MESSAGE: &str = "Erro: Payload inválido";

/// Transmitter configuration
#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct TxConfig {
    /// Four-bit payload, e.g. 1011
    pub payload: String,
}

/// Builds frames from payload text
pub struct Transmitter {
    config: TxConfig,
}

impl Transmitter {
    /// Create a new transmitter with the given configuration
    pub fn new(config: TxConfig) -> Self {
        Self { config }
    }

    /// Encode the configured payload into a frame
    pub fn transmit(&self) -> Result<Frame> {
        let frame = encode_frame(&self.config.payload)?;
        info!(payload = %self.config.payload, codeword = %frame.codeword(), "payload encoded");
        Ok(frame)
    }

    /// Line to print: the frame, or the payload error
    pub fn render(&self) -> String {
        match self.transmit() {
            Ok(frame) => frame.to_string(),
            Err(FrameError::InvalidPayload(reason)) => {
                format!("{}: {}.", INVALID_PAYLOAD_MESSAGE, reason)
            }
            Err(e) => format!("{}: {}.", INVALID_PAYLOAD_MESSAGE, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transmitter(payload: &str) -> Transmitter {
        Transmitter::new(TxConfig {
            payload: payload.to_string(),
        })
    }

    #[test]
    fn test_transmit_known_payload() {
        assert_eq!(transmitter("1011").render(), "101001100110101");
        assert_eq!(transmitter("0000").render(), "101000000000101");
    }

    #[test]
    fn test_invalid_payload_message() {
        assert_eq!(
            transmitter("101").render(),
            "Erro: Payload inválido: expected 4 bits, got 3."
        );
        assert_eq!(
            transmitter("10x1").render(),
            "Erro: Payload inválido: invalid character 'x' at position 3, only '0' and '1' are allowed."
        );
    }

    #[test]
    fn test_transmit_error_kind() {
        assert!(matches!(
            transmitter("11111").transmit(),
            Err(FrameError::InvalidPayload(_))
        ));
    }
}
