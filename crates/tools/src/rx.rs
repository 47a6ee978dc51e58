//! Receiver: frame in, payload out

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::{debug, info};

use hamlink_frame::prelude::{decode_frame, Decoded, FrameError};

/// Printed when a frame cannot be decoded
pub const INVALID_FRAME_MESSAGE: &str = "Erro: Frame inválido.";

/// Receiver configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Args)]
pub struct RxConfig {
    /// Frame to decode; read from stdin when absent
    pub frame: Option<String>,

    /// Print syndrome and corrected position to stderr
    #[arg(long)]
    pub report: bool,
}

/// Decodes frames and renders the result
pub struct Receiver {
    config: RxConfig,
}

impl Receiver {
    /// Create a new receiver with the given configuration
    pub fn new(config: RxConfig) -> Self {
        Self { config }
    }

    /// Candidate frame text: the argument if given, otherwise all of the
    /// reader. Surrounding whitespace is removed.
    pub fn read_input<R: Read>(&self, mut reader: R) -> Result<String> {
        let raw = match &self.config.frame {
            Some(frame) => frame.clone(),
            None => {
                let mut buf = String::new();
                reader
                    .read_to_string(&mut buf)
                    .context("Failed to read frame from stdin")?;
                buf
            }
        };

        Ok(raw.trim().to_string())
    }

    /// Decode one candidate frame
    pub fn receive(&self, candidate: &str) -> std::result::Result<Decoded, FrameError> {
        let decoded = decode_frame(candidate).map_err(|e| {
            debug!(error = %e, "frame rejected");
            e
        })?;

        if let Some(position) = decoded.corrected_position() {
            info!(position, syndrome = %decoded.syndrome, "corrected single-bit error");
        }

        Ok(decoded)
    }

    /// Line to print: the payload, or the invalid-frame message
    pub fn render(&self, candidate: &str) -> String {
        match self.receive(candidate) {
            Ok(decoded) => {
                if self.config.report {
                    eprintln!("{}", report_line(&decoded));
                }
                decoded.payload.to_string()
            }
            Err(_) => INVALID_FRAME_MESSAGE.to_string(),
        }
    }
}

/// Human readable correction summary
pub fn report_line(decoded: &Decoded) -> String {
    match decoded.corrected_position() {
        Some(position) => format!(
            "syndrome {}: corrected bit {} (codeword {})",
            decoded.syndrome, position, decoded.codeword
        ),
        None => format!("syndrome {}: no error detected", decoded.syndrome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receiver() -> Receiver {
        Receiver::new(RxConfig::default())
    }

    #[test]
    fn test_receive_clean_frame() {
        assert_eq!(receiver().render("101001100110101"), "1011");
    }

    #[test]
    fn test_receive_corrected_frame() {
        assert_eq!(receiver().render("101001000110101"), "1011");
    }

    #[test]
    fn test_invalid_frame_message() {
        assert_eq!(receiver().render("000000000000000"), "Erro: Frame inválido.");
        assert_eq!(receiver().render(""), INVALID_FRAME_MESSAGE);
        assert_eq!(receiver().render("1010011001101"), INVALID_FRAME_MESSAGE);
    }

    #[test]
    fn test_read_input_trims_stdin() {
        let input = receiver()
            .read_input("  101001100110101\n".as_bytes())
            .unwrap();
        assert_eq!(input, "101001100110101");
    }

    #[test]
    fn test_read_input_prefers_argument() {
        let rx = Receiver::new(RxConfig {
            frame: Some("101001100110101".to_string()),
            report: false,
        });
        assert_eq!(rx.read_input("ignored".as_bytes()).unwrap(), "101001100110101");
    }

    #[test]
    fn test_report_line() {
        let decoded = decode_frame("101001000110101").unwrap();
        assert_eq!(
            report_line(&decoded),
            "syndrome 3: corrected bit 3 (codeword 0110011)"
        );

        let clean = decode_frame("101001100110101").unwrap();
        assert_eq!(report_line(&clean), "syndrome 0: no error detected");
    }
}
