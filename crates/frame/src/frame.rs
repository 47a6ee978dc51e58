//! Frame structure: fixed header, one codeword, fixed terminator
//!
//! ```text
//! +--------+----------------------+------------+
//! |  1010  | p1 p2 d1 p3 d2 d3 d4 |    0101    |
//! +--------+----------------------+------------+
//!   header       codeword (7)        terminator
//! ```

use crate::fec::{self, Codeword, Decoded, Payload};
use crate::{FrameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Frame header marker
pub const HEADER: &str = "1010";

/// Frame terminator marker
pub const TERMINATOR: &str = "0101";

/// Total frame length in bits
pub const FRAME_LEN: usize = HEADER.len() + Codeword::LEN + TERMINATOR.len();

/// A complete frame carrying one codeword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    codeword: Codeword,
}

impl Frame {
    /// Wrap a codeword in header and terminator
    pub fn new(codeword: Codeword) -> Self {
        Self { codeword }
    }

    /// Encode a payload and frame the resulting codeword
    pub fn from_payload(payload: Payload) -> Self {
        Self::new(fec::encode(payload))
    }

    /// The codeword between the markers
    pub fn codeword(&self) -> Codeword {
        self.codeword
    }

    /// Invert one codeword bit (1-based position within the codeword)
    pub fn flip(&mut self, position: usize) -> Result<()> {
        self.codeword.toggle(position)?;
        Ok(())
    }

    /// Run syndrome correction over the carried codeword
    pub fn decode(&self) -> Decoded {
        fec::correct(self.codeword)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", HEADER, self.codeword, TERMINATOR)
    }
}

impl FromStr for Frame {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self> {
        FrameParser::parse(s)
    }
}

/// Frame builder for constructing frames from a payload or a codeword
#[derive(Debug, Clone, Default)]
pub struct FrameBuilder {
    codeword: Codeword,
}

impl FrameBuilder {
    /// Create a new frame builder carrying the all-zero codeword
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the payload, computing its codeword
    pub fn payload(mut self, payload: Payload) -> Self {
        self.codeword = fec::encode(payload);
        self
    }

    /// Set the codeword directly. Its content is not checked.
    pub fn codeword(mut self, codeword: Codeword) -> Self {
        self.codeword = codeword;
        self
    }

    /// Build the frame
    pub fn build(self) -> Frame {
        Frame::new(self.codeword)
    }
}

/// Validates frame markers and extracts the codeword
pub struct FrameParser;

impl FrameParser {
    /// Split a candidate frame into its codeword.
    ///
    /// Markers are checked first; nothing between them is inspected unless
    /// both are present.
    pub fn parse(candidate: &str) -> Result<Frame> {
        if !candidate.starts_with(HEADER) {
            debug!(candidate, "frame rejected: missing header");
            return Err(FrameError::InvalidFormat {
                msg: format!("frame does not start with header {}", HEADER),
            });
        }

        if !candidate.ends_with(TERMINATOR) {
            debug!(candidate, "frame rejected: missing terminator");
            return Err(FrameError::InvalidFormat {
                msg: format!("frame does not end with terminator {}", TERMINATOR),
            });
        }

        if candidate.len() < HEADER.len() + TERMINATOR.len() {
            debug!(candidate, "frame rejected: markers overlap");
            return Err(FrameError::InvalidFormat {
                msg: "header and terminator overlap".to_string(),
            });
        }

        // Both markers are ASCII, so these offsets are char boundaries
        let body = &candidate[HEADER.len()..candidate.len() - TERMINATOR.len()];
        let actual = body.chars().count();
        if actual != Codeword::LEN {
            return Err(FrameError::SizeMismatch {
                expected: Codeword::LEN,
                actual,
            });
        }

        Ok(Frame::new(body.parse()?))
    }

    /// Parse a candidate frame and correct its codeword
    pub fn decode(candidate: &str) -> Result<Decoded> {
        let frame = Self::parse(candidate)?;
        Ok(frame.decode())
    }
}

/// Build the wire frame for a payload text
pub fn encode_frame(payload: &str) -> Result<Frame> {
    let payload = fec::parse_payload(payload)?;
    Ok(FrameBuilder::new().payload(payload).build())
}

/// Validate and decode a wire frame
pub fn decode_frame(candidate: &str) -> Result<Decoded> {
    FrameParser::decode(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_frame_length() {
        assert_eq!(FRAME_LEN, 15);
    }

    #[test]
    fn test_encode_known_frame() {
        let frame = encode_frame("1011").unwrap();
        assert_eq!(frame.codeword().to_string(), "0110011");
        assert_eq!(frame.to_string(), "101001100110101");
        assert_eq!(frame.to_string().len(), FRAME_LEN);
    }

    #[test]
    fn test_decode_clean_frame() {
        let decoded = decode_frame("101001100110101").unwrap();
        assert_eq!(decoded.payload.to_string(), "1011");
        assert!(decoded.syndrome.is_clean());
    }

    #[test]
    fn test_decode_frame_with_flipped_data_bit() {
        let frame = FrameBuilder::new()
            .codeword("0100011".parse().unwrap())
            .build();
        let wire = frame.to_string();
        assert_eq!(wire, "101001000110101");

        let decoded = decode_frame(&wire).unwrap();
        assert_eq!(decoded.corrected_position(), Some(3));
        assert_eq!(decoded.payload.to_string(), "1011");
    }

    #[test]
    fn test_reject_all_zero_frame() {
        assert!(matches!(
            decode_frame("000000000000000"),
            Err(FrameError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_reject_missing_terminator() {
        let err = decode_frame("101001100110000").unwrap_err();
        assert!(matches!(err, FrameError::InvalidFormat { .. }));
        assert!(err.to_string().contains("terminator"));
    }

    #[test]
    fn test_markers_checked_before_codeword() {
        // The body is garbage, but the marker failure is what gets reported
        assert!(matches!(
            FrameParser::parse("0000xyz!?&%0101"),
            Err(FrameError::InvalidFormat { .. })
        ));
        assert!(matches!(
            FrameParser::parse("1010xyz!?&%1111"),
            Err(FrameError::InvalidFormat { .. })
        ));
        assert!(matches!(
            FrameParser::parse("1010xyz!?&%0101"),
            Err(FrameError::Core(_))
        ));
    }

    #[test]
    fn test_reject_overlapping_and_short_frames() {
        for candidate in ["", "1010", "0101", "1010101", "10100101"] {
            let err = FrameParser::parse(candidate).unwrap_err();
            assert!(err.is_invalid_frame(), "{:?} should be rejected", candidate);
        }
        assert_eq!(
            FrameParser::parse("10100101"),
            Err(FrameError::SizeMismatch {
                expected: 7,
                actual: 0
            })
        );
    }

    #[test]
    fn test_reject_wrong_codeword_length() {
        assert_eq!(
            FrameParser::parse("1010011001100101"),
            Err(FrameError::SizeMismatch {
                expected: 7,
                actual: 8
            })
        );
    }

    #[test]
    fn test_markers_are_not_corrected() {
        // A flipped marker bit is a framing failure, not a correctable error
        assert!(decode_frame("001001100110101").is_err());
        assert!(decode_frame("101001100110100").is_err());
    }

    #[test]
    fn test_flip_and_parse_back() {
        let mut frame = encode_frame("0110").unwrap();
        frame.flip(7).unwrap();
        let parsed: Frame = frame.to_string().parse().unwrap();
        assert_eq!(parsed, frame);
        assert_eq!(parsed.decode().payload.to_string(), "0110");
        assert!(frame.flip(8).is_err());
    }

    #[test]
    fn test_frame_serde() {
        let frame = encode_frame("1011").unwrap();
        let json = serde_json::to_string(&frame).unwrap();
        assert_eq!(json, r#"{"codeword":"0110011"}"#);
    }

    #[quickcheck]
    fn prop_wire_round_trip_with_one_flip(value: u8, position: usize) -> bool {
        let payload = fec::all_payloads().nth((value % 16) as usize).unwrap();
        let mut frame = Frame::from_payload(payload);
        frame.flip(position % 7 + 1).unwrap();
        decode_frame(&frame.to_string()).map(|d| d.payload) == Ok(payload)
    }
}
