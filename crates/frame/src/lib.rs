//! hamlink frame - Hamming(7,4) FEC and marker framing
//!
//! A 4-bit payload is encoded into a 7-bit Hamming codeword and wrapped
//! between a fixed header and terminator. The receiving side checks the
//! markers, corrects at most one flipped codeword bit and recovers the
//! payload. Every operation is a pure function of its input.

pub mod error;
pub mod fec;
pub mod frame;

pub use error::{FrameError, Result};
pub use fec::{correct, encode, Codeword, Decoded, Payload, Syndrome};
pub use frame::{decode_frame, encode_frame, Frame, FrameBuilder, FrameParser};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        error::{FrameError, Result},
        fec::{
            correct, encode, parse_payload, Codeword, Decoded, ErrorStats, FecDecoder,
            FecEncoder, Hamming74, Payload, Syndrome,
        },
        frame::{
            decode_frame, encode_frame, Frame, FrameBuilder, FrameParser, FRAME_LEN, HEADER,
            TERMINATOR,
        },
    };
}
