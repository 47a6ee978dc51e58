//! Hamming(7,4) forward error correction
//!
//! Four data bits `d1..d4` are protected by three parity bits laid out in
//! the classic positions:
//!
//! ```text
//! position:  1   2   3   4   5   6   7
//! bit:       p1  p2  d1  p3  d2  d3  d4
//! ```
//!
//! The code corrects any single flipped bit in a codeword. Two or more
//! flips in the same codeword are neither corrected nor detected: the
//! decoder "corrects" the wrong bit and returns a wrong payload.

use crate::{FrameError, Result};
use hamlink_core::{parity, Bit, Bits};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Four data bits `(d1, d2, d3, d4)`
pub type Payload = Bits<4>;

/// Seven-bit codeword `(p1, p2, d1, p3, d2, d3, d4)`
pub type Codeword = Bits<7>;

/// 1-based codeword positions holding the data bits
pub const DATA_POSITIONS: [usize; 4] = [3, 5, 6, 7];

/// 1-based codeword positions holding the parity bits
pub const PARITY_POSITIONS: [usize; 3] = [1, 2, 4];

/// Parse a payload text, rejecting anything that is not exactly four
/// `'0'`/`'1'` characters
pub fn parse_payload(text: &str) -> Result<Payload> {
    Payload::parse(text).map_err(FrameError::InvalidPayload)
}

/// Compute the codeword for a payload
pub fn encode(payload: Payload) -> Codeword {
    let [d1, d2, d3, d4] = payload.into_array();

    let p1 = parity(&[d1, d2, d4]);
    let p2 = parity(&[d1, d3, d4]);
    let p3 = parity(&[d2, d3, d4]);

    Codeword::new([p1, p2, d1, p3, d2, d3, d4])
}

/// Read the data bits out of a codeword without any correction
pub fn data_bits(codeword: &Codeword) -> Payload {
    Payload::new(DATA_POSITIONS.map(|position| codeword[position - 1]))
}

/// Receiver-side parity check result.
///
/// Zero means every check passed; 1..=7 is the 1-based position of the bit
/// presumed flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Syndrome(u8);

impl Syndrome {
    /// Recompute the three parity checks over a received codeword
    pub fn compute(codeword: &Codeword) -> Self {
        let [p1, p2, d1, p3, d2, d3, d4] = codeword.into_array();

        let c1 = parity(&[p1, d1, d2, d4]);
        let c2 = parity(&[p2, d1, d3, d4]);
        let c3 = parity(&[p3, d2, d3, d4]);

        Self(c1.as_u8() + 2 * c2.as_u8() + 4 * c3.as_u8())
    }

    /// Raw syndrome value in 0..=7
    pub fn value(self) -> u8 {
        self.0
    }

    /// True when all parity checks passed
    pub fn is_clean(self) -> bool {
        self.0 == 0
    }

    /// 1-based position of the bit to invert, if any
    pub fn position(self) -> Option<usize> {
        match self.0 {
            0 => None,
            value => Some(value as usize),
        }
    }
}

impl fmt::Display for Syndrome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of decoding one codeword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    /// Recovered data bits
    pub payload: Payload,
    /// Syndrome of the received codeword
    pub syndrome: Syndrome,
    /// Codeword after correction
    pub codeword: Codeword,
}

impl Decoded {
    /// 1-based position that was inverted, if any
    pub fn corrected_position(&self) -> Option<usize> {
        self.syndrome.position()
    }
}

/// Check a received codeword, invert the bit named by a nonzero syndrome and
/// return the data bits
pub fn correct(received: Codeword) -> Decoded {
    let syndrome = Syndrome::compute(&received);
    let mut codeword = received;

    if let Some(position) = syndrome.position() {
        // A syndrome is always within 1..=7, so the toggle cannot fail
        if codeword.toggle(position).is_ok() {
            debug!(%received, %codeword, position, "corrected single-bit error");
        }
    }

    Decoded {
        payload: data_bits(&codeword),
        syndrome,
        codeword,
    }
}

/// Generic FEC encoder trait over bit streams (one bit per `u8`)
pub trait FecEncoder {
    /// Encode data bits with error correction
    fn encode(&mut self, data: &[u8]) -> Result<Vec<u8>>;

    /// Get the code rate (k/n where k is data bits, n is total bits)
    fn code_rate(&self) -> f64;

    /// Number of parity bits added for the given number of data bits
    fn overhead_bits(&self, input_len: usize) -> usize;
}

/// Generic FEC decoder trait over bit streams (one bit per `u8`)
pub trait FecDecoder {
    /// Decode encoded bits and correct errors
    fn decode(&mut self, encoded_data: &[u8]) -> Result<Vec<u8>>;

    /// Check whether the input is a well-formed encoded stream
    fn can_correct(&self, encoded_data: &[u8]) -> bool;

    /// Get error statistics from last decode
    fn error_stats(&self) -> ErrorStats;
}

/// Error correction statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorStats {
    /// Codewords processed
    pub blocks: usize,
    /// Codewords with a nonzero syndrome, each of which had one bit inverted
    pub corrected_errors: usize,
}

/// Block Hamming(7,4) codec for streams of bits
#[derive(Debug, Clone, Default)]
pub struct Hamming74 {
    stats: ErrorStats,
}

impl Hamming74 {
    /// Data bits per block
    pub const K: usize = 4;
    /// Encoded bits per block
    pub const N: usize = 7;

    /// Create a new codec
    pub fn new() -> Self {
        Self::default()
    }
}

impl FecEncoder for Hamming74 {
    fn encode(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() % Self::K != 0 {
            return Err(FrameError::InvalidBlockLength {
                block: Self::K,
                actual: data.len(),
            });
        }

        let mut encoded = Vec::with_capacity(data.len() / Self::K * Self::N);
        for chunk in data.chunks_exact(Self::K) {
            let payload = Payload::from_values(chunk)?;
            encoded.extend_from_slice(&encode(payload).values());
        }

        Ok(encoded)
    }

    fn code_rate(&self) -> f64 {
        Self::K as f64 / Self::N as f64
    }

    fn overhead_bits(&self, input_len: usize) -> usize {
        let blocks = input_len.div_ceil(Self::K);
        blocks * (Self::N - Self::K)
    }
}

impl FecDecoder for Hamming74 {
    fn decode(&mut self, encoded_data: &[u8]) -> Result<Vec<u8>> {
        if encoded_data.len() % Self::N != 0 {
            return Err(FrameError::InvalidBlockLength {
                block: Self::N,
                actual: encoded_data.len(),
            });
        }

        let mut stats = ErrorStats::default();
        let mut decoded = Vec::with_capacity(encoded_data.len() / Self::N * Self::K);

        for chunk in encoded_data.chunks_exact(Self::N) {
            let outcome = correct(Codeword::from_values(chunk)?);
            stats.blocks += 1;
            if !outcome.syndrome.is_clean() {
                stats.corrected_errors += 1;
            }
            decoded.extend_from_slice(&outcome.payload.values());
        }

        self.stats = stats;
        Ok(decoded)
    }

    fn can_correct(&self, encoded_data: &[u8]) -> bool {
        encoded_data.len() % Self::N == 0 && encoded_data.iter().all(|&value| value <= 1)
    }

    fn error_stats(&self) -> ErrorStats {
        self.stats
    }
}

/// All sixteen payloads, in numeric order
pub fn all_payloads() -> impl Iterator<Item = Payload> {
    (0u8..16).map(|value| {
        Payload::new([3, 2, 1, 0].map(|shift| Bit::from((value >> shift) & 1 == 1)))
    })
}
