//! Datagram header and packet layout
//!
//! ```text
//! 0       2       4       6       8
//! +-------+-------+-------+-------+--------------
//! | src   | dst   | len   | csum  | payload ...
//! +-------+-------+-------+-------+--------------
//! ```
//!
//! All fields are big-endian `u16`. `len` counts header and payload.

use crate::{DatagramError, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Largest payload whose total length still fits the 16-bit length field
pub const MAX_PAYLOAD: usize = u16::MAX as usize - DatagramHeader::SIZE;

/// Datagram header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatagramHeader {
    pub source_port: u16,
    pub dest_port: u16,
    /// Header plus payload length in bytes
    pub length: u16,
    /// Carried for layout only; written as zero and never validated
    pub checksum: u16,
}

impl DatagramHeader {
    /// Size of the header in bytes
    pub const SIZE: usize = 8;

    /// Create a header for a payload of the given size
    pub fn new(source_port: u16, dest_port: u16, payload_len: usize) -> Result<Self> {
        if payload_len > MAX_PAYLOAD {
            return Err(DatagramError::PayloadTooLarge {
                len: payload_len,
                max: MAX_PAYLOAD,
            });
        }

        Ok(Self {
            source_port,
            dest_port,
            length: (Self::SIZE + payload_len) as u16,
            checksum: 0,
        })
    }

    /// Serialize header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..2].copy_from_slice(&self.source_port.to_be_bytes());
        bytes[2..4].copy_from_slice(&self.dest_port.to_be_bytes());
        bytes[4..6].copy_from_slice(&self.length.to_be_bytes());
        bytes[6..8].copy_from_slice(&self.checksum.to_be_bytes());
        bytes
    }

    /// Deserialize header from bytes. The checksum is read as-is.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(DatagramError::TooShort {
                min: Self::SIZE,
                actual: bytes.len(),
            });
        }

        Ok(Self {
            source_port: u16::from_be_bytes([bytes[0], bytes[1]]),
            dest_port: u16::from_be_bytes([bytes[2], bytes[3]]),
            length: u16::from_be_bytes([bytes[4], bytes[5]]),
            checksum: u16::from_be_bytes([bytes[6], bytes[7]]),
        })
    }
}

/// Header followed by raw payload bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datagram {
    pub header: DatagramHeader,
    pub payload: Vec<u8>,
}

impl Datagram {
    /// Create a datagram, filling in the length field
    pub fn new(source_port: u16, dest_port: u16, payload: Vec<u8>) -> Result<Self> {
        let header = DatagramHeader::new(source_port, dest_port, payload.len())?;
        Ok(Self { header, payload })
    }

    /// Get total size in bytes
    pub fn total_size(&self) -> usize {
        DatagramHeader::SIZE + self.payload.len()
    }

    /// Serialize datagram to bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.total_size());
        bytes.extend_from_slice(&self.header.to_bytes());
        bytes.extend_from_slice(&self.payload);
        bytes
    }

    /// Deserialize datagram from bytes.
    ///
    /// Everything after the header is payload. A length field that disagrees
    /// with the received size is logged and otherwise ignored.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let header = DatagramHeader::from_bytes(bytes)?;

        if header.length as usize != bytes.len() {
            warn!(
                declared = header.length,
                received = bytes.len(),
                "datagram length field does not match received size"
            );
        }

        Ok(Self {
            header,
            payload: bytes[DatagramHeader::SIZE..].to_vec(),
        })
    }

    /// Payload decoded as UTF-8, with invalid sequences replaced
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let header = DatagramHeader::new(12345, 54321, 11).unwrap();
        assert_eq!(header.length, 19);
        assert_eq!(header.checksum, 0);
        assert_eq!(
            header.to_bytes(),
            [0x30, 0x39, 0xd4, 0x31, 0x00, 0x13, 0x00, 0x00]
        );
    }

    #[test]
    fn test_datagram_serialization() {
        let datagram = Datagram::new(12345, 54321, b"Hello, UDP!".to_vec()).unwrap();
        let bytes = datagram.to_bytes();
        assert_eq!(bytes.len(), 19);
        assert_eq!(&bytes[8..], b"Hello, UDP!");

        let recovered = Datagram::from_bytes(&bytes).unwrap();
        assert_eq!(recovered, datagram);
        assert_eq!(recovered.text(), "Hello, UDP!");
    }

    #[test]
    fn test_checksum_is_ignored_on_receive() {
        let mut bytes = Datagram::new(1, 2, b"x".to_vec()).unwrap().to_bytes();
        bytes[6] = 0xbe;
        bytes[7] = 0xef;

        let recovered = Datagram::from_bytes(&bytes).unwrap();
        assert_eq!(recovered.header.checksum, 0xbeef);
        assert_eq!(recovered.payload, b"x");
    }

    #[test]
    fn test_length_mismatch_is_tolerated() {
        let mut bytes = Datagram::new(1, 2, b"abc".to_vec()).unwrap().to_bytes();
        bytes[5] = 99;

        let recovered = Datagram::from_bytes(&bytes).unwrap();
        assert_eq!(recovered.header.length, 99);
        assert_eq!(recovered.payload, b"abc");
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(
            Datagram::from_bytes(&[0, 1, 2]),
            Err(DatagramError::TooShort { min: 8, actual: 3 })
        ));
    }

    #[test]
    fn test_empty_payload() {
        let datagram = Datagram::new(7, 9, Vec::new()).unwrap();
        assert_eq!(datagram.header.length, 8);
        assert!(Datagram::from_bytes(&datagram.to_bytes()).unwrap().payload.is_empty());
    }

    #[test]
    fn test_payload_too_large() {
        assert!(Datagram::new(1, 2, vec![0; MAX_PAYLOAD]).is_ok());
        assert!(matches!(
            Datagram::new(1, 2, vec![0; MAX_PAYLOAD + 1]),
            Err(DatagramError::PayloadTooLarge { .. })
        ));
    }
}
