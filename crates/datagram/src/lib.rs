//! hamlink datagram - raw datagram transport
//!
//! Packs a fixed 8-byte header (source port, destination port, total length
//! and a checksum that is always zero) in front of arbitrary bytes and moves
//! it over a UDP socket. There is no error detection, no framing markers and
//! no relation to the Hamming frames of `hamlink-frame`.

pub mod error;
pub mod packet;
pub mod socket;

pub use error::{DatagramError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        error::{DatagramError, Result},
        packet::{Datagram, DatagramHeader, MAX_PAYLOAD},
        socket::{DatagramReceiver, DatagramSender, DEFAULT_RECV_BUFFER},
    };
}
