//! hamlink tools library
//!
//! The logic behind each command-line tool, kept out of the binaries so it
//! can be tested without spawning processes.

pub mod common;
pub mod config;
pub mod corrupt;
pub mod rx;
pub mod tx;
pub mod udp;

pub use common::{init_logging, LogFormat, LogLevel, LoggingArgs};
pub use config::DatagramConfig;
pub use corrupt::CorruptConfig;
pub use rx::{Receiver, RxConfig, INVALID_FRAME_MESSAGE};
pub use tx::{Transmitter, TxConfig};
pub use udp::{UdpRecvConfig, UdpSendConfig};
