//! Configuration for the datagram tools

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use hamlink_datagram::socket::DEFAULT_RECV_BUFFER;

use crate::common::{load_config, save_config};

/// Datagram transport configuration, loadable from TOML or JSON.
///
/// Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatagramConfig {
    /// Source port written into the header
    pub source_port: u16,
    /// Destination host for the sender
    pub dest_host: String,
    /// Destination port, written into the header and used for sending
    pub dest_port: u16,
    /// Local address the receiver binds
    pub bind_host: String,
    /// Local port the receiver binds
    pub listen_port: u16,
    /// Receive buffer size in bytes
    pub recv_buffer: usize,
    /// Message sent by the sender
    pub message: String,
}

impl Default for DatagramConfig {
    fn default() -> Self {
        Self {
            source_port: 12345,
            dest_host: "127.0.0.1".to_string(),
            dest_port: 54321,
            bind_host: "0.0.0.0".to_string(),
            listen_port: 54321,
            recv_buffer: DEFAULT_RECV_BUFFER,
            message: "Hello, UDP!".to_string(),
        }
    }
}

impl DatagramConfig {
    /// Load configuration from file
    pub fn from_file(path: &Path) -> Result<Self> {
        load_config(path)
    }

    /// Load from file when a path is given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        save_config(self, path)
    }

    /// Address the sender targets
    pub fn dest_addr(&self) -> String {
        format!("{}:{}", self.dest_host, self.dest_port)
    }

    /// Address the receiver binds
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.listen_port)
    }
}
