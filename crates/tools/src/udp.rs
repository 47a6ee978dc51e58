//! Datagram send and receive tools

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use hamlink_datagram::prelude::*;

use crate::config::DatagramConfig;

/// Sender options. Flags override values from the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Args)]
pub struct UdpSendConfig {
    /// Configuration file (TOML or JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Source port written into the header
    #[arg(long)]
    pub source_port: Option<u16>,

    /// Destination host
    #[arg(long)]
    pub dest_host: Option<String>,

    /// Destination port
    #[arg(long)]
    pub dest_port: Option<u16>,

    /// Message to send
    #[arg(short, long)]
    pub message: Option<String>,
}

impl UdpSendConfig {
    /// Merge file configuration and command-line overrides
    pub fn resolve(&self) -> Result<DatagramConfig> {
        let mut config = DatagramConfig::load_or_default(self.config.as_deref())?;
        if let Some(port) = self.source_port {
            config.source_port = port;
        }
        if let Some(host) = &self.dest_host {
            config.dest_host = host.clone();
        }
        if let Some(port) = self.dest_port {
            config.dest_port = port;
        }
        if let Some(message) = &self.message {
            config.message = message.clone();
        }
        Ok(config)
    }
}

/// Receiver options. Flags override values from the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Args)]
pub struct UdpRecvConfig {
    /// Configuration file (TOML or JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Local address to bind
    #[arg(long)]
    pub bind_host: Option<String>,

    /// Local port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Receive buffer size in bytes
    #[arg(long)]
    pub buffer_size: Option<usize>,

    /// Stop after this many datagrams (default: run forever)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Give up after this many milliseconds without a datagram
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

impl UdpRecvConfig {
    /// Merge file configuration and command-line overrides
    pub fn resolve(&self) -> Result<DatagramConfig> {
        let mut config = DatagramConfig::load_or_default(self.config.as_deref())?;
        if let Some(host) = &self.bind_host {
            config.bind_host = host.clone();
        }
        if let Some(port) = self.port {
            config.listen_port = port;
        }
        if let Some(size) = self.buffer_size {
            config.recv_buffer = size;
        }
        Ok(config)
    }
}

/// Send the configured message as one datagram. Returns the destination.
pub fn send_message(config: &DatagramConfig) -> Result<String> {
    let datagram = Datagram::new(
        config.source_port,
        config.dest_port,
        config.message.as_bytes().to_vec(),
    )?;

    let sender = DatagramSender::new().context("Failed to open UDP socket")?;
    let dest = config.dest_addr();
    sender
        .send(&datagram, dest.as_str())
        .with_context(|| format!("Failed to send datagram to {}", dest))?;

    Ok(dest)
}

/// Render a received datagram the way the receiver tool prints it
pub fn format_datagram(datagram: &Datagram, from: SocketAddr) -> String {
    let header = &datagram.header;
    format!(
        "Received {} bytes from {}\n\
         \n\
         --- Datagram header ---\n\
         Source Port: {}\n\
         Destination Port: {}\n\
         Length: {}\n\
         Checksum: {} (ignored)\n\
         Message: {}\n\
         -----------------------\n",
        datagram.total_size(),
        from,
        header.source_port,
        header.dest_port,
        header.length,
        header.checksum,
        datagram.text()
    )
}

/// Bind the receiver and print datagrams until `count` have been shown.
///
/// Datagrams too short to carry a header are logged and skipped.
pub fn run_receiver<W: Write>(config: &DatagramConfig, opts: &UdpRecvConfig, out: &mut W) -> Result<usize> {
    let mut receiver = DatagramReceiver::with_buffer_size(config.bind_addr(), config.recv_buffer)
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    receiver.set_timeout(opts.timeout_ms.map(Duration::from_millis))?;

    let local = receiver.local_addr()?;
    writeln!(out, "Waiting for datagrams on {}...", local)?;
    info!(%local, "receiver listening");

    let mut shown = 0;
    while opts.count.map_or(true, |count| shown < count) {
        match receiver.recv() {
            Ok((datagram, from)) => {
                writeln!(out, "{}", format_datagram(&datagram, from))?;
                out.flush()?;
                shown += 1;
            }
            Err(DatagramError::TooShort { min, actual }) => {
                warn!(min, actual, "skipping datagram without a full header");
            }
            Err(e) => return Err(e).context("Failed to receive datagram"),
        }
    }

    Ok(shown)
}
