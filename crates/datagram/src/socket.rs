//! Blocking UDP sender and receiver for datagrams

use crate::packet::Datagram;
use crate::Result;
use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::Duration;
use tracing::{debug, info};

/// Default receive buffer size in bytes. Longer datagrams are truncated.
pub const DEFAULT_RECV_BUFFER: usize = 1024;

/// Sends datagrams from an ephemeral local port
#[derive(Debug)]
pub struct DatagramSender {
    socket: UdpSocket,
}

impl DatagramSender {
    /// Bind to any available local port
    pub fn new() -> Result<Self> {
        Self::bind("0.0.0.0:0")
    }

    /// Bind to a specific local address
    pub fn bind(addr: impl ToSocketAddrs) -> Result<Self> {
        let socket = UdpSocket::bind(addr)?;
        Ok(Self { socket })
    }

    /// Local address of the underlying socket
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Send one datagram. Returns the number of bytes written.
    pub fn send(&self, datagram: &Datagram, dest: impl ToSocketAddrs) -> Result<usize> {
        let bytes = datagram.to_bytes();
        let sent = self.socket.send_to(&bytes, dest)?;
        info!(
            bytes = sent,
            source_port = datagram.header.source_port,
            dest_port = datagram.header.dest_port,
            "datagram sent"
        );
        Ok(sent)
    }
}

/// Receives datagrams on a fixed local address
#[derive(Debug)]
pub struct DatagramReceiver {
    socket: UdpSocket,
    buffer: Vec<u8>,
}

impl DatagramReceiver {
    /// Bind to a local address with the default buffer size
    pub fn bind(addr: impl ToSocketAddrs) -> Result<Self> {
        Self::with_buffer_size(addr, DEFAULT_RECV_BUFFER)
    }

    /// Bind to a local address with a custom receive buffer size
    pub fn with_buffer_size(addr: impl ToSocketAddrs, size: usize) -> Result<Self> {
        let socket = UdpSocket::bind(addr)?;
        Ok(Self {
            socket,
            buffer: vec![0u8; size.max(1)],
        })
    }

    /// Set a read timeout; `None` blocks forever
    pub fn set_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        self.socket.set_read_timeout(timeout)?;
        Ok(())
    }

    /// Local address of the underlying socket
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Block until one datagram arrives
    pub fn recv(&mut self) -> Result<(Datagram, SocketAddr)> {
        let (len, from) = self.socket.recv_from(&mut self.buffer)?;
        debug!(bytes = len, %from, "datagram received");

        let datagram = Datagram::from_bytes(&self.buffer[..len])?;
        Ok((datagram, from))
    }
}
