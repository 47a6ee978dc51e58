//! hamlink UDP send - send one hand-packed datagram

use anyhow::Result;
use clap::Parser;
use hamlink_tools::udp::send_message;
use hamlink_tools::{init_logging, LoggingArgs, UdpSendConfig};

#[derive(Parser)]
#[command(name = "hamlink-udp-send")]
#[command(about = "Send a message behind a manually packed 8-byte datagram header")]
struct Cli {
    #[command(flatten)]
    send: UdpSendConfig,

    #[command(flatten)]
    logging: LoggingArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.logging);

    let config = cli.send.resolve()?;
    let dest = send_message(&config)?;
    println!("Packet sent to {}", dest);

    Ok(())
}
