//! hamlink - unified tool for Hamming(7,4) framing and the datagram transport

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use hamlink_frame::prelude::*;
use hamlink_tools::udp::{run_receiver, send_message};
use hamlink_tools::{
    corrupt, init_logging, CorruptConfig, LoggingArgs, Receiver, RxConfig, Transmitter, TxConfig,
    UdpRecvConfig, UdpSendConfig,
};

/// hamlink framing and transport tool
#[derive(Parser)]
#[command(name = "hamlink")]
#[command(about = "Hamming(7,4) framing with single-bit error correction")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    logging: LoggingArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a 4-bit payload into a frame
    Encode(TxConfig),
    /// Decode a frame (argument or stdin)
    Decode(RxConfig),
    /// Flip one codeword bit of a frame
    Corrupt(CorruptConfig),
    /// Send one datagram
    UdpSend(UdpSendConfig),
    /// Receive and print datagrams
    UdpRecv(UdpRecvConfig),
    /// Show frame layout and code parameters
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.logging);

    match cli.command {
        Commands::Encode(config) => {
            println!("{}", Transmitter::new(config).render());
        }
        Commands::Decode(config) => {
            let receiver = Receiver::new(config);
            let candidate = receiver.read_input(std::io::stdin().lock())?;
            println!("{}", receiver.render(&candidate));
        }
        Commands::Corrupt(config) => {
            println!("{}", corrupt::render(&config));
        }
        Commands::UdpSend(opts) => {
            let config = opts.resolve()?;
            debug!(?config, "resolved datagram configuration");
            let dest = send_message(&config)?;
            println!("Packet sent to {}", dest);
        }
        Commands::UdpRecv(opts) => {
            let config = opts.resolve()?;
            debug!(?config, "resolved datagram configuration");
            run_receiver(&config, &opts, &mut std::io::stdout().lock())?;
        }
        Commands::Info => print_info(),
    }

    Ok(())
}

fn print_info() {
    let codec = Hamming74::new();

    println!("Frame layout:");
    println!("  header      {}", HEADER);
    println!("  codeword    p1 p2 d1 p3 d2 d3 d4");
    println!("  terminator  {}", TERMINATOR);
    println!("  length      {} bits", FRAME_LEN);
    println!();
    println!("Code: Hamming(7,4), rate {:.3}", codec.code_rate());
    println!("  corrects any single flipped codeword bit");
    println!("  two or more flips are neither corrected nor detected");
}
