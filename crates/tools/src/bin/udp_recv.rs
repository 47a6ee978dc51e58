//! hamlink UDP receive - print incoming datagrams and their headers

use anyhow::Result;
use clap::Parser;
use hamlink_tools::udp::run_receiver;
use hamlink_tools::{init_logging, LoggingArgs, UdpRecvConfig};

#[derive(Parser)]
#[command(name = "hamlink-udp-recv")]
#[command(about = "Receive datagrams and print their unpacked headers")]
struct Cli {
    #[command(flatten)]
    recv: UdpRecvConfig,

    #[command(flatten)]
    logging: LoggingArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.logging);

    let config = cli.recv.resolve()?;
    run_receiver(&config, &cli.recv, &mut std::io::stdout().lock())?;

    Ok(())
}
