//! hamlink TX - encode a 4-bit payload into a frame

use anyhow::Result;
use clap::Parser;
use hamlink_tools::{init_logging, LoggingArgs, Transmitter, TxConfig};

#[derive(Parser)]
#[command(name = "hamlink-tx")]
#[command(about = "Encode a 4-bit payload into a Hamming(7,4) frame")]
struct Cli {
    #[command(flatten)]
    tx: TxConfig,

    #[command(flatten)]
    logging: LoggingArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.logging);

    let transmitter = Transmitter::new(cli.tx);
    println!("{}", transmitter.render());

    Ok(())
}
