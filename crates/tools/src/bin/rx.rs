//! hamlink RX - decode a frame read from stdin

use anyhow::Result;
use clap::Parser;
use hamlink_tools::{init_logging, LoggingArgs, Receiver, RxConfig};

#[derive(Parser)]
#[command(name = "hamlink-rx")]
#[command(about = "Validate a frame, correct one flipped bit and print the payload")]
struct Cli {
    #[command(flatten)]
    rx: RxConfig,

    #[command(flatten)]
    logging: LoggingArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.logging);

    let receiver = Receiver::new(cli.rx);
    let candidate = receiver.read_input(std::io::stdin().lock())?;
    println!("{}", receiver.render(&candidate));

    Ok(())
}
