use clap::Parser;
use media_resolver::cli::{Cli, commands};
use media_resolver::log::{LogConfig, init_logger};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // a broken log directory should not keep the tool from running
    if let Err(e) = init_logger(LogConfig::default()) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    commands::handle(cli.command)
}
