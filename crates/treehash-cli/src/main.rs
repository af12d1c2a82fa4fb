//! treehash: Hash every file in a directory tree

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use treehash_cli::{commands, Cli};

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    commands::hash::run(&cli)
}
