mod cli;
mod commands;
mod logging;
mod output;

use cli::{Cli, Commands};
use commands::{compare, summary, sweep};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        Commands::Compare(args) => compare::run(&cli, args),
        Commands::Summary(args) => summary::run(&cli, args),
        Commands::Sweep(args) => sweep::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
