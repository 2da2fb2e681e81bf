mod cli;
mod commands;
mod config;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use output::print_error;

fn main() {
    if let Err(e) = run() {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing_with_level(if cli.verbose { "debug" } else { "warn" });

    match &cli.command {
        Commands::Generate(args) => {
            commands::generate::generate(args, cli.config.as_deref())?;
        }
        Commands::Check(args) => {
            commands::check::check(args)?;
        }
    }

    Ok(())
}
