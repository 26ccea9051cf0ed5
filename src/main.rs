//! tinct - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Style(args) => commands::style::handle(args),
        Commands::Gradient(args) => commands::gradient::handle(args),
        Commands::Ramp(args) => commands::ramp::handle(args),
        Commands::Config(command) => commands::config::handle(command),
        Commands::Completions { shell } => commands::completions::handle::<Cli>(*shell),
    }
}
