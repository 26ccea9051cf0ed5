//! Config subcommands handler

use anyhow::{bail, Result};

use crate::cli::ConfigCommands;
use tinct::{Config, NamedColor, Style};

/// Handle `tinct config` subcommands.
pub fn handle(command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            println!("{}", Config::config_path()?.display());
            Ok(())
        }
        ConfigCommands::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigCommands::Init { force } => init(*force),
    }
}

/// Write a starter config with a few example styles.
fn init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    if path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let mut config = Config::default();
    config.styles.insert(
        "header".to_string(),
        Style::new().with_fore(NamedColor::Cyan).with_bold(true),
    );
    config.styles.insert(
        "error".to_string(),
        Style::new().with_fore(NamedColor::BrightRed).with_bold(true),
    );
    config.styles.insert(
        "muted".to_string(),
        Style::new().with_fore(NamedColor::BrightBlack),
    );
    config.save()?;

    println!("Wrote {}", path.display());
    Ok(())
}
