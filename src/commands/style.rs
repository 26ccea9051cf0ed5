//! Style command handler

use anyhow::{anyhow, Result};

use crate::cli::StyleArgs;
use tinct::{Config, Style};

/// Handle `tinct style`.
///
/// Starts from the named config style when `--name` is given, then layers
/// the command-line overrides on top.
pub fn handle(args: &StyleArgs) -> Result<()> {
    let config = Config::load()?;
    let mut style = match &args.name {
        Some(name) => config
            .style(name)
            .ok_or_else(|| anyhow!("No style named '{}' in the config", name))?,
        None => Style::new(),
    };

    if let Some(fore) = args.fore {
        style = style.with_fore(fore);
    }
    if let Some(back) = args.back {
        style = style.with_back(back);
    }
    if args.bold {
        style = style.with_bold(true);
    }
    if args.dim {
        style = style.with_dim(true);
    }
    if args.italic {
        style = style.with_italic(true);
    }
    if args.underline {
        style = style.with_underline(true);
    }
    if args.strikethrough {
        style = style.with_strikethrough(true);
    }
    if args.inverse {
        style = style.with_inverse(true);
    }
    if args.no_reset {
        style = style.with_reset(false);
    }

    if super::color_enabled() {
        println!("{}", style.apply(&args.text));
    } else {
        println!("{}", args.text);
    }
    Ok(())
}
