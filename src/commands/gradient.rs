//! Gradient command handler

use anyhow::Result;

use crate::cli::GradientArgs;
use tinct::{gradient, Config};

/// Handle `tinct gradient`.
pub fn handle(args: &GradientArgs) -> Result<()> {
    let config = Config::load()?;
    let output = &args.output;

    // --text without --steps samples one color per character.
    let steps = output.steps.unwrap_or_else(|| match &output.text {
        Some(text) => text.chars().count().max(2),
        None => config.defaults.steps,
    });

    let colors = gradient(args.from, args.to, steps)?;
    let target = output.target.unwrap_or(config.defaults.target);
    super::emit_colors(&colors, target, output.text.as_deref(), output.hex, output.json)
}
