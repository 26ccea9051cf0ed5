//! Ramp (multi-stop gradient) command handler

use anyhow::Result;

use crate::cli::RampArgs;
use tinct::{advanced_gradient, Config};

/// Handle `tinct ramp`.
pub fn handle(args: &RampArgs) -> Result<()> {
    let config = Config::load()?;
    let output = &args.output;

    let steps = output.steps.unwrap_or_else(|| match &output.text {
        Some(text) => text.chars().count().max(2),
        None => config.defaults.steps,
    });

    let colors = advanced_gradient(&args.stops, steps)?;
    let target = output.target.unwrap_or(config.defaults.target);
    super::emit_colors(&colors, target, output.text.as_deref(), output.hex, output.json)
}
