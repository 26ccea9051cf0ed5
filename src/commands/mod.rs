//! Command handlers for the tinct CLI.
//!
//! Each submodule handles one CLI command; the dispatch lives in main.rs.
//! Shared output logic (color gating, swatch/text/hex/json rendering) is
//! here because both gradient commands use it.

pub mod completions;
pub mod config;
pub mod gradient;
pub mod ramp;
pub mod style;

use anyhow::Result;

use tinct::style::FULL_RESET;
use tinct::{to_style_pattern, ColorTarget, Rgb};

/// Whether escape sequences should be written to stdout.
///
/// `FORCE_COLOR` overrides `NO_COLOR`; otherwise colored output is only
/// produced for a terminal.
pub fn color_enabled() -> bool {
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Render a gradient result in the requested output mode.
///
/// Precedence: `--json`, then `--hex` (also the fallback when stdout has no
/// color), then `--text`, then a one-line swatch.
pub fn emit_colors(
    colors: &[Rgb],
    target: ColorTarget,
    text: Option<&str>,
    hex: bool,
    json: bool,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(colors)?);
        return Ok(());
    }
    if hex || !color_enabled() {
        for color in colors {
            println!("{}", color.to_hex());
        }
        return Ok(());
    }

    let pattern = to_style_pattern(colors, target);
    if pattern.is_empty() {
        return Ok(());
    }

    let mut out = String::new();
    match text {
        Some(text) => {
            // Repeat the pattern across the characters.
            for (ch, style) in text.chars().zip(pattern.iter().cycle()) {
                out.push_str(&style.sequence());
                out.push(ch);
            }
        }
        None => {
            let cell = match target {
                ColorTarget::Fore => '\u{2588}',
                ColorTarget::Back => ' ',
            };
            for style in pattern.iter().take(swatch_width(pattern.len())) {
                out.push_str(&style.sequence());
                out.push(cell);
            }
        }
    }
    out.push_str(FULL_RESET);
    println!("{out}");
    Ok(())
}

/// Cap swatch cells to the terminal width so the bar stays on one line.
fn swatch_width(cells: usize) -> usize {
    let width = terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80);
    cells.min(width.max(1))
}
