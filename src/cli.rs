//! CLI definitions for tinct
//!
//! This module contains the clap CLI structure definitions, separated from
//! main.rs so the command handlers can reference the argument structs
//! without pulling in dispatch logic.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

use tinct::{Color, ColorStop, ColorTarget, Rgb};

/// Build clap styles using the crate's own aesthetic.
///
/// - Cyan: headers, usage, command names (accent color)
/// - White: placeholders and valid values (light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Version string, with the git SHA suffixed on dev builds.
pub fn long_version() -> String {
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{} ({})", env!("CARGO_PKG_VERSION"), sha),
        None => env!("CARGO_PKG_VERSION").to_string(),
    }
}

#[derive(Parser)]
#[command(name = "tinct")]
#[command(about = "[ tinct ] - style terminal text with ANSI colors and gradients")]
#[command(
    long_about = "tinct - terminal text styling toolkit.

Builds ANSI escape sequences from declarative style descriptions and
computes multi-stop color gradients for decorative text effects.

QUICK START:
    tinct style \"hello\" --fore red --bold          Print styled text
    tinct gradient '#FF0000' '#0000FF' --text hi   Gradient-colored text
    tinct ramp '#FF0000@10' '#0000FF@70'           Multi-stop gradient swatch

Named styles can be defined in ~/.config/tinct/config.toml and referenced
with 'tinct style --name <name>'."
)]
#[command(version = long_version())]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print styled text
    #[command(long_about = "Print text wrapped in an ANSI style.

Colors accept a name (default, black, red, green, yellow, blue, magenta,
cyan, white, or a bright_ variant) or a #RRGGBB value.

EXAMPLES:
    tinct style \"error!\" --fore bright_red --bold
    tinct style \"note\" --fore '#8899AA' --italic
    tinct style \"warn\" --name warning            Use a style from the config
    tinct style \"sticky\" --fore red --no-reset   Leave the style active")]
    Style(StyleArgs),

    /// Two-color linear gradient
    #[command(long_about = "Interpolate between two colors.

Without --text, prints a swatch (one cell per step) on a terminal and a
hex listing otherwise. With --text, colors the text character by character.

EXAMPLES:
    tinct gradient '#000000' '#FFFFFF' --steps 8
    tinct gradient '#FF0000' '#0000FF' --text \"smooth\"
    tinct gradient '#FF0000' '#0000FF' --steps 5 --json")]
    Gradient(GradientArgs),

    /// Multi-stop gradient from placed color stops
    #[command(long_about = "Sample a gradient through an ordered set of color stops.

Each stop is #RRGGBB@percent with percent in 0..=100. Spans not covered by
the stops are filled with a constant run of the boundary color. The sample
count may drift from --steps by a few cells due to per-span rounding.

EXAMPLES:
    tinct ramp '#FF0000@10' '#00FF00@30' '#0000FF@70' --steps 100
    tinct ramp '#FF0000@0' '#0000FF@100' --text \"hello world\"")]
    Ramp(RampArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(long)]
        shell: Option<CompletionShell>,
    },
}

#[derive(Args)]
pub struct StyleArgs {
    /// Text to style
    pub text: String,
    /// Start from a named style defined in the config
    #[arg(long, short)]
    pub name: Option<String>,
    /// Foreground color (name or #RRGGBB)
    #[arg(long, short)]
    pub fore: Option<Color>,
    /// Background color (name or #RRGGBB)
    #[arg(long, short)]
    pub back: Option<Color>,
    #[arg(long)]
    pub bold: bool,
    #[arg(long)]
    pub dim: bool,
    #[arg(long)]
    pub italic: bool,
    #[arg(long)]
    pub underline: bool,
    #[arg(long)]
    pub strikethrough: bool,
    #[arg(long)]
    pub inverse: bool,
    /// Do not reset the style after the text
    #[arg(long)]
    pub no_reset: bool,
}

#[derive(Args)]
pub struct GradientArgs {
    /// Start color (#RRGGBB)
    pub from: Rgb,
    /// End color (#RRGGBB)
    pub to: Rgb,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct RampArgs {
    /// Color stops (#RRGGBB@percent)
    #[arg(required = true, num_args = 1..)]
    pub stops: Vec<ColorStop>,
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Output options shared by the gradient commands.
#[derive(Args)]
pub struct OutputArgs {
    /// Number of samples (defaults to the configured value, or the text length)
    #[arg(long, short)]
    pub steps: Option<usize>,
    /// Apply colors to the foreground or background
    #[arg(long, short)]
    pub target: Option<ColorTarget>,
    /// Color this text instead of printing a swatch
    #[arg(long)]
    pub text: Option<String>,
    /// Print hex values instead of colored output
    #[arg(long)]
    pub hex: bool,
    /// Print the colors as JSON records
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Show the effective configuration
    Show,
    /// Write a starter config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
