//! tinct - terminal text styling toolkit
//!
//! Builds ANSI escape sequences from declarative style descriptions,
//! computes multi-stop color gradients, and provides cursor/screen
//! control helpers.

pub mod color;
pub mod config;
pub mod gradient;
pub mod style;
pub mod terminal;

pub use color::{Color, NamedColor, ParseColorError, Rgb};
pub use config::Config;
pub use gradient::{advanced_gradient, gradient, to_style_pattern};
pub use gradient::{ColorStop, ColorTarget, GradientError};
pub use style::Style;
pub use terminal::Console;
